use hcl_edit::expr::{Expression, ObjectKey, UnaryOperator};
use hcl_edit::template::Element;
use serde_json::{Map, Number, Value};

/// Converts a literal expression into a JSON value.
///
/// Anything that needs evaluation (references, function calls, operators,
/// interpolated templates) is rejected with a short description of what was
/// found.
pub fn literal_value(expr: &Expression) -> Result<Value, String> {
    match expr {
        Expression::Null(_) => Ok(Value::Null),
        Expression::Bool(value) => Ok(Value::Bool(*value.value())),
        Expression::Number(number) => {
            let number = number.value();
            match (number.as_u64(), number.as_i64(), number.as_f64()) {
                (Some(value), _, _) => Ok(Value::from(value)),
                (_, Some(value), _) => Ok(Value::from(value)),
                (_, _, Some(value)) => Number::from_f64(value)
                    .map(Value::Number)
                    .ok_or_else(|| format!("number {} cannot be represented", value)),
                (None, None, None) => Err("number cannot be represented".to_string()),
            }
        }
        Expression::String(value) => Ok(Value::String(value.value().to_string())),
        Expression::Array(entries) => entries.iter().map(literal_value).collect(),
        Expression::Object(object) => {
            let mut map = Map::new();
            for (key, value) in object.iter() {
                let key = match key {
                    ObjectKey::Ident(ident) => ident.as_str().to_string(),
                    ObjectKey::Expression(key_expr) => match literal_value(key_expr)? {
                        Value::String(key) => key,
                        other => return Err(format!("object key {} is not a string", other)),
                    },
                };
                map.insert(key, literal_value(value.expr())?);
            }
            Ok(Value::Object(map))
        }
        Expression::HeredocTemplate(heredoc) => {
            let mut text = String::new();
            for element in heredoc.template.iter() {
                match element {
                    Element::Literal(literal) => text.push_str(literal.value()),
                    _ => return Err("heredoc contains interpolations".to_string()),
                }
            }
            Ok(Value::String(text))
        }
        Expression::Parenthesis(inner) => literal_value(inner.inner()),
        Expression::UnaryOp(op) if *op.operator.value() == UnaryOperator::Neg => {
            match literal_value(&op.expr)? {
                Value::Number(number) => negate(&number),
                other => Err(format!("cannot negate {}", other)),
            }
        }
        Expression::StringTemplate(_) => Err("string contains interpolations".to_string()),
        Expression::Variable(_) | Expression::Traversal(_) => {
            Err("value refers to another object".to_string())
        }
        Expression::FuncCall(_) => Err("value is a function call".to_string()),
        _ => Err("value is not a literal".to_string()),
    }
}

fn negate(number: &Number) -> Result<Value, String> {
    if let Some(value) = number.as_i64().and_then(i64::checked_neg) {
        return Ok(Value::from(value));
    }
    number
        .as_f64()
        .and_then(|value| Number::from_f64(-value))
        .map(Value::Number)
        .ok_or_else(|| format!("cannot negate {}", number))
}

/// The literal string held by `expr`, if it is one.
pub fn literal_string(expr: &Expression) -> Option<String> {
    match expr {
        Expression::String(value) => Some(value.value().to_string()),
        _ => None,
    }
}
