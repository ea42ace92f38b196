//! Detection of variables that nothing in a stack reads.
//!
//! Runs over the merged document of a whole directory, since a variable is
//! usually declared in `variables.tf` and consumed from another file.

use crate::document::{Document, RawConfig};
use crate::error::Violation;

/// Reports every declared variable without a matching reference, in
/// declaration order.
pub fn lint_unused_variables(doc: &Document) -> Result<(), Violation> {
    let names: Vec<String> = doc
        .variables
        .iter()
        .filter(|variable| !is_referenced(doc, &variable.name))
        .map(|variable| variable.name.clone())
        .collect();

    if names.is_empty() {
        return Ok(());
    }
    Err(Violation::UnusedVariables { names })
}

fn is_referenced(doc: &Document, name: &str) -> bool {
    doc.resources.iter().any(|r| mentions(&r.raw_config, name) || mentions(&r.raw_count, name))
        || doc.modules.iter().any(|m| mentions(&m.raw_config, name))
        || doc.provider_configs.iter().any(|p| mentions(&p.raw_config, name))
        || doc.locals.iter().any(|l| mentions(&l.raw_config, name))
        || doc.outputs.iter().any(|o| mentions(&o.raw_config, name))
}

fn mentions(config: &RawConfig, name: &str) -> bool {
    config
        .references
        .iter()
        .any(|reference| reference.is_variable_like() && reference.unqualified_name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{
        Local, Module, Output, ProviderConfig, Reference, ReferenceKind, Resource, ResourceMode,
        Variable,
    };

    fn declare(doc: &mut Document, name: &str) {
        doc.variables.push(Variable { name: name.to_string(), description: None, default: None });
    }

    fn uses(names: &[&str]) -> RawConfig {
        RawConfig::new(names.iter().map(|name| Reference::user(name)).collect())
    }

    #[test]
    fn test_no_variables_is_fine() {
        assert_eq!(lint_unused_variables(&Document::new()), Ok(()));
    }

    #[test]
    fn test_variable_used_by_module_counts() {
        let mut doc = Document::new();
        declare(&mut doc, "cidr");
        doc.modules.push(Module {
            name: "network".into(),
            source: None,
            raw_config: uses(&["cidr"]),
        });
        assert_eq!(lint_unused_variables(&doc), Ok(()));
    }

    #[test]
    fn test_every_reference_bearing_declaration_is_searched() {
        let mut doc = Document::new();
        for name in ["a", "b", "c", "d", "e", "f"] {
            declare(&mut doc, name);
        }
        doc.resources.push(Resource {
            name: "web".into(),
            type_name: "aws_instance".into(),
            mode: ResourceMode::Managed,
            raw_config: uses(&["a"]),
            raw_count: uses(&["b"]),
        });
        doc.modules.push(Module { name: "m".into(), source: None, raw_config: uses(&["c"]) });
        doc.provider_configs.push(ProviderConfig {
            name: "aws".into(),
            alias: None,
            raw_config: uses(&["d"]),
        });
        doc.locals.push(Local { name: "l".into(), raw_config: uses(&["e"]) });
        doc.outputs.push(Output { name: "o".into(), raw_config: uses(&["f"]) });

        assert_eq!(lint_unused_variables(&doc), Ok(()));
    }

    #[test]
    fn test_unused_variables_reported_once_in_declaration_order() {
        let mut doc = Document::new();
        declare(&mut doc, "zone");
        declare(&mut doc, "region");
        declare(&mut doc, "tier");
        doc.outputs.push(Output { name: "o".into(), raw_config: uses(&["region", "region"]) });

        assert_eq!(
            lint_unused_variables(&doc),
            Err(Violation::UnusedVariables { names: vec!["zone".into(), "tier".into()] })
        );
    }

    #[test]
    fn test_only_variable_like_references_match() {
        let mut doc = Document::new();
        declare(&mut doc, "name");
        doc.outputs.push(Output {
            name: "o".into(),
            raw_config: RawConfig::new(vec![
                Reference::new(ReferenceKind::Local, "local.name"),
                Reference::new(ReferenceKind::Resource, "aws_instance.name"),
            ]),
        });
        assert!(lint_unused_variables(&doc).is_err());

        doc.outputs[0].raw_config.references.push(Reference::new(ReferenceKind::Count, "name"));
        assert_eq!(lint_unused_variables(&doc), Ok(()));
    }
}
