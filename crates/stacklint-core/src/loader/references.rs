//! Interpolated reference extraction over hcl-edit expressions.

use hcl_edit::expr::{Expression, Traversal, TraversalOperator};
use hcl_edit::structure::{Attribute, Block, Body};
use hcl_edit::template::ForTemplateExpr;
use hcl_edit::visit::{visit_expr, visit_for_template_expr, Visit};

use crate::document::{RawConfig, Reference, ReferenceKind};

/// Walks expressions and records every traversal rooted at a named object.
#[derive(Debug, Default)]
pub struct ReferenceCollector {
    references: Vec<Reference>,
}

impl ReferenceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_body(body: &Body) -> RawConfig {
        let mut collector = Self::new();
        collector.visit_body(body);
        collector.finish()
    }

    pub fn from_expr(expr: &Expression) -> RawConfig {
        let mut collector = Self::new();
        collector.visit_expr(expr);
        collector.finish()
    }

    pub fn collect_attr(&mut self, attr: &Attribute) {
        self.visit_attr(attr);
    }

    pub fn collect_block(&mut self, block: &Block) {
        self.visit_block(block);
    }

    pub fn finish(self) -> RawConfig {
        RawConfig::new(self.references)
    }

    fn record_traversal(&mut self, traversal: &Traversal) {
        let Some(root) = traversal.expr.as_variable() else {
            // `func()[0].attr` and the like: only the inner expression can refer to anything.
            self.visit_expr(&traversal.expr);
            self.visit_index_operators(traversal);
            return;
        };

        let attrs: Vec<&str> = traversal
            .operators
            .iter()
            .map_while(|op| match op.value() {
                TraversalOperator::GetAttr(attr) => Some(attr.as_str()),
                _ => None,
            })
            .collect();

        self.references.push(classify(root.as_str(), &attrs));
        self.visit_index_operators(traversal);
    }

    fn visit_index_operators(&mut self, traversal: &Traversal) {
        for op in traversal.operators.iter() {
            if let TraversalOperator::Index(index) = op.value() {
                self.visit_expr(index);
            }
        }
    }
}

impl Visit for ReferenceCollector {
    fn visit_expr(&mut self, expr: &Expression) {
        match expr {
            Expression::Traversal(traversal) => self.record_traversal(traversal),
            Expression::Variable(name) => {
                self.references.push(Reference::new(ReferenceKind::Simple, name.as_str()))
            }
            _ => visit_expr(self, expr),
        }
    }

    fn visit_for_template_expr(&mut self, node: &ForTemplateExpr) {
        // The default walk skips the collection being iterated.
        self.visit_expr(&node.collection_expr);
        visit_for_template_expr(self, node);
    }
}

/// Decides the kind and key of a traversal from its root and leading
/// attribute accesses.
fn classify(root: &str, attrs: &[&str]) -> Reference {
    let key = |depth: usize| -> String {
        std::iter::once(root).chain(attrs.iter().take(depth).copied()).collect::<Vec<_>>().join(".")
    };

    if attrs.is_empty() {
        return Reference::new(ReferenceKind::Simple, root);
    }

    match root {
        "var" => Reference::new(ReferenceKind::User, key(1)),
        "count" => Reference::new(ReferenceKind::Count, key(1)),
        "local" => Reference::new(ReferenceKind::Local, key(1)),
        "module" => Reference::new(ReferenceKind::Module, key(2)),
        "data" => Reference::new(ReferenceKind::Resource, key(2)),
        "path" => Reference::new(ReferenceKind::Path, key(1)),
        "self" => Reference::new(ReferenceKind::SelfRef, key(1)),
        "terraform" => Reference::new(ReferenceKind::Terraform, key(1)),
        _ => Reference::new(ReferenceKind::Resource, key(1)),
    }
}
