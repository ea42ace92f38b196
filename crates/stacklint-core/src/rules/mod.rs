//! File-layout convention rules
//!
//! # Adding a new category
//!
//! 1. Add a [`Category`] variant and its file name.
//! 2. Describe it as a [`CategoryRuleSet`] in `rule_sets.rs`: the kinds it
//!    forbids, what it must contain, and any per-declaration value checks.
//! 3. Map it to a [`RuleId`] so it can be disabled from configuration.

mod category;
mod rule_id;
mod rule_sets;
mod shape;

pub use category::{classify, is_lintable, Category};
pub use rule_id::RuleId;
pub use rule_sets::{
    lint_data, lint_outputs, lint_providers, lint_resources, lint_variables, CategoryRuleSet,
    RequiredContent, DATA_RULES, OUTPUTS_RULES, PROVIDERS_RULES, RESOURCES_RULES,
    VARIABLES_RULES,
};
pub use shape::should_not_contain;

use crate::document::Document;
use crate::error::Violation;

/// A check over a single document that stops at the first problem.
pub type RuleFn = fn(&Document) -> Result<(), Violation>;

/// The rule function enforcing a category's conventions.
pub fn rules_for(category: Category) -> RuleFn {
    match category {
        Category::Data => lint_data,
        Category::Outputs => lint_outputs,
        Category::Providers => lint_providers,
        Category::Resources => lint_resources,
        Category::Variables => lint_variables,
    }
}
