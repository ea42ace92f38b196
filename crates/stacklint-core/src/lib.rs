//! Convention linter for Terraform stacks
//!
//! A stack is a directory of `.tf` files where every file holds a single
//! category of declaration (`data.tf`, `outputs.tf`, `providers.tf`,
//! `resources.tf`, `variables.tf`). This crate loads those files into a
//! [`Document`], checks each file against its category's rule set and the
//! naming policy, then checks the merged stack for variables nothing reads.
//!
//! # C4 Architecture Annotations
//! @c4-container Lint Core
//! @c4-description Document model, HCL loader and convention rule engine
//! @c4-technology Rust (stacklint-core)

#[macro_use]
extern crate hiro_system_kit;

#[macro_use]
extern crate lazy_static;

pub mod document;
pub mod error;
pub mod linter;
pub mod loader;
pub mod naming;
pub mod rules;
pub mod unused;

pub use hcl_edit as hcl;

pub use document::{
    DeclarationKind, Document, Local, Module, Output, ProviderConfig, RawConfig, Reference,
    ReferenceKind, Resource, ResourceMode, TerraformSettings, Variable,
};
pub use error::{ConfigError, LintError, LintFailure, ParseError, Violation};
pub use linter::{lint_directory, Context, FileEntry, Linter, LinterConfig};
pub use loader::{parse_directory, parse_file, parse_str};
pub use naming::{lint_names, NamePolicy};
pub use rules::{
    classify, is_lintable, rules_for, should_not_contain, Category, CategoryRuleSet,
    RequiredContent, RuleFn, RuleId,
};
pub use unused::lint_unused_variables;
