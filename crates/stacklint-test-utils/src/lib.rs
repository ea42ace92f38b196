pub mod assertions;
pub mod builders;

pub use builders::{BuiltStack, LintResult, StackBuilder};

// Re-export common types for convenience
pub use stacklint_core::{LintFailure, LinterConfig, NamePolicy, RuleId};
