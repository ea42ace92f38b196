//! Test builders for creating stacks on disk

mod stack_builder;

pub use stack_builder::{BuiltStack, LintResult, StackBuilder};
