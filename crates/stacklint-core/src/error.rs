//! Error types for loading and linting stacks

use thiserror::Error;

use crate::document::{DeclarationKind, ResourceMode};
use crate::rules::RequiredContent;

/// A single convention broken by a file or by the stack as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A declaration kind the file's category forbids is present
    #[error("should not contain any {kind} resource(s), please move to '{destination}.tf'")]
    Shape {
        kind: DeclarationKind,
        destination: &'static str,
    },

    /// A resource of the wrong mode survived the forbidden-kind check
    #[error("{}", mode_mismatch_message(.expected))]
    ModeMismatch { expected: ResourceMode },

    /// The file lacks something its category requires
    #[error("{}", .requirement.missing_message())]
    ContentMissing { requirement: RequiredContent },

    /// A variable default is an empty string
    #[error("variable '{variable}' contains a blank default, please remove the default")]
    BlankDefault { variable: String },

    #[error(
        "{kind} name '{name}' is not valid for the regex '{pattern}', please replace the invalid characters"
    )]
    NamePolicy {
        kind: &'static str,
        name: String,
        pattern: String,
    },

    /// Every declared variable that nothing in the stack references
    #[error("Variable(s) unused in the stack, please use or remove:\n\n{}", bullet_list(.names))]
    UnusedVariables { names: Vec<String> },
}

fn mode_mismatch_message(expected: &ResourceMode) -> &'static str {
    match expected {
        ResourceMode::Data => "should only contain data resources, please remove",
        ResourceMode::Managed => {
            "should not contain any data resources, please move to 'data.tf'"
        }
    }
}

fn bullet_list(names: &[String]) -> String {
    names.iter().map(|name| format!("* - {}", name)).collect::<Vec<_>>().join("\n")
}

impl Violation {
    pub fn shape(kind: DeclarationKind) -> Self {
        Violation::Shape { kind, destination: kind.destination() }
    }
}

/// A violation tagged with the file or directory it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource_name} - {cause}")]
pub struct LintError {
    pub resource_name: String,
    #[source]
    pub cause: Violation,
}

impl LintError {
    pub fn new(cause: Violation, resource_name: impl Into<String>) -> Self {
        Self { resource_name: resource_name.into(), cause }
    }

    pub fn message(&self) -> String {
        self.cause.to_string()
    }
}

/// Failures raised while turning configuration text into a document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Problem parsing terraform config in {path}: {message}")]
    File {
        path: String,
        message: String,
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Problem parsing terraform config directory {path}: {message}")]
    Directory {
        path: String,
        message: String,
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to read {path}: {cause}")]
    Io {
        path: String,
        #[source]
        cause: std::io::Error,
    },
}

impl ParseError {
    pub fn file(path: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::File { path: path.into(), message: message.into(), cause: None }
    }

    pub fn path(&self) -> &str {
        match self {
            ParseError::File { path, .. }
            | ParseError::Directory { path, .. }
            | ParseError::Io { path, .. } => path,
        }
    }
}

/// Invalid linter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid name pattern '{pattern}': {cause}")]
    InvalidPattern {
        pattern: String,
        #[source]
        cause: regex::Error,
    },

    #[error("Unknown rule '{0}'")]
    UnknownRule(String),
}

/// Outcome of a failed `lint_directory` run.
#[derive(Debug, Error)]
pub enum LintFailure {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lint(#[from] LintError),
}

impl LintFailure {
    /// The file or directory name to highlight, if the failure is a lint error.
    pub fn resource_name(&self) -> Option<&str> {
        match self {
            LintFailure::Lint(error) => Some(&error.resource_name),
            LintFailure::Parse(_) => None,
        }
    }
}
