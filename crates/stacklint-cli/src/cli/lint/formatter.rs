//! Output formatting for lint failures

use stacklint_core::LintFailure;
use std::error::Error;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Output format for lint results
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    clap::ValueEnum,  // For CLI argument parsing
    AsRefStr,         // Provides as_ref() -> &str
    Display,          // Provides to_string()
    EnumString,       // Provides from_str()
    IntoStaticStr,    // Provides into() -> &'static str
    EnumIter,         // Provides iter() over all variants
)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// Stylish format (default, human-readable)
    Stylish,
    /// Compact format (one line per failure)
    Compact,
    /// JSON format (machine-readable)
    Json,
}

pub trait OutputFormatter {
    fn format(&self, failure: &LintFailure, hide_stack_traces: bool) -> String;
}

pub fn get_formatter(format: Format) -> Box<dyn OutputFormatter> {
    match format {
        Format::Stylish => Box::new(StylishFormatter),
        Format::Compact => Box::new(CompactFormatter),
        Format::Json => Box::new(JsonFormatter),
    }
}

/// The message shown for a failure, without its resource prefix.
fn message(failure: &LintFailure) -> String {
    match failure {
        LintFailure::Lint(error) => error.message(),
        LintFailure::Parse(error) => error.to_string(),
    }
}

/// Causes below the displayed message, outermost first.
fn causes(failure: &LintFailure) -> Vec<String> {
    let mut causes = Vec::new();
    let mut current = match failure {
        LintFailure::Lint(error) => error.cause.source(),
        LintFailure::Parse(error) => error.source(),
    };
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes
}

fn detailed_message(failure: &LintFailure, hide_stack_traces: bool) -> String {
    let message = message(failure);
    let causes = causes(failure);
    if hide_stack_traces || causes.is_empty() {
        return message;
    }
    let trace: Vec<String> = causes.iter().map(|cause| format!("  {}", cause)).collect();
    format!("{}\n\nCaused by:\n{}", message, trace.join("\n"))
}

struct StylishFormatter;

impl OutputFormatter for StylishFormatter {
    fn format(&self, failure: &LintFailure, hide_stack_traces: bool) -> String {
        let detail = white!("{}", detailed_message(failure, hide_stack_traces));
        match failure.resource_name() {
            Some(resource) => format!("\n{} - {}\n", red!("{}", resource), detail),
            None => format!("\n{}\n", detail),
        }
    }
}

struct CompactFormatter;

impl OutputFormatter for CompactFormatter {
    fn format(&self, failure: &LintFailure, _hide_stack_traces: bool) -> String {
        let message = message(failure).replace('\n', " ");
        match failure.resource_name() {
            Some(resource) => format!("{}: {}", resource, message),
            None => message,
        }
    }
}

struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, failure: &LintFailure, hide_stack_traces: bool) -> String {
        let mut output = serde_json::json!({
            "resource": failure.resource_name(),
            "message": message(failure),
        });
        if !hide_stack_traces {
            output["causes"] = serde_json::json!(causes(failure));
        }
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| message(failure))
    }
}
