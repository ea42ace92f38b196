//! Name policy applied to every named declaration in a file.

use regex::Regex;

use crate::document::Document;
use crate::error::{ConfigError, Violation};

pub const STRICT_PATTERN: &str = r"^[a-z0-9][a-z0-9_]*[a-z0-9]$";
pub const LENIENT_PATTERN: &str = r"^[^-]*$";

lazy_static! {
    static ref STRICT_REGEX: Regex = Regex::new(STRICT_PATTERN).unwrap();
    static ref LENIENT_REGEX: Regex = Regex::new(LENIENT_PATTERN).unwrap();
}

/// A compiled name pattern together with the source it was built from,
/// which is quoted back in violation messages.
#[derive(Debug, Clone)]
pub struct NamePolicy {
    pattern: String,
    regex: Regex,
}

impl NamePolicy {
    /// Lowercase alphanumerics and underscores, starting and ending with an
    /// alphanumeric. Single-character names do not match.
    pub fn strict() -> Self {
        Self { pattern: STRICT_PATTERN.to_string(), regex: STRICT_REGEX.clone() }
    }

    /// Anything without a hyphen.
    pub fn lenient() -> Self {
        Self { pattern: LENIENT_PATTERN.to_string(), regex: LENIENT_REGEX.clone() }
    }

    pub fn custom(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|cause| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            cause,
        })?;
        Ok(Self { pattern: pattern.to_string(), regex })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    fn check(&self, kind: &'static str, name: &str) -> Result<(), Violation> {
        if self.is_valid(name) {
            return Ok(());
        }
        Err(Violation::NamePolicy {
            kind,
            name: name.to_string(),
            pattern: self.pattern.clone(),
        })
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self::strict()
    }
}

impl PartialEq for NamePolicy {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

/// Returns the first declared name the policy rejects.
///
/// Kinds are scanned as locals, modules, outputs, providers, resources and
/// then variables, each in document order.
pub fn lint_names(doc: &Document, policy: &NamePolicy) -> Result<(), Violation> {
    for local in &doc.locals {
        policy.check("local", &local.name)?;
    }
    for module in &doc.modules {
        policy.check("module", &module.name)?;
    }
    for output in &doc.outputs {
        policy.check("output", &output.name)?;
    }
    for provider in &doc.provider_configs {
        policy.check("provider", &provider.name)?;
    }
    for resource in &doc.resources {
        policy.check(resource.mode.label(), &resource.name)?;
    }
    for variable in &doc.variables {
        policy.check("variable", &variable.name)?;
    }
    Ok(())
}
