//! Directory orchestration: per-file checks first, then the stack-wide pass.

use std::path::Path;

use hiro_system_kit::Logger;

use crate::error::{LintError, LintFailure};
use crate::loader::{parse_directory, parse_file};
use crate::naming::{lint_names, NamePolicy};
use crate::rules::{classify, is_lintable, rules_for, RuleId};
use crate::unused::lint_unused_variables;

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub is_dir: bool,
}

impl FileEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: false }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_dir: true }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinterConfig {
    pub name_policy: NamePolicy,
    pub disabled_rules: Vec<RuleId>,
}

impl LinterConfig {
    pub fn is_enabled(&self, rule: RuleId) -> bool {
        !self.disabled_rules.contains(&rule)
    }
}

#[derive(Clone, Default)]
pub struct Context {
    pub logger: Option<Logger>,
}

impl Context {
    pub fn empty() -> Context {
        Context { logger: None }
    }

    pub fn try_log<F>(&self, closure: F)
    where
        F: FnOnce(&Logger),
    {
        if let Some(ref logger) = self.logger {
            closure(logger)
        }
    }
}

pub struct Linter {
    config: LinterConfig,
    ctx: Context,
}

impl Linter {
    pub fn new(config: LinterConfig, ctx: Context) -> Self {
        Self { config, ctx }
    }

    /// Lints every eligible file in `files`, stopping at the first failure,
    /// then checks the merged stack for unused variables.
    pub fn lint_directory(&self, path: &Path, files: &[FileEntry]) -> Result<(), LintFailure> {
        for entry in files.iter().filter(|entry| is_lintable(&entry.name, entry.is_dir)) {
            self.lint_file(path, &entry.name)?;
        }

        if !self.config.is_enabled(RuleId::UnusedVariables) {
            return Ok(());
        }

        let directory = path.display().to_string();
        let doc = parse_directory(path)?;
        self.ctx.try_log(|logger| {
            let rule = RuleId::UnusedVariables;
            debug!(logger, "Applying {} rule to {}: {}", rule, directory, rule.description())
        });
        lint_unused_variables(&doc).map_err(|cause| LintError::new(cause, directory))?;
        Ok(())
    }

    fn lint_file(&self, dir: &Path, file_name: &str) -> Result<(), LintFailure> {
        let doc = parse_file(&dir.join(file_name))?;
        self.ctx.try_log(|logger| debug!(logger, "Linting {}", file_name));

        let tag = |cause| LintError::new(cause, file_name);

        if self.config.is_enabled(RuleId::Names) {
            lint_names(&doc, &self.config.name_policy).map_err(tag)?;
        }
        for category in classify(file_name) {
            let rule = RuleId::from(category);
            if !self.config.is_enabled(rule) {
                continue;
            }
            self.ctx.try_log(|logger| {
                debug!(logger, "Applying {} rule to {}: {}", rule, file_name, rule.description())
            });
            rules_for(category)(&doc).map_err(tag)?;
        }
        Ok(())
    }
}

/// Lints a directory with the default configuration and no logging.
pub fn lint_directory(path: &Path, files: &[FileEntry]) -> Result<(), LintFailure> {
    Linter::new(LinterConfig::default(), Context::empty()).lint_directory(path, files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;
    use crate::rules::RequiredContent;
    use std::fs;

    fn stack(files: &[(&str, &str)]) -> (tempfile::TempDir, Vec<FileEntry>) {
        let dir = tempfile::tempdir().unwrap();
        let mut entries = Vec::new();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
            entries.push(FileEntry::file(*name));
        }
        (dir, entries)
    }

    #[test]
    fn test_non_terraform_entries_are_skipped() {
        let (dir, mut entries) = stack(&[("README.md", "# not terraform")]);
        entries.push(FileEntry::dir("modules.tf"));
        assert!(lint_directory(dir.path(), &entries).is_ok());
    }

    #[test]
    fn test_first_failing_file_stops_the_run() {
        let (dir, entries) = stack(&[("outputs.tf", ""), ("variables.tf", "")]);

        let failure = lint_directory(dir.path(), &entries).unwrap_err();
        match failure {
            LintFailure::Lint(error) => {
                assert_eq!(error.resource_name, "outputs.tf");
                assert_eq!(
                    error.cause,
                    Violation::ContentMissing { requirement: RequiredContent::AnyOutput }
                );
            }
            other => panic!("unexpected failure: {}", other),
        }
    }

    #[test]
    fn test_name_policy_runs_before_category_rules() {
        let (dir, entries) = stack(&[("variables.tf", "variable \"my-var\" {\n  default = \"\"\n}\n")]);

        let failure = lint_directory(dir.path(), &entries).unwrap_err();
        let LintFailure::Lint(error) = failure else { panic!("expected a lint error") };
        assert!(matches!(error.cause, Violation::NamePolicy { .. }));
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let (dir, entries) = stack(&[
            ("variables.tf", "variable \"a-b\" {}\nvariable \"unused\" {}\n"),
            ("outputs.tf", ""),
        ]);
        let config = LinterConfig {
            name_policy: NamePolicy::strict(),
            disabled_rules: vec![RuleId::Names, RuleId::Outputs, RuleId::UnusedVariables],
        };
        let linter = Linter::new(config, Context::empty());
        assert!(linter.lint_directory(dir.path(), &entries).is_ok());
    }

    #[test]
    fn test_unused_variables_are_tagged_with_directory() {
        let (dir, entries) = stack(&[("variables.tf", "variable \"region\" {}\n")]);

        let failure = lint_directory(dir.path(), &entries).unwrap_err();
        assert_eq!(failure.resource_name(), Some(dir.path().display().to_string().as_str()));
    }

    #[test]
    fn test_parse_errors_surface_unwrapped() {
        let (dir, entries) = stack(&[("resources.tf", "resource \"a\" {")]);

        let failure = lint_directory(dir.path(), &entries).unwrap_err();
        assert!(matches!(failure, LintFailure::Parse(_)));
        assert_eq!(failure.resource_name(), None);
    }
}
