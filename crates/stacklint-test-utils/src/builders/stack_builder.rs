use std::fs;
use std::path::PathBuf;

use stacklint_core::{Context, FileEntry, LintFailure, Linter, LinterConfig};
use tempfile::TempDir;

/// Outcome of linting a built stack.
#[derive(Debug)]
pub struct LintResult {
    pub success: bool,
    /// Display form of the stack directory, as used to tag stack-wide errors.
    pub directory: String,
    pub failure: Option<LintFailure>,
}

impl LintResult {
    /// The file or directory a lint error was tagged with.
    pub fn resource_name(&self) -> Option<&str> {
        self.failure.as_ref().and_then(|failure| failure.resource_name())
    }

    /// The violation message without its resource prefix.
    pub fn message(&self) -> Option<String> {
        self.failure.as_ref().map(|failure| match failure {
            LintFailure::Lint(error) => error.message(),
            LintFailure::Parse(error) => error.to_string(),
        })
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self.failure, Some(LintFailure::Parse(_)))
    }
}

/// A stack written to a temporary directory, kept alive with the value.
pub struct BuiltStack {
    pub dir: TempDir,
    pub entries: Vec<FileEntry>,
}

impl BuiltStack {
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

/// Builder for stacks on disk
///
/// Block helpers append HCL to the file their declaration conventionally
/// lives in; `file` writes arbitrary content to any name, which is how
/// misplaced declarations are set up.
///
/// # Example
///
/// ```rust
/// use stacklint_test_utils::StackBuilder;
///
/// let result = StackBuilder::new()
///     .providers("aws")
///     .variable("ami")
///     .resource("aws_instance", "web", &[("ami", "var.ami")])
///     .lint();
///
/// assert!(result.success);
/// ```
#[derive(Clone, Default)]
pub struct StackBuilder {
    /// File contents in creation order
    files: Vec<(String, String)>,
    /// Sub-directories, which the linter must skip
    dirs: Vec<String>,
    config: LinterConfig,
    verbose: bool,
}

impl StackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================
    // Raw content
    // ==========================================

    /// Appends `content` to `name`, creating the file on first use.
    pub fn file(mut self, name: &str, content: &str) -> Self {
        match self.files.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, body)) => body.push_str(content),
            None => self.files.push((name.to_string(), content.to_string())),
        }
        self
    }

    /// An empty file with the given name.
    pub fn empty_file(self, name: &str) -> Self {
        self.file(name, "")
    }

    pub fn dir(mut self, name: &str) -> Self {
        self.dirs.push(name.to_string());
        self
    }

    // ==========================================
    // Declarations in their conventional files
    // ==========================================

    /// A `terraform {}` block and one provider in `providers.tf`.
    pub fn providers(self, provider: &str) -> Self {
        self.file("providers.tf", "terraform {\n  required_version = \">= 0.12\"\n}\n\n")
            .provider(provider, &[])
    }

    pub fn provider(self, name: &str, attrs: &[(&str, &str)]) -> Self {
        let block = format!("provider \"{}\" {{\n{}}}\n\n", name, render_attrs(attrs));
        self.file("providers.tf", &block)
    }

    pub fn variable(self, name: &str) -> Self {
        let block = format!("variable \"{}\" {{}}\n\n", name);
        self.file("variables.tf", &block)
    }

    /// `default` is written as raw HCL, so strings need their quotes.
    pub fn variable_with_default(self, name: &str, default: &str) -> Self {
        let block = format!("variable \"{}\" {{\n  default = {}\n}}\n\n", name, default);
        self.file("variables.tf", &block)
    }

    pub fn resource(self, type_name: &str, name: &str, attrs: &[(&str, &str)]) -> Self {
        let block = format!(
            "resource \"{}\" \"{}\" {{\n{}}}\n\n",
            type_name,
            name,
            render_attrs(attrs)
        );
        self.file("resources.tf", &block)
    }

    pub fn data(self, type_name: &str, name: &str, attrs: &[(&str, &str)]) -> Self {
        let block =
            format!("data \"{}\" \"{}\" {{\n{}}}\n\n", type_name, name, render_attrs(attrs));
        self.file("data.tf", &block)
    }

    pub fn module(self, name: &str, source: &str, inputs: &[(&str, &str)]) -> Self {
        let block = format!(
            "module \"{}\" {{\n  source = \"{}\"\n{}}}\n\n",
            name,
            source,
            render_attrs(inputs)
        );
        self.file("resources.tf", &block)
    }

    pub fn local(self, name: &str, value: &str) -> Self {
        let block = format!("locals {{\n  {} = {}\n}}\n\n", name, value);
        self.file("resources.tf", &block)
    }

    pub fn output(self, name: &str, value: &str) -> Self {
        let block = format!("output \"{}\" {{\n  value = {}\n}}\n\n", name, value);
        self.file("outputs.tf", &block)
    }

    // ==========================================
    // Configuration and execution
    // ==========================================

    pub fn with_config(mut self, config: LinterConfig) -> Self {
        self.config = config;
        self
    }

    /// Logs through a terminal logger while linting.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Writes every file to a fresh temporary directory.
    pub fn build(&self) -> BuiltStack {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut entries = Vec::new();
        for (name, content) in &self.files {
            fs::write(dir.path().join(name), content).expect("failed to write stack file");
            entries.push(FileEntry::file(name.clone()));
        }
        for name in &self.dirs {
            fs::create_dir(dir.path().join(name)).expect("failed to create stack dir");
            entries.push(FileEntry::dir(name.clone()));
        }
        BuiltStack { dir, entries }
    }

    pub fn lint(&self) -> LintResult {
        let stack = self.build();
        let ctx = if self.verbose {
            Context { logger: Some(hiro_system_kit::log::setup_logger()) }
        } else {
            Context::empty()
        };
        let linter = Linter::new(self.config.clone(), ctx);
        let failure = linter.lint_directory(stack.dir.path(), &stack.entries).err();
        LintResult {
            success: failure.is_none(),
            directory: stack.dir.path().display().to_string(),
            failure,
        }
    }
}

fn render_attrs(attrs: &[(&str, &str)]) -> String {
    attrs.iter().map(|(key, value)| format!("  {} = {}\n", key, value)).collect()
}
