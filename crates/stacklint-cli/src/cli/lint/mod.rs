//! The `stacklint` lint command
//!
//! # C4 Architecture Annotations
//! @c4-component Lint Command
//! @c4-container stacklint CLI
//! @c4-description Resolves configuration, runs the linter and prints the first failure
//! @c4-technology Rust
//! @c4-uses Lint Core "Lints the stack directory"

pub mod config;
pub mod formatter;
pub mod workspace;

use stacklint_core::{Context, Linter};
use std::path::Path;

use self::config::ConfigFile;
use self::formatter::get_formatter;
use super::Opts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintOutcome {
    Clean,
    Failed,
}

pub fn handle_lint_command(opts: &Opts, ctx: &Context) -> Result<LintOutcome, String> {
    workspace::validate_directory(&opts.tf_directory)?;
    let dir = Path::new(&opts.tf_directory);

    let config_file = ConfigFile::load(opts.config.as_deref(), dir)?.unwrap_or_default();
    let config = config_file.to_linter_config(opts.name_policy)?;
    ctx.try_log(|logger| {
        debug!(
            logger,
            "Name policy '{}', disabled rules: {:?}",
            config.name_policy.pattern(),
            config.disabled_rules
        )
    });

    let entries = workspace::list_entries(dir)?;
    let linter = Linter::new(config, ctx.clone());

    match linter.lint_directory(dir, &entries) {
        Ok(()) => {
            ctx.try_log(|logger| info!(logger, "Linting finished for {}, no issues", dir.display()));
            Ok(LintOutcome::Clean)
        }
        Err(failure) => {
            let formatter = get_formatter(opts.format);
            println!("{}", formatter.format(&failure, opts.hide_stack_traces));
            Ok(LintOutcome::Failed)
        }
    }
}
