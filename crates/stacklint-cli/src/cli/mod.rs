use clap::error::ErrorKind;
use clap::Parser;
use stacklint_core::Context;
use std::process;

pub mod lint;

use lint::config::PolicyPreset;
use lint::formatter::Format;
use lint::LintOutcome;

/// Lints a Terraform stack directory against the one-category-per-file layout
#[derive(Parser, PartialEq, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Opts {
    /// The directory that contains the terraform files to lint
    #[arg(long = "tf-directory", short = 'd')]
    pub tf_directory: String,
    /// Only print error messages, without their underlying causes
    #[arg(long = "hide-stack-traces")]
    pub hide_stack_traces: bool,
    /// Path to a configuration file (defaults to .stacklint.yml)
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,
    /// Output format
    #[arg(long = "format", short = 'f', value_enum, default_value_t = Format::Stylish)]
    pub format: Format,
    /// Name policy, overriding the configuration file
    #[arg(long = "name-policy", value_enum)]
    pub name_policy: Option<PolicyPreset>,
}

pub fn main() {
    let logger = hiro_system_kit::log::setup_logger();
    let _guard = hiro_system_kit::log::setup_global_logger(logger.clone());
    let ctx = Context { logger: Some(logger) };

    let opts: Opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            process::exit(0);
        }
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };

    match handle_command(opts, &ctx) {
        Ok(LintOutcome::Clean) => {}
        Ok(LintOutcome::Failed) => process::exit(1),
        Err(e) => {
            ctx.try_log(|logger| error!(logger, "{e}"));
            std::thread::sleep(std::time::Duration::from_millis(500));
            process::exit(1);
        }
    }
}

fn handle_command(opts: Opts, ctx: &Context) -> Result<LintOutcome, String> {
    lint::handle_lint_command(&opts, ctx)
}
