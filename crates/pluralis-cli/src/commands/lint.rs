//! Implementation of the `pluralis lint` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use pluralis::lint_labels;

use super::resolve_rule;

/// Arguments for the lint command.
#[derive(Debug, Args)]
pub struct LintArgs {
    /// Locale identifier (e.g., en, en_US, sr)
    #[arg(short, long, default_value = "en", env = "PLURALIS_LOCALE")]
    pub locale: String,

    /// Declared labels, comma-separated (e.g., =0,one,other)
    #[arg(long, value_delimiter = ',', required = true)]
    pub labels: Vec<String>,

    /// Exit with non-zero code if any warning is found.
    #[arg(long)]
    pub strict: bool,

    /// Output warnings as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the lint command.
pub fn run_lint(args: LintArgs) -> Result<i32> {
    let rule = resolve_rule(&args.locale);
    let warnings = lint_labels(rule, &args.labels);

    if args.json {
        let messages: Vec<String> = warnings.iter().map(ToString::to_string).collect();
        println!("{}", serde_json::to_string_pretty(&messages).into_diagnostic()?);
    } else if warnings.is_empty() {
        println!("labels are complete for the {} rule", rule);
    } else {
        for warning in &warnings {
            println!(
                "{} {}",
                "warning:".if_supports_color(Stream::Stdout, |t| t.yellow()),
                warning
            );
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
