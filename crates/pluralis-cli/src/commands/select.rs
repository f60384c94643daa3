//! Implementation of the `pluralis select` command.

use clap::Args;
use miette::{IntoDiagnostic, Report, Result};
use serde::Serialize;

use super::{parse_quantity, resolve_rule};
use crate::output::SelectDiagnostic;

/// Arguments for the select command.
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Locale identifier (e.g., en, en_US, sr)
    #[arg(short, long, default_value = "en", env = "PLURALIS_LOCALE")]
    pub locale: String,

    /// Declared labels, comma-separated (e.g., =0,one,other)
    #[arg(long, value_delimiter = ',', required = true)]
    pub labels: Vec<String>,

    /// Quantity to select a label for
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for select results.
#[derive(Serialize)]
struct SelectResult<'a> {
    label: &'a str,
}

/// Run the select command.
pub fn run_select(args: SelectArgs) -> Result<i32> {
    let rule = resolve_rule(&args.locale);
    let operands = match parse_quantity(&args.quantity) {
        Ok(operands) => operands,
        Err(diagnostic) => {
            eprintln!("{:?}", Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };

    match pluralis::select(&operands, &args.labels, &rule) {
        Ok(label) => {
            if args.json {
                let output = SelectResult { label };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", label);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("{:?}", Report::new(SelectDiagnostic::new(&args.labels, &e)));
            }
            Ok(exitcode::DATAERR)
        }
    }
}
