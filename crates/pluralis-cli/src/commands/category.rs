//! Implementation of the `pluralis category` command.

use clap::Args;
use miette::{IntoDiagnostic, Report, Result};
use pluralis::{Category, PluralOperands, PluralRule};
use serde::Serialize;

use super::{parse_quantity, resolve_rule};
use crate::output::table::{format_category_table, CategoryRow};

/// Arguments for the category command.
#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Locale identifier (e.g., en, en_US, sr)
    #[arg(short, long, default_value = "en", env = "PLURALIS_LOCALE")]
    pub locale: String,

    /// Quantities to classify, as decimals (e.g., 1, 2.1, 2.10)
    #[arg(required = true, allow_hyphen_values = true)]
    pub quantities: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a classified quantity.
#[derive(Serialize)]
struct CategoryJson<'a> {
    quantity: &'a str,
    operands: PluralOperands,
    category: &'a Category,
}

/// Run the category command.
pub fn run_category(args: CategoryArgs) -> Result<i32> {
    let rule = resolve_rule(&args.locale);

    let mut rows = Vec::with_capacity(args.quantities.len());
    for quantity in &args.quantities {
        let operands = match parse_quantity(quantity) {
            Ok(operands) => operands,
            Err(diagnostic) => {
                eprintln!("{:?}", Report::new(diagnostic));
                return Ok(exitcode::DATAERR);
            }
        };
        rows.push(CategoryRow {
            quantity: quantity.clone(),
            category: rule.category(&operands),
            operands,
        });
    }

    if args.json {
        let json: Vec<CategoryJson> = rows
            .iter()
            .map(|row| CategoryJson {
                quantity: &row.quantity,
                operands: row.operands,
                category: &row.category,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        println!("{}", format_category_table(&rows));
    }

    Ok(exitcode::OK)
}
