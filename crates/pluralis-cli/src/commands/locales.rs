//! Implementation of the `pluralis locales` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use pluralis::rules::supported_locales;
use pluralis::{Category, LocaleRule};
use serde::Serialize;

use crate::output::table::format_locales_table;

/// Arguments for the locales command.
#[derive(Debug, Args)]
pub struct LocalesArgs {
    /// Only list locales using this rule family (e.g., serbian)
    #[arg(long)]
    pub rule: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for a registered locale.
#[derive(Debug, Serialize)]
struct LocaleJson {
    locale: &'static str,
    rule: LocaleRule,
    categories: &'static [Category],
}

/// Run the locales command.
pub fn run_locales(args: LocalesArgs) -> Result<i32> {
    let locales: Vec<(&'static str, LocaleRule)> = supported_locales()
        .filter(|(_, rule)| args.rule.as_deref().is_none_or(|name| rule.name() == name))
        .collect();

    if args.json {
        let json: Vec<LocaleJson> = locales
            .iter()
            .map(|&(locale, rule)| LocaleJson {
                locale,
                rule,
                categories: rule.categories(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        println!("{}", format_locales_table(&locales));
    }

    if locales.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
