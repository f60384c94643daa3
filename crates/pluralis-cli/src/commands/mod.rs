//! CLI command implementations.

mod category;
mod lint;
mod locales;
mod select;

pub use category::{run_category, CategoryArgs};
pub use lint::{run_lint, LintArgs};
pub use locales::{run_locales, LocalesArgs};
pub use select::{run_select, SelectArgs};

use owo_colors::{OwoColorize, Stream};
use pluralis::rules::{normalize_locale, supported_locales};
use pluralis::{compute_suggestions, LocaleRule, PluralOperands};

use crate::output::QuantityDiagnostic;

/// Resolve the rule for `locale`, noting on stderr when it falls back.
fn resolve_rule(locale: &str) -> LocaleRule {
    let rule = LocaleRule::for_locale(locale);
    let language = normalize_locale(locale);
    if supported_locales().all(|(code, _)| code != language) {
        let codes: Vec<&str> = supported_locales().map(|(code, _)| code).collect();
        let suggestions = compute_suggestions(&language, &codes);
        let hint = if suggestions.is_empty() {
            String::new()
        } else {
            format!(" (did you mean {}?)", suggestions.join(", "))
        };
        eprintln!(
            "{} no plural rule for locale '{}', every quantity is 'other'{}",
            "note:".if_supports_color(Stream::Stderr, |t| t.yellow()),
            locale,
            hint
        );
    }
    rule
}

/// Parse a command-line quantity, keeping its visible fraction digits.
fn parse_quantity(input: &str) -> Result<PluralOperands, QuantityDiagnostic> {
    input
        .parse()
        .map_err(|e| QuantityDiagnostic::new(input, &e))
}
