//! Static checks of a declared label set against a locale's rule.
//!
//! A label set that omits a category the locale can produce will make
//! [`select`](crate::select) fail for some quantities; a label for a
//! category the locale never produces is dead text. Both are easy to miss
//! when a message is translated from a language with fewer categories.

use std::collections::HashSet;

use thiserror::Error;

use crate::category::Category;
use crate::error::compute_suggestions;
use crate::rules::LocaleRule;
use crate::select::Label;

/// A problem found in a declared label set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelWarning {
    /// An empty string was declared as a label.
    #[error("empty label")]
    EmptyLabel,

    /// A label starts with `=` but is not `=` followed by a canonical integer.
    #[error("malformed discrete label '{label}': expected '=' followed by digits without leading zeros")]
    MalformedDiscrete { label: String },

    /// A label is not one of the CLDR category names.
    #[error(
        "unknown category '{label}'{}",
        if suggestions.is_empty() { String::new() } else { format!(", did you mean '{}'?", suggestions.join("', '")) }
    )]
    UnknownCategory {
        label: String,
        suggestions: Vec<String>,
    },

    /// A CLDR category that the locale's rule never produces.
    #[error("category '{category}' is never produced by the {rule} rule")]
    UnreachableCategory { category: String, rule: LocaleRule },

    /// A category the locale's rule produces has no label.
    #[error("no label for category '{category}' produced by the {rule} rule")]
    MissingCategory { category: String, rule: LocaleRule },

    /// The same label is declared more than once.
    #[error("label '{label}' is declared more than once")]
    DuplicateLabel { label: String },
}

/// Checks `labels` against `rule`, returning warnings in declaration order
/// followed by any missing categories in CLDR order.
///
/// ```
/// use pluralis::{LabelWarning, LocaleRule, lint_labels};
///
/// let warnings = lint_labels(LocaleRule::English, &["=0", "one", "other"]);
/// assert!(warnings.is_empty());
///
/// let warnings = lint_labels(LocaleRule::Romanian, &["one", "other"]);
/// assert_eq!(warnings.len(), 1);
/// assert!(matches!(warnings[0], LabelWarning::MissingCategory { .. }));
/// ```
pub fn lint_labels<L: AsRef<str>>(rule: LocaleRule, labels: &[L]) -> Vec<LabelWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();
    let produced = rule.categories();
    let cldr = Category::CLDR;
    let cldr_names: Vec<&str> = cldr.iter().map(Category::as_str).collect();

    for label in labels.iter().map(AsRef::<str>::as_ref) {
        if !seen.insert(label) {
            warnings.push(LabelWarning::DuplicateLabel {
                label: label.to_string(),
            });
            continue;
        }

        match Label::parse(label) {
            None if label.is_empty() => warnings.push(LabelWarning::EmptyLabel),
            None => warnings.push(LabelWarning::MalformedDiscrete {
                label: label.to_string(),
            }),
            Some(Label::Discrete(_)) => {}
            Some(Label::Category(name)) => match Category::cldr(name) {
                None => warnings.push(LabelWarning::UnknownCategory {
                    label: name.to_string(),
                    suggestions: compute_suggestions(name, &cldr_names),
                }),
                Some(category) if !produced.contains(&category) => {
                    warnings.push(LabelWarning::UnreachableCategory {
                        category: category.to_string(),
                        rule,
                    });
                }
                Some(_) => {}
            },
        }
    }

    for category in produced {
        if !seen.contains(category.as_str()) {
            warnings.push(LabelWarning::MissingCategory {
                category: category.to_string(),
                rule,
            });
        }
    }

    warnings
}
