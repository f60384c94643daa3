//! Selection of a call site's declared plural label.
//!
//! A call site declares the labels it has text for, e.g.
//! `["=0", "one", "other"]`. Selection prefers a discrete `=N` label that
//! matches the quantity exactly, then the label named by the locale's
//! category. If neither is declared the call site is missing a translation
//! and [`SelectError::MissingCategoryLabel`] is returned rather than
//! substituting some other label.

use winnow::ascii::digit1;
use winnow::combinator::preceded;
use winnow::prelude::*;

use crate::error::SelectError;
use crate::operands::PluralOperands;
use crate::rules::PluralRule;

/// A declared label, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label<'a> {
    /// `=N`: matches exactly the integer-valued quantity `N`.
    Discrete(u64),
    /// A category name such as `one` or `other`.
    Category(&'a str),
}

impl<'a> Label<'a> {
    /// Parses a declared label.
    ///
    /// Returns `None` for an empty label and for a `=` label that is not
    /// followed by a canonical decimal integer. Leading zeros are rejected,
    /// so `=05` is malformed while `=0` is not.
    ///
    /// ```
    /// use pluralis::Label;
    ///
    /// assert_eq!(Label::parse("=5"), Some(Label::Discrete(5)));
    /// assert_eq!(Label::parse("few"), Some(Label::Category("few")));
    /// assert_eq!(Label::parse("=five"), None);
    /// assert_eq!(Label::parse("=05"), None);
    /// ```
    pub fn parse(label: &'a str) -> Option<Self> {
        if label.starts_with('=') {
            discrete.parse(label).ok().map(Label::Discrete)
        } else if label.is_empty() {
            None
        } else {
            Some(Label::Category(label))
        }
    }

    /// True when this label matches `operands` by exact value.
    pub fn matches_discrete(&self, operands: &PluralOperands) -> bool {
        match self {
            Label::Discrete(n) => operands.integer_value() == Some(*n),
            Label::Category(_) => false,
        }
    }
}

fn discrete(input: &mut &str) -> ModalResult<u64> {
    preceded(
        '=',
        digit1
            .verify(|digits: &str| digits == "0" || !digits.starts_with('0'))
            .parse_to(),
    )
    .parse_next(input)
}

/// The discrete key `=N` for an integer-valued quantity.
///
/// Fractional quantities have no discrete key.
pub fn discrete_key(operands: &PluralOperands) -> Option<String> {
    operands.integer_value().map(|n| format!("={n}"))
}

/// Selects which declared label to use for a quantity.
///
/// # Example
///
/// ```
/// use pluralis::{LocaleRule, PluralOperands, select};
///
/// let labels = ["=0", "one", "other"];
/// let en = LocaleRule::English;
/// assert_eq!(select(&0.into(), &labels, &en).unwrap(), "=0");
/// assert_eq!(select(&1.into(), &labels, &en).unwrap(), "one");
/// assert_eq!(select(&PluralOperands::try_from(1.5).unwrap(), &labels, &en).unwrap(), "other");
/// ```
pub fn select<'a, L, R>(
    operands: &PluralOperands,
    labels: &'a [L],
    rule: &R,
) -> Result<&'a str, SelectError>
where
    L: AsRef<str>,
    R: PluralRule + ?Sized,
{
    if labels.is_empty() {
        return Err(SelectError::NoLabels);
    }

    let category = rule.category(operands);
    let discrete = discrete_key(operands);

    let declared = || labels.iter().map(AsRef::<str>::as_ref);

    if let Some(label) = declared().find(|&label| {
        Label::parse(label).is_some_and(|parsed| parsed.matches_discrete(operands))
    }) {
        return Ok(label);
    }

    declared()
        .find(|&label| label == category.as_str())
        .ok_or_else(|| SelectError::MissingCategoryLabel {
            category: category.to_string(),
            discrete,
            available: declared().map(str::to_string).collect(),
        })
}
