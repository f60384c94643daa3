//! Locale-bound plural resolution.
//!
//! [`Localization`] pairs a locale identifier with its resolved rule. It is
//! the object a host application constructs from its configured locale and
//! hands to whatever renders pluralized text.

use bon::Builder;
use tracing::debug;

use crate::category::Category;
use crate::error::SelectError;
use crate::operands::PluralOperands;
use crate::rules::{LocaleRule, PluralRule};
use crate::select::select;

/// Plural resolution for one locale.
///
/// # Example
///
/// ```
/// use pluralis::{Category, Localization};
///
/// let l10n = Localization::builder().locale("en_US").build();
/// assert_eq!(l10n.category(1), Category::ONE);
/// assert_eq!(l10n.category(2), Category::OTHER);
/// assert_eq!(l10n.select(0, &["=0", "one", "other"]).unwrap(), "=0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Localization {
    /// Locale identifier as supplied, e.g. "en_US".
    #[builder(default = "en".to_string())]
    locale: String,

    #[builder(skip = LocaleRule::for_locale(&locale))]
    rule: LocaleRule,
}

impl Default for Localization {
    fn default() -> Self {
        Localization::builder().build()
    }
}

impl Localization {
    /// Create a Localization for English.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Localization for the given locale identifier.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Localization::builder().locale(locale.into()).build()
    }

    /// The locale identifier as supplied.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch to another locale, re-resolving the rule.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
        self.rule = LocaleRule::for_locale(&self.locale);
    }

    /// The rule family resolved for this locale.
    pub fn rule(&self) -> LocaleRule {
        self.rule
    }

    /// The plural category of an exact quantity.
    pub fn category(&self, quantity: impl Into<PluralOperands>) -> Category {
        self.rule.category(&quantity.into())
    }

    /// The plural category of a float.
    ///
    /// NaN, infinities and values whose decimal form cannot be represented
    /// exactly have no meaningful operands and are classified as `other`.
    pub fn category_f64(&self, quantity: f64) -> Category {
        match PluralOperands::try_from(quantity) {
            Ok(operands) => self.rule.category(&operands),
            Err(e) => {
                debug!(quantity, error = %e, "classifying unrepresentable quantity as other");
                Category::OTHER
            }
        }
    }

    /// Selects one of `labels` for `quantity` using this locale's rule.
    ///
    /// See [`select`] for the matching order.
    pub fn select<'a, L: AsRef<str>>(
        &self,
        quantity: impl Into<PluralOperands>,
        labels: &'a [L],
    ) -> Result<&'a str, SelectError> {
        select(&quantity.into(), labels, &self.rule)
    }
}
