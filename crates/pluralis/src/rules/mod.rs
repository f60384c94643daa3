//! Per-locale cardinal plural rules.
//!
//! Each supported locale belongs to a [`LocaleRule`] family, and each family
//! is a pure function from [`PluralOperands`] to a [`Category`]. Locale
//! identifiers are mapped to families by a process-wide registry that is
//! built once on first use and never mutated afterwards.
//!
//! Unrecognized locales resolve to [`LocaleRule::Default`], which answers
//! `other` for every quantity.

mod families;
mod registry;

use std::fmt;

use serde::Serialize;

use crate::category::Category;
use crate::operands::PluralOperands;

pub use registry::{normalize_locale, supported_locales};

/// Anything that can classify a quantity into a plural category.
///
/// Implemented by [`LocaleRule`] and by any closure
/// `Fn(&PluralOperands) -> Category`, so call sites can supply ad hoc rules:
///
/// ```
/// use pluralis::{Category, PluralOperands, PluralRule};
///
/// let zero_or_one = |n: &PluralOperands| match n.integer_value() {
///     Some(0 | 1) => Category::ONE,
///     _ => Category::OTHER,
/// };
/// assert_eq!(zero_or_one.category(&0.into()), Category::ONE);
/// ```
pub trait PluralRule {
    /// Returns the category for `operands`. Never fails.
    fn category(&self, operands: &PluralOperands) -> Category;
}

impl<F> PluralRule for F
where
    F: Fn(&PluralOperands) -> Category,
{
    fn category(&self, operands: &PluralOperands) -> Category {
        self(operands)
    }
}

/// A family of locales that share one cardinal plural rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleRule {
    /// Always `other`. Used for unrecognized locales and for languages
    /// without plural inflection (ja, zh, ko, ...).
    Default,
    /// `one` when n = 1 (en, hu, tr, el, bg, nb).
    English,
    /// `one` when i = 1 and v = 0 (de, nl, sv, fi, et, ur, sw).
    OneInteger,
    /// `one` for i = 0,1; `many` for exact millions (fr).
    French,
    /// `one`, `few`, `other` (ro, mo).
    Romanian,
    /// `one`, `few`, `other` with fraction digits considered (sr, hr, bs).
    Serbian,
    /// `one`, `few`, `many`, `other` (ru, uk).
    Russian,
    /// `one`, `few`, `many`, `other` (pl).
    Polish,
    /// `one`, `few`, `many`, `other` (cs, sk).
    Czech,
    /// All six categories (ar).
    Arabic,
}

static OTHER_ONLY: [Category; 1] = [Category::OTHER];
static ONE_OTHER: [Category; 2] = [Category::ONE, Category::OTHER];
static ONE_MANY_OTHER: [Category; 3] = [Category::ONE, Category::MANY, Category::OTHER];
static ONE_FEW_OTHER: [Category; 3] = [Category::ONE, Category::FEW, Category::OTHER];
static ONE_FEW_MANY_OTHER: [Category; 4] = [
    Category::ONE,
    Category::FEW,
    Category::MANY,
    Category::OTHER,
];
static ALL_CATEGORIES: [Category; 6] = Category::CLDR;

impl LocaleRule {
    /// Every family, in declaration order.
    pub const ALL: [LocaleRule; 10] = [
        LocaleRule::Default,
        LocaleRule::English,
        LocaleRule::OneInteger,
        LocaleRule::French,
        LocaleRule::Romanian,
        LocaleRule::Serbian,
        LocaleRule::Russian,
        LocaleRule::Polish,
        LocaleRule::Czech,
        LocaleRule::Arabic,
    ];

    /// Resolves the rule for a locale identifier such as `"en_US"` or `"sr"`.
    ///
    /// Only the primary language subtag is considered. Unknown identifiers
    /// fall back to [`LocaleRule::Default`].
    ///
    /// ```
    /// use pluralis::LocaleRule;
    ///
    /// assert_eq!(LocaleRule::for_locale("en_US"), LocaleRule::English);
    /// assert_eq!(LocaleRule::for_locale("sr-Latn"), LocaleRule::Serbian);
    /// assert_eq!(LocaleRule::for_locale("xx"), LocaleRule::Default);
    /// ```
    pub fn for_locale(locale: &str) -> Self {
        registry::lookup(locale)
    }

    /// Short snake_case name of the family.
    pub fn name(self) -> &'static str {
        match self {
            LocaleRule::Default => "default",
            LocaleRule::English => "english",
            LocaleRule::OneInteger => "one_integer",
            LocaleRule::French => "french",
            LocaleRule::Romanian => "romanian",
            LocaleRule::Serbian => "serbian",
            LocaleRule::Russian => "russian",
            LocaleRule::Polish => "polish",
            LocaleRule::Czech => "czech",
            LocaleRule::Arabic => "arabic",
        }
    }

    /// The categories this family can produce, in CLDR order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            LocaleRule::Default => &OTHER_ONLY,
            LocaleRule::English | LocaleRule::OneInteger => &ONE_OTHER,
            LocaleRule::French => &ONE_MANY_OTHER,
            LocaleRule::Romanian | LocaleRule::Serbian => &ONE_FEW_OTHER,
            LocaleRule::Russian | LocaleRule::Polish | LocaleRule::Czech => &ONE_FEW_MANY_OTHER,
            LocaleRule::Arabic => &ALL_CATEGORIES,
        }
    }

    fn rule_fn(self) -> fn(&PluralOperands) -> Category {
        match self {
            LocaleRule::Default => families::default,
            LocaleRule::English => families::english,
            LocaleRule::OneInteger => families::one_integer,
            LocaleRule::French => families::french,
            LocaleRule::Romanian => families::romanian,
            LocaleRule::Serbian => families::serbian,
            LocaleRule::Russian => families::russian,
            LocaleRule::Polish => families::polish,
            LocaleRule::Czech => families::czech,
            LocaleRule::Arabic => families::arabic,
        }
    }
}

impl PluralRule for LocaleRule {
    fn category(&self, operands: &PluralOperands) -> Category {
        (self.rule_fn())(operands)
    }
}

impl fmt::Display for LocaleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get the plural category for a quantity in a given locale.
///
/// # Examples
///
/// ```
/// use pluralis::{Category, plural_category};
///
/// assert_eq!(plural_category("en", 1), Category::ONE);
/// assert_eq!(plural_category("ro", 1212), Category::FEW);
/// assert_eq!(plural_category("sr", 21), Category::ONE);
/// ```
pub fn plural_category(locale: &str, quantity: impl Into<PluralOperands>) -> Category {
    LocaleRule::for_locale(locale).category(&quantity.into())
}
