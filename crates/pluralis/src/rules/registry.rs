//! Locale identifier to rule family registry.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use super::LocaleRule;

/// Supported language subtags, sorted, with their rule family.
const LOCALES: &[(&str, LocaleRule)] = &[
    ("ar", LocaleRule::Arabic),
    ("bg", LocaleRule::English),
    ("bs", LocaleRule::Serbian),
    ("cs", LocaleRule::Czech),
    ("de", LocaleRule::OneInteger),
    ("el", LocaleRule::English),
    ("en", LocaleRule::English),
    ("et", LocaleRule::OneInteger),
    ("fi", LocaleRule::OneInteger),
    ("fr", LocaleRule::French),
    ("hr", LocaleRule::Serbian),
    ("hu", LocaleRule::English),
    ("id", LocaleRule::Default),
    ("ja", LocaleRule::Default),
    ("ko", LocaleRule::Default),
    ("lo", LocaleRule::Default),
    ("mo", LocaleRule::Romanian),
    ("ms", LocaleRule::Default),
    ("my", LocaleRule::Default),
    ("nb", LocaleRule::English),
    ("nl", LocaleRule::OneInteger),
    ("pl", LocaleRule::Polish),
    ("ro", LocaleRule::Romanian),
    ("ru", LocaleRule::Russian),
    ("sh", LocaleRule::Serbian),
    ("sk", LocaleRule::Czech),
    ("sr", LocaleRule::Serbian),
    ("sv", LocaleRule::OneInteger),
    ("sw", LocaleRule::OneInteger),
    ("th", LocaleRule::Default),
    ("tr", LocaleRule::English),
    ("uk", LocaleRule::Russian),
    ("ur", LocaleRule::OneInteger),
    ("vi", LocaleRule::Default),
    ("zh", LocaleRule::Default),
];

static REGISTRY: LazyLock<HashMap<&'static str, LocaleRule>> =
    LazyLock::new(|| LOCALES.iter().copied().collect());

/// Reduces a locale identifier to its lowercase primary language subtag.
///
/// ```
/// use pluralis::rules::normalize_locale;
///
/// assert_eq!(normalize_locale("en_US"), "en");
/// assert_eq!(normalize_locale("SR-Latn-RS"), "sr");
/// ```
pub fn normalize_locale(locale: &str) -> String {
    locale
        .trim()
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Every registered language subtag with its rule family, sorted by subtag.
pub fn supported_locales() -> impl Iterator<Item = (&'static str, LocaleRule)> {
    LOCALES.iter().copied()
}

pub(super) fn lookup(locale: &str) -> LocaleRule {
    let language = normalize_locale(locale);
    match REGISTRY.get(language.as_str()) {
        Some(&rule) => rule,
        None => {
            debug!(locale, "no plural rule registered, using default rule");
            LocaleRule::Default
        }
    }
}
