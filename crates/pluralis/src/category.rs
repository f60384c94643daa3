//! Plural category tags.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// A plural category such as `one`, `few` or `other`.
///
/// CLDR defines six categories, available as associated constants. The type
/// is an open string so that a custom [`PluralRule`](crate::PluralRule) can
/// introduce its own tags with [`Category::custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Category(Cow<'static, str>);

impl Category {
    pub const ZERO: Category = Category(Cow::Borrowed("zero"));
    pub const ONE: Category = Category(Cow::Borrowed("one"));
    pub const TWO: Category = Category(Cow::Borrowed("two"));
    pub const FEW: Category = Category(Cow::Borrowed("few"));
    pub const MANY: Category = Category(Cow::Borrowed("many"));
    pub const OTHER: Category = Category(Cow::Borrowed("other"));

    /// The six CLDR categories in canonical order.
    pub const CLDR: [Category; 6] = [
        Category::ZERO,
        Category::ONE,
        Category::TWO,
        Category::FEW,
        Category::MANY,
        Category::OTHER,
    ];

    /// Creates a category outside the CLDR set.
    ///
    /// Returns `None` for an empty name or one starting with `=`, which is
    /// reserved for discrete labels.
    ///
    /// ```
    /// use pluralis::Category;
    ///
    /// assert_eq!(Category::custom("dual").unwrap().as_str(), "dual");
    /// assert!(Category::custom("").is_none());
    /// assert!(Category::custom("=1").is_none());
    /// ```
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() || name.starts_with('=') {
            None
        } else {
            Some(Category(name))
        }
    }

    /// Looks up one of the six CLDR categories by name.
    pub fn cldr(name: &str) -> Option<Self> {
        Self::CLDR
            .into_iter()
            .find(|category| category.as_str() == name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the six CLDR categories.
    pub fn is_cldr(&self) -> bool {
        Self::cldr(self.as_str()).is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
