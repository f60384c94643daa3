//! CLDR cardinal plural category resolution.
//!
//! Two pieces do the work:
//!
//! - [`LocaleRule`]: per-locale rules mapping a quantity to a [`Category`]
//!   (`one`, `few`, `other`, ...), looked up by locale identifier.
//! - [`select`]: given a quantity, a rule and the labels a call site has
//!   text for, picks the label to use, preferring exact `=N` matches.
//!
//! ```
//! use pluralis::{Category, Localization};
//!
//! let ro = Localization::with_locale("ro");
//! assert_eq!(ro.category(0), Category::FEW);
//! assert_eq!(ro.category(1223), Category::OTHER);
//!
//! let sr = Localization::with_locale("sr");
//! assert_eq!(sr.category_f64(2.1), Category::ONE);
//! ```

pub mod category;
pub mod error;
pub mod lint;
pub mod localization;
pub mod operands;
pub mod rules;
pub mod select;

pub use category::Category;
pub use error::{OperandsError, SelectError, compute_suggestions};
pub use lint::{LabelWarning, lint_labels};
pub use localization::Localization;
pub use operands::PluralOperands;
pub use rules::{LocaleRule, PluralRule, plural_category};
pub use select::{Label, discrete_key, select};
