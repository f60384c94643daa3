//! Integration tests for declared label selection.

use pluralis::{
    Category, Label, LocaleRule, PluralOperands, PluralRule, SelectError, discrete_key, select,
};

/// One for zero and one, other otherwise.
struct ZeroOrOne;

impl PluralRule for ZeroOrOne {
    fn category(&self, operands: &PluralOperands) -> Category {
        match operands.integer_value() {
            Some(0 | 1) => Category::ONE,
            _ => Category::OTHER,
        }
    }
}

fn ops(n: u64) -> PluralOperands {
    PluralOperands::from(n)
}

// =========================================================================
// Category Selection
// =========================================================================

#[test]
fn returns_plural_category() {
    let labels = ["one", "other"];
    assert_eq!(select(&ops(0), &labels, &ZeroOrOne).unwrap(), "one");
    assert_eq!(select(&ops(1), &labels, &ZeroOrOne).unwrap(), "one");
    assert_eq!(select(&ops(5), &labels, &ZeroOrOne).unwrap(), "other");
}

#[test]
fn label_order_does_not_matter() {
    let labels = ["other", "one"];
    assert_eq!(select(&ops(1), &labels, &ZeroOrOne).unwrap(), "one");
    assert_eq!(select(&ops(7), &labels, &ZeroOrOne).unwrap(), "other");
}

#[test]
fn accepts_owned_labels() {
    let labels = vec!["one".to_string(), "other".to_string()];
    assert_eq!(select(&ops(5), &labels, &ZeroOrOne).unwrap(), "other");
}

#[test]
fn works_with_locale_rules() {
    let labels = ["one", "few", "other"];
    assert_eq!(select(&ops(1212), &labels, &LocaleRule::Romanian).unwrap(), "few");
    assert_eq!(select(&ops(1223), &labels, &LocaleRule::Romanian).unwrap(), "other");
}

#[test]
fn works_with_closures() {
    let always_few = |_: &PluralOperands| Category::FEW;
    assert_eq!(select(&ops(3), &["few", "other"], &always_few).unwrap(), "few");
}

#[test]
fn works_with_trait_objects() {
    let rule: &dyn PluralRule = &ZeroOrOne;
    assert_eq!(select(&ops(0), &["one", "other"], rule).unwrap(), "one");
}

// =========================================================================
// Discrete Cases
// =========================================================================

#[test]
fn returns_discrete_cases() {
    assert_eq!(select(&ops(0), &["one", "other", "=0"], &ZeroOrOne).unwrap(), "=0");
    assert_eq!(select(&ops(1), &["one", "other"], &ZeroOrOne).unwrap(), "one");
    assert_eq!(select(&ops(5), &["one", "other", "=5"], &ZeroOrOne).unwrap(), "=5");
    assert_eq!(select(&ops(6), &["one", "other", "=5"], &ZeroOrOne).unwrap(), "other");
}

#[test]
fn discrete_takes_precedence_over_category() {
    for n in [0, 1, 2, 5, 21, 100] {
        let category = LocaleRule::Serbian.category(&ops(n));
        let discrete = format!("={n}");
        let labels = [category.as_str(), discrete.as_str(), "other"];
        assert_eq!(select(&ops(n), &labels, &LocaleRule::Serbian).unwrap(), discrete);
    }
}

#[test]
fn fractional_quantity_never_matches_discrete() {
    let quantity: PluralOperands = "2.5".parse().unwrap();
    let labels = ["=2", "one", "other"];
    assert_eq!(select(&quantity, &labels, &LocaleRule::English).unwrap(), "other");
}

#[test]
fn trailing_zero_fraction_matches_discrete() {
    let quantity: PluralOperands = "2.0".parse().unwrap();
    let labels = ["=2", "one", "other"];
    assert_eq!(select(&quantity, &labels, &LocaleRule::English).unwrap(), "=2");
}

#[test]
fn discrete_key_formats_integers_only() {
    assert_eq!(discrete_key(&ops(5)).as_deref(), Some("=5"));
    assert_eq!(discrete_key(&"0.5".parse().unwrap()), None);
}

// =========================================================================
// Missing Labels
// =========================================================================

#[test]
fn missing_category_label_is_an_error() {
    let err = select(&ops(3), &["one", "other"], &LocaleRule::Serbian).unwrap_err();
    assert_eq!(
        err,
        SelectError::MissingCategoryLabel {
            category: "few".to_string(),
            discrete: Some("=3".to_string()),
            available: vec!["one".to_string(), "other".to_string()],
        }
    );
}

#[test]
fn missing_label_does_not_fall_back_to_other() {
    let result = select(&ops(2), &["one", "other"], &LocaleRule::Romanian);
    assert!(matches!(result, Err(SelectError::MissingCategoryLabel { .. })));
}

#[test]
fn missing_label_for_fraction_has_no_discrete_key() {
    let quantity: PluralOperands = "2.5".parse().unwrap();
    let err = select(&quantity, &["one"], &LocaleRule::English).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no label for category 'other', available: one");
}

#[test]
fn missing_label_message_names_discrete_key() {
    let err = select(&ops(3), &["one", "=5"], &LocaleRule::English).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"no label for category 'other' or '=3', available: one, =5");
}

#[test]
fn empty_label_set_is_an_error() {
    let labels: [&str; 0] = [];
    assert_eq!(select(&ops(1), &labels, &ZeroOrOne), Err(SelectError::NoLabels));
}

// =========================================================================
// Label Parsing
// =========================================================================

#[test]
fn label_parse_distinguishes_discrete_and_category() {
    assert_eq!(Label::parse("=0"), Some(Label::Discrete(0)));
    assert_eq!(Label::parse("=1212"), Some(Label::Discrete(1212)));
    assert_eq!(Label::parse("other"), Some(Label::Category("other")));
}

#[test]
fn label_parse_rejects_malformed() {
    assert_eq!(Label::parse(""), None);
    assert_eq!(Label::parse("="), None);
    assert_eq!(Label::parse("=-1"), None);
    assert_eq!(Label::parse("=1.5"), None);
    assert_eq!(Label::parse("=99999999999999999999"), None);
}

#[test]
fn label_parse_rejects_leading_zeros() {
    assert_eq!(Label::parse("=05"), None);
    assert_eq!(Label::parse("=00"), None);
}

#[test]
fn zero_padded_label_is_never_selected() {
    let labels = ["=05", "one", "other"];
    assert_eq!(select(&ops(5), &labels, &LocaleRule::English).unwrap(), "other");
}

#[test]
fn label_matches_discrete_by_value() {
    assert!(Label::Discrete(2).matches_discrete(&ops(2)));
    assert!(Label::Discrete(2).matches_discrete(&"2.00".parse().unwrap()));
    assert!(!Label::Discrete(2).matches_discrete(&"2.5".parse().unwrap()));
    assert!(!Label::Category("one").matches_discrete(&ops(1)));
}

#[test]
fn selection_is_deterministic() {
    let labels = ["=0", "one", "few", "other"];
    for n in 0..50 {
        let first = select(&ops(n), &labels, &LocaleRule::Romanian);
        let second = select(&ops(n), &labels, &LocaleRule::Romanian);
        assert_eq!(first, second);
    }
}
