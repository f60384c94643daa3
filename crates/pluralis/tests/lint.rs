//! Tests for declared label linting.

use pluralis::{LabelWarning, LocaleRule, compute_suggestions, lint_labels};

// =========================================================================
// Clean Label Sets
// =========================================================================

#[test]
fn complete_english_labels_have_no_warnings() {
    assert!(lint_labels(LocaleRule::English, &["one", "other"]).is_empty());
}

#[test]
fn discrete_labels_are_accepted() {
    assert!(lint_labels(LocaleRule::English, &["=0", "=5", "one", "other"]).is_empty());
}

#[test]
fn complete_arabic_labels_have_no_warnings() {
    let labels = ["zero", "one", "two", "few", "many", "other"];
    assert!(lint_labels(LocaleRule::Arabic, &labels).is_empty());
}

// =========================================================================
// Warnings
// =========================================================================

#[test]
fn missing_category_is_reported() {
    let warnings = lint_labels(LocaleRule::Serbian, &["one", "other"]);
    assert_eq!(
        warnings,
        vec![LabelWarning::MissingCategory {
            category: "few".to_string(),
            rule: LocaleRule::Serbian,
        }]
    );
}

#[test]
fn unreachable_category_is_reported() {
    let warnings = lint_labels(LocaleRule::English, &["one", "few", "other"]);
    assert_eq!(
        warnings,
        vec![LabelWarning::UnreachableCategory {
            category: "few".to_string(),
            rule: LocaleRule::English,
        }]
    );
}

#[test]
fn unknown_category_suggests_closest() {
    let warnings = lint_labels(LocaleRule::English, &["one", "othr", "other"]);
    assert_eq!(
        warnings,
        vec![LabelWarning::UnknownCategory {
            label: "othr".to_string(),
            suggestions: vec!["other".to_string()],
        }]
    );
}

#[test]
fn malformed_discrete_is_reported() {
    let warnings = lint_labels(LocaleRule::English, &["=one", "one", "other"]);
    assert_eq!(
        warnings,
        vec![LabelWarning::MalformedDiscrete {
            label: "=one".to_string(),
        }]
    );
}

#[test]
fn zero_padded_discrete_is_reported() {
    let warnings = lint_labels(LocaleRule::English, &["=05", "one", "other"]);
    assert_eq!(
        warnings,
        vec![LabelWarning::MalformedDiscrete {
            label: "=05".to_string(),
        }]
    );
}

#[test]
fn empty_and_duplicate_labels_are_reported() {
    let warnings = lint_labels(LocaleRule::English, &["", "one", "one", "other"]);
    assert_eq!(
        warnings,
        vec![
            LabelWarning::EmptyLabel,
            LabelWarning::DuplicateLabel {
                label: "one".to_string(),
            },
        ]
    );
}

#[test]
fn missing_categories_follow_declared_label_warnings() {
    let warnings = lint_labels(LocaleRule::Russian, &["few", "zero"]);
    assert_eq!(
        warnings,
        vec![
            LabelWarning::UnreachableCategory {
                category: "zero".to_string(),
                rule: LocaleRule::Russian,
            },
            LabelWarning::MissingCategory {
                category: "one".to_string(),
                rule: LocaleRule::Russian,
            },
            LabelWarning::MissingCategory {
                category: "many".to_string(),
                rule: LocaleRule::Russian,
            },
            LabelWarning::MissingCategory {
                category: "other".to_string(),
                rule: LocaleRule::Russian,
            },
        ]
    );
}

// =========================================================================
// Display Format
// =========================================================================

#[test]
fn warning_display() {
    let warning = LabelWarning::UnknownCategory {
        label: "othr".to_string(),
        suggestions: vec!["other".to_string()],
    };
    insta::assert_snapshot!(warning.to_string(), @"unknown category 'othr', did you mean 'other'?");

    let warning = LabelWarning::UnknownCategory {
        label: "plural".to_string(),
        suggestions: Vec::new(),
    };
    insta::assert_snapshot!(warning.to_string(), @"unknown category 'plural'");

    let warning = LabelWarning::MissingCategory {
        category: "few".to_string(),
        rule: LocaleRule::Romanian,
    };
    insta::assert_snapshot!(warning.to_string(), @"no label for category 'few' produced by the romanian rule");
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn compute_suggestions_finds_similar_names() {
    let candidates = ["zero", "one", "two", "few", "many", "other"];

    assert_eq!(compute_suggestions("on", &candidates), vec!["one"]);
    assert_eq!(compute_suggestions("oter", &candidates)[0], "other");
    assert!(compute_suggestions("xyzzy", &candidates).is_empty());
}

#[test]
fn compute_suggestions_limits_to_three() {
    let candidates = ["item0", "item1", "item2", "item3", "item4"];
    assert_eq!(compute_suggestions("item", &candidates).len(), 3);
}
