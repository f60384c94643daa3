//! Error types for plural resolution.

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while extracting plural operands from a quantity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperandsError {
    /// NaN or an infinity was supplied.
    #[error("quantity {value} is not a finite number")]
    NotFinite { value: f64 },

    /// The input is not a plain decimal number.
    #[error("invalid quantity '{input}': {message}")]
    Syntax { input: String, message: String },

    /// The integer part does not fit in 64 bits.
    #[error("integer part of '{input}' is too large")]
    IntegerOverflow { input: String },

    /// More fraction digits than the operands can represent exactly.
    #[error("'{input}' has {digits} fraction digits, at most 18 are supported")]
    TooManyFractionDigits { input: String, digits: usize },
}

/// Errors that occur while selecting a declared label for a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The call site declared no labels at all.
    #[error("no plural labels declared")]
    NoLabels,

    /// Neither the discrete key nor the computed category is declared.
    #[error(
        "no label for category '{category}'{}, available: {}",
        discrete.as_ref().map(|key| format!(" or '{key}'")).unwrap_or_default(),
        available.join(", ")
    )]
    MissingCategoryLabel {
        category: String,
        discrete: Option<String>,
        available: Vec<String>,
    },
}

/// Computes "did you mean" suggestions for a mistyped name.
///
/// Returns at most three candidates, closest first. Names of three characters
/// or fewer allow an edit distance of 1, longer names allow 2.
pub fn compute_suggestions(name: &str, candidates: &[&str]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = candidates
        .iter()
        .filter(|&&candidate| candidate != name)
        .map(|&candidate| (levenshtein(name, candidate), candidate))
        .filter(|&(distance, _)| distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
