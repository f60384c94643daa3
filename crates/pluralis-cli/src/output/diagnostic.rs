//! Miette diagnostic wrappers for quantity and label selection errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use pluralis::{OperandsError, SelectError};
use thiserror::Error;

/// A miette-compatible diagnostic for a quantity that could not be parsed.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid quantity: {message}")]
#[diagnostic(code(pluralis::quantity), help("quantities are plain decimals such as 3, 0.5 or 2.10"))]
pub struct QuantityDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("not a supported decimal")]
    span: SourceSpan,

    message: String,
}

impl QuantityDiagnostic {
    /// Create a diagnostic from an OperandsError for the given input.
    pub fn new(input: &str, err: &OperandsError) -> Self {
        QuantityDiagnostic {
            src: NamedSource::new("quantity", input.to_string()),
            span: (0, input.len()).into(),
            message: err.to_string(),
        }
    }
}

/// A miette-compatible diagnostic for a failed label selection.
///
/// The declared labels are shown as the source, comma-separated.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(pluralis::missing_label))]
pub struct SelectDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("declared labels")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl SelectDiagnostic {
    /// Create a diagnostic from a SelectError and the declared labels.
    pub fn new(labels: &[String], err: &SelectError) -> Self {
        let source = labels.join(",");
        let help = match err {
            SelectError::NoLabels => Some("declare at least an 'other' label".to_string()),
            SelectError::MissingCategoryLabel { category, .. } => {
                Some(format!("add a '{category}' label"))
            }
        };

        SelectDiagnostic {
            span: (0, source.len()).into(),
            src: NamedSource::new("labels", source),
            message: err.to_string(),
            help,
        }
    }
}
