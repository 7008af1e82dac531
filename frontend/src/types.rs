//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Tab Types** - panel identifiers
//! - **Field Types** - form field catalogue entries
//! - **Error Types** - frontend error handling

use std::fmt;
use thiserror::Error;

// =============================================================================
// Tab Types
// =============================================================================

/// Identifier of a tab panel.
///
/// Rendered as the panel's DOM `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TabId {
    /// Single passenger form
    Single,
    /// Spreadsheet upload
    Batch,
}

impl TabId {
    /// DOM id of the panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Single => "single",
            TabId::Batch => "batch",
        }
    }

    /// Text of the selector control.
    pub fn label(&self) -> &'static str {
        match self {
            TabId::Single => "Single Prediction",
            TabId::Batch => "Batch Prediction",
        }
    }

    /// All tabs in display order.
    pub fn all() -> [TabId; 2] {
        [TabId::Single, TabId::Batch]
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Field Types
// =============================================================================

/// Input control used for a catalogue field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    /// `<select>` with the given options
    Select(&'static [&'static str]),
    /// `<input type="number">` with optional declared `min`/`max`
    Number {
        min: Option<f64>,
        max: Option<f64>,
    },
}

/// One field of the prediction form.
///
/// `name` is both the DOM id and the posted form key.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend failures.
///
/// Neither variant is fatal: a missing element disables the feature that
/// needed it, a validation failure blocks one submission.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UiError {
    /// Referenced element is absent.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Required fields were empty at submit time.
    #[error("{empty} required field(s) empty")]
    ValidationFailure { empty: usize },
}

/// Result type alias for frontend operations.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids_are_distinct() {
        let [a, b] = TabId::all();
        assert_ne!(a.as_str(), b.as_str());
        assert_eq!(TabId::Batch.to_string(), "batch");
    }

    #[test]
    fn test_error_format() {
        let err = UiError::MissingElement("fileInput".into());
        assert!(err.to_string().contains("fileInput"));

        let err = UiError::ValidationFailure { empty: 3 };
        assert_eq!(err.to_string(), "3 required field(s) empty");
    }
}
