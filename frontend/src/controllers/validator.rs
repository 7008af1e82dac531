//! Required-field check run when the prediction form is submitted.
//!
//! A field is empty only when its value is the empty string; no format or
//! range checks happen here.

use crate::config::{INVALID_BORDER, NEUTRAL_BORDER};
use crate::{UiError, UiResult};

/// Visual state of a checked field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMark {
    Neutral,
    Invalid,
}

impl FieldMark {
    pub fn border_color(&self) -> &'static str {
        match self {
            FieldMark::Neutral => NEUTRAL_BORDER,
            FieldMark::Invalid => INVALID_BORDER,
        }
    }
}

/// Outcome of one submit attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    /// Mark for every required field, in form order.
    pub marks: Vec<(String, FieldMark)>,
}

impl ValidationReport {
    /// Number of required fields found empty.
    pub fn empty_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|(_, mark)| *mark == FieldMark::Invalid)
            .count()
    }

    pub fn is_valid(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn mark_of(&self, name: &str) -> Option<FieldMark> {
        self.marks
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, mark)| *mark)
    }

    /// `Ok` when the submission may proceed.
    pub fn into_result(self) -> UiResult<()> {
        match self.empty_count() {
            0 => Ok(()),
            empty => Err(UiError::ValidationFailure { empty }),
        }
    }
}

/// Checks every required field of a form.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormValidator;

impl FormValidator {
    /// Check `(name, value, required)` triples.
    ///
    /// Fields that are not required are skipped and get no mark.
    pub fn check<'a, I>(&self, fields: I) -> ValidationReport
    where
        I: IntoIterator<Item = (&'a str, &'a str, bool)>,
    {
        let marks = fields
            .into_iter()
            .filter(|(_, _, required)| *required)
            .map(|(name, value, _)| {
                let mark = if value.is_empty() {
                    FieldMark::Invalid
                } else {
                    FieldMark::Neutral
                };
                (name.to_string(), mark)
            })
            .collect();

        let report = ValidationReport { marks };
        if report.is_valid() {
            log::info!("✅ Form valid, submitting");
        } else {
            log::warn!("⚠️ {} required field(s) empty", report.empty_count());
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filled_passes() {
        let report = FormValidator.check([
            ("Gender", "Male", true),
            ("Age", "45", true),
        ]);
        assert!(report.is_valid());
        assert_eq!(report.mark_of("Age"), Some(FieldMark::Neutral));
        assert_eq!(report.into_result(), Ok(()));
    }

    #[test]
    fn test_empty_required_blocks() {
        let report = FormValidator.check([
            ("Gender", "", true),
            ("Age", "45", true),
            ("Cleanliness", "", true),
        ]);
        assert_eq!(report.mark_of("Gender"), Some(FieldMark::Invalid));
        assert_eq!(report.mark_of("Age"), Some(FieldMark::Neutral));
        assert_eq!(
            report.into_result(),
            Err(UiError::ValidationFailure { empty: 2 })
        );
    }

    #[test]
    fn test_optional_fields_ignored() {
        let report = FormValidator.check([("Notes", "", false), ("Age", "30", true)]);
        assert!(report.is_valid());
        assert_eq!(report.mark_of("Notes"), None);
    }

    #[test]
    fn test_zero_and_whitespace_are_filled() {
        let report = FormValidator.check([
            ("Departure Delay in Minutes", "0", true),
            ("Class", " ", true),
        ]);
        assert!(report.is_valid());
    }

    #[test]
    fn test_mark_colors() {
        assert_eq!(FieldMark::Invalid.border_color(), INVALID_BORDER);
        assert_eq!(FieldMark::Neutral.border_color(), NEUTRAL_BORDER);
    }
}
