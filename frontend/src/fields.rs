//! Field catalogue of the prediction form.
//!
//! Names match the columns the prediction backend reads, so they double as
//! the posted form keys and as the batch spreadsheet header.

use crate::config::{AGE_MAX, AGE_MIN, NON_NEGATIVE_MIN, RATING_MAX, RATING_MIN};
use crate::{FieldKind, FieldSpec};

const RATING: FieldKind = FieldKind::Number {
    min: Some(RATING_MIN),
    max: Some(RATING_MAX),
};

const fn select(name: &'static str, options: &'static [&'static str]) -> FieldSpec {
    FieldSpec { name, kind: FieldKind::Select(options), required: true }
}

const fn number(name: &'static str, min: Option<f64>, max: Option<f64>) -> FieldSpec {
    FieldSpec { name, kind: FieldKind::Number { min, max }, required: true }
}

const fn rating(name: &'static str) -> FieldSpec {
    FieldSpec { name, kind: RATING, required: true }
}

/// Passenger profile fields.
pub const PROFILE_FIELDS: &[FieldSpec] = &[
    select("Gender", &["Male", "Female"]),
    select("Customer Type", &["Loyal Customer", "disloyal Customer"]),
    number("Age", Some(AGE_MIN), Some(AGE_MAX)),
    select("Type of Travel", &["Business travel", "Personal Travel"]),
    select("Class", &["Business", "Eco", "Eco Plus"]),
    number("Flight Distance", Some(NON_NEGATIVE_MIN), None),
];

/// Service ratings on a 1-5 scale.
pub const RATING_FIELDS: &[FieldSpec] = &[
    rating("Inflight wifi service"),
    rating("Departure/Arrival time convenient"),
    rating("Ease of Online booking"),
    rating("Gate location"),
    rating("Food and drink"),
    rating("Online boarding"),
    rating("Seat comfort"),
    rating("Inflight entertainment"),
    rating("On-board service"),
    rating("Leg room service"),
    rating("Baggage handling"),
    rating("Checkin service"),
    rating("Inflight service"),
    rating("Cleanliness"),
];

/// Delays in minutes.
pub const DELAY_FIELDS: &[FieldSpec] = &[
    number("Departure Delay in Minutes", Some(NON_NEGATIVE_MIN), None),
    number("Arrival Delay in Minutes", Some(NON_NEGATIVE_MIN), None),
];

/// Every catalogue field, in form order.
pub fn all_fields() -> impl Iterator<Item = &'static FieldSpec> {
    PROFILE_FIELDS
        .iter()
        .chain(RATING_FIELDS.iter())
        .chain(DELAY_FIELDS.iter())
}

/// Look up a field by name.
#[cfg(test)]
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    all_fields().find(|f| f.name == name)
}

/// Header the batch spreadsheet must carry.
pub fn batch_columns() -> Vec<&'static str> {
    all_fields().map(|f| f.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_size() {
        assert_eq!(PROFILE_FIELDS.len(), 6);
        assert_eq!(RATING_FIELDS.len(), 14);
        assert_eq!(DELAY_FIELDS.len(), 2);
        assert_eq!(batch_columns().len(), 22);
    }

    #[test]
    fn test_names_unique() {
        let mut names = batch_columns();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 22);
    }

    #[test]
    fn test_all_required() {
        assert!(all_fields().all(|f| f.required));
    }

    #[test]
    fn test_lookup() {
        assert!(matches!(field("Class").map(|f| &f.kind), Some(FieldKind::Select(opts)) if opts.len() == 3));
        assert!(field("Unknown").is_none());
    }
}
