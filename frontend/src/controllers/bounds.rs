//! Numeric bounds enforced when a field commits a change.
//!
//! Rules are independent: a field matched by several of them gets each one
//! applied in declaration order. An empty value counts as `0`, so emptied
//! ratings and ages snap back to their minimum; text that is not a number is
//! left alone.

use crate::config::{AGE_MAX, AGE_MIN, NON_NEGATIVE_MIN, RATING_MAX, RATING_MIN};
use crate::{FieldKind, FieldSpec};

/// Inclusive `[min, max]` domain, either side optional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericBounds {
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Clamp a displayed value.
    ///
    /// Returns the replacement text, or `None` when the value stays as is.
    /// An empty value compares as `0`; text that is not a number never
    /// leaves the domain.
    pub fn clamp_value(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        let value: f64 = if raw.is_empty() { 0.0 } else { raw.parse().ok()? };
        if let Some(min) = self.min {
            if value < min {
                return Some(format_bound(min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Some(format_bound(max));
            }
        }
        None
    }
}

fn format_bound(bound: f64) -> String {
    format!("{}", bound)
}

/// Field categories with static bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsRule {
    /// Number fields declared `min=1 max=5`
    Rating,
    /// The `Age` field
    Age,
    /// Any field whose name contains `Delay`
    Delay,
    /// The `Flight Distance` field
    FlightDistance,
}

impl BoundsRule {
    const ALL: [BoundsRule; 4] = [
        BoundsRule::Rating,
        BoundsRule::Age,
        BoundsRule::Delay,
        BoundsRule::FlightDistance,
    ];

    pub fn bounds(&self) -> NumericBounds {
        match self {
            BoundsRule::Rating => NumericBounds::new(Some(RATING_MIN), Some(RATING_MAX)),
            BoundsRule::Age => NumericBounds::new(Some(AGE_MIN), Some(AGE_MAX)),
            BoundsRule::Delay | BoundsRule::FlightDistance => {
                NumericBounds::new(Some(NON_NEGATIVE_MIN), None)
            }
        }
    }

    /// Whether this rule selects `field`.
    pub fn matches(&self, field: &FieldSpec) -> bool {
        match self {
            BoundsRule::Rating => matches!(
                field.kind,
                FieldKind::Number { min: Some(min), max: Some(max) }
                    if min == RATING_MIN && max == RATING_MAX
            ),
            BoundsRule::Age => field.name == "Age",
            BoundsRule::Delay => field.name.contains("Delay"),
            BoundsRule::FlightDistance => field.name == "Flight Distance",
        }
    }

    /// Every rule that selects `field`, in application order.
    pub fn for_field(field: &FieldSpec) -> Vec<BoundsRule> {
        Self::ALL.into_iter().filter(|rule| rule.matches(field)).collect()
    }
}

/// Apply `rules` in order to a committed value.
///
/// Returns the final text when any rule changed it.
pub fn enforce_bounds(rules: &[BoundsRule], raw: &str) -> Option<String> {
    let mut current: Option<String> = None;
    for rule in rules {
        let value = current.as_deref().unwrap_or(raw);
        if let Some(clamped) = rule.bounds().clamp_value(value) {
            log::debug!("{:?} clamped {} -> {}", rule, value, clamped);
            current = Some(clamped);
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::field;

    fn clamp(name: &str, raw: &str) -> String {
        let spec = field(name).unwrap();
        enforce_bounds(&BoundsRule::for_field(spec), raw).unwrap_or_else(|| raw.to_string())
    }

    #[test]
    fn test_rating_clamp() {
        assert_eq!(clamp("Seat comfort", "0"), "1");
        assert_eq!(clamp("Seat comfort", "6"), "5");
        assert_eq!(clamp("Seat comfort", "3"), "3");
    }

    #[test]
    fn test_age_clamp() {
        assert_eq!(clamp("Age", "0"), "1");
        assert_eq!(clamp("Age", "200"), "120");
        assert_eq!(clamp("Age", "45"), "45");
    }

    #[test]
    fn test_delay_clamp() {
        for name in ["Departure Delay in Minutes", "Arrival Delay in Minutes"] {
            assert_eq!(clamp(name, "-5"), "0");
            assert_eq!(clamp(name, "10"), "10");
        }
    }

    #[test]
    fn test_flight_distance_clamp() {
        assert_eq!(clamp("Flight Distance", "-1"), "0");
        assert_eq!(clamp("Flight Distance", "500"), "500");
    }

    #[test]
    fn test_in_bounds_untouched() {
        let rules = [BoundsRule::Rating];
        assert_eq!(enforce_bounds(&rules, "2.5"), None);
        assert_eq!(enforce_bounds(&rules, "5"), None);
        assert_eq!(enforce_bounds(&rules, "1"), None);
    }

    #[test]
    fn test_non_numeric_untouched() {
        let rules = [BoundsRule::Age];
        assert_eq!(enforce_bounds(&rules, "abc"), None);
    }

    #[test]
    fn test_empty_value_counts_as_zero() {
        assert_eq!(clamp("Age", ""), "1");
        assert_eq!(clamp("Cleanliness", ""), "1");
        assert_eq!(clamp("Age", "  "), "1");
        assert_eq!(enforce_bounds(&[BoundsRule::Rating], ""), Some("1".to_string()));
    }

    #[test]
    fn test_empty_value_kept_when_zero_allowed() {
        assert_eq!(enforce_bounds(&[BoundsRule::Delay], ""), None);
        assert_eq!(enforce_bounds(&[BoundsRule::FlightDistance], ""), None);
        assert_eq!(clamp("Arrival Delay in Minutes", ""), "");
        assert_eq!(clamp("Flight Distance", ""), "");
    }

    #[test]
    fn test_no_rules_is_noop() {
        assert_eq!(enforce_bounds(&[], "-42"), None);
    }

    #[test]
    fn test_rule_selection() {
        assert_eq!(
            BoundsRule::for_field(field("Inflight wifi service").unwrap()),
            vec![BoundsRule::Rating]
        );
        assert_eq!(BoundsRule::for_field(field("Age").unwrap()), vec![BoundsRule::Age]);
        assert_eq!(
            BoundsRule::for_field(field("Flight Distance").unwrap()),
            vec![BoundsRule::FlightDistance]
        );
        assert!(BoundsRule::for_field(field("Gender").unwrap()).is_empty());
    }

    #[test]
    fn test_overlapping_rules_apply_in_order() {
        let spec = FieldSpec {
            name: "Delay rating",
            kind: FieldKind::Number { min: Some(1.0), max: Some(5.0) },
            required: true,
        };
        let rules = BoundsRule::for_field(&spec);
        assert_eq!(rules, vec![BoundsRule::Rating, BoundsRule::Delay]);
        assert_eq!(enforce_bounds(&rules, "-3"), Some("1".to_string()));
    }
}
