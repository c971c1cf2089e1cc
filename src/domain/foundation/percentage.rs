//! Percentage value object (0-100 scale).

use super::{BoundedFloat, FloatRange};

/// Range marker for `0.0..=100.0`.
#[derive(Debug)]
pub enum PercentRange {}

impl FloatRange for PercentRange {
    const MIN: f64 = 0.0;
    const MAX: f64 = 100.0;
}

/// A reading between 0 and 100 inclusive, such as a power or oxygen level.
pub type Percentage = BoundedFloat<PercentRange>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConstraintReason;

    #[test]
    fn percentage_accepts_valid_values() {
        assert_eq!(Percentage::try_new("power_level", 0.0).unwrap().value(), 0.0);
        assert_eq!(Percentage::try_new("power_level", 85.5).unwrap().value(), 85.5);
        assert_eq!(Percentage::try_new("power_level", 100.0).unwrap().value(), 100.0);
    }

    #[test]
    fn percentage_rejects_over_100() {
        let result = Percentage::try_new("oxygen_level", 100.5);
        match result {
            Err(err) => {
                assert_eq!(err.field, "oxygen_level");
                assert!(matches!(err.reason, ConstraintReason::OutOfRange { .. }));
            }
            Ok(_) => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn percentage_rejects_negative() {
        assert!(Percentage::try_new("power_level", -1.0).is_err());
    }

    #[test]
    fn percentage_ordering_works() {
        let p1 = Percentage::try_new("power_level", 25.0).unwrap();
        let p2 = Percentage::try_new("power_level", 75.0).unwrap();
        assert!(p1 < p2);
    }
}
