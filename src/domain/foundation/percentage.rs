//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Share of `part` in `total`, rounded half-up to the nearest whole percent.
    ///
    /// A zero total yields 0%. `part` larger than `total` clamps to 100%.
    pub fn from_ratio(part: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let part = part.min(total);
        let rounded = (part * 200 + total) / (total * 2);
        Self::new(rounded as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(100).value(), 100);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn from_ratio_handles_whole_tenths() {
        assert_eq!(Percentage::from_ratio(3, 10).value(), 30);
        assert_eq!(Percentage::from_ratio(10, 10).value(), 100);
        assert_eq!(Percentage::from_ratio(0, 10).value(), 0);
    }

    #[test]
    fn from_ratio_rounds_half_up() {
        // 1/8 = 12.5% -> 13%
        assert_eq!(Percentage::from_ratio(1, 8).value(), 13);
        // 1/3 = 33.3% -> 33%
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        // 2/3 = 66.7% -> 67%
        assert_eq!(Percentage::from_ratio(2, 3).value(), 67);
    }

    #[test]
    fn from_ratio_with_zero_total_is_zero() {
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(5, 0), Percentage::ZERO);
    }

    #[test]
    fn from_ratio_clamps_overshoot() {
        assert_eq!(Percentage::from_ratio(12, 10), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(format!("{}", Percentage::new(70)), "70%");
    }

    #[test]
    fn percentage_serializes_to_bare_number() {
        assert_eq!(serde_json::to_string(&Percentage::new(42)).unwrap(), "42");
    }
}
