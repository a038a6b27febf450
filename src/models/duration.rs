//! Duration model
//!
//! Durations are measured in quarter lengths. The base unit is kept as an
//! exact rational; the dotted quarter length is evaluated in binary64 so
//! that deep dotting converges toward twice the base exactly as a
//! double-precision computation does.

use num_rational::Rational32;
use serde::{Deserialize, Serialize};

/// Exact quarter-length value (a quarter note is 1)
pub type Rational = Rational32;

/// Number of dots past which `0.5^dots` underflows to zero in binary64
const MAX_SIGNIFICANT_DOTS: u32 = 1074;

/// A note or rest duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Duration {
    /// Undotted length, in quarter notes
    pub base: Rational,

    /// Number of augmentation dots
    pub dots: u32,

    /// Dotted length, in quarter notes
    pub quarter_length: f64,
}

impl Duration {
    /// Create a duration from an undotted base length and a dot count.
    ///
    /// The quarter length is `base * (2 - 2^-dots)`.
    pub fn new(base: Rational, dots: u32) -> Self {
        let base_f64 = *base.numer() as f64 / *base.denom() as f64;
        let shrink = if dots > MAX_SIGNIFICANT_DOTS {
            0.0
        } else {
            0.5f64.powi(dots as i32)
        };

        Self {
            base,
            dots,
            quarter_length: base_f64 * (2.0 - shrink),
        }
    }

    pub fn quarter_length(&self) -> f64 {
        self.quarter_length
    }

    /// Conventional name of the base unit ("quarter", "eighth", ...)
    pub fn type_name(&self) -> Option<&'static str> {
        let table: [(i32, i32, &'static str); 15] = [
            (32, 1, "maxima"),
            (16, 1, "longa"),
            (8, 1, "breve"),
            (4, 1, "whole"),
            (2, 1, "half"),
            (1, 1, "quarter"),
            (1, 2, "eighth"),
            (1, 4, "16th"),
            (1, 8, "32nd"),
            (1, 16, "64th"),
            (1, 32, "128th"),
            (1, 64, "256th"),
            (1, 128, "512th"),
            (1, 256, "1024th"),
            (1, 512, "2048th"),
        ];

        table
            .iter()
            .find(|(n, d, _)| Rational::new(*n, *d) == self.base)
            .map(|(_, _, name)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_series() {
        assert_eq!(Duration::new(Rational::from_integer(1), 0).quarter_length(), 1.0);
        assert_eq!(Duration::new(Rational::from_integer(1), 1).quarter_length(), 1.5);
        assert_eq!(Duration::new(Rational::new(1, 2), 2).quarter_length(), 0.875);
    }

    #[test]
    fn test_huge_dot_count_saturates() {
        let d = Duration::new(Rational::from_integer(2), u32::MAX);
        assert_eq!(d.quarter_length(), 4.0);
        assert_eq!(d.dots, u32::MAX);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Duration::new(Rational::new(1, 2), 1).type_name(), Some("eighth"));
        assert_eq!(Duration::new(Rational::new(3, 2), 0).type_name(), None);
    }
}
