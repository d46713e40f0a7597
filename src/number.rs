//! Bounded random number generator.
//!
//! Integers are drawn from `[min, max)` and floored; decimals are printed
//! with a fixed number of significant figures.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

pub const MIN_SIGNIFICANT_FIGURES: u8 = 1;
pub const MAX_SIGNIFICANT_FIGURES: u8 = 20;

/// Inputs of the number generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberOptions {
    pub min: f64,
    pub max: f64,
    /// When false both bounds are raised to at least zero.
    pub allow_negative: bool,
    pub allow_decimals: bool,
    /// Used only with `allow_decimals`; clamped to 1–20.
    pub significant_figures: u8,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 100.0,
            allow_negative: false,
            allow_decimals: false,
            significant_figures: 8,
        }
    }
}

impl NumberOptions {
    /// Bounds after the negative clamp, or an error when they are inverted
    /// or not finite.
    pub fn bounds(&self) -> Result<(f64, f64), GeneratorError> {
        let (mut min, mut max) = (self.min, self.max);
        // Checked before the clamp, which would turn NaN into 0.
        if !(min.is_finite() && max.is_finite()) {
            return Err(GeneratorError::InvalidRange { min, max });
        }
        if !self.allow_negative {
            min = min.max(0.0);
            max = max.max(0.0);
        }
        if min > max {
            return Err(GeneratorError::InvalidRange { min, max });
        }
        Ok((min, max))
    }

    /// Draw a raw value in `[min, max)` (exactly `min` when the bounds meet).
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, GeneratorError> {
        let (min, max) = self.bounds()?;
        let unit: f64 = rng.random();
        Ok(unit * (max - min) + min)
    }
}

/// Generate and format a number with the thread-local generator.
pub fn generate_number(options: &NumberOptions) -> Result<String, GeneratorError> {
    generate_number_with(options, &mut rand::rng())
}

/// Generate and format a number.
pub fn generate_number_with<R: Rng + ?Sized>(
    options: &NumberOptions,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    let value = options.draw(rng)?;
    if options.allow_decimals {
        Ok(format_significant(value, options.significant_figures))
    } else {
        // + 0.0 turns -0 into 0.
        Ok(format!("{}", value.floor() + 0.0))
    }
}

/// Format `value` with `digits` significant figures, dropping trailing
/// fractional zeros. Exponent notation (`1.2e+3`) is used when the decimal
/// exponent is below -6 or at least `digits`.
pub fn format_significant(value: f64, digits: u8) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = digits.clamp(MIN_SIGNIFICANT_FIGURES, MAX_SIGNIFICANT_FIGURES);

    // Scientific form first, so the exponent reflects rounding (9.99 -> 1.0e1).
    let scientific = format!("{:.*e}", usize::from(digits - 1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -6 || exponent >= i32::from(digits) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (i32::from(digits) - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn integers_fall_in_half_open_range() {
        let opts = NumberOptions::default();
        let mut rng = rng();
        for _ in 0..1_000 {
            let n: i64 = generate_number_with(&opts, &mut rng).unwrap().parse().unwrap();
            assert!((1..100).contains(&n), "{n}");
        }
    }

    #[test]
    fn negative_bounds_clamp_to_zero() {
        let opts = NumberOptions {
            min: -10.0,
            max: -5.0,
            ..Default::default()
        };
        assert_eq!(opts.bounds(), Ok((0.0, 0.0)));
        assert_eq!(generate_number_with(&opts, &mut rng()).unwrap(), "0");
    }

    #[test]
    fn negative_range_when_allowed() {
        let opts = NumberOptions {
            min: -50.0,
            max: -10.0,
            allow_negative: true,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..200 {
            let n: i64 = generate_number_with(&opts, &mut rng).unwrap().parse().unwrap();
            assert!((-50..-10).contains(&n), "{n}");
        }
    }

    #[test]
    fn inverted_range_is_an_error() {
        let opts = NumberOptions {
            min: 5.0,
            max: -3.0,
            ..Default::default()
        };
        assert_eq!(
            generate_number_with(&opts, &mut rng()),
            Err(GeneratorError::InvalidRange { min: 5.0, max: 0.0 })
        );
        let nan = NumberOptions {
            min: f64::NAN,
            ..Default::default()
        };
        assert!(nan.bounds().is_err());
    }

    #[test]
    fn decimals_respect_bounds() {
        let opts = NumberOptions {
            min: 0.5,
            max: 0.75,
            allow_decimals: true,
            significant_figures: 4,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..200 {
            let text = generate_number_with(&opts, &mut rng).unwrap();
            let v: f64 = text.parse().unwrap();
            assert!((0.5..=0.75).contains(&v), "{text}");
            let digits = text.trim_start_matches("0.").len();
            assert!(digits <= 4, "{text}");
        }
    }

    #[test]
    fn significant_figures_formatting() {
        assert_eq!(format_significant(3.14159265, 3), "3.14");
        assert_eq!(format_significant(100.0, 8), "100");
        assert_eq!(format_significant(120.0, 3), "120");
        assert_eq!(format_significant(2.5, 3), "2.5");
        assert_eq!(format_significant(-7.125, 6), "-7.125");
        assert_eq!(format_significant(9.996, 3), "10");
        assert_eq!(format_significant(0.000012345, 3), "0.0000123");
        assert_eq!(format_significant(0.0, 5), "0");
    }

    #[test]
    fn exponent_notation_outside_fixed_window() {
        assert_eq!(format_significant(1234.5, 2), "1.2e+3");
        assert_eq!(format_significant(1.5e-7, 2), "1.5e-7");
        assert_eq!(format_significant(5.0e21, 1), "5e+21");
    }

    #[test]
    fn significant_figures_are_clamped() {
        assert_eq!(format_significant(3.14159, 0), "3");
        assert_eq!(format_significant(1.0 / 3.0, 200).len(), "0.".len() + 20);
    }
}
