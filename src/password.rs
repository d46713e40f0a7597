//! Character-set password generator.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Shortest password the generator produces.
pub const MIN_LENGTH: usize = 4;
/// Longest password the generator produces.
pub const MAX_LENGTH: usize = 80;
/// Length used when none is chosen.
pub const DEFAULT_LENGTH: usize = 12;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Which character sets to draw from, and how many characters to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl PasswordOptions {
    /// Read a length from a text field: clamped to
    /// [`MIN_LENGTH`]..=[`MAX_LENGTH`], and [`MIN_LENGTH`] when the text is not
    /// a number.
    pub fn length_from_input(text: &str) -> usize {
        text.trim()
            .parse::<i64>()
            .map_or(MIN_LENGTH, |n| n.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize)
    }

    /// Enabled sets concatenated in fixed order: upper, lower, digits, symbols.
    pub fn alphabet(&self) -> Vec<char> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, set)| set.chars())
        .collect()
    }
}

/// Generate a password with the thread-local CSPRNG.
pub fn generate_password(options: &PasswordOptions) -> Result<String, GeneratorError> {
    generate_password_with(options, &mut rand::rng())
}

/// Generate a password, drawing each character uniformly from the enabled
/// sets. The length is clamped to [`MIN_LENGTH`]..=[`MAX_LENGTH`].
pub fn generate_password_with<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    let alphabet = options.alphabet();
    if alphabet.is_empty() {
        return Err(GeneratorError::EmptyCharset);
    }
    let length = options.length.clamp(MIN_LENGTH, MAX_LENGTH);
    Ok((0..length)
        .filter_map(|_| alphabet.choose(rng).copied())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn default_options() {
        let opts = PasswordOptions::default();
        assert_eq!(opts.length, 12);
        assert!(opts.uppercase && opts.lowercase && opts.digits && !opts.symbols);
    }

    #[test]
    fn length_input_is_clamped() {
        assert_eq!(PasswordOptions::length_from_input("16"), 16);
        assert_eq!(PasswordOptions::length_from_input("2"), 4);
        assert_eq!(PasswordOptions::length_from_input("-5"), 4);
        assert_eq!(PasswordOptions::length_from_input("500"), 80);
        assert_eq!(PasswordOptions::length_from_input(""), 4);
        assert_eq!(PasswordOptions::length_from_input("abc"), 4);
    }

    #[test]
    fn generated_length_matches() {
        let mut rng = rng();
        for length in [4, 12, 80] {
            let opts = PasswordOptions {
                length,
                ..Default::default()
            };
            let pw = generate_password_with(&opts, &mut rng).unwrap();
            assert_eq!(pw.chars().count(), length);
        }
        let long = PasswordOptions {
            length: 1_000,
            ..Default::default()
        };
        assert_eq!(generate_password_with(&long, &mut rng).unwrap().len(), MAX_LENGTH);
    }

    #[test]
    fn only_enabled_sets_are_used() {
        let opts = PasswordOptions {
            length: 80,
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: false,
        };
        let pw = generate_password_with(&opts, &mut rng()).unwrap();
        assert!(pw.chars().all(|c| c.is_ascii_digit()), "{pw}");

        let opts = PasswordOptions {
            length: 80,
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: true,
        };
        let pw = generate_password_with(&opts, &mut rng()).unwrap();
        assert!(pw.chars().all(|c| SYMBOLS.contains(c)), "{pw}");
    }

    #[test]
    fn empty_charset_is_an_error() {
        let opts = PasswordOptions {
            length: 10,
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        };
        assert_eq!(
            generate_password_with(&opts, &mut rng()),
            Err(GeneratorError::EmptyCharset)
        );
        assert_eq!(
            GeneratorError::EmptyCharset.to_string(),
            "Please select at least one character set."
        );
    }

    #[test]
    fn alphabet_order_is_fixed() {
        let opts = PasswordOptions {
            symbols: true,
            ..Default::default()
        };
        let alphabet: String = opts.alphabet().into_iter().collect();
        assert_eq!(alphabet, format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}"));
    }

    #[test]
    fn all_sets_eventually_appear() {
        let opts = PasswordOptions {
            length: 80,
            symbols: true,
            ..Default::default()
        };
        let mut rng = rng();
        let joined: String = (0..20)
            .map(|_| generate_password_with(&opts, &mut rng).unwrap())
            .collect();
        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));
        assert!(joined.chars().any(|c| SYMBOLS.contains(c)));
    }
}
