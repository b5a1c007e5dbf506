//! Character-set password generation
//!
//! Passwords are drawn uniformly, character by character, from a pool built
//! out of the enabled character classes. Because every character is chosen
//! independently and uniformly, the entropy is exact:
//! `length × log2(pool size)`.
//!
//! # Strength Levels
//!
//! | Level     | Bits   | Meaning                                   |
//! |-----------|--------|-------------------------------------------|
//! | Dangerous | < 28   | Trivially brute-forceable                 |
//! | Weak      | 28–35  | Vulnerable to targeted attack             |
//! | Fair      | 36–59  | Adequate for casual threats               |
//! | Strong    | 60–127 | Resistant to well-funded attackers        |
//! | Excellent | ≥ 128  | Beyond brute-force for foreseeable future |

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::entropy::{uniform_index, EntropyError, EntropySource, OsEntropy};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters easily confused with one another when transcribed
pub const AMBIGUOUS: &str = "Il1O0o|";

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 1024;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("No character classes enabled")]
    EmptyCharset,
    #[error("Invalid password length: {0} (expected {min}..={max})", min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH)]
    InvalidLength(usize),
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// Strength classification by entropy bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    /// < 28 bits
    Dangerous,
    /// 28–35 bits
    Weak,
    /// 36–59 bits
    Fair,
    /// 60–127 bits
    Strong,
    /// ≥ 128 bits
    Excellent,
}

impl PasswordStrength {
    pub fn from_bits(bits: f64) -> Self {
        if bits < 28.0 {
            Self::Dangerous
        } else if bits < 36.0 {
            Self::Weak
        } else if bits < 60.0 {
            Self::Fair
        } else if bits < 128.0 {
            Self::Strong
        } else {
            Self::Excellent
        }
    }

    /// Human-readable description of the strength level
    pub fn description(&self) -> &'static str {
        match self {
            Self::Dangerous => "Dangerous: trivially crackable",
            Self::Weak => "Weak: vulnerable to targeted attacks",
            Self::Fair => "Fair: adequate for casual threats only",
            Self::Strong => "Strong: resistant to well-funded attackers",
            Self::Excellent => "Excellent: beyond brute-force for the foreseeable future",
        }
    }

    /// Whether this strength level meets the minimum recommendation
    pub fn is_recommended(&self) -> bool {
        *self >= Self::Strong
    }
}

/// Parameters for generating random passwords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    length: usize,
    lowercase: bool,
    uppercase: bool,
    digits: bool,
    symbols: bool,
    exclude_ambiguous: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 20,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordConfig {
    pub fn with_length(&self, length: usize) -> Result<Self, PasswordError> {
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(PasswordError::InvalidLength(length));
        }
        Ok(Self {
            length,
            ..self.clone()
        })
    }

    pub fn with_lowercase(&self, enabled: bool) -> Self {
        Self {
            lowercase: enabled,
            ..self.clone()
        }
    }

    pub fn with_uppercase(&self, enabled: bool) -> Self {
        Self {
            uppercase: enabled,
            ..self.clone()
        }
    }

    pub fn with_digits(&self, enabled: bool) -> Self {
        Self {
            digits: enabled,
            ..self.clone()
        }
    }

    pub fn with_symbols(&self, enabled: bool) -> Self {
        Self {
            symbols: enabled,
            ..self.clone()
        }
    }

    pub fn with_exclude_ambiguous(&self, enabled: bool) -> Self {
        Self {
            exclude_ambiguous: enabled,
            ..self.clone()
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Check the settings without generating anything.
    ///
    /// Needed for configs built through serde, which bypasses `with_length`.
    pub fn validate(&self) -> Result<(), PasswordError> {
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length) {
            return Err(PasswordError::InvalidLength(self.length));
        }
        if self.pool().is_empty() {
            return Err(PasswordError::EmptyCharset);
        }
        Ok(())
    }

    /// The ordered set of characters a password is drawn from
    pub fn pool(&self) -> Vec<char> {
        let classes = [
            (self.lowercase, LOWERCASE),
            (self.uppercase, UPPERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ];

        classes
            .iter()
            .filter(|(enabled, _)| *enabled)
            .flat_map(|(_, chars)| chars.chars())
            .filter(|c| !(self.exclude_ambiguous && AMBIGUOUS.contains(*c)))
            .collect()
    }

    /// Exact entropy of a generated password in bits
    pub fn entropy_bits(&self) -> f64 {
        let pool = self.pool().len();
        if pool == 0 {
            return 0.0;
        }
        self.length as f64 * (pool as f64).log2()
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_bits(self.entropy_bits())
    }

    /// Generate a password from OS randomness.
    pub fn generate(&self) -> Result<Zeroizing<String>, PasswordError> {
        self.generate_using(&OsEntropy)
    }

    pub fn generate_using(
        &self,
        source: &dyn EntropySource,
    ) -> Result<Zeroizing<String>, PasswordError> {
        self.validate()?;
        let pool = self.pool();

        let mut password = Zeroizing::new(String::with_capacity(self.length));
        for _ in 0..self.length {
            password.push(pool[uniform_index(source, pool.len())?]);
        }
        Ok(password)
    }
}
