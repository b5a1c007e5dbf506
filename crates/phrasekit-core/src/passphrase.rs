//! Diceware-style passphrases
//!
//! Words are drawn uniformly and independently from a BIP-39 wordlist, so a
//! passphrase of `n` words carries exactly `11 × n` bits of entropy. Unlike a
//! mnemonic there is no checksum: the words are a password, not an encoding.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::entropy::{uniform_index, EntropyError, EntropySource, OsEntropy};
use crate::language::Language;
use crate::password::PasswordStrength;
use crate::wordlist::{Wordlist, WordlistError, WordlistResolver};

pub const MIN_PASSPHRASE_WORDS: usize = 1;
pub const MAX_PASSPHRASE_WORDS: usize = 64;

#[derive(Error, Debug)]
pub enum PassphraseError {
    #[error("Invalid passphrase word count: {0} (expected {min}..={max})", min = MIN_PASSPHRASE_WORDS, max = MAX_PASSPHRASE_WORDS)]
    InvalidWordCount(usize),
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// Parameters for generating diceware passphrases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassphraseConfig {
    words: usize,
    language: Language,
    separator: String,
    capitalize: bool,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            words: 6,
            language: Language::English,
            separator: "-".to_string(),
            capitalize: false,
        }
    }
}

impl PassphraseConfig {
    pub fn with_words(&self, words: usize) -> Result<Self, PassphraseError> {
        if !(MIN_PASSPHRASE_WORDS..=MAX_PASSPHRASE_WORDS).contains(&words) {
            return Err(PassphraseError::InvalidWordCount(words));
        }
        Ok(Self {
            words,
            ..self.clone()
        })
    }

    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    pub fn with_separator(&self, separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..self.clone()
        }
    }

    /// Upper-case the first letter of each word
    pub fn with_capitalize(&self, capitalize: bool) -> Self {
        Self {
            capitalize,
            ..self.clone()
        }
    }

    pub fn words(&self) -> usize {
        self.words
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn validate(&self) -> Result<(), PassphraseError> {
        if !(MIN_PASSPHRASE_WORDS..=MAX_PASSPHRASE_WORDS).contains(&self.words) {
            return Err(PassphraseError::InvalidWordCount(self.words));
        }
        Ok(())
    }

    /// Exact entropy of a generated passphrase in bits
    pub fn entropy_bits(&self) -> f64 {
        self.words as f64 * (crate::wordlist::WORDLIST_LEN as f64).log2()
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_bits(self.entropy_bits())
    }

    /// Generate a passphrase from OS randomness and the shared wordlists.
    pub fn generate(&self) -> Result<Zeroizing<String>, PassphraseError> {
        self.generate_using(WordlistResolver::shared(), &OsEntropy)
    }

    pub fn generate_using(
        &self,
        resolver: &WordlistResolver,
        source: &dyn EntropySource,
    ) -> Result<Zeroizing<String>, PassphraseError> {
        self.validate()?;
        let wordlist: Arc<Wordlist> = resolver.resolve(self.language)?;

        let mut passphrase = Zeroizing::new(String::new());
        for i in 0..self.words {
            if i > 0 {
                passphrase.push_str(&self.separator);
            }
            let word = &wordlist[uniform_index(source, wordlist.len())?];
            if self.capitalize {
                push_capitalized(&mut passphrase, word);
            } else {
                passphrase.push_str(word);
            }
        }
        Ok(passphrase)
    }
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_passphrase() {
        let config = PassphraseConfig::default();
        let passphrase = config.generate().unwrap();
        let words: Vec<&str> = passphrase.split('-').collect();
        assert_eq!(words.len(), 6);

        let list = WordlistResolver::shared().resolve(Language::English).unwrap();
        assert!(words.iter().all(|w| list.contains(w)));
    }

    #[test]
    fn test_entropy_bits() {
        let config = PassphraseConfig::default().with_words(8).unwrap();
        assert_eq!(config.entropy_bits(), 88.0);
        assert_eq!(config.strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_capitalize() {
        let config = PassphraseConfig::default()
            .with_capitalize(true)
            .with_separator(" ");
        let passphrase = config.generate().unwrap();
        for word in passphrase.split(' ') {
            let first = word.chars().next().unwrap();
            assert!(first.is_uppercase(), "{:?} not capitalized", word);
        }
    }

    #[test]
    fn test_push_capitalized_unicode() {
        let mut out = String::new();
        push_capitalized(&mut out, "éclair");
        assert_eq!(out, "Éclair");
    }

    #[test]
    fn test_other_language() {
        let config = PassphraseConfig::default()
            .with_language(Language::Spanish)
            .with_words(4)
            .unwrap();
        let passphrase = config.generate().unwrap();
        let list = WordlistResolver::shared().resolve(Language::Spanish).unwrap();
        assert!(passphrase.split('-').all(|w| list.contains(w)));
    }

    #[test]
    fn test_invalid_word_counts() {
        assert!(matches!(
            PassphraseConfig::default().with_words(0),
            Err(PassphraseError::InvalidWordCount(0))
        ));
        assert!(matches!(
            PassphraseConfig::default().with_words(65),
            Err(PassphraseError::InvalidWordCount(65))
        ));
    }

    #[test]
    fn test_missing_wordlist() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = WordlistResolver::from_dir(dir.path());
        let err = PassphraseConfig::default()
            .generate_using(&resolver, &OsEntropy)
            .unwrap_err();
        assert!(matches!(err, PassphraseError::Wordlist(_)));
    }
}
