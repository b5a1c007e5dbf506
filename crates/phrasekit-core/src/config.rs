//! Mnemonic generation configuration
//!
//! [`MnemonicConfig`] is an immutable value: every `with_*` method returns a
//! new configuration and leaves the receiver untouched. Generation runs the
//! whole pipeline synchronously:
//!
//! ```text
//! wordlist = resolver.resolve(language)
//! entropy  = source.fill(ENT / 8 bytes)
//! indices  = split_11(entropy || sha256(entropy)[..CS])
//! phrase   = join(wordlist[indices], separator)
//! ```
//!
//! # Word counts
//!
//! | Words | ENT | CS | ENT + CS |
//! |-------|-----|----|----------|
//! | 12    | 128 | 4  | 132      |
//! | 15    | 160 | 5  | 165      |
//! | 18    | 192 | 6  | 198      |
//! | 21    | 224 | 7  | 231      |
//! | 24    | 256 | 8  | 264      |
//!
//! # Example
//! ```
//! use phrasekit_core::{Language, MnemonicConfig};
//!
//! let config = MnemonicConfig::new(Language::English).with_word_count(24).unwrap();
//! let mnemonic = config.generate().unwrap();
//! assert_eq!(mnemonic.words().count(), 24);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bits::{entropy_to_indices, BITS_PER_WORD};
use crate::entropy::{self, EntropySource, OsEntropy};
use crate::language::Language;
use crate::mnemonic::{assemble, Mnemonic};
use crate::wordlist::WordlistResolver;
use crate::MnemonicError;

/// An allowed mnemonic length
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    #[default]
    Twelve,
    Fifteen,
    Eighteen,
    TwentyOne,
    TwentyFour,
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [
        Self::Twelve,
        Self::Fifteen,
        Self::Eighteen,
        Self::TwentyOne,
        Self::TwentyFour,
    ];

    /// Validate a requested word count.
    pub fn new(words: usize) -> Result<Self, MnemonicError> {
        match words {
            12 => Ok(Self::Twelve),
            15 => Ok(Self::Fifteen),
            18 => Ok(Self::Eighteen),
            21 => Ok(Self::TwentyOne),
            24 => Ok(Self::TwentyFour),
            other => Err(MnemonicError::InvalidWordCount(other)),
        }
    }

    /// The word count matching an entropy buffer of `bytes` bytes.
    pub fn from_entropy_len(bytes: usize) -> Result<Self, MnemonicError> {
        Self::ALL
            .into_iter()
            .find(|wc| wc.entropy_bytes() == bytes)
            .ok_or(MnemonicError::InvalidEntropyLength(bytes))
    }

    pub fn words(self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::Fifteen => 15,
            Self::Eighteen => 18,
            Self::TwentyOne => 21,
            Self::TwentyFour => 24,
        }
    }

    /// Checksum bits (CS)
    pub fn checksum_bits(self) -> usize {
        (self.words() - 12) / 3 + 4
    }

    /// Entropy plus checksum bits
    pub fn total_bits(self) -> usize {
        self.words() * BITS_PER_WORD
    }

    /// Entropy bits (ENT)
    pub fn entropy_bits(self) -> usize {
        self.total_bits() - self.checksum_bits()
    }

    pub fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }
}

impl TryFrom<usize> for WordCount {
    type Error = MnemonicError;

    fn try_from(words: usize) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<WordCount> for usize {
    fn from(wc: WordCount) -> usize {
        wc.words()
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words())
    }
}

/// Parameters for generating BIP-39 mnemonics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MnemonicConfig {
    #[serde(default)]
    language: Language,
    #[serde(default, rename = "words")]
    word_count: WordCount,
    #[serde(default)]
    separator: Option<String>,
}

impl MnemonicConfig {
    /// 12 words in `language`, joined by the language's default separator
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// Copy with a different word count.
    ///
    /// Fails with [`MnemonicError::InvalidWordCount`] unless `words` is 12,
    /// 15, 18, 21 or 24.
    pub fn with_word_count(&self, words: usize) -> Result<Self, MnemonicError> {
        let word_count = WordCount::new(words)?;
        Ok(Self {
            word_count,
            ..self.clone()
        })
    }

    /// Copy with a different language. The wordlist is loaded lazily by the
    /// resolver on the next generation.
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    /// Copy that joins words with `separator` instead of the language default
    pub fn with_separator(&self, separator: impl Into<String>) -> Self {
        Self {
            separator: Some(separator.into()),
            ..self.clone()
        }
    }

    /// Copy that uses the language default separator again
    pub fn without_separator(&self) -> Self {
        Self {
            separator: None,
            ..self.clone()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// The separator override, if one was set
    pub fn separator_override(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    /// The separator generation will actually use
    pub fn separator(&self) -> &str {
        self.separator
            .as_deref()
            .unwrap_or_else(|| self.language.default_separator())
    }

    /// Entropy plus checksum bits encoded by the phrase
    pub fn total_entropy_bits(&self) -> f64 {
        self.word_count.total_bits() as f64
    }

    /// Random entropy bits, excluding the checksum
    pub fn raw_entropy_bits(&self) -> usize {
        self.word_count.entropy_bits()
    }

    pub fn checksum_bits(&self) -> usize {
        self.word_count.checksum_bits()
    }

    /// Generate a mnemonic from OS randomness and the shared embedded wordlists.
    pub fn generate(&self) -> Result<Mnemonic, MnemonicError> {
        self.generate_using(WordlistResolver::shared(), &OsEntropy)
    }

    /// Generate a mnemonic with explicit collaborators.
    ///
    /// The wordlist is resolved before any entropy is drawn, so a missing
    /// wordlist never consumes randomness.
    pub fn generate_using(
        &self,
        resolver: &WordlistResolver,
        source: &dyn EntropySource,
    ) -> Result<Mnemonic, MnemonicError> {
        let wordlist = resolver.resolve(self.language)?;
        let entropy = entropy::draw(source, self.raw_entropy_bits())?;
        let indices = entropy_to_indices(&entropy)?;
        let mnemonic = assemble(&indices, &wordlist, self.separator())?;

        log::debug!(
            "Generated {}-word {} mnemonic",
            self.word_count,
            self.language
        );
        Ok(mnemonic)
    }

    /// Generate `count` independent mnemonics.
    pub fn generate_many(&self, count: usize) -> Result<Vec<Mnemonic>, MnemonicError> {
        self.generate_many_using(count, WordlistResolver::shared(), &OsEntropy)
    }

    /// Generate `count` independent mnemonics with explicit collaborators.
    ///
    /// Each mnemonic draws its own entropy; nothing is shared between them
    /// but the cached wordlist.
    pub fn generate_many_using(
        &self,
        count: usize,
        resolver: &WordlistResolver,
        source: &dyn EntropySource,
    ) -> Result<Vec<Mnemonic>, MnemonicError> {
        (0..count)
            .map(|_| self.generate_using(resolver, source))
            .collect()
    }

    /// Encode caller-supplied entropy as a mnemonic.
    ///
    /// The entropy length must match the configured word count.
    pub fn encode_entropy(&self, entropy: &[u8]) -> Result<Mnemonic, MnemonicError> {
        self.encode_entropy_using(WordlistResolver::shared(), entropy)
    }

    pub fn encode_entropy_using(
        &self,
        resolver: &WordlistResolver,
        entropy: &[u8],
    ) -> Result<Mnemonic, MnemonicError> {
        let expected = self.word_count.entropy_bytes();
        if entropy.len() != expected {
            return Err(MnemonicError::EntropyMismatch {
                expected,
                found: entropy.len(),
            });
        }

        let wordlist = resolver.resolve(self.language)?;
        let indices = entropy_to_indices(entropy)?;
        assemble(&indices, &wordlist, self.separator())
    }
}
