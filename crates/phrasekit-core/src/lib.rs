//! phrasekit Core
//!
//! BIP-39 mnemonic generation, plus the simpler secrets built from the same
//! entropy and wordlists: random passwords and diceware passphrases.
//!
//! # Mnemonic Pipeline
//!
//! 1. Draw ENT bits from the OS CSPRNG ([`entropy`])
//! 2. Take the first ENT/32 bits of SHA-256 as checksum ([`checksum`])
//! 3. Split `entropy || checksum` into 11-bit indices ([`bits`])
//! 4. Look the indices up in the language's wordlist ([`wordlist`])
//! 5. Join the words with the language separator ([`mnemonic`])
//!
//! [`MnemonicConfig`] drives the whole pipeline.
//!
//! # Example
//!
//! ```
//! use phrasekit_core::{Language, MnemonicConfig};
//!
//! let config = MnemonicConfig::new(Language::Japanese);
//! let mnemonic = config.generate().unwrap();
//! assert_eq!(mnemonic.phrase().split('\u{3000}').count(), 12);
//! ```

pub mod bits;
pub mod checksum;
pub mod config;
pub mod entropy;
pub mod language;
pub mod mnemonic;
pub mod passphrase;
pub mod password;
pub mod wordlist;

pub use config::{MnemonicConfig, WordCount};
pub use entropy::{EntropyError, EntropySource, OsEntropy};
pub use language::Language;
pub use mnemonic::Mnemonic;
pub use passphrase::{PassphraseConfig, PassphraseError};
pub use password::{PasswordConfig, PasswordError, PasswordStrength};
pub use wordlist::{Wordlist, WordlistError, WordlistResolver, WordlistSource};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MnemonicError {
    #[error("Invalid word count: {0} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),
    #[error("Invalid entropy length: {0} bytes (expected 16, 20, 24, 28 or 32)")]
    InvalidEntropyLength(usize),
    #[error("Entropy length mismatch: expected {expected} bytes, got {found}")]
    EntropyMismatch { expected: usize, found: usize },
    #[error("Bit sequence of {0} bits does not split into 11-bit words")]
    BitLength(usize),
    #[error("Word index out of range: {0}")]
    IndexOutOfRange(u16),
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
