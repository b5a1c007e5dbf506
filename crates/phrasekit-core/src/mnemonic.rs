//! Mnemonic assembly
//!
//! Turns word indices into the final phrase. A [`Mnemonic`] only ever exists
//! as a complete phrase: it is built in one step from a full index sequence
//! and is wiped from memory when dropped.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::language::Language;
use crate::wordlist::Wordlist;
use crate::MnemonicError;

/// A generated BIP-39 recovery phrase
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    words: Vec<String>,
    separator: String,
    phrase: String,
    #[zeroize(skip)]
    language: Language,
}

impl Mnemonic {
    /// The full phrase, words joined by [`Mnemonic::separator`]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The individual words, in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

// The phrase is a secret; keep it out of debug output and logs
impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.language)
            .field("word_count", &self.words.len())
            .finish_non_exhaustive()
    }
}

/// Map `indices` to words of `wordlist` and join them with `separator`.
pub fn assemble(
    indices: &[u16],
    wordlist: &Wordlist,
    separator: &str,
) -> Result<Mnemonic, MnemonicError> {
    let words = indices
        .iter()
        .map(|&index| {
            wordlist
                .get(usize::from(index))
                .map(str::to_string)
                .ok_or(MnemonicError::IndexOutOfRange(index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let phrase = words.join(separator);

    Ok(Mnemonic {
        words,
        separator: separator.to_string(),
        phrase,
        language: wordlist.language(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::WordlistResolver;

    #[test]
    fn test_assemble_english() {
        let list = WordlistResolver::shared().resolve(Language::English).unwrap();
        let mnemonic = assemble(&[0, 1, 2, 3], &list, " ").unwrap();
        assert_eq!(mnemonic.phrase(), "abandon ability able about");
        assert_eq!(mnemonic.word_count(), 4);
        assert_eq!(mnemonic.language(), Language::English);
        assert_eq!(mnemonic.to_string(), mnemonic.phrase());
    }

    #[test]
    fn test_separator_count_and_no_padding() {
        let list = WordlistResolver::shared().resolve(Language::English).unwrap();
        let indices = [2047u16; 12];
        let mnemonic = assemble(&indices, &list, "--").unwrap();
        assert!(!mnemonic.phrase().starts_with("--"));
        assert!(!mnemonic.phrase().ends_with("--"));
        assert_eq!(mnemonic.phrase().matches("--").count(), 11);
        assert!(mnemonic.words().all(|w| w == "zoo"));
    }

    #[test]
    fn test_out_of_range_index() {
        let list = WordlistResolver::shared().resolve(Language::English).unwrap();
        let err = assemble(&[0, 2048], &list, " ").unwrap_err();
        assert!(matches!(err, MnemonicError::IndexOutOfRange(2048)));
    }

    #[test]
    fn test_debug_hides_phrase() {
        let list = WordlistResolver::shared().resolve(Language::English).unwrap();
        let mnemonic = assemble(&[0, 1, 2], &list, " ").unwrap();
        let debug = format!("{:?}", mnemonic);
        assert!(!debug.contains("abandon"));
        assert!(debug.contains("word_count: 3"));
    }
}
