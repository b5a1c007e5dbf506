//! BIP-39 wordlists and the per-language cache
//!
//! A [`WordlistSource`] knows how to load the 2048 words of a language; the
//! [`WordlistResolver`] loads each language at most once and hands out the
//! same shared table to every caller afterwards.
//!
//! # Concurrency
//!
//! Each language has its own `OnceLock` slot. Populated slots are read
//! without locking. Population is serialized by a single mutex and the table
//! is published only after it has been fully loaded and validated, so no
//! caller can observe a partial table or two different tables for the same
//! language. A failed load leaves the slot empty and does not touch any other
//! language.

use std::collections::HashSet;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use thiserror::Error;

use crate::language::{Language, LANGUAGE_COUNT};

/// Number of words in every BIP-39 wordlist
pub const WORDLIST_LEN: usize = 2048;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist unavailable for {language}: {reason}")]
    Unavailable { language: Language, reason: String },
    #[error("Malformed wordlist for {language}: {reason}")]
    Malformed { language: Language, reason: String },
}

/// An immutable, validated 2048-word table
#[derive(Debug, PartialEq, Eq)]
pub struct Wordlist {
    language: Language,
    words: Box<[String]>,
}

impl Wordlist {
    /// Validate and wrap a loaded word table.
    ///
    /// Requires exactly [`WORDLIST_LEN`] non-empty, unique words without
    /// surrounding whitespace.
    pub fn new(language: Language, words: Vec<String>) -> Result<Self, WordlistError> {
        let malformed = |reason: String| WordlistError::Malformed { language, reason };

        if words.len() != WORDLIST_LEN {
            return Err(malformed(format!(
                "expected {} words, found {}",
                WORDLIST_LEN,
                words.len()
            )));
        }

        let mut seen = HashSet::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(malformed(format!("empty word at line {}", i + 1)));
            }
            if word.trim() != word {
                return Err(malformed(format!("stray whitespace at line {}", i + 1)));
            }
            if !seen.insert(word.as_str()) {
                return Err(malformed(format!("duplicate word {:?} at line {}", word, i + 1)));
            }
        }

        Ok(Self {
            language,
            words: words.into_boxed_slice(),
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Index of `word`, if it belongs to this list
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Index<usize> for Wordlist {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

/// Parse a wordlist resource: UTF-8, one word per line, no blank lines.
///
/// A trailing newline and CRLF line endings are accepted. The word count is
/// checked by [`Wordlist::new`], not here.
pub fn parse_wordlist(language: Language, text: &str) -> Result<Vec<String>, WordlistError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if line.trim().is_empty() {
                Err(WordlistError::Malformed {
                    language,
                    reason: format!("blank line {}", i + 1),
                })
            } else {
                Ok(line.to_string())
            }
        })
        .collect()
}

/// Where wordlists come from
pub trait WordlistSource: Send + Sync {
    /// Load the raw word table for `language`.
    fn load(&self, language: Language) -> Result<Vec<String>, WordlistError>;
}

/// The canonical BIP-39 lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordlistSource for EmbeddedSource {
    fn load(&self, language: Language) -> Result<Vec<String>, WordlistError> {
        Ok(language
            .to_bip39()
            .word_list()
            .iter()
            .map(|w| w.to_string())
            .collect())
    }
}

/// Wordlist files in a directory, named by [`Language::file_name`]
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the wordlist file for `language`
    pub fn path_for(&self, language: Language) -> PathBuf {
        self.root.join(language.file_name())
    }
}

impl WordlistSource for DirectorySource {
    fn load(&self, language: Language) -> Result<Vec<String>, WordlistError> {
        let path = self.path_for(language);
        let text = std::fs::read_to_string(&path).map_err(|e| WordlistError::Unavailable {
            language,
            reason: format!("{}: {}", path.display(), e),
        })?;
        parse_wordlist(language, &text)
    }
}

/// Lazily loading, per-language wordlist cache
pub struct WordlistResolver {
    source: Box<dyn WordlistSource>,
    slots: [OnceLock<Arc<Wordlist>>; LANGUAGE_COUNT],
    // One lock per language so a slow load never blocks other languages
    populate: [Mutex<()>; LANGUAGE_COUNT],
}

impl WordlistResolver {
    pub fn new(source: impl WordlistSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            slots: std::array::from_fn(|_| OnceLock::new()),
            populate: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    /// Resolver over the compiled-in lists
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Resolver over wordlist files in `dir`
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(DirectorySource::new(dir))
    }

    /// The process-wide resolver over the compiled-in lists.
    pub fn shared() -> &'static WordlistResolver {
        static SHARED: OnceLock<WordlistResolver> = OnceLock::new();
        SHARED.get_or_init(WordlistResolver::embedded)
    }

    /// Get the wordlist for `language`, loading it on first use.
    ///
    /// Every successful call for a language returns the same `Arc`.
    pub fn resolve(&self, language: Language) -> Result<Arc<Wordlist>, WordlistError> {
        let slot = &self.slots[language.index()];
        if let Some(list) = slot.get() {
            log::debug!("Using cached {} wordlist", language);
            return Ok(Arc::clone(list));
        }

        // The guard protects no data, so a poisoned lock is still usable
        let _guard = self.populate[language.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(list) = slot.get() {
            log::debug!("Using cached {} wordlist", language);
            return Ok(Arc::clone(list));
        }

        let list = self
            .source
            .load(language)
            .and_then(|words| Wordlist::new(language, words))
            .map_err(|e| {
                log::warn!("Failed to load wordlist: {}", e);
                e
            })?;
        log::debug!("Loaded {} wordlist ({} words)", language, list.len());

        Ok(Arc::clone(slot.get_or_init(|| Arc::new(list))))
    }

    /// Whether `language` has already been loaded
    pub fn is_cached(&self, language: Language) -> bool {
        self.slots[language.index()].get().is_some()
    }
}

impl std::fmt::Debug for WordlistResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached: Vec<Language> = Language::ALL
            .into_iter()
            .filter(|lang| self.is_cached(*lang))
            .collect();
        f.debug_struct("WordlistResolver")
            .field("cached", &cached)
            .finish_non_exhaustive()
    }
}
