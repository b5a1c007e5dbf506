//! Supported wordlist languages
//!
//! Each language carries a fixed set of constants: its canonical name, the
//! file its wordlist is stored in, and the separator placed between words of
//! a generated phrase.
//!
//! | Language              | Name                  | Separator |
//! |-----------------------|-----------------------|-----------|
//! | English               | `english`             | U+0020    |
//! | Japanese              | `japanese`            | U+3000    |
//! | Korean                | `korean`              | U+0020    |
//! | Spanish               | `spanish`             | U+0020    |
//! | Chinese (Simplified)  | `chinese_simplified`  | U+0020    |
//! | Chinese (Traditional) | `chinese_traditional` | U+0020    |
//! | French                | `french`              | U+0020    |
//! | Italian               | `italian`             | U+0020    |
//! | Czech                 | `czech`               | U+0020    |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MnemonicError;

/// Ideographic space, used between Japanese words.
pub const IDEOGRAPHIC_SPACE: &str = "\u{3000}";

/// Number of supported languages
pub const LANGUAGE_COUNT: usize = 9;

/// A BIP-39 wordlist language
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Japanese,
    Korean,
    Spanish,
    ChineseSimplified,
    ChineseTraditional,
    French,
    Italian,
    Czech,
}

impl Language {
    /// Every supported language, in table order
    pub const ALL: [Language; LANGUAGE_COUNT] = [
        Self::English,
        Self::Japanese,
        Self::Korean,
        Self::Spanish,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::French,
        Self::Italian,
        Self::Czech,
    ];

    /// Position of this language in [`Language::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical lowercase name, as used in config files
    pub fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Spanish => "spanish",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Czech => "czech",
        }
    }

    /// Short language code (ISO 639-1, script-qualified for Chinese)
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Spanish => "es",
            Self::ChineseSimplified => "zh-hans",
            Self::ChineseTraditional => "zh-hant",
            Self::French => "fr",
            Self::Italian => "it",
            Self::Czech => "cs",
        }
    }

    /// File name of the wordlist resource for this language
    pub fn file_name(self) -> &'static str {
        match self {
            Self::English => "english.txt",
            Self::Japanese => "japanese.txt",
            Self::Korean => "korean.txt",
            Self::Spanish => "spanish.txt",
            Self::ChineseSimplified => "chinese_simplified.txt",
            Self::ChineseTraditional => "chinese_traditional.txt",
            Self::French => "french.txt",
            Self::Italian => "italian.txt",
            Self::Czech => "czech.txt",
        }
    }

    /// Separator placed between words when no override is given
    pub fn default_separator(self) -> &'static str {
        match self {
            Self::Japanese => IDEOGRAPHIC_SPACE,
            _ => " ",
        }
    }

    /// The matching language of the `bip39` crate, which ships the
    /// canonical wordlists.
    pub(crate) fn to_bip39(self) -> bip39::Language {
        match self {
            Self::English => bip39::Language::English,
            Self::Japanese => bip39::Language::Japanese,
            Self::Korean => bip39::Language::Korean,
            Self::Spanish => bip39::Language::Spanish,
            Self::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Self::ChineseTraditional => bip39::Language::TraditionalChinese,
            Self::French => bip39::Language::French,
            Self::Italian => bip39::Language::Italian,
            Self::Czech => bip39::Language::Czech,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    /// Accepts the canonical name or the short code, case-insensitively.
    /// Hyphens and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == wanted || lang.code().replace('-', "_") == wanted)
            .ok_or_else(|| MnemonicError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_table_order() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.index(), i);
        }
    }

    #[test]
    fn test_only_japanese_uses_ideographic_space() {
        for lang in Language::ALL {
            let sep = lang.default_separator();
            if lang == Language::Japanese {
                assert_eq!(sep, "\u{3000}");
            } else {
                assert_eq!(sep, " ");
            }
        }
    }

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Japanese".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!(
            "chinese-simplified".parse::<Language>().unwrap(),
            Language::ChineseSimplified
        );
        assert_eq!(
            "zh-hant".parse::<Language>().unwrap(),
            Language::ChineseTraditional
        );
        assert_eq!(" cs ".parse::<Language>().unwrap(), Language::Czech);
    }

    #[test]
    fn test_parse_unknown_language() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, MnemonicError::UnknownLanguage(ref s) if s == "klingon"));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = Language::ALL.iter().map(|l| l.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LANGUAGE_COUNT);
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::de::IntoDeserializer;

        let de: StrDeserializer<Error> = "chinese_traditional".into_deserializer();
        assert_eq!(
            Language::deserialize(de).unwrap(),
            Language::ChineseTraditional
        );
    }
}
