//! CLI configuration, parsed from a TOML file plus environment variable overrides.
//!
//! Priority: command-line flags > environment variables > config file > defaults.

use anyhow::{Context, Result};
use phrasekit_core::{
    Language, MnemonicConfig, PassphraseConfig, PasswordConfig, WordCount, WordlistResolver,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log levels accepted by `[logging] level`
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// BIP-39 mnemonic settings
    #[serde(default)]
    pub mnemonic: MnemonicSection,

    /// Random password settings
    #[serde(default)]
    pub password: PasswordSection,

    /// Diceware passphrase settings
    #[serde(default)]
    pub passphrase: PassphraseSection,

    /// Wordlist location
    #[serde(default)]
    pub wordlists: WordlistSection,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSection,
}

/// BIP-39 mnemonic settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MnemonicSection {
    /// Words per mnemonic: 12, 15, 18, 21 or 24
    #[serde(default = "default_mnemonic_words")]
    pub words: usize,

    /// Wordlist language (e.g. "english", "japanese", "zh-hans")
    #[serde(default = "default_language")]
    pub language: String,

    /// Word separator; the language default when unset
    #[serde(default)]
    pub separator: Option<String>,
}

impl Default for MnemonicSection {
    fn default() -> Self {
        Self {
            words: default_mnemonic_words(),
            language: default_language(),
            separator: None,
        }
    }
}

/// Random password settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordSection {
    #[serde(default = "default_password_length")]
    pub length: usize,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_true")]
    pub uppercase: bool,

    #[serde(default = "default_true")]
    pub digits: bool,

    #[serde(default = "default_true")]
    pub symbols: bool,

    /// Drop look-alike characters such as `l`, `1` and `O`
    #[serde(default)]
    pub exclude_ambiguous: bool,
}

impl Default for PasswordSection {
    fn default() -> Self {
        Self {
            length: default_password_length(),
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

/// Diceware passphrase settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassphraseSection {
    #[serde(default = "default_passphrase_words")]
    pub words: usize,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_passphrase_separator")]
    pub separator: String,

    #[serde(default)]
    pub capitalize: bool,
}

impl Default for PassphraseSection {
    fn default() -> Self {
        Self {
            words: default_passphrase_words(),
            language: default_language(),
            separator: default_passphrase_separator(),
            capitalize: false,
        }
    }
}

/// Wordlist location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordlistSection {
    /// Directory holding `english.txt`, `japanese.txt`, …
    /// The compiled-in lists are used when unset.
    pub dir: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level (off, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_mnemonic_words() -> usize {
    12
}

fn default_language() -> String {
    "english".to_string()
}

fn default_password_length() -> usize {
    20
}

fn default_passphrase_words() -> usize {
    6
}

fn default_passphrase_separator() -> String {
    "-".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Loading & environment override
// ============================================================================

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `PHRASEKIT_WORDS`
    /// - `PHRASEKIT_LANGUAGE`
    /// - `PHRASEKIT_SEPARATOR`
    /// - `PHRASEKIT_PASSWORD_LENGTH`
    /// - `PHRASEKIT_WORDLIST_DIR`
    /// - `PHRASEKIT_LOG_LEVEL`
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("PHRASEKIT_WORDS") {
            if let Ok(words) = v.parse::<usize>() {
                self.mnemonic.words = words;
            }
        }
        if let Some(v) = var("PHRASEKIT_LANGUAGE") {
            self.mnemonic.language = v.clone();
            self.passphrase.language = v;
        }
        if let Some(v) = var("PHRASEKIT_SEPARATOR") {
            self.mnemonic.separator = Some(v);
        }
        if let Some(v) = var("PHRASEKIT_PASSWORD_LENGTH") {
            if let Ok(length) = v.parse::<usize>() {
                self.password.length = length;
            }
        }
        if let Some(v) = var("PHRASEKIT_WORDLIST_DIR") {
            self.wordlists.dir = Some(PathBuf::from(v));
        }
        if let Some(v) = var("PHRASEKIT_LOG_LEVEL") {
            self.logging.level = v;
        }
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        WordCount::new(self.mnemonic.words).context("mnemonic.words")?;
        parse_language(&self.mnemonic.language).context("mnemonic.language")?;
        parse_language(&self.passphrase.language).context("passphrase.language")?;

        self.password_config()?
            .validate()
            .context("password settings")?;
        self.passphrase_config()?
            .validate()
            .context("passphrase settings")?;

        anyhow::ensure!(
            LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()),
            "logging.level must be one of: {}",
            LOG_LEVELS.join(", ")
        );

        if let Some(ref dir) = self.wordlists.dir {
            anyhow::ensure!(
                dir.is_dir(),
                "wordlists.dir is not a directory: {}",
                dir.display()
            );
        }

        Ok(())
    }

    /// The mnemonic generation settings.
    pub fn mnemonic_config(&self) -> Result<MnemonicConfig> {
        let language = parse_language(&self.mnemonic.language)?;
        let config = MnemonicConfig::new(language).with_word_count(self.mnemonic.words)?;
        Ok(match self.mnemonic.separator {
            Some(ref sep) => config.with_separator(sep.clone()),
            None => config,
        })
    }

    /// The password generation settings.
    pub fn password_config(&self) -> Result<PasswordConfig> {
        let p = &self.password;
        let config = PasswordConfig::default()
            .with_length(p.length)?
            .with_lowercase(p.lowercase)
            .with_uppercase(p.uppercase)
            .with_digits(p.digits)
            .with_symbols(p.symbols)
            .with_exclude_ambiguous(p.exclude_ambiguous);
        Ok(config)
    }

    /// The passphrase generation settings.
    pub fn passphrase_config(&self) -> Result<PassphraseConfig> {
        let p = &self.passphrase;
        let config = PassphraseConfig::default()
            .with_words(p.words)?
            .with_language(parse_language(&p.language)?)
            .with_separator(p.separator.clone())
            .with_capitalize(p.capitalize);
        Ok(config)
    }

    /// A resolver over the configured wordlist directory, or the
    /// compiled-in lists when none is set.
    pub fn resolver(&self) -> WordlistResolver {
        match self.wordlists.dir {
            Some(ref dir) => WordlistResolver::from_dir(dir),
            None => WordlistResolver::embedded(),
        }
    }
}

fn parse_language(name: &str) -> Result<Language> {
    Ok(name.parse::<Language>()?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn full_toml() -> &'static str {
        r#"
[mnemonic]
words = 24
language = "japanese"
separator = "-"

[password]
length = 32
symbols = false
exclude_ambiguous = true

[passphrase]
words = 8
language = "spanish"
separator = "."
capitalize = true

[logging]
level = "debug"
"#
    }

    fn write_toml(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.mnemonic.words, 12);
        assert_eq!(config.mnemonic.language, "english");
        assert_eq!(config.password.length, 20);
        assert_eq!(config.passphrase.separator, "-");
        assert_eq!(config.logging.level, "warn");
        assert!(config.wordlists.dir.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_empty_config() {
        let file = write_toml("");
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.mnemonic.words, 12);
        assert!(config.password.symbols);
    }

    #[test]
    fn test_parse_full_config() {
        let file = write_toml(full_toml());
        let config = CliConfig::from_file(file.path()).unwrap();
        config.validate().unwrap();

        let mnemonic = config.mnemonic_config().unwrap();
        assert_eq!(mnemonic.language(), Language::Japanese);
        assert_eq!(mnemonic.word_count(), WordCount::TwentyFour);
        assert_eq!(mnemonic.separator(), "-");

        let password = config.password_config().unwrap();
        assert_eq!(password.length(), 32);
        assert!(!password.pool().contains(&'!'));
        assert!(!password.pool().contains(&'l'));

        let passphrase = config.passphrase_config().unwrap();
        assert_eq!(passphrase.words(), 8);
        assert_eq!(passphrase.language(), Language::Spanish);
        assert_eq!(passphrase.separator(), ".");
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/phrasekit.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_toml("[mnemonic\nwords = ");
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PHRASEKIT_WORDS", "18"),
            ("PHRASEKIT_LANGUAGE", "french"),
            ("PHRASEKIT_SEPARATOR", "_"),
            ("PHRASEKIT_PASSWORD_LENGTH", "40"),
            ("PHRASEKIT_LOG_LEVEL", "trace"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.mnemonic.words, 18);
        assert_eq!(config.mnemonic.language, "french");
        assert_eq!(config.passphrase.language, "french");
        assert_eq!(config.mnemonic.separator.as_deref(), Some("_"));
        assert_eq!(config.password.length, 40);
        assert_eq!(config.logging.level, "trace");
        config.validate().unwrap();
    }

    #[test]
    fn test_unparseable_env_number_ignored() {
        let mut config = CliConfig::default();
        config.apply_overrides(|k| (k == "PHRASEKIT_WORDS").then(|| "many".to_string()));
        assert_eq!(config.mnemonic.words, 12);
    }

    #[test]
    fn test_validate_invalid_word_count() {
        let mut config = CliConfig::default();
        config.mnemonic.words = 13;
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid word count: 13"));
    }

    #[test]
    fn test_validate_unknown_language() {
        let mut config = CliConfig::default();
        config.passphrase.language = "elvish".into();
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown language: elvish"));
    }

    #[test]
    fn test_validate_empty_charset() {
        let mut config = CliConfig::default();
        config.password.lowercase = false;
        config.password.uppercase = false;
        config.password.digits = false;
        config.password.symbols = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = CliConfig::default();
        config.logging.level = "verbose".into();
        assert!(config.validate().is_err());
        config.logging.level = "INFO".into();
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_wordlist_dir() {
        let mut config = CliConfig::default();
        config.wordlists.dir = Some(PathBuf::from("/nonexistent/wordlists"));
        assert!(config.validate().is_err());

        let dir = tempfile::tempdir().unwrap();
        config.wordlists.dir = Some(dir.path().to_path_buf());
        config.validate().unwrap();
    }
}
