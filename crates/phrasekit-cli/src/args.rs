//! Command-line argument parsing, kept minimal without clap

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::config::CliConfig;

/// What to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    #[default]
    Mnemonic,
    Password,
    Passphrase,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub config_path: Option<PathBuf>,
    pub words: Option<usize>,
    pub language: Option<String>,
    pub separator: Option<String>,
    pub count: usize,
    pub length: Option<usize>,
    pub no_symbols: bool,
    pub wordlist_dir: Option<PathBuf>,
    pub json: bool,
    pub help: bool,
    pub version: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::default(),
            config_path: None,
            words: None,
            language: None,
            separator: None,
            count: 1,
            length: None,
            no_symbols: false,
            wordlist_dir: None,
            json: false,
            help: false,
            version: false,
        }
    }
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter().peekable();

        if let Some(first) = args.peek() {
            let command = match first.as_str() {
                "mnemonic" => Some(Command::Mnemonic),
                "password" => Some(Command::Password),
                "passphrase" => Some(Command::Passphrase),
                _ => None,
            };
            if let Some(command) = command {
                parsed.command = command;
                args.next();
            }
        }

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .with_context(|| format!("{} requires a value", name))
            };

            match arg.as_str() {
                "--config" | "-c" => parsed.config_path = Some(PathBuf::from(value(&arg)?)),
                "--words" | "-w" => parsed.words = Some(parse_number(&arg, &value(&arg)?)?),
                "--language" | "-l" => parsed.language = Some(value(&arg)?),
                "--separator" | "-s" => parsed.separator = Some(value(&arg)?),
                "--count" | "-n" => parsed.count = parse_number(&arg, &value(&arg)?)?,
                "--length" => parsed.length = Some(parse_number(&arg, &value(&arg)?)?),
                "--no-symbols" => parsed.no_symbols = true,
                "--wordlist-dir" => parsed.wordlist_dir = Some(PathBuf::from(value(&arg)?)),
                "--json" => parsed.json = true,
                "--help" | "-h" => parsed.help = true,
                "--version" | "-V" => parsed.version = true,
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(parsed)
    }

    /// Layer the flags on top of a loaded configuration.
    pub fn apply_to(&self, config: &mut CliConfig) {
        if let Some(words) = self.words {
            match self.command {
                Command::Passphrase => config.passphrase.words = words,
                _ => config.mnemonic.words = words,
            }
        }
        if let Some(ref language) = self.language {
            config.mnemonic.language = language.clone();
            config.passphrase.language = language.clone();
        }
        if let Some(ref separator) = self.separator {
            match self.command {
                Command::Passphrase => config.passphrase.separator = separator.clone(),
                _ => config.mnemonic.separator = Some(separator.clone()),
            }
        }
        if let Some(length) = self.length {
            config.password.length = length;
        }
        if self.no_symbols {
            config.password.symbols = false;
        }
        if let Some(ref dir) = self.wordlist_dir {
            config.wordlists.dir = Some(dir.clone());
        }
    }
}

fn parse_number(flag: &str, value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .with_context(|| format!("{} expects a number, got {:?}", flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_arguments() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, Args::default());
        assert_eq!(args.command, Command::Mnemonic);
        assert_eq!(args.count, 1);
    }

    #[test]
    fn test_mnemonic_flags() {
        let args = parse(&["-w", "24", "--language", "japanese", "-s", "-", "-n", "3", "--json"])
            .unwrap();
        assert_eq!(args.command, Command::Mnemonic);
        assert_eq!(args.words, Some(24));
        assert_eq!(args.language.as_deref(), Some("japanese"));
        assert_eq!(args.separator.as_deref(), Some("-"));
        assert_eq!(args.count, 3);
        assert!(args.json);
    }

    #[test]
    fn test_subcommands() {
        assert_eq!(parse(&["password"]).unwrap().command, Command::Password);
        assert_eq!(parse(&["passphrase"]).unwrap().command, Command::Passphrase);
        assert_eq!(parse(&["mnemonic", "-V"]).unwrap().command, Command::Mnemonic);
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["--words"]).unwrap_err();
        assert!(err.to_string().contains("--words requires a value"));
    }

    #[test]
    fn test_bad_number() {
        let err = parse(&["--count", "lots"]).unwrap_err();
        assert!(err.to_string().contains("--count expects a number"));
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert!(err.to_string().contains("Unknown argument: --verbose"));
    }

    #[test]
    fn test_apply_to_mnemonic() {
        let args = parse(&["-w", "15", "-l", "czech", "-s", "+"]).unwrap();
        let mut config = CliConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.mnemonic.words, 15);
        assert_eq!(config.mnemonic.language, "czech");
        assert_eq!(config.mnemonic.separator.as_deref(), Some("+"));
        assert_eq!(config.passphrase.words, 6);
    }

    #[test]
    fn test_apply_to_passphrase() {
        let args = parse(&["passphrase", "-w", "9", "-s", " "]).unwrap();
        let mut config = CliConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.passphrase.words, 9);
        assert_eq!(config.passphrase.separator, " ");
        assert_eq!(config.mnemonic.words, 12);
        assert!(config.mnemonic.separator.is_none());
    }

    #[test]
    fn test_apply_to_password() {
        let args = parse(&["password", "--length", "48", "--no-symbols"]).unwrap();
        let mut config = CliConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.password.length, 48);
        assert!(!config.password.symbols);
    }
}
