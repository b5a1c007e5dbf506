//! phrasekit: generate BIP-39 mnemonics, passwords and diceware passphrases
//!
//! # Usage
//!
//! ```bash
//! phrasekit                                  # one 12-word English mnemonic
//! phrasekit mnemonic -w 24 -l japanese -n 3  # three 24-word Japanese mnemonics
//! phrasekit password --length 32 --no-symbols
//! phrasekit passphrase -w 8 --json
//! ```

mod args;
mod config;

use anyhow::{Context, Result};
use phrasekit_core::{Language, OsEntropy, PasswordStrength, WordlistResolver};
use serde::Serialize;
use zeroize::Zeroizing;

use args::{Args, Command};
use config::CliConfig;

/// One generated secret, ready for output
#[derive(Debug, Serialize)]
struct Generated {
    kind: &'static str,
    #[serde(serialize_with = "serialize_secret")]
    value: Zeroizing<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<Language>,
    entropy_bits: f64,
    strength: PasswordStrength,
}

fn serialize_secret<S: serde::Serializer>(
    value: &Zeroizing<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_str())
}

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    if args.help {
        print_help();
        return Ok(());
    }
    if args.version {
        println!("phrasekit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load config
    let mut cli_config = match args.config_path {
        Some(ref path) => CliConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CliConfig::default(),
    };

    // Apply env overrides, then flags
    cli_config.apply_env_overrides();
    args.apply_to(&mut cli_config);

    // Validate
    cli_config
        .validate()
        .context("Configuration validation failed")?;

    // Init logger
    env_logger::Builder::new()
        .parse_filters(&cli_config.logging.level)
        .init();

    let resolver = cli_config.resolver();
    let generated = generate(args.command, &cli_config, &resolver, args.count)?;
    log::info!("Generated {} result(s)", generated.len());

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&generated).context("Failed to encode JSON")?
        );
    } else {
        for item in &generated {
            println!("{}", item.value.as_str());
        }
    }

    Ok(())
}

/// Generate `count` secrets of the requested kind.
fn generate(
    command: Command,
    config: &CliConfig,
    resolver: &WordlistResolver,
    count: usize,
) -> Result<Vec<Generated>> {
    match command {
        Command::Mnemonic => {
            let mnemonic_config = config.mnemonic_config()?;
            let bits = mnemonic_config.raw_entropy_bits() as f64;
            let mnemonics = mnemonic_config
                .generate_many_using(count, resolver, &OsEntropy)
                .context("Mnemonic generation failed")?;
            Ok(mnemonics
                .iter()
                .map(|m| Generated {
                    kind: "mnemonic",
                    value: Zeroizing::new(m.phrase().to_string()),
                    language: Some(m.language()),
                    entropy_bits: bits,
                    strength: PasswordStrength::from_bits(bits),
                })
                .collect())
        }
        Command::Password => {
            let password_config = config.password_config()?;
            (0..count)
                .map(|_| -> Result<Generated> {
                    let value = password_config
                        .generate_using(&OsEntropy)
                        .context("Password generation failed")?;
                    Ok(Generated {
                        kind: "password",
                        value,
                        language: None,
                        entropy_bits: password_config.entropy_bits(),
                        strength: password_config.strength(),
                    })
                })
                .collect()
        }
        Command::Passphrase => {
            let passphrase_config = config.passphrase_config()?;
            (0..count)
                .map(|_| -> Result<Generated> {
                    let value = passphrase_config
                        .generate_using(resolver, &OsEntropy)
                        .context("Passphrase generation failed")?;
                    Ok(Generated {
                        kind: "passphrase",
                        value,
                        language: Some(passphrase_config.language()),
                        entropy_bits: passphrase_config.entropy_bits(),
                        strength: passphrase_config.strength(),
                    })
                })
                .collect()
        }
    }
}

fn print_help() {
    println!(
        r#"phrasekit: BIP-39 mnemonic, password and passphrase generator

USAGE:
    phrasekit [mnemonic|password|passphrase] [OPTIONS]

OPTIONS:
    -c, --config <PATH>       Config file path (TOML)
    -w, --words <N>           Mnemonic words (12/15/18/21/24) or passphrase words
    -l, --language <LANG>     Wordlist language (english, japanese, korean, spanish,
                              chinese_simplified, chinese_traditional, french,
                              italian, czech)
    -s, --separator <SEP>     Word separator
    -n, --count <N>           Number of results (default: 1)
    --length <N>              Password length (default: 20)
    --no-symbols              Exclude symbols from passwords
    --wordlist-dir <DIR>      Read wordlists from DIR instead of the built-in lists
    --json                    Print results as JSON
    -h, --help                Show this help message
    -V, --version             Show version

ENVIRONMENT VARIABLES (override config file):
    PHRASEKIT_WORDS            Mnemonic word count
    PHRASEKIT_LANGUAGE         Wordlist language
    PHRASEKIT_SEPARATOR        Mnemonic word separator
    PHRASEKIT_PASSWORD_LENGTH  Password length
    PHRASEKIT_WORDLIST_DIR     Wordlist directory
    PHRASEKIT_LOG_LEVEL        Log level (off/error/warn/info/debug/trace)

EXAMPLES:
    # 24-word mnemonic
    phrasekit -w 24

    # Japanese mnemonic joined with hyphens
    phrasekit mnemonic -l japanese -s -

    # Five passwords without symbols
    phrasekit password -n 5 --no-symbols
"#
    );
}
