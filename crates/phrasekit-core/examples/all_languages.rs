//! Print a 12-word mnemonic in every supported language
//! Run with: cargo run --example all_languages

use phrasekit_core::{Language, MnemonicConfig};

fn main() {
    println!("=== BIP-39 MNEMONICS (demo only) ===\n");

    for language in Language::ALL {
        let config = MnemonicConfig::new(language);
        match config.generate() {
            Ok(mnemonic) => println!("{:<20} {}", language.to_string(), mnemonic),
            Err(e) => eprintln!("{:<20} error: {}", language.to_string(), e),
        }
    }

    let config = MnemonicConfig::default()
        .with_word_count(24)
        .expect("24 is a valid word count");
    println!(
        "\n24 words: {} entropy bits + {} checksum bits",
        config.raw_entropy_bits(),
        config.checksum_bits()
    );
}
