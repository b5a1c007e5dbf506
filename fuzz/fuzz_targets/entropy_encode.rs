#![no_main]

use libfuzzer_sys::fuzz_target;
use phrasekit_core::bits::entropy_to_indices;
use phrasekit_core::{Language, MnemonicConfig, WordCount, WordlistResolver};

fuzz_target!(|data: &[u8]| {
    // Arbitrary byte strings either encode or are rejected, never panic.
    let indices = entropy_to_indices(data);
    assert_eq!(indices.is_ok(), WordCount::from_entropy_len(data.len()).is_ok());

    if let Ok(indices) = indices {
        assert!(indices.iter().all(|&i| i < 2048));

        let language = Language::ALL[data[0] as usize % Language::ALL.len()];
        let words = indices.len();
        let mnemonic = MnemonicConfig::new(language)
            .with_word_count(words)
            .and_then(|c| c.encode_entropy_using(WordlistResolver::shared(), data))
            .unwrap();
        assert_eq!(mnemonic.word_count(), words);
    }
});
