#![no_main]

use libfuzzer_sys::fuzz_target;
use phrasekit_core::wordlist::parse_wordlist;
use phrasekit_core::{Language, Wordlist};

fuzz_target!(|data: &[u8]| {
    // Untrusted wordlist files must be accepted or rejected without panicking.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(words) = parse_wordlist(Language::English, text) {
            if let Ok(list) = Wordlist::new(Language::English, words) {
                assert_eq!(list.len(), 2048);
            }
        }
    }
});
