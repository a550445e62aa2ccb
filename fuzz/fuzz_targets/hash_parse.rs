#![no_main]

use libfuzzer_sys::fuzz_target;

use gamesbuf_types::Md5;

// Fuzz target: MD5 hex parsing.
//
// Parses arbitrary strings as hashes; anything accepted must redisplay
// and reparse to the same value.
// Catches bugs in:
// - Length and character validation
// - Case handling
// - Display/FromStr asymmetry
fuzz_target!(|data: &str| {
    if let Ok(hash) = data.parse::<Md5>() {
        let text = hash.to_string();
        let again: Md5 = text.parse().expect("display output must reparse");
        assert_eq!(again, hash);
        assert_eq!(text, data.to_lowercase());
    }
});
