#![no_main]

use libfuzzer_sys::fuzz_target;

use gamesbuf_types::{Md5, Query};

// Fuzz target: one-shot decoding of arbitrary catalog bytes.
//
// Calls `decode_entries(data)` on raw input, then `decode_catalog` with a
// query whose hash is taken from the input's leading bytes so the filter
// paths see correlated data.
// Catches bugs in:
// - Header validation
// - Entry length arithmetic and truncation accounting
// - Hash extraction and lossy name/art decoding
// - Scanner skip accounting and query retirement
fuzz_target!(|data: &[u8]| {
    let _ = gamesbuf_decoder::decode_entries(data);

    if data.len() >= 16 {
        let mut hash = [0u8; 16];
        hash.copy_from_slice(&data[..16]);
        let query = Query::new(Md5::new(hash));
        let _ = gamesbuf_decoder::decode_catalog(data, vec![query]);
    }
});
