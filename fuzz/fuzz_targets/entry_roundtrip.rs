#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use gamesbuf_encoder::encode_catalog;
use gamesbuf_types::{Entry, Md5};
use gamesbuf_wire::layout::PAYLOAD_MAX;

#[derive(Debug, Arbitrary)]
struct FuzzEntry {
    name: String,
    hash: [u8; 16],
    art: Option<String>,
    region: u8,
    system: u8,
}

// Fuzz target: Entry encode → decode roundtrip.
//
// Encodes an arbitrary entry and decodes it back. Fixed fields must
// always survive; payloads survive exactly when they fit the one-byte
// length, and an empty artwork key normalizes to absence.
// Catches bugs in:
// - Payload truncation at the length byte
// - Offset arithmetic between encode and decode
// - The empty-vs-absent artwork normalization
fuzz_target!(|input: FuzzEntry| {
    let entry = Entry {
        name: input.name,
        hash: Md5::new(input.hash),
        art: input.art,
        region: input.region,
        system: input.system,
    };

    let bytes = encode_catalog(std::slice::from_ref(&entry));
    let decoded = gamesbuf_decoder::decode_entries(&bytes)
        .unwrap_or_else(|e| panic!("encoder output must decode: {e:?}"));
    assert_eq!(decoded.len(), 1);
    let round = &decoded[0];

    assert_eq!(round.hash, entry.hash);
    assert_eq!(round.system, entry.system);
    assert_eq!(round.region, entry.region);

    if entry.name.len() <= PAYLOAD_MAX {
        assert_eq!(round.name, entry.name);
    }
    match &entry.art {
        Some(key) if key.is_empty() => assert_eq!(round.art, None),
        Some(key) if key.len() <= PAYLOAD_MAX => {
            assert_eq!(round.art.as_deref(), Some(key.as_str()));
        }
        _ => {}
    }
});
