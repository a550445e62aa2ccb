use gamesbuf_types::Entry;
use gamesbuf_wire::layout::{ENTRY_MAX_SIZE, GAMESBUF_VERSION, HEADER_SIZE};

/// Build a complete catalog in memory.
///
/// Writes the version header followed by every entry in order. The
/// returned bytes are ready for storage or transmission — no further
/// framing is required. For large catalogs or real sinks prefer
/// [`CatalogWriter`](crate::CatalogWriter), which streams instead of
/// accumulating.
#[must_use]
pub fn encode_catalog(entries: &[Entry]) -> Vec<u8> {
    let total = HEADER_SIZE + entries.iter().map(Entry::encoded_len).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.push(GAMESBUF_VERSION);

    let mut scratch = [0u8; ENTRY_MAX_SIZE];
    for entry in entries {
        let len = entry.encode_into(&mut scratch);
        out.extend_from_slice(&scratch[..len]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamesbuf_decoder::decode_entries;
    use gamesbuf_types::Md5;

    fn catalog() -> Vec<Entry> {
        vec![
            Entry {
                name: "Sonic the Hedgehog".to_string(),
                hash: Md5::new([0x01; 16]),
                art: Some("sonic.png".to_string()),
                region: 1,
                system: 2,
            },
            Entry {
                name: "Columns".to_string(),
                hash: Md5::new([0x02; 16]),
                art: None,
                region: 0,
                system: 2,
            },
        ]
    }

    #[test]
    fn empty_catalog_is_bare_header() {
        assert_eq!(encode_catalog(&[]), vec![GAMESBUF_VERSION]);
    }

    #[test]
    fn length_matches_encoded_len_sum() {
        let entries = catalog();
        let bytes = encode_catalog(&entries);
        let expected: usize = HEADER_SIZE + entries.iter().map(Entry::encoded_len).sum::<usize>();
        assert_eq!(bytes.len(), expected);
    }

    #[test]
    fn decodes_back_to_the_same_entries() {
        let entries = catalog();
        let bytes = encode_catalog(&entries);
        let decoded = decode_entries(&bytes).unwrap();
        assert_eq!(decoded, entries);
    }
}
