use gamesbuf_types::{Entry, Query};
use gamesbuf_wire::layout::{self, ART_LEN_OFFSET, ENTRY_MIN_SIZE, HEADER_SIZE, NAME_LEN_OFFSET};

use crate::error::DecodeError;
use crate::scanner::{ScanStatus, Scanner};

/// Scan a complete in-memory catalog against a query list.
///
/// The filtering, skipping, and retirement behavior is exactly that of
/// the streaming reader — this is one [`Scanner::push`] over the whole
/// buffer, followed by the same end-of-stream accounting. An empty
/// query list returns empty without looking at `bytes` at all.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidHeader`] for an unknown version byte
/// and [`DecodeError::TruncatedStream`] if the buffer ends mid-entry
/// before the queries are satisfied.
pub fn decode_catalog(bytes: &[u8], queries: Vec<Query>) -> Result<Vec<Entry>, DecodeError> {
    let mut scanner = Scanner::new(queries);
    match scanner.push(bytes)? {
        ScanStatus::Complete => Ok(scanner.into_matches()),
        ScanStatus::NeedMore => scanner.finish(),
    }
}

/// Decode every entry of an in-memory catalog, with no filtering.
///
/// This is the tooling path — inspection, validation, and statistics
/// all want the complete contents rather than a query's worth.
///
/// Decoding proceeds in two steps:
///
///   1. **Header**: validate the leading version byte.
///   2. **Entries**: walk the packed entries back to back. Each entry
///      declares its own size via its two length bytes, so the walk
///      needs no delimiters; it ends exactly at the end of the buffer
///      or fails if the last entry promises more bytes than remain.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidHeader`] for an unknown version byte
/// and [`DecodeError::TruncatedStream`] if the buffer ends mid-entry.
pub fn decode_entries(bytes: &[u8]) -> Result<Vec<Entry>, DecodeError> {
    // 1. Header.
    let version = bytes.first().ok_or(DecodeError::TruncatedStream {
        missing: HEADER_SIZE,
    })?;
    layout::validate_version(*version).map_err(DecodeError::InvalidHeader)?;

    // 2. Entries.
    let mut entries = Vec::new();
    let mut rest = &bytes[HEADER_SIZE..];
    while !rest.is_empty() {
        let declared = match (rest.get(NAME_LEN_OFFSET), rest.get(ART_LEN_OFFSET)) {
            (Some(&name_len), Some(&art_len)) => layout::entry_len(name_len, art_len),
            // Second length byte missing — a lower bound is the best
            // truncation report available.
            _ => ENTRY_MIN_SIZE,
        };
        if rest.len() < declared {
            return Err(DecodeError::TruncatedStream {
                missing: declared - rest.len(),
            });
        }

        let (entry, consumed) = Entry::decode(rest)?;
        entries.push(entry);
        rest = &rest[consumed..];
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamesbuf_encoder::encode_catalog;
    use gamesbuf_types::Md5;
    use gamesbuf_wire::WireError;

    fn catalog() -> Vec<Entry> {
        vec![
            Entry {
                name: "Alleyway".to_string(),
                hash: Md5::new([0xAA; 16]),
                art: Some("alleyway.png".to_string()),
                region: 1,
                system: 4,
            },
            Entry {
                name: "Kirby's Dream Land".to_string(),
                hash: Md5::new([0xBB; 16]),
                art: None,
                region: 2,
                system: 4,
            },
        ]
    }

    #[test]
    fn decode_entries_returns_everything_in_order() {
        let entries = catalog();
        let bytes = encode_catalog(&entries);
        assert_eq!(decode_entries(&bytes).unwrap(), entries);
    }

    #[test]
    fn decode_entries_accepts_header_only_catalog() {
        assert!(decode_entries(&[0x01]).unwrap().is_empty());
    }

    #[test]
    fn decode_entries_rejects_unknown_version() {
        let result = decode_entries(&[0x07, 0x00]);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidHeader(WireError::UnsupportedVersion {
                found: 0x07
            }))
        ));
    }

    #[test]
    fn decode_entries_rejects_empty_input() {
        assert!(matches!(
            decode_entries(&[]),
            Err(DecodeError::TruncatedStream { missing: 1 })
        ));
    }

    #[test]
    fn decode_entries_reports_truncated_tail() {
        let bytes = encode_catalog(&catalog());
        let result = decode_entries(&bytes[..bytes.len() - 3]);
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedStream { missing: 3 })
        ));
    }

    #[test]
    fn decode_entries_reports_lower_bound_before_lengths_known() {
        let mut bytes = encode_catalog(&catalog());
        // One stray byte where the next entry should start: its art
        // length has not arrived, so the report is the minimum-entry
        // lower bound.
        bytes.push(0x05);
        let result = decode_entries(&bytes);
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedStream { missing }) if missing == ENTRY_MIN_SIZE - 1
        ));
    }

    #[test]
    fn decode_catalog_filters_like_the_scanner() {
        let bytes = encode_catalog(&catalog());
        let matches =
            decode_catalog(&bytes, vec![Query::new(Md5::new([0xBB; 16]))]).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Kirby's Dream Land");
    }

    #[test]
    fn decode_catalog_with_no_queries_reads_nothing() {
        // Garbage bytes are fine: an empty query list never touches them.
        assert!(decode_catalog(&[0xDE, 0xAD], Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn decode_catalog_propagates_truncation() {
        let bytes = encode_catalog(&catalog());
        let result = decode_catalog(
            &bytes[..bytes.len() - 1],
            vec![Query::new(Md5::new([0x99; 16]))],
        );
        assert!(matches!(result, Err(DecodeError::TruncatedStream { .. })));
    }
}
