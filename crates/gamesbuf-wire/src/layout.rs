use crate::error::WireError;

// Quick note on the framing: there are no delimiters between entries.
// Every entry leads with its two payload length bytes, so once a reader
// has seen offsets 0 and 1 it knows the exact total size of the entry.
// The lengths ARE the framing.

/// Total header size in bytes. The header is a single version byte.
pub const HEADER_SIZE: usize = 1;

/// Current catalog format version, stored as the first byte of the stream.
pub const GAMESBUF_VERSION: u8 = 1;

/// Length of a stored content hash in bytes (one MD5 digest).
pub const HASH_LEN: usize = 16;

/// Maximum byte length of a single variable payload (name or artwork key).
/// Payload lengths are stored in one byte, so 255 is a hard ceiling.
pub const PAYLOAD_MAX: usize = u8::MAX as usize;

/// Offset of the name length byte within an entry.
pub const NAME_LEN_OFFSET: usize = 0;

/// Offset of the artwork length byte within an entry.
pub const ART_LEN_OFFSET: usize = 1;

/// Offset of the system code byte within an entry.
pub const SYSTEM_OFFSET: usize = 2;

/// Offset of the first hash byte within an entry.
pub const HASH_OFFSET: usize = 3;

/// Offset of the region code byte within an entry.
pub const REGION_OFFSET: usize = HASH_OFFSET + HASH_LEN;

/// Offset of the first name byte within an entry.
pub const NAME_OFFSET: usize = REGION_OFFSET + 1;

/// Smallest possible entry: all fixed fields, empty name, no artwork.
pub const ENTRY_MIN_SIZE: usize = NAME_OFFSET;

/// Largest possible entry: fixed fields plus a full name and a full artwork key.
pub const ENTRY_MAX_SIZE: usize = NAME_OFFSET + 2 * PAYLOAD_MAX;

/// Total encoded size of an entry with the given payload lengths.
///
/// ```text
/// ┌────────┬──────────┬──────────────────────────────────┐
/// │ Offset │ Size     │ Description                      │
/// ├────────┼──────────┼──────────────────────────────────┤
/// │ 0      │ 1 byte   │ name_len                         │
/// │ 1      │ 1 byte   │ art_len                          │
/// │ 2      │ 1 byte   │ system code                      │
/// │ 3      │ 16 bytes │ MD5 hash                         │
/// │ 19     │ 1 byte   │ region code                      │
/// │ 20     │ variable │ name bytes   [name_len]          │
/// │ 20+n   │ variable │ artwork bytes [art_len]          │
/// └────────┴──────────┴──────────────────────────────────┘
/// ```
///
/// Both length parameters are `u8` on purpose: the wire format cannot
/// express a longer payload, so the result is always within
/// [`ENTRY_MIN_SIZE`]..=[`ENTRY_MAX_SIZE`].
#[must_use]
pub fn entry_len(name_len: u8, art_len: u8) -> usize {
    NAME_OFFSET + usize::from(name_len) + usize::from(art_len)
}

/// Check the stream's leading byte against [`GAMESBUF_VERSION`].
///
/// # Errors
///
/// Returns [`WireError::UnsupportedVersion`] for any other value. A
/// stream from an unknown format revision is rejected before a single
/// entry byte is scanned.
pub fn validate_version(byte: u8) -> Result<(), WireError> {
    if byte != GAMESBUF_VERSION {
        return Err(WireError::UnsupportedVersion { found: byte });
    }
    Ok(())
}

// The offsets above are const expressions chained off each other
// (REGION_OFFSET = HASH_OFFSET + HASH_LEN, and so on) instead of bare
// literals. If the hash width ever changes, every downstream offset
// moves with it; the layout is defined in exactly one place.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_contiguous() {
        assert_eq!(NAME_LEN_OFFSET, 0);
        assert_eq!(ART_LEN_OFFSET, 1);
        assert_eq!(SYSTEM_OFFSET, 2);
        assert_eq!(HASH_OFFSET, 3);
        assert_eq!(REGION_OFFSET, 19);
        assert_eq!(NAME_OFFSET, 20);
    }

    #[test]
    fn entry_size_bounds() {
        assert_eq!(ENTRY_MIN_SIZE, 20);
        assert_eq!(ENTRY_MAX_SIZE, 530);
        assert_eq!(entry_len(0, 0), ENTRY_MIN_SIZE);
        assert_eq!(entry_len(255, 255), ENTRY_MAX_SIZE);
    }

    #[test]
    fn entry_len_mixed_payloads() {
        assert_eq!(entry_len(4, 0), 24);
        assert_eq!(entry_len(4, 10), 34);
    }

    #[test]
    fn accept_current_version() {
        assert!(validate_version(GAMESBUF_VERSION).is_ok());
    }

    #[test]
    fn reject_unknown_version() {
        let result = validate_version(2);
        assert!(matches!(
            result,
            Err(WireError::UnsupportedVersion { found: 2 })
        ));
    }

    #[test]
    fn reject_zero_version() {
        // 0 is not a wildcard — only the exact current version passes.
        assert!(matches!(
            validate_version(0),
            Err(WireError::UnsupportedVersion { found: 0 })
        ));
    }
}
