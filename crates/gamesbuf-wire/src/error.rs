#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The stream's leading byte is not a known format version.
    #[error("unsupported catalog version {found:#04X}")]
    UnsupportedVersion { found: u8 },

    /// Input ended before a complete entry could be sliced.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },
}

// NOTE Summary
// Two variants is everything this layer can produce: the only validation
// down here is the version byte, and the only parse failure is running out
// of bytes while slicing an entry. Anything richer (bad hash text, truncated
// streams with a missing byte count) belongs to the crates above.
// The {found:#04X} format prints the version byte as 0x-prefixed hex padded
// to two digits, so a stream that leads with a stray 0x00 shows up as 0x00
// in the message rather than a bare 0.
