use gamesbuf_types::TypeError;
use gamesbuf_wire::WireError;

/// Errors that can occur while reading a catalog.
///
/// The reader validates the version byte up front and detects streams
/// that end partway through an entry; everything else it trusts,
/// because entry boundaries are fully determined by the two length
/// bytes at the front of each entry.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── InvalidHeader(WireError)  ← version byte unknown
///   ├── TruncatedStream           ← source ended mid-entry
///   ├── Type(TypeError)           ← from gamesbuf-types entry decoding
///   └── Io(std::io::Error)        ← from the underlying reader
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The leading version byte failed validation.
    ///
    /// This wraps a [`WireError`] from `layout::validate_version` — the
    /// inner error carries the byte that was actually found.
    #[error("invalid header: {0}")]
    InvalidHeader(WireError),

    /// The source ended partway through an entry.
    ///
    /// The length bytes at the front of the entry promised more data
    /// than the source delivered. Rather than return a partial record,
    /// the reader reports how many bytes were still expected. While an
    /// entry's second length byte has not arrived yet, `missing` is a
    /// lower bound.
    #[error("stream ended mid-entry ({missing} bytes missing)")]
    TruncatedStream { missing: usize },

    /// An entry decoding error from `gamesbuf-types`.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// An I/O error from the underlying reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
