use gamesbuf_wire::WireError;

/// Errors that can occur when building or decoding typed catalog values.
///
/// These sit one level above [`WireError`] — they deal with hash
/// construction and entry payload decoding rather than raw layout
/// checks. A `TypeError` wraps an underlying `WireError` when the
/// problem is an entry slice that runs out of bytes mid-field.
///
/// # Error hierarchy
///
/// ```text
/// ┌─────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                              │
/// │   ├── InvalidHashLength for non-16-byte digests     │
/// │   ├── InvalidHexHash for unparsable hex text        │
/// │   └── wraps WireError for short entry slices        │
/// └─────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
  /// A hash was constructed from a slice that is not exactly 16 bytes.
  ///
  /// Every stored digest is MD5, so 16 bytes is the only valid width.
  /// The check runs at construction time, before the digest can reach
  /// a reader or a writer.
  #[error("invalid hash length: expected 16 bytes, got {found}")]
  InvalidHashLength { found: usize },

  /// A hash string failed hex parsing.
  ///
  /// Exactly 32 hex characters are accepted, upper or lower case.
  /// Anything else (wrong length, separators, non-hex characters)
  /// surfaces the underlying [`hex::FromHexError`].
  #[error("invalid hex hash: {0}")]
  InvalidHexHash(#[from] hex::FromHexError),

  /// An underlying wire-level error while slicing an entry.
  #[error(transparent)]
  Wire(#[from] WireError),
}
