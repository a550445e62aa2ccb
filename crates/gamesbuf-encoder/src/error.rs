/// Errors that can occur while writing a catalog.
///
/// Entry serialization itself cannot fail: oversized payloads are
/// truncated by the codec and hash validity is enforced by
/// [`Md5`](gamesbuf_types::Md5) at construction. The only failure
/// source left is the underlying sink.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
