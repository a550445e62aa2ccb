use gamesbuf_types::Entry;
use gamesbuf_wire::layout::{ENTRY_MAX_SIZE, GAMESBUF_VERSION};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::EncodeError;

/// Sequential catalog writer over any async byte sink.
///
/// `CatalogWriter` produces the stream in write order with no internal
/// buffering beyond a single reused entry-sized scratch array — each
/// call pushes its bytes straight to the sink:
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────┐
/// │ [1 byte]     │ Version header (0x01)                    │
/// │ [20..=530]   │ Entry 0 (lengths + fixed fields + names) │
/// │ [20..=530]   │ Entry 1 ...                              │
/// │ ...          │                                          │
/// └──────────────┴──────────────────────────────────────────┘
/// ```
///
/// There is no trailer: the stream simply ends after the last entry,
/// and readers detect the end by running out of bytes on an entry
/// boundary.
///
/// Call order is the caller's contract: [`write_header`](Self::write_header)
/// once, then [`write_entry`](Self::write_entry) per record, then
/// [`finish`](Self::finish). Entries written before the header produce a
/// stream readers will reject.
///
/// # Usage
///
/// ```rust
/// use gamesbuf_encoder::CatalogWriter;
/// use gamesbuf_types::{Entry, Md5};
///
/// # async fn demo(entry: Entry) -> Result<(), gamesbuf_encoder::EncodeError> {
/// let mut writer = CatalogWriter::new(Vec::new());
/// writer.write_header().await?;
/// writer.write_entry(&entry).await?;
/// let bytes = writer.finish().await?;
/// # Ok(())
/// # }
/// ```
pub struct CatalogWriter<W> {
    writer: W,
    /// Reused for every entry — large enough for the biggest legal one.
    scratch: [u8; ENTRY_MAX_SIZE],
}

impl<W: AsyncWrite + Unpin> CatalogWriter<W> {
    /// Wrap a sink. Nothing is written until the first method call.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: [0; ENTRY_MAX_SIZE],
        }
    }

    /// Write the one-byte version header.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Io`] if the sink rejects the write.
    pub async fn write_header(&mut self) -> Result<(), EncodeError> {
        self.writer.write_all(&[GAMESBUF_VERSION]).await?;
        Ok(())
    }

    /// Encode `entry` and write exactly its encoded bytes to the sink.
    ///
    /// Truncation of over-long names and artwork keys happens inside the
    /// entry codec; the bytes written always describe themselves via the
    /// two leading length bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Io`] if the sink rejects the write.
    pub async fn write_entry(&mut self, entry: &Entry) -> Result<(), EncodeError> {
        let len = entry.encode_into(&mut self.scratch);
        self.writer.write_all(&self.scratch[..len]).await?;
        Ok(())
    }

    /// Flush and shut down the sink, handing it back to the caller.
    ///
    /// Consuming `self` makes write-after-finish unrepresentable.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Io`] if the flush or shutdown fails.
    pub async fn finish(mut self) -> Result<W, EncodeError> {
        self.writer.flush().await?;
        self.writer.shutdown().await?;
        Ok(self.writer)
    }
}
