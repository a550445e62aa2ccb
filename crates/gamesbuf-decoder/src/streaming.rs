use gamesbuf_types::{Entry, Query};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::DecodeError;
use crate::scanner::{ScanStatus, Scanner};

/// Asynchronous streaming reader — scans a catalog from any byte
/// source without holding more than one chunk in memory.
///
/// This is the primary API for on-disk catalogs and network streams.
/// The reader pulls chunks from the source and feeds them to a
/// [`Scanner`], which carries every piece of parse state itself — so
/// chunk boundaries fall wherever the source puts them, and the chunk
/// buffer size only affects syscall count, never results.
///
/// Two behaviors distinguish it from a plain read-all-then-parse loop:
///
/// - an empty query list returns immediately, with no read ever issued
///   against the source;
/// - once the last query is satisfied, the reader returns without
///   requesting another chunk and drops the source. Dropping is the
///   pull model's cancellation: a source that is only read on demand
///   needs no further signal to stop.
///
/// Unlike the synchronous [`decode_catalog`](crate::decode_catalog)
/// which requires the entire catalog in memory, `CatalogReader` reads
/// incrementally from any `AsyncRead` source (files, TCP sockets,
/// HTTP response bodies, etc.).
///
/// # Example
///
/// ```rust,no_run
/// use gamesbuf_decoder::CatalogReader;
/// use gamesbuf_types::{Md5, Query};
/// use tokio::io::AsyncRead;
///
/// async fn find(source: impl AsyncRead + Unpin, hash: Md5) {
///     let reader = CatalogReader::new(source, vec![Query::new(hash)]);
///     for record in reader.read().await.unwrap() {
///         println!("{} (system {})", record.name, record.system);
///     }
/// }
/// ```
pub struct CatalogReader<R> {
  reader: R,
  scanner: Scanner,
  /// Chunk buffer, reused across reads.
  buf: Vec<u8>,
}

const CHUNK_SIZE: usize = 4096;

impl<R: AsyncRead + Unpin> CatalogReader<R> {
  /// Create a reader over the given async source.
  ///
  /// Nothing is read until [`read`](Self::read) is called.
  #[must_use]
  pub fn new(reader: R, queries: Vec<Query>) -> Self {
    Self {
      reader,
      scanner: Scanner::new(queries),
      buf: vec![0; CHUNK_SIZE],
    }
  }

  /// Drive the source to exhaustion or early termination and return
  /// the matched records in stream order.
  ///
  /// # Errors
  ///
  /// Returns [`DecodeError::Io`] if the source fails,
  /// [`DecodeError::InvalidHeader`] if the version byte is unknown,
  /// and [`DecodeError::TruncatedStream`] if the source ends mid-entry.
  pub async fn read(mut self) -> Result<Vec<Entry>, DecodeError> {
    // Satisfied before the first byte — only possible with an empty
    // query list. Skip I/O entirely.
    if self.scanner.is_satisfied() {
      return Ok(self.scanner.into_matches());
    }

    loop {
      let n = self.reader.read(&mut self.buf).await?;
      if n == 0 {
        return self.scanner.finish();
      }
      if self.scanner.push(&self.buf[..n])? == ScanStatus::Complete {
        return Ok(self.scanner.into_matches());
      }
    }
  }
}

/// Convenience wrapper: construct a [`CatalogReader`] and drive it in
/// one call.
///
/// # Errors
///
/// Same as [`CatalogReader::read`].
pub async fn read_catalog<R>(source: R, queries: Vec<Query>) -> Result<Vec<Entry>, DecodeError>
where
  R: AsyncRead + Unpin,
{
  CatalogReader::new(source, queries).read().await
}

#[cfg(test)]
mod tests {
  use std::pin::Pin;
  use std::task::{Context, Poll};

  use gamesbuf_encoder::encode_catalog;
  use gamesbuf_types::Md5;
  use tokio::io::ReadBuf;

  use super::*;

  fn entry(name: &str, hash_byte: u8, system: u8, region: u8) -> Entry {
    Entry {
      name: name.to_string(),
      hash: Md5::new([hash_byte; 16]),
      art: None,
      region,
      system,
    }
  }

  /// Helper: stream a catalog through a buffered cursor, the everyday
  /// file-like case.
  async fn stream(bytes: Vec<u8>, queries: Vec<Query>) -> Result<Vec<Entry>, DecodeError> {
    let cursor = std::io::Cursor::new(bytes);
    let reader = tokio::io::BufReader::new(cursor);
    CatalogReader::new(reader, queries).read().await
  }

  /// A source that must never be polled.
  struct PanicReader;

  impl AsyncRead for PanicReader {
    fn poll_read(
      self: Pin<&mut Self>,
      _cx: &mut Context<'_>,
      _buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
      panic!("no read should have been issued");
    }
  }

  /// A source that yields one prepared chunk and panics if polled
  /// again — proves the reader stops once satisfied.
  struct OneShotReader {
    chunk: Vec<u8>,
    delivered: bool,
  }

  impl AsyncRead for OneShotReader {
    fn poll_read(
      mut self: Pin<&mut Self>,
      _cx: &mut Context<'_>,
      buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
      assert!(!self.delivered, "reader kept pulling after satisfaction");
      self.delivered = true;
      let chunk = std::mem::take(&mut self.chunk);
      buf.put_slice(&chunk);
      Poll::Ready(Ok(()))
    }
  }

  /// A source that fails on the first poll.
  struct FailingReader;

  impl AsyncRead for FailingReader {
    fn poll_read(
      self: Pin<&mut Self>,
      _cx: &mut Context<'_>,
      _buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
      Poll::Ready(Err(std::io::Error::from(std::io::ErrorKind::ConnectionReset)))
    }
  }

  #[tokio::test]
  async fn finds_queried_entries_in_stream_order() {
    let bytes = encode_catalog(&[
      entry("one", 0xAA, 1, 0),
      entry("two", 0xBB, 1, 0),
      entry("three", 0xCC, 1, 0),
    ]);
    let queries = vec![
      Query::new(Md5::new([0xCC; 16])),
      Query::new(Md5::new([0xAA; 16])),
    ];

    let matches = read_catalog(std::io::Cursor::new(bytes), queries)
      .await
      .unwrap();
    let names: Vec<_> = matches.iter().map(|m| m.name.as_str()).collect();

    // Stream order, not query order.
    assert_eq!(names, ["one", "three"]);
  }

  #[tokio::test]
  async fn streaming_matches_sync_decode() {
    let bytes = encode_catalog(&[
      entry("alpha", 0xAA, 1, 2),
      entry("beta", 0xBB, 3, 4),
      entry("gamma", 0xAA, 5, 6),
    ]);
    let queries = vec![Query::new(Md5::new([0xBB; 16])).with_system(3)];

    let synced = crate::decode_catalog(&bytes, queries.clone()).unwrap();
    let streamed = stream(bytes, queries).await.unwrap();

    assert_eq!(streamed, synced);
  }

  #[tokio::test]
  async fn empty_query_list_issues_no_read() {
    let matches = read_catalog(PanicReader, Vec::new()).await.unwrap();
    assert!(matches.is_empty());
  }

  #[tokio::test]
  async fn satisfied_reader_requests_no_more_chunks() {
    let source = OneShotReader {
      chunk: encode_catalog(&[entry("hit", 0xAA, 1, 0)]),
      delivered: false,
    };
    let queries = vec![Query::new(Md5::new([0xAA; 16]))];

    let matches = read_catalog(source, queries).await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "hit");
  }

  #[tokio::test]
  async fn truncated_source_reports_missing_bytes() {
    let mut bytes = encode_catalog(&[entry("cut short", 0xAA, 1, 0)]);
    bytes.truncate(bytes.len() - 5);
    let queries = vec![Query::new(Md5::new([0xAA; 16]))];

    let result = stream(bytes, queries).await;
    assert!(matches!(
      result,
      Err(DecodeError::TruncatedStream { missing: 5 })
    ));
  }

  #[tokio::test]
  async fn source_errors_propagate() {
    let queries = vec![Query::new(Md5::new([0xAA; 16]))];
    let result = read_catalog(FailingReader, queries).await;

    match result {
      Err(DecodeError::Io(e)) => {
        assert_eq!(e.kind(), std::io::ErrorKind::ConnectionReset);
      }
      other => panic!("expected Io error, got {other:?}"),
    }
  }
}
