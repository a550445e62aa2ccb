use gamesbuf_types::{Entry, Query};
use gamesbuf_wire::layout::{
    self, ART_LEN_OFFSET, ENTRY_MAX_SIZE, HASH_OFFSET, HEADER_SIZE, NAME_LEN_OFFSET, NAME_OFFSET,
    REGION_OFFSET, SYSTEM_OFFSET,
};

use crate::error::DecodeError;

/// Outcome of feeding one chunk to the [`Scanner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStatus {
    /// The chunk was consumed; deliver the next one (or report end of
    /// stream via [`Scanner::finish`]).
    NeedMore,

    /// Every query is satisfied. Stop delivering chunks — any bytes
    /// after the satisfying entry were not consumed and never will be.
    Complete,
}

/// Byte-at-a-time catalog scanner — the resumable core of the reader.
///
/// The scanner consumes a catalog as a sequence of chunks of arbitrary,
/// caller-determined size. All parsing state lives in the scanner, so a
/// chunk boundary can fall anywhere — between entries, inside a length
/// byte pair, in the middle of a hash, or partway through a region being
/// skipped — and the next [`push`](Self::push) resumes exactly where the
/// previous one stopped. Feeding the same bytes in one chunk or in 530
/// single-byte chunks produces identical results.
///
/// Entries are matched against the outstanding queries while their bytes
/// stream past, before any decoding:
///
/// ```text
///          ┌─────────┬─────────┬────────┬───────────┬────────┬─────────────┐
/// offset   │ 0       │ 1       │ 2      │ 3..=18    │ 19     │ 20..        │
/// field    │ name_len│ art_len │ system │ hash      │ region │ name + art  │
/// filtered │         │         │   ✓    │  ✓ (each) │        │             │
///          └─────────┴─────────┴────────┴───────────┴────────┴─────────────┘
/// ```
///
/// At offset 2 the entry survives only if some outstanding query accepts
/// its system code; at each hash offset it survives only if some
/// outstanding query carries that byte at that position. The first
/// failing position condemns the whole entry: the scanner switches to
/// skip mode and discards the remainder by count, without buffering or
/// decoding it. Skipping by count is what makes resumption across chunk
/// boundaries a plain subtract-and-check.
///
/// An entry whose bytes all survive is decoded, appended to the match
/// list, and compared against each outstanding query in full; queries it
/// satisfies are retired. Byte filtering consults each position
/// independently, so an entry can survive to completion without fully
/// matching any single query — it is still reported, it just retires
/// nothing. Once no query remains outstanding the scanner reports
/// [`ScanStatus::Complete`] and ignores any further input.
pub struct Scanner {
    /// The queries, in caller order. Never mutated after construction —
    /// retirement is tracked in `satisfied` instead.
    queries: Vec<Query>,
    satisfied: Vec<bool>,
    /// Count of `false` slots in `satisfied`.
    outstanding: usize,

    /// Decoded records in stream order, skipped entries excluded.
    matches: Vec<Entry>,

    header_seen: bool,
    /// Working buffer for the entry in flight, reused across entries.
    entry: [u8; ENTRY_MAX_SIZE],
    /// Bytes written into `entry` so far.
    cursor: usize,
    /// Total size of the entry in flight. Grows as the two length bytes
    /// arrive; 0 between entries.
    target_len: usize,
    /// Bytes of a condemned entry still to discard. Non-zero only in
    /// skip mode.
    skip_remaining: usize,
}

impl Scanner {
    /// Create a scanner for the given queries.
    ///
    /// An empty query list is satisfied from the start: the first
    /// [`push`](Self::push) reports [`ScanStatus::Complete`] without
    /// consuming anything.
    #[must_use]
    pub fn new(queries: Vec<Query>) -> Self {
        let outstanding = queries.len();
        let satisfied = vec![false; queries.len()];
        Self {
            queries,
            satisfied,
            outstanding,
            matches: Vec::new(),
            header_seen: false,
            entry: [0; ENTRY_MAX_SIZE],
            cursor: 0,
            target_len: 0,
            skip_remaining: 0,
        }
    }

    /// Whether every query has been satisfied.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.outstanding == 0
    }

    /// Feed the next chunk of the stream.
    ///
    /// Consumes the chunk left to right, resuming whatever was in flight
    /// when the previous chunk ended. Returns early with
    /// [`ScanStatus::Complete`] as soon as the last outstanding query is
    /// satisfied; bytes after that point are not consumed, and further
    /// calls return `Complete` without looking at their input.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidHeader`] if the stream's first byte
    /// is not a known version, and [`DecodeError::Type`] if a completed
    /// entry fails to decode.
    pub fn push(&mut self, chunk: &[u8]) -> Result<ScanStatus, DecodeError> {
        if self.outstanding == 0 {
            return Ok(ScanStatus::Complete);
        }

        let mut pos = 0;
        while pos < chunk.len() {
            // Discard as much of a condemned entry as this chunk holds.
            if self.skip_remaining > 0 {
                let step = self.skip_remaining.min(chunk.len() - pos);
                self.skip_remaining -= step;
                pos += step;
                if self.skip_remaining == 0 {
                    self.reset_entry();
                }
                continue;
            }

            let byte = chunk[pos];
            pos += 1;

            if !self.header_seen {
                layout::validate_version(byte).map_err(DecodeError::InvalidHeader)?;
                self.header_seen = true;
                continue;
            }

            self.entry[self.cursor] = byte;
            let keep = match self.cursor {
                NAME_LEN_OFFSET => {
                    self.target_len = NAME_OFFSET + usize::from(byte);
                    true
                }
                ART_LEN_OFFSET => {
                    self.target_len += usize::from(byte);
                    true
                }
                SYSTEM_OFFSET => self.system_has_candidate(byte),
                HASH_OFFSET..REGION_OFFSET => {
                    self.hash_has_candidate(self.cursor - HASH_OFFSET, byte)
                }
                _ => true,
            };

            if keep {
                self.cursor += 1;
                if self.cursor == self.target_len {
                    self.complete_entry()?;
                    if self.outstanding == 0 {
                        return Ok(ScanStatus::Complete);
                    }
                }
            } else {
                // Condemned. The rest of the entry is dead weight; filters
                // only fire before the region byte, so at least one byte
                // is always left to skip.
                self.skip_remaining = self.target_len - (self.cursor + 1);
            }
        }

        Ok(ScanStatus::NeedMore)
    }

    /// How many more bytes the stream must deliver before it can end
    /// cleanly, or `None` if it is on an entry boundary right now.
    ///
    /// While the entry in flight has not shown its second length byte
    /// yet, the count is a lower bound.
    #[must_use]
    pub fn bytes_missing(&self) -> Option<usize> {
        if !self.header_seen {
            Some(HEADER_SIZE)
        } else if self.skip_remaining > 0 {
            Some(self.skip_remaining)
        } else if self.cursor > 0 {
            Some(self.target_len - self.cursor)
        } else {
            None
        }
    }

    /// Declare the stream exhausted and take the matches.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TruncatedStream`] if the stream ended
    /// mid-entry (or before the header byte arrived).
    pub fn finish(self) -> Result<Vec<Entry>, DecodeError> {
        match self.bytes_missing() {
            Some(missing) => Err(DecodeError::TruncatedStream { missing }),
            None => Ok(self.matches),
        }
    }

    /// Take the matches without an end-of-stream check. The right call
    /// after [`ScanStatus::Complete`], where the stream deliberately
    /// stops mid-flow.
    #[must_use]
    pub fn into_matches(self) -> Vec<Entry> {
        self.matches
    }

    /// Whether any outstanding query accepts this system code.
    fn system_has_candidate(&self, byte: u8) -> bool {
        self.queries
            .iter()
            .zip(self.satisfied.iter())
            .any(|(query, &done)| !done && query.system.is_none_or(|s| s == byte))
    }

    /// Whether any outstanding query carries `byte` at hash position
    /// `index`.
    fn hash_has_candidate(&self, index: usize, byte: u8) -> bool {
        self.queries
            .iter()
            .zip(self.satisfied.iter())
            .any(|(query, &done)| !done && query.hash.as_bytes()[index] == byte)
    }

    /// Decode the completed entry, retire the queries it satisfies, and
    /// reset for the next one.
    fn complete_entry(&mut self) -> Result<(), DecodeError> {
        let (record, _) = Entry::decode(&self.entry[..self.target_len])?;

        for (query, done) in self.queries.iter().zip(self.satisfied.iter_mut()) {
            if !*done && query.matches(&record) {
                *done = true;
                self.outstanding -= 1;
            }
        }

        self.matches.push(record);
        self.reset_entry();
        Ok(())
    }

    fn reset_entry(&mut self) {
        self.cursor = 0;
        self.target_len = 0;
    }
}
