use gamesbuf_wire::WireError;
use gamesbuf_wire::layout::{
    ART_LEN_OFFSET, ENTRY_MAX_SIZE, HASH_OFFSET, NAME_LEN_OFFSET, NAME_OFFSET, PAYLOAD_MAX,
    REGION_OFFSET, SYSTEM_OFFSET,
};

use crate::error::TypeError;
use crate::hash::Md5;

/// One catalog record: a game image and the metadata needed to identify it.
///
/// The artwork key is an explicit `Option` because the wire format stores
/// it with a length byte and length 0 means "not present". Note the
/// ambiguity this bakes in: `Some("")` and `None` encode to the same
/// bytes, and both decode back as `None`. Region and system are raw
/// one-byte code spaces defined by the calling application; the catalog
/// stores and compares them without interpreting them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Display name, at most 255 encoded bytes (longer names are
    /// truncated on write).
    pub name: String,

    /// MD5 digest of the game image.
    pub hash: Md5,

    /// Artwork lookup key, when one was stored.
    pub art: Option<String>,

    /// Caller-defined region code.
    pub region: u8,

    /// Caller-defined system code.
    pub system: u8,
}

impl Entry {
    /// Decode one entry from the front of `buf`.
    ///
    /// Returns `(entry, bytes_consumed)`. `buf` may extend past the end
    /// of the entry — the two leading length bytes determine how much is
    /// read, and the caller should slice past `bytes_consumed` before
    /// decoding the next entry.
    ///
    /// Name and artwork bytes are decoded as lossy UTF-8: the writer may
    /// have truncated a name mid-codepoint, and a replacement character
    /// beats refusing the whole record.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::Wire`] wrapping a
    /// [`WireError::UnexpectedEof`] if `buf` ends before the entry does.
    pub fn decode(buf: &[u8]) -> Result<(Self, usize), TypeError> {
        // 1. The two length bytes fix the total size of the entry.
        let name_len = usize::from(*buf.get(NAME_LEN_OFFSET).ok_or(
            WireError::UnexpectedEof {
                offset: NAME_LEN_OFFSET,
            },
        )?);
        let art_len = usize::from(*buf.get(ART_LEN_OFFSET).ok_or(
            WireError::UnexpectedEof {
                offset: ART_LEN_OFFSET,
            },
        )?);

        // 2. Fixed fields at their layout offsets.
        let system = *buf.get(SYSTEM_OFFSET).ok_or(WireError::UnexpectedEof {
            offset: SYSTEM_OFFSET,
        })?;
        let hash_bytes = buf
            .get(HASH_OFFSET..REGION_OFFSET)
            .ok_or(WireError::UnexpectedEof {
                offset: HASH_OFFSET,
            })?;
        let hash = Md5::try_from(hash_bytes)?;
        let region = *buf.get(REGION_OFFSET).ok_or(WireError::UnexpectedEof {
            offset: REGION_OFFSET,
        })?;

        // 3. Variable payloads: name first, artwork immediately after it.
        let name_end = NAME_OFFSET + name_len;
        let name_bytes = buf
            .get(NAME_OFFSET..name_end)
            .ok_or(WireError::UnexpectedEof {
                offset: NAME_OFFSET,
            })?;
        let name = String::from_utf8_lossy(name_bytes).into_owned();

        let art = if art_len == 0 {
            None
        } else {
            let art_bytes = buf
                .get(name_end..name_end + art_len)
                .ok_or(WireError::UnexpectedEof { offset: name_end })?;
            Some(String::from_utf8_lossy(art_bytes).into_owned())
        };

        Ok((
            Self {
                name,
                hash,
                art,
                region,
                system,
            },
            name_end + art_len,
        ))
    }

    /// Encode this entry into the front of `buf`.
    ///
    /// Returns the number of bytes written. Names and artwork keys longer
    /// than 255 bytes are truncated at the byte level and the stored
    /// length byte reflects the truncated length — a multi-byte UTF-8
    /// codepoint straddling the limit is cut mid-sequence, which the
    /// lossy decode on the read side renders as a replacement character.
    /// An artwork key of `None` (or `Some("")`) stores length 0 and
    /// contributes no payload bytes.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than the encoded length. A buffer of
    /// [`ENTRY_MAX_SIZE`] bytes is always sufficient for any entry.
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode_into(&self, buf: &mut [u8]) -> usize {
        let name_bytes = self.name.as_bytes();
        let name_len = name_bytes.len().min(PAYLOAD_MAX);

        let art_bytes = self.art.as_deref().unwrap_or("").as_bytes();
        let art_len = art_bytes.len().min(PAYLOAD_MAX);

        // Lengths are <= PAYLOAD_MAX here, so the u8 casts cannot truncate.
        buf[NAME_LEN_OFFSET] = name_len as u8;
        buf[ART_LEN_OFFSET] = art_len as u8;
        buf[SYSTEM_OFFSET] = self.system;
        buf[HASH_OFFSET..REGION_OFFSET].copy_from_slice(self.hash.as_bytes());
        buf[REGION_OFFSET] = self.region;

        let name_end = NAME_OFFSET + name_len;
        buf[NAME_OFFSET..name_end].copy_from_slice(&name_bytes[..name_len]);
        buf[name_end..name_end + art_len].copy_from_slice(&art_bytes[..art_len]);

        name_end + art_len
    }

    /// The number of bytes [`encode_into`](Self::encode_into) will write
    /// for this entry, truncation included.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        let art_len = self
            .art
            .as_deref()
            .map_or(0, |a| a.len().min(PAYLOAD_MAX));
        NAME_OFFSET + self.name.len().min(PAYLOAD_MAX) + art_len
    }
}
