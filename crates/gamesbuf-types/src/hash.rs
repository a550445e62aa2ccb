use std::fmt;
use std::str::FromStr;

use gamesbuf_wire::layout::HASH_LEN;

use crate::error::TypeError;

/// A 16-byte MD5 digest identifying one game image.
///
/// The catalog never computes digests — they arrive from whatever tool
/// ripped or indexed the image — so this type treats the hash as an
/// opaque identity value. Wrapping the raw `[u8; 16]` in a newtype means
/// readers and writers can only ever be handed a digest of the right
/// width: the 16-byte check happens once, at the construction boundary,
/// and nowhere else.
///
/// Construction paths:
///
/// ```text
///   Md5::new([u8; 16])      infallible, width enforced by the type
///   Md5::try_from(&[u8])    fallible, for slices of unknown length
///   "32 hex chars".parse()  fallible, for CLI / manifest text
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Md5([u8; HASH_LEN]);

impl Md5 {
    /// Wrap an existing 16-byte digest.
    #[must_use]
    pub const fn new(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Md5 {
    type Error = TypeError;

    /// Convert a byte slice into a digest.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidHashLength`] unless the slice is
    /// exactly 16 bytes.
    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; HASH_LEN] = slice
            .try_into()
            .map_err(|_| TypeError::InvalidHashLength { found: slice.len() })?;
        Ok(Self(bytes))
    }
}

impl FromStr for Md5 {
    type Err = TypeError;

    /// Parse a 32-character hex string, upper or lower case.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidHexHash`] for anything that is not
    /// exactly 32 hex characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; HASH_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Md5({})", hex::encode(self.0))
    }
}
