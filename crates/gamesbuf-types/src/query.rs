use crate::entry::Entry;
use crate::hash::Md5;

/// A lookup target for a catalog scan.
///
/// The hash is mandatory and does the heavy lifting — it is matched
/// byte-by-byte while entries stream past. System and region are
/// optional refinements: `None` means "any", and a stated value must
/// equal the entry's byte exactly. Zero is a legal code, so
/// `with_system(0)` filters for system 0 rather than disabling the
/// filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    /// MD5 digest the entry must carry.
    pub hash: Md5,

    /// Required system code, or `None` to accept any.
    pub system: Option<u8>,

    /// Required region code, or `None` to accept any.
    pub region: Option<u8>,
}

impl Query {
    /// A query matching any entry with the given hash.
    #[must_use]
    pub const fn new(hash: Md5) -> Self {
        Self {
            hash,
            system: None,
            region: None,
        }
    }

    /// Restrict the query to entries with this system code.
    #[must_use]
    pub const fn with_system(mut self, system: u8) -> Self {
        self.system = Some(system);
        self
    }

    /// Restrict the query to entries with this region code.
    #[must_use]
    pub const fn with_region(mut self, region: u8) -> Self {
        self.region = Some(region);
        self
    }

    /// Whether `entry` satisfies this query: hash equal, and every
    /// stated filter equal to the entry's byte.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        self.hash == entry.hash
            && self.system.is_none_or(|s| s == entry.system)
            && self.region.is_none_or(|r| r == entry.region)
    }
}
