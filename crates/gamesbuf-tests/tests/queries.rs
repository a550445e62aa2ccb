//! Query semantics, pinned end to end through [`decode_catalog`].
//!
//! The rules under test:
//!
//! - Hash equality is mandatory; system and region constraints apply only
//!   when a query states them.
//! - A stated constraint of zero is a real code, not a wildcard.
//! - A query retires after its first match, so identical records later in
//!   the stream are skipped rather than reported again.
//! - Completed entries are reported even when they retire nothing. Only
//!   entries condemned mid-scan are withheld.

use gamesbuf_decoder::decode_catalog;
use gamesbuf_encoder::encode_catalog;
use gamesbuf_types::{Entry, Md5, Query};

fn entry(name: &str, hash_byte: u8, system: u8, region: u8) -> Entry {
    Entry {
        name: name.to_string(),
        hash: Md5::new([hash_byte; 16]),
        art: None,
        region,
        system,
    }
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

// ── Hash matching ─────────────────────────────────────────────────────────────

#[test]
fn exact_hash_finds_the_matching_entry() {
    let bytes = encode_catalog(&[
        entry("Contra", 0x11, 1, 0),
        entry("Gradius", 0x22, 1, 0),
        entry("Lifeforce", 0x33, 1, 0),
    ]);

    let matches = decode_catalog(&bytes, vec![Query::new(Md5::new([0x22; 16]))]).unwrap();

    assert_eq!(names(&matches), ["Gradius"]);
}

#[test]
fn wildcard_query_ignores_system_and_region() {
    let bytes = encode_catalog(&[entry("Columns", 0x44, 9, 250)]);

    let matches = decode_catalog(&bytes, vec![Query::new(Md5::new([0x44; 16]))]).unwrap();

    assert_eq!(names(&matches), ["Columns"]);
}

// ── Stated constraints ────────────────────────────────────────────────────────

#[test]
fn system_constraint_excludes_other_systems() {
    let bytes = encode_catalog(&[
        entry("Aleste (MSX)", 0x55, 4, 0),
        entry("Aleste (SMS)", 0x55, 2, 0),
    ]);

    let query = Query::new(Md5::new([0x55; 16])).with_system(2);
    let matches = decode_catalog(&bytes, vec![query]).unwrap();

    assert_eq!(names(&matches), ["Aleste (SMS)"]);
}

#[test]
fn zero_system_constraint_is_not_a_wildcard() {
    let bytes = encode_catalog(&[
        entry("port", 0x66, 3, 0),
        entry("original", 0x66, 0, 0),
    ]);

    let query = Query::new(Md5::new([0x66; 16])).with_system(0);
    let matches = decode_catalog(&bytes, vec![query]).unwrap();

    assert_eq!(names(&matches), ["original"]);
}

/// The region byte sits past every scan-time filter, so a region-only
/// mismatch cannot condemn an entry mid-scan. The entry completes, gets
/// reported, and simply retires nothing.
#[test]
fn region_constraint_blocks_retirement_but_not_reporting() {
    let bytes = encode_catalog(&[
        entry("Mother (JP)", 0x77, 1, 3),
        entry("EarthBound Beginnings", 0x77, 1, 0),
    ]);

    let query = Query::new(Md5::new([0x77; 16])).with_region(0);
    let matches = decode_catalog(&bytes, vec![query]).unwrap();

    assert_eq!(names(&matches), ["Mother (JP)", "EarthBound Beginnings"]);
}

// ── Retirement ────────────────────────────────────────────────────────────────

#[test]
fn duplicates_after_retirement_are_not_reported() {
    let bytes = encode_catalog(&[
        entry("first dump", 0x88, 1, 0),
        entry("second dump", 0x88, 1, 0),
        entry("third dump", 0x88, 1, 0),
    ]);

    let matches = decode_catalog(&bytes, vec![Query::new(Md5::new([0x88; 16]))]).unwrap();

    assert_eq!(names(&matches), ["first dump"]);
}

/// One completed entry retires every query it satisfies, not just the
/// first, so duplicate queries cannot double-report a record.
#[test]
fn identical_queries_both_retire_on_the_first_match() {
    let bytes = encode_catalog(&[
        entry("only hit", 0x99, 1, 0),
        entry("never reached", 0x99, 1, 0),
    ]);

    let queries = vec![
        Query::new(Md5::new([0x99; 16])),
        Query::new(Md5::new([0x99; 16])),
    ];
    let matches = decode_catalog(&bytes, queries).unwrap();

    assert_eq!(names(&matches), ["only hit"]);
}

#[test]
fn multi_query_results_arrive_in_stream_order() {
    let bytes = encode_catalog(&[
        entry("Alpha", 0xAA, 1, 0),
        entry("Beta", 0xBB, 1, 0),
        entry("Gamma", 0xCC, 1, 0),
    ]);

    // Queries listed in the reverse of stream order on purpose.
    let queries = vec![
        Query::new(Md5::new([0xCC; 16])),
        Query::new(Md5::new([0xAA; 16])),
    ];
    let matches = decode_catalog(&bytes, queries).unwrap();

    assert_eq!(names(&matches), ["Alpha", "Gamma"]);
}
