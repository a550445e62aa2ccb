//! Golden fixture generator for the Gamesbuf conformance test suite.
//!
//! This binary creates all fixture files under `tests/golden/`. Run it once
//! after making wire-format changes to regenerate the committed binary
//! catalogs. Snapshot files (`.snap`) are updated separately via `cargo insta
//! review` after running the conformance tests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p gamesbuf-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory               | Contents                                      |
//! |-------------------------|-----------------------------------------------|
//! | single_entry            | One 24-byte entry, no artwork (the reference) |
//! | five_entries            | Hashes AA, AA, BB, BB, AA — retirement cases  |
//! | with_artwork            | One entry carrying an artwork key             |
//! | edge_cases/truncated    | single_entry cut 10 bytes in                  |
//! | edge_cases/bad_version  | Unknown version byte, valid entry bytes       |
//! | edge_cases/header_only  | Just the version byte, zero entries           |
//! | edge_cases/max_entry    | The biggest legal entry (530 bytes)           |

#![allow(clippy::pedantic)]

use std::path::Path;

use gamesbuf_encoder::encode_catalog;
use gamesbuf_types::{Entry, Md5};

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    generate_single_entry(&golden_dir);
    generate_five_entries(&golden_dir);
    generate_with_artwork(&golden_dir);
    generate_edge_cases(&golden_dir);

    println!("All golden fixtures written to {}", golden_dir.display());
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, data).expect("write_file");
    println!("  wrote {}", path.display());
}

fn write_manifest(dir: &Path, json: &str) {
    write_file(&dir.join("manifest.json"), json.as_bytes());
}

fn payload_path(dir: &Path) -> std::path::PathBuf {
    dir.join("payload.gbuf")
}

/// The reference entry: name "test", hash AA…, system 1, region 2.
fn test_entry(hash_byte: u8) -> Entry {
    Entry {
        name: "test".to_string(),
        hash: Md5::new([hash_byte; 16]),
        art: None,
        region: 2,
        system: 1,
    }
}

// ── Fixture generators ────────────────────────────────────────────────────────

fn generate_single_entry(golden: &Path) {
    let dir = golden.join("single_entry");
    write_manifest(
        &dir,
        r#"{
  "description": "The reference catalog: one 24-byte entry, no artwork key.",
  "entries": [
    { "name": "test", "md5": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "system": 1, "region": 2 }
  ]
}"#,
    );

    let catalog = encode_catalog(&[test_entry(0xAA)]);
    write_file(&payload_path(&dir), &catalog);
}

fn generate_five_entries(golden: &Path) {
    let dir = golden.join("five_entries");
    write_manifest(
        &dir,
        r#"{
  "description": "Five entries with hashes AA, AA, BB, BB, AA. Exercises query retirement: once a hash is satisfied, later duplicates are skipped.",
  "entries": [
    { "name": "test", "md5": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "system": 1, "region": 2 },
    { "name": "test", "md5": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "system": 1, "region": 2 },
    { "name": "test", "md5": "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb", "system": 1, "region": 2 },
    { "name": "test", "md5": "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb", "system": 1, "region": 2 },
    { "name": "test", "md5": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "system": 1, "region": 2 }
  ]
}"#,
    );

    let catalog = encode_catalog(&[
        test_entry(0xAA),
        test_entry(0xAA),
        test_entry(0xBB),
        test_entry(0xBB),
        test_entry(0xAA),
    ]);
    write_file(&payload_path(&dir), &catalog);
}

fn generate_with_artwork(golden: &Path) {
    let dir = golden.join("with_artwork");
    write_manifest(
        &dir,
        r#"{
  "description": "One entry carrying an artwork key alongside the name.",
  "entries": [
    { "name": "Super Mario 64", "md5": "9f0aa00859577a527ee5b6a6a25eb6a9", "art": "mario64.png", "system": 5, "region": 1 }
  ]
}"#,
    );

    let hash_bytes = hex::decode("9f0aa00859577a527ee5b6a6a25eb6a9").expect("valid hex");
    let hash = Md5::try_from(hash_bytes.as_slice()).expect("16 bytes");

    let catalog = encode_catalog(&[Entry {
        name: "Super Mario 64".to_string(),
        hash,
        art: Some("mario64.png".to_string()),
        region: 1,
        system: 5,
    }]);
    write_file(&payload_path(&dir), &catalog);
}

fn generate_edge_cases(golden: &Path) {
    let base = golden.join("edge_cases");

    // A valid catalog cut mid-entry.
    let full = encode_catalog(&[test_entry(0xAA)]);
    write_file(&base.join("truncated/payload.gbuf"), &full[..10]);

    // Unknown version byte in front of otherwise valid entry bytes.
    let mut bad = full.clone();
    bad[0] = 0x02;
    write_file(&base.join("bad_version/payload.gbuf"), &bad);

    // Header with no entries at all — a legal, empty catalog.
    write_file(&base.join("header_only/payload.gbuf"), &[0x01]);

    // The biggest legal entry: 255-byte name and artwork key, every
    // fixed field maxed out.
    let max = encode_catalog(&[Entry {
        name: "n".repeat(255),
        hash: Md5::new([0xFF; 16]),
        art: Some("a".repeat(255)),
        region: 255,
        system: 255,
    }]);
    write_file(&base.join("max_entry/payload.gbuf"), &max);
}
