/// Implementation of `gamesbuf pack`.
///
/// Parses a JSON manifest describing catalog entries and writes them into
/// a binary `.gbuf` catalog through the streaming writer. The manifest
/// path is the sole positional argument; the output file is required via
/// `-o`.
///
/// # Manifest format
///
/// ```json
/// {
///   "entries": [
///     {
///       "name": "Super Mario 64",
///       "md5": "9f0aa00859577a527ee5b6a6a25eb6a9",
///       "art": "mario64.png",
///       "system": 5,
///       "region": 1
///     },
///     {
///       "name": "Tetris",
///       "md5": "c3a1071bc32b1bbff6e67dc0b3feeb9d",
///       "system": 4,
///       "region": 0
///     }
///   ]
/// }
/// ```
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────────────────┐
/// │ Key      │ Meaning                                              │
/// ├──────────┼──────────────────────────────────────────────────────┤
/// │ name     │ Display name (truncated at 255 encoded bytes)        │
/// │ md5      │ Image digest, exactly 32 hex digits                  │
/// │ art      │ Optional artwork key (truncated at 255 bytes)        │
/// │ system   │ System code, 0–255                                   │
/// │ region   │ Region code, 0–255                                   │
/// └──────────┴──────────────────────────────────────────────────────┘
/// ```
use std::fs;

use anyhow::{Context, Result};
use gamesbuf_encoder::CatalogWriter;
use gamesbuf_types::{Entry, Md5};

use crate::PackArgs;

// ── Manifest serde types ──────────────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct Manifest {
    entries: Vec<ManifestEntry>,
}

/// A single entry in the JSON manifest.
///
/// Mirrors [`Entry`] field for field, except the hash arrives as hex
/// text and is validated during conversion.
#[derive(serde::Deserialize)]
struct ManifestEntry {
    name: String,
    /// MD5 digest as 32 hex digits.
    md5: String,
    /// Optional artwork lookup key.
    art: Option<String>,
    system: u8,
    region: u8,
}

/// Run the `gamesbuf pack` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, if any
/// `md5` value is not exactly 32 hex digits, or if writing the output
/// file fails.
pub async fn run(args: &PackArgs) -> Result<()> {
    let manifest_text = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let manifest: Manifest = serde_json::from_str(&manifest_text)
        .with_context(|| format!("invalid manifest {}", args.input.display()))?;

    // Validate every hash before touching the output file, so a bad
    // manifest never leaves a half-written catalog behind.
    let mut entries = Vec::with_capacity(manifest.entries.len());
    for (idx, spec) in manifest.entries.into_iter().enumerate() {
        let hash: Md5 = spec.md5.parse().with_context(|| {
            format!("entry {idx} ({:?}): invalid md5 {:?}", spec.name, spec.md5)
        })?;
        entries.push(Entry {
            name: spec.name,
            hash,
            art: spec.art,
            region: spec.region,
            system: spec.system,
        });
    }

    let file = tokio::fs::File::create(&args.output)
        .await
        .with_context(|| format!("cannot create {}", args.output.display()))?;

    let mut writer = CatalogWriter::new(file);
    writer.write_header().await?;
    for entry in &entries {
        writer.write_entry(entry).await?;
    }
    writer.finish().await?;

    println!(
        "Packed {} entr{} into {}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        args.output.display()
    );
    Ok(())
}
