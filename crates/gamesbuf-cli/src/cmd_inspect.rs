/// Implementation of `gamesbuf inspect`.
///
/// Reads a catalog file, decodes every entry, and prints a structured
/// listing to stdout. When `--entry N` is given, only the entry at index
/// N is shown.
///
/// # Output format
///
/// ```text
/// Catalog: Gamesbuf v1, 3 entries, 121 bytes
/// Entry 0: "Super Mario 64"  md5 9f0aa00859577a527ee5b6a6a25eb6a9  system=5 region=1
///          Art: "mario64.png"
/// Entry 1: "Tetris"  md5 c3a1071bc32b1bbff6e67dc0b3feeb9d  system=4 region=0
/// Entry 2: "Columns"  md5 7c2b1e55a6b1e0f3d07aa1c33b2c6e18  system=2 region=2
/// ```
use std::fs;

use anyhow::{Context, Result};
use gamesbuf_decoder::decode_entries;
use gamesbuf_wire::layout::GAMESBUF_VERSION;

use crate::InspectArgs;

/// Run the `gamesbuf inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the catalog is
/// structurally invalid (unknown version byte, truncated entries).
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let entries = decode_entries(&bytes)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    println!(
        "Catalog: Gamesbuf v{GAMESBUF_VERSION}, {} entr{}, {} bytes",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        bytes.len()
    );

    for (idx, entry) in entries.iter().enumerate() {
        // When --entry N is specified, skip all other indices.
        if let Some(target) = args.entry
            && idx != target
        {
            continue;
        }

        println!(
            "Entry {idx}: {:?}  md5 {}  system={} region={}",
            entry.name, entry.hash, entry.system, entry.region
        );

        if let Some(ref art) = entry.art {
            println!("         Art: {art:?}");
        }
    }

    Ok(())
}
