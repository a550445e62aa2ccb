/// Implementation of `gamesbuf stats`.
///
/// Decodes a catalog file and prints a structured statistics report
/// covering file size, per-system entry distribution, and payload
/// characteristics.
///
/// # Example output
///
/// ```text
/// File:     /tmp/games.gbuf  (121 bytes)
/// Header:   Gamesbuf v1  (1 byte)
/// Entries:  5 total
///
/// System       Count   Bytes
/// ──────────────────────────
/// 1                3      72
/// 4                2      48
/// ──────────────────────────
/// Total            5     120
///
/// Names:    9 bytes average, 18 longest
/// Artwork:  2 of 5 entries carry a key
/// ```
///
/// Byte counts are encoded sizes (fixed 20-byte prelude plus payloads),
/// so the per-system column sums to the file size minus the header.
use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use gamesbuf_decoder::decode_entries;
use gamesbuf_wire::layout::GAMESBUF_VERSION;

use crate::StatsArgs;

/// Run the `gamesbuf stats` command.
///
/// Decodes the file, tabulates per-system entry counts and encoded byte
/// sums, and prints a formatted summary to stdout.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the catalog fails
/// structural validation.
pub fn run(args: &StatsArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let file_size = bytes.len();

    let entries = decode_entries(&bytes)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    // ── Per-system distribution ───────────────────────────────────────────────

    // Aggregate by system code: (count, total encoded bytes).
    let mut by_system: HashMap<u8, (usize, usize)> = HashMap::new();
    let mut insertion_order: Vec<u8> = Vec::new();

    for entry in &entries {
        let size = entry.encoded_len();
        by_system
            .entry(entry.system)
            .and_modify(|(count, total)| {
                *count += 1;
                *total += size;
            })
            .or_insert_with(|| {
                insertion_order.push(entry.system);
                (1, size)
            });
    }

    let total_entries = entries.len();
    let total_bytes: usize = entries.iter().map(gamesbuf_types::Entry::encoded_len).sum();

    // ── Payload statistics ────────────────────────────────────────────────────

    let longest_name = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let average_name = if total_entries == 0 {
        0
    } else {
        entries.iter().map(|e| e.name.len()).sum::<usize>() / total_entries
    };
    let with_art = entries.iter().filter(|e| e.art.is_some()).count();

    // ── Print report ──────────────────────────────────────────────────────────

    println!("File:     {}  ({file_size} bytes)", args.file.display());
    println!("Header:   Gamesbuf v{GAMESBUF_VERSION}  (1 byte)");
    println!("Entries:  {total_entries} total");
    println!();

    let sep = "─".repeat(26);
    println!("{:<12}{:>6}{:>8}", "System", "Count", "Bytes");
    println!("{sep}");

    for system in &insertion_order {
        let (count, size) = by_system[system];
        println!("{system:<12}{count:>6}{size:>8}");
    }

    println!("{sep}");
    println!("{:<12}{:>6}{:>8}", "Total", total_entries, total_bytes);

    println!();
    println!("Names:    {average_name} bytes average, {longest_name} longest");
    println!("Artwork:  {with_art} of {total_entries} entries carry a key");

    Ok(())
}
