/// Implementation of `gamesbuf lookup`.
///
/// Builds one query per `--md5` flag (applying `--system` / `--region`
/// to all of them), streams the catalog file through the async reader,
/// and prints the matching entries followed by a per-query report. On a
/// large catalog the read stops as soon as the last query is satisfied —
/// the rest of the file is never pulled from disk.
///
/// # Example output
///
/// ```text
/// Super Mario 64  [system 5, region 1]  md5 9f0aa00859577a527ee5b6a6a25eb6a9  art=mario64.png
/// Tetris  [system 4, region 0]  md5 c3a1071bc32b1bbff6e67dc0b3feeb9d
///
/// ✓ 9f0aa00859577a527ee5b6a6a25eb6a9 matched
/// ✓ c3a1071bc32b1bbff6e67dc0b3feeb9d matched
/// ✗ 00000000000000000000000000000000 no match
/// ```
///
/// The exit code reflects only structural problems (unreadable file,
/// invalid hash text, truncated catalog) — a query without a match still
/// exits 0.
use anyhow::{Context, Result};
use gamesbuf_decoder::read_catalog;
use gamesbuf_types::{Md5, Query};

use crate::LookupArgs;

/// Run the `gamesbuf lookup` command.
///
/// # Errors
///
/// Returns an error if a hash is not exactly 32 hex digits, the file
/// cannot be opened, or the catalog is structurally invalid.
pub async fn run(args: &LookupArgs) -> Result<()> {
    let mut queries = Vec::with_capacity(args.md5.len());
    for hex_hash in &args.md5 {
        let hash: Md5 = hex_hash
            .parse()
            .with_context(|| format!("invalid md5 {hex_hash:?}"))?;

        let mut query = Query::new(hash);
        if let Some(system) = args.system {
            query = query.with_system(system);
        }
        if let Some(region) = args.region {
            query = query.with_region(region);
        }
        queries.push(query);
    }

    let file = tokio::fs::File::open(&args.file)
        .await
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    let matches = read_catalog(file, queries.clone())
        .await
        .with_context(|| format!("failed to scan {}", args.file.display()))?;

    for record in &matches {
        let art = record
            .art
            .as_deref()
            .map_or_else(String::new, |a| format!("  art={a}"));
        println!(
            "{}  [system {}, region {}]  md5 {}{art}",
            record.name, record.system, record.region, record.hash
        );
    }

    println!();
    for query in &queries {
        let satisfied = matches.iter().any(|record| query.matches(record));
        let verdict = if satisfied { "✓" } else { "✗" };
        let outcome = if satisfied { "matched" } else { "no match" };
        println!("{verdict} {} {outcome}", query.hash);
    }

    Ok(())
}
