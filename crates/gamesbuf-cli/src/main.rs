/// Gamesbuf command-line tool — pack, look up, inspect, validate, and
/// analyse `.gbuf` game catalogs.
///
/// # Command overview
///
/// ```text
/// gamesbuf <COMMAND> [OPTIONS]
///
/// Commands:
///   pack       Create a catalog file from a JSON manifest
///   lookup     Find entries by MD5 hash, streaming the catalog
///   inspect    Print a human-readable listing of every entry
///   validate   Check a catalog file for structural correctness
///   stats      Print size and per-system statistics
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_inspect;
mod cmd_lookup;
mod cmd_pack;
mod cmd_stats;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The Gamesbuf catalog command-line tool.
///
/// Pack, look up, inspect, validate, and analyse `.gbuf` binary catalogs.
#[derive(Parser)]
#[command(name = "gamesbuf", version, about = "Gamesbuf game-catalog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Create a catalog file from a JSON manifest.
    Pack(PackArgs),
    /// Find entries by MD5 hash, streaming the catalog.
    Lookup(LookupArgs),
    /// Print a human-readable listing of every entry.
    Inspect(InspectArgs),
    /// Check a catalog file for structural correctness.
    Validate(ValidateArgs),
    /// Print size and per-system statistics.
    Stats(StatsArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `gamesbuf pack`.
///
/// Reads a JSON manifest describing catalog entries and writes them
/// through the streaming writer into a binary `.gbuf` file. The manifest
/// format is:
///
/// ```json
/// {
///   "entries": [
///     { "name": "Super Mario 64", "md5": "9f0aa0…32 hex digits…",
///       "art": "mario64.png", "system": 5, "region": 1 },
///     { "name": "Tetris", "md5": "c3a10…",
///       "system": 4, "region": 0 }
///   ]
/// }
/// ```
///
/// The `art` key is optional; omitting it stores no artwork reference.
#[derive(clap::Args)]
pub struct PackArgs {
    /// Path to the JSON manifest describing the entries to pack.
    pub input: PathBuf,

    /// Output catalog file path.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for `gamesbuf lookup`.
///
/// Streams the catalog file and reports the entries matching the given
/// hashes, stopping early once every hash has been found.
///
/// ```text
/// ┌────────────┬───────────────────────────────────────────────────┐
/// │ Flag       │ Effect                                            │
/// ├────────────┼───────────────────────────────────────────────────┤
/// │ --md5 HEX  │ Hash to find (32 hex digits); repeatable          │
/// │ --system N │ Restrict every lookup to system code N            │
/// │ --region N │ Restrict every lookup to region code N            │
/// └────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct LookupArgs {
    /// Path to the catalog file to search.
    pub file: PathBuf,

    /// MD5 hash to look up, as 32 hex digits. Repeatable.
    #[arg(long = "md5", value_name = "HEX", required = true)]
    pub md5: Vec<String>,

    /// Restrict every lookup to this system code.
    #[arg(long)]
    pub system: Option<u8>,

    /// Restrict every lookup to this region code.
    #[arg(long)]
    pub region: Option<u8>,
}

/// Arguments for `gamesbuf inspect`.
///
/// Decodes the whole catalog and prints one line per entry (or a single
/// entry when `--entry` is set). Useful for quickly seeing what a
/// catalog contains without writing custom tooling.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the catalog file to inspect.
    pub file: PathBuf,

    /// Inspect only the entry at this zero-based index.
    #[arg(long)]
    pub entry: Option<usize>,
}

/// Arguments for `gamesbuf validate`.
///
/// Attempts a full decode of the catalog and reports either a set of
/// success checkmarks or a diagnostic error. The process exits with
/// code 0 on success and code 1 on any structural problem.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the catalog file to validate.
    pub file: PathBuf,
}

/// Arguments for `gamesbuf stats`.
///
/// Decodes the catalog and prints file size, per-system entry counts
/// and byte totals, and payload statistics.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Path to the catalog file to analyse.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pack(args) => cmd_pack::run(&args).await,
        Commands::Lookup(args) => cmd_lookup::run(&args).await,
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Stats(args) => cmd_stats::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
