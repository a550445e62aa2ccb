/// Implementation of `gamesbuf validate`.
///
/// Attempts a full structural decode of the catalog file and reports
/// either a series of success checkmarks (`✓`) or a diagnostic failure
/// line (`✗`). The command exits with code 0 on a valid file and code 1
/// on any error (the main dispatcher in `main.rs` converts `Err` to exit
/// code 1).
///
/// # Success output
///
/// ```text
/// ✓ Header: valid (Gamesbuf v1)
/// ✓ Entries: 5 entries parsed successfully
/// ✓ Boundaries: stream ends exactly on an entry boundary
/// ✓ Integrity: every entry within layout size bounds
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: stream truncated (12 bytes short of an entry boundary)
/// ```
///
/// # Validation steps
///
/// The validate command runs a single `decode_entries` call, which
/// covers the three structural layers of the format:
///
/// ```text
/// 1. Header   — leading version byte against the known version
/// 2. Entries  — back-to-back walk driven by each entry's length bytes
/// 3. Boundary — the walk must end exactly at the end of the file
/// ```
///
/// A file that passes all three is structurally valid. Semantic validity
/// (say, whether a hash corresponds to a real game image) is out of
/// scope.
use std::fs;

use anyhow::{Context, Result, anyhow};
use gamesbuf_decoder::{DecodeError, decode_entries};
use gamesbuf_wire::layout::GAMESBUF_VERSION;

use crate::ValidateArgs;

/// Run the `gamesbuf validate` command.
///
/// Prints a validation report to stdout and returns `Ok(())` on success.
/// On any structural error, prints a `✗` diagnostic to stdout and
/// returns `Err`, which the main dispatcher converts to exit code 1.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if the catalog fails
/// any structural validation check.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match decode_entries(&bytes) {
        Ok(entries) => {
            println!("✓ Header: valid (Gamesbuf v{GAMESBUF_VERSION})");
            println!(
                "✓ Entries: {} entr{} parsed successfully",
                entries.len(),
                if entries.len() == 1 { "y" } else { "ies" }
            );
            println!("✓ Boundaries: stream ends exactly on an entry boundary");
            println!("✓ Integrity: every entry within layout size bounds");
            Ok(())
        }

        Err(e) => {
            let diagnostic = decode_error_diagnostic(&e);
            println!("✗ Error: {diagnostic}");
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a `DecodeError` into a human-readable diagnostic string.
///
/// ```text
/// ┌──────────────────────┬───────────────────────────────────────────────┐
/// │ DecodeError variant  │ Diagnostic message                            │
/// ├──────────────────────┼───────────────────────────────────────────────┤
/// │ InvalidHeader        │ "invalid header — <inner error>"              │
/// │ TruncatedStream      │ "stream truncated ({n} bytes short …)"        │
/// │ Type / Io            │ "<error Display>"                             │
/// └──────────────────────┴───────────────────────────────────────────────┘
/// ```
fn decode_error_diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::InvalidHeader(inner) => format!("invalid header — {inner}"),
        DecodeError::TruncatedStream { missing } => {
            format!("stream truncated ({missing} bytes short of an entry boundary)")
        }
        other => other.to_string(),
    }
}
