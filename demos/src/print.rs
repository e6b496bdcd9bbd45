//! Writing search results.

use std::io::{self, Write};

use gridstar_core::Position;
use gridstar_paths::SearchOutcome;

/// Print one `(row, col)` per line, or `No path found.` when `path` is
/// `None`.
pub fn write_path<W: Write>(out: &mut W, path: Option<&[Position]>) -> io::Result<()> {
    match path {
        Some(steps) => {
            for p in steps {
                writeln!(out, "{p}")?;
            }
            Ok(())
        }
        None => writeln!(out, "No path found."),
    }
}

/// Print the full outcome, path and counters, as pretty JSON.
pub fn write_outcome_json<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcome)?;
    writeln!(out)
}
