use std::io::Write;

use tracing::warn;

/// Message reported once the stream has been drained
pub const ANOMALY_MESSAGE: &str =
    "Anomaly detected in packet stream. Investigating possible attack...";

/// Write a single `[SECURITY EVENT]` line to `out`
pub fn log_event<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    warn!(target: "security", "{}", message);
    writeln!(out, "[SECURITY EVENT] {}", message)?;
    out.flush()
}
