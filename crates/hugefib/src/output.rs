//! Run summary formatting and file output.

use std::io::{self, Write};

use serde::Serialize;

/// Machine-readable summary of one computation.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Fibonacci index.
    pub n: i64,
    /// Wall-clock computation time in seconds.
    pub duration_secs: f64,
    /// Bit length of the result magnitude.
    pub bits: usize,
    /// Decimal digit count, present only when the expansion was produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<usize>,
}

impl RunSummary {
    /// The plain-text report lines.
    #[must_use]
    pub fn plain(&self) -> String {
        format!(
            "F({}) calculated in {:.4} seconds\nResult length: {} bits",
            self.n, self.duration_secs, self.bits
        )
    }
}

/// Write decimal text to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_text(path: &str, digits: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{digits}")?;
    Ok(())
}

/// Write raw bytes to a file verbatim.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_bytes(path: &str, bytes: &[u8]) -> io::Result<()> {
    std::fs::write(path, bytes)
}
