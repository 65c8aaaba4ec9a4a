//! Application configuration from CLI flags and environment.

use clap::Parser;

/// HugeFib — huge Fibonacci number calculator.
#[derive(Parser, Debug)]
#[command(name = "hugefib", version, about, allow_negative_numbers = true)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(short, long, default_value = "1000000", env = "HUGEFIB_N")]
    pub n: i64,

    /// Print the full decimal expansion of the result.
    #[arg(short, long)]
    pub print: bool,

    /// Output file path (decimal text unless --raw).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the result as two's-complement big-endian bytes.
    #[arg(long, requires = "output")]
    pub raw: bool,

    /// Emit the run summary as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Parallel multiplication threshold in bits (0 = default).
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Parallel stringification threshold in bits (0 = default).
    #[arg(long, default_value = "0")]
    pub str_threshold: usize,

    /// Worker threads (0 = all available cores).
    #[arg(long, default_value = "0", env = "HUGEFIB_WORKERS")]
    pub workers: usize,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
