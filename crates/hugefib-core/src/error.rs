//! Error type for the computation engine.

/// Error type for Fibonacci calculations.
///
/// The arithmetic itself is total; the only failure the engine reports is
/// input validation. Worker panics propagate through `rayon::join` to the
/// joining caller rather than being swallowed.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// A negative Fibonacci index was requested.
    #[error("fibonacci index must be non-negative, got {0}")]
    NegativeIndex(i64),
}
