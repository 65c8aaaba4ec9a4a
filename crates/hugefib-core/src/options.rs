//! Engine options and thresholds.
//!
//! A passed-in value, not process-wide state: tests can run different
//! thresholds and worker counts side by side in one process.

use crate::constants::{DEFAULT_MUL_THRESHOLD, DEFAULT_STR_THRESHOLD};

/// Options for Fibonacci computation and stringification.
#[derive(Debug, Clone)]
pub struct Options {
    /// Threshold (in bits) for divide-and-conquer multiplication.
    pub mul_threshold: usize,
    /// Threshold (in bits) for divide-and-conquer stringification.
    pub str_threshold: usize,
    /// Worker count the engine may assume; below 2 every threshold check
    /// takes the sequential path.
    pub workers: usize,
}

/// Detected hardware parallelism, 1 if unknown.
fn detected_workers() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mul_threshold: DEFAULT_MUL_THRESHOLD,
            str_threshold: DEFAULT_STR_THRESHOLD,
            workers: detected_workers(),
        }
    }
}

impl Options {
    /// Options that disable all parallel branches.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            workers: 1,
            ..Self::default()
        }
    }

    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.mul_threshold == 0 {
            self.mul_threshold = DEFAULT_MUL_THRESHOLD;
        }
        if self.str_threshold == 0 {
            self.str_threshold = DEFAULT_STR_THRESHOLD;
        }
        if self.workers == 0 {
            self.workers = detected_workers();
        }
        self
    }
}
