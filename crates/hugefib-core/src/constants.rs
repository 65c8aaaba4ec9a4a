//! Default thresholds and the small-index fast path table.

/// Default threshold (in bits) below which multiplication stays on the
/// sequential schoolbook path instead of splitting.
pub const DEFAULT_MUL_THRESHOLD: usize = 200_000;

/// Default threshold (in bits) below which decimal conversion stays on the
/// sequential repeated-division path instead of splitting.
pub const DEFAULT_STR_THRESHOLD: usize = 50_000;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`; F(94) overflows.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Exit codes for the CLI layer.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (including invalid input).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[50], 12_586_269_025);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..94 {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }
}
