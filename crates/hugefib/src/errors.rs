//! Error handling and exit codes.

use hugefib_core::constants::exit_codes;
use hugefib_core::error::FibError;

/// Map a run error to a process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<FibError>().is_some() || err.downcast_ref::<std::io::Error>().is_some() {
        exit_codes::ERROR_GENERIC
    } else {
        exit_codes::ERROR_CONFIG
    }
}
