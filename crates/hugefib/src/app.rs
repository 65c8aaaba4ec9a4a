//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::Result;
use tracing::info;

use hugefib_core::fastdoubling::fib;
use hugefib_core::options::Options;
use hugefib_core::stringify::to_decimal_string;

use crate::config::AppConfig;
use crate::output::{self, RunSummary};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "hugefib", &mut std::io::stdout());
        return Ok(());
    }

    let opts = Options {
        mul_threshold: config.threshold,
        str_threshold: config.str_threshold,
        workers: config.workers,
    }
    .normalize();

    // Size the global worker pool to match. Fails harmlessly if a pool
    // already exists (tests, repeated invocation through the library).
    if opts.workers > 1 {
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(opts.workers)
            .build_global();
    }

    let start = Instant::now();
    let f = fib(config.n, &opts)?;
    let duration = start.elapsed();
    let bits = f.bit_len();
    info!(n = config.n, bits, ?duration, "computation finished");

    // The decimal expansion is itself expensive for huge n; produce it
    // only when something consumes it.
    let wants_text_file = config.output.is_some() && !config.raw;
    let decimal = (config.print || wants_text_file).then(|| to_decimal_string(&f, &opts));

    let summary = RunSummary {
        n: config.n,
        duration_secs: duration.as_secs_f64(),
        bits,
        digits: decimal.as_ref().map(String::len),
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.plain());
    }

    if config.print {
        if let Some(digits) = &decimal {
            println!("{digits}");
        }
    }

    if let Some(path) = &config.output {
        if config.raw {
            output::write_bytes(path, &f.to_signed_bytes_be())?;
        } else if let Some(digits) = &decimal {
            output::write_text(path, digits)?;
        }
    }

    Ok(())
}
