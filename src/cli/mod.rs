mod handlers;
pub mod parse;

use std::io;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::ChartError;

pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Plot(a) => {
            init_logging(a.chart.debug);
            handlers::plot(a)
        }
        parse::Command::Csv(a) => {
            init_logging(a.chart.debug);
            handlers::csv(&a)
        }
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the chart.
///
/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--debug`.
fn init_logging(debug: bool) {
    let default = if debug { "kwbar=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
