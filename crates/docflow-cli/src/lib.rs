//! Docflow driver: the sample run and the tracing setup for the `docflow` binary.

pub mod driver;

pub use driver::{run, sample_documents};

use docflow_core::LogFormat;

/// Initialize tracing for CLI binaries.
///
/// Diagnostics go to stderr so they never interleave with the transcript on stdout.
pub fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
