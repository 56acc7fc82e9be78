use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`]. Demo transcripts go to
/// stdout, so log lines never interleave with the output under test.
pub fn init() {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(DEFAULT_FILTER)
    };

    // A subscriber may already be installed (tests, repeated calls).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
