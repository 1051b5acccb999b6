use tracing_subscriber::EnvFilter;

/// JSON log lines filtered by `RUST_LOG` (default `info`). Timestamps are
/// left out because CloudWatch stamps ingestion time.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .without_time()
        .init();
}
