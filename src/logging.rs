use tracing_subscriber::EnvFilter;

/// Stderr logging, `RUST_LOG` honored, `info` by default. Called once from
/// main; stdout stays reserved for rendered reports.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
