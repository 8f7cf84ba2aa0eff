/// Configures structured logging for the whole process.
///
/// Verbosity comes from `RUST_LOG` (default `info`), for example
/// `RUST_LOG=complaint_desk=debug,tower_http=debug`.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
