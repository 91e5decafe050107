use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for the surface process.
///
/// Environment-based filtering wins over the configured level; repeated
/// initialization (tests) is tolerated.
pub fn init_tracing(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_filter(env_filter))
        .try_init();
}
