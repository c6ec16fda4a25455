use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber with `filter`, normally
/// `Config::log_filter` (which already folds in `RUST_LOG`). Calling this more
/// than once is harmless; only the first call installs anything.
pub fn init(filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
