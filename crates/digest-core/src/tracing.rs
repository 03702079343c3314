use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber: JSON lines on stdout, filtered through
/// `RUST_LOG`. Repeated calls are no-ops, so tests may call this freely.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json());
    let _ = subscriber.try_init();
}
