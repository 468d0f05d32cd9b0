use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the JSON stdout subscriber every Emmaus service logs through.
///
/// Filtering follows `RUST_LOG`; when unset, `info` and up is emitted so a
/// fresh deployment still produces request logs. Repeat calls are no-ops,
/// which lets tests call it freely.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
