use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive variable, e.g. `RUNTIME_HEALTHCHECK_LOG=runtime_healthcheck=debug`.
pub const LOG_VAR: &str = "RUNTIME_HEALTHCHECK_LOG";

/// Silent unless asked; stdout belongs to the status line.
pub const DEFAULT_LOG_FILTER: &str = "off";

/// Install the stderr subscriber and the panic hook.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be set when embedded; keep theirs.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    install_panic_hook();
}

/// Send panic reports through `tracing` instead of the default stderr dump.
/// The panic itself is still caught by the check and reported as a failure.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "panic during health check");
    }));
}
