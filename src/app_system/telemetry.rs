use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,user_directory=debug,tower_http=debug";

/// Install the global fmt subscriber, filtered by `RUST_LOG` when set.
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
