//! Diagnostics setup. Example output goes to stdout; tracing goes to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    init_with(&Settings::from_env());
}

pub fn init_with(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
