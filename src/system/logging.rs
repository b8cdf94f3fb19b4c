//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use tracing_subscriber::EnvFilter;

/// Initialize logging system
///
/// `RUST_LOG` takes precedence; otherwise the configured `LOG_LEVEL` is
/// used, falling back to `info`. Output goes to stdout.
///
/// **Note**: This should be called only once during application startup.
///
/// # Panics
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(configured_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured_level.unwrap_or("info")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();
}
