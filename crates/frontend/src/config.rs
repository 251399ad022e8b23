//! Build-time configuration.

use roster_core::{ApiConfig, DEFAULT_API_BASE};

/// API location, taken from `YAAMOD_API_BASE` when the bundle was built.
pub fn api_config() -> ApiConfig {
    ApiConfig::new(option_env!("YAAMOD_API_BASE").unwrap_or(DEFAULT_API_BASE))
}
