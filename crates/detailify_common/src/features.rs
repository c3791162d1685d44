// --- File: crates/detailify_common/src/features.rs ---
//! Feature flag handling for the Detailify application.
//!
//! Feature flags are used in two ways:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]`
//! 2. Runtime feature flags using configuration values
//!
//! ## Available Features
//!
//! - `openapi`: Enables OpenAPI documentation generation
//! - `mailer`: Enables the HTTP email collaborator

use detailify_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// A feature counts as enabled when its runtime flag is set and its
/// configuration section is present.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the mailer feature is enabled at runtime.
#[cfg(feature = "mailer")]
pub fn is_mailer_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_mailer, config.mailer.as_ref())
}
