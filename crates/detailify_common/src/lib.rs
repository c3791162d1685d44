// --- File: crates/detailify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, not_found, validation_error, Context,
    DetailifyError, HttpStatusCode,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;

// Conditionally re-export feature-specific functions
#[cfg(feature = "mailer")]
pub use features::is_mailer_enabled;
