// --- File: crates/detailify_config/src/lib.rs ---
//! Layered configuration loading for the Detailify application.
//!
//! Precedence, lowest to highest: built-in defaults, `config/default.toml`,
//! `config/{RUN_ENV}.toml`, then `APP__`-prefixed environment variables
//! (e.g. `APP_SERVER__PORT=9000`). Secrets (the mailer API key) never live
//! in config files; they are read from the environment at the call site.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::Lazy;

pub mod models;
pub use models::*;

static DOTENV: Lazy<()> = Lazy::new(|| {
    // Missing .env is fine; values then come from the real environment.
    dotenv::dotenv().ok();
});

/// Load `.env` exactly once, before any config or secret lookup.
pub fn ensure_dotenv_loaded() {
    Lazy::force(&DOTENV);
}

/// Loads the application configuration.
/// Dependent crates call this so they do not need to know where values
/// come from (file, environment, or defaults).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "default".to_string());
    tracing::debug!("Loading configuration for RUN_ENV={}", run_env);

    let builder = Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8086)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"));

    builder.build()?.try_deserialize()
}
