// --- File: crates/detailify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Booking Config ---
// Business-hours rules for appointment slots. The asymmetric weekday start
// (18:30) is a fixed business rule: weekday service runs after regular
// working hours, weekends run the full day.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// First bookable time on Monday-Friday, "HH:MM".
    pub weekday_start: String,
    /// First bookable time on Saturday/Sunday, "HH:MM".
    pub weekend_start: String,
    /// End of the booking window on every day, "HH:MM", exclusive.
    pub day_end: String,
    /// Slot grid step in minutes.
    pub slot_step_minutes: i64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            weekday_start: "18:30".to_string(),
            weekend_start: "08:00".to_string(),
            day_end: "22:00".to_string(),
            slot_step_minutes: 30,
        }
    }
}

// --- Mailer Config ---
// Holds non-secret mailer config. API key loaded directly from env var.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MailerConfig {
    pub api_base_url: String, // Mandatory
    pub from_address: String, // Mandatory
    /// Inbox that receives appointment requests.
    pub inbox_address: String, // Mandatory
                              // Secret loaded directly from env var: MAILER_API_KEY
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_mailer: bool,

    // --- Feature Configurations ---
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub mailer: Option<MailerConfig>,
}
