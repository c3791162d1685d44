// --- File: crates/detailify_booking/src/models.rs ---

use serde::{Deserialize, Serialize};

/// One chosen service in the appointment form.
///
/// `option` is the tier name for tiered services and the `"default"`
/// sentinel for flat ones. At most one selection exists per title.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedService {
    #[cfg_attr(feature = "openapi", schema(example = "Exterieur Reiniging"))]
    pub title: String,
    #[cfg_attr(feature = "openapi", schema(example = "Premium"))]
    pub option: String,
}

/// The appointment form state owned by one booking session.
///
/// Created empty, mutated event-by-event, reset to empty after a
/// successful submission. A failed submission leaves it untouched so the
/// visitor can retry without re-entering anything.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license_plate: String,
    pub selected_services: Vec<SelectedService>,
    /// Appointment date, "YYYY-MM-DD".
    pub date: String,
    /// Appointment slot, "HH:MM".
    pub time: String,
    pub comments: String,
}

/// A discrete user-input event against the appointment form.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FormEvent {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    LicensePlate(String),
    Date(String),
    Time(String),
    Comments(String),
    /// Toggle a service: an empty option deselects the title, a non-empty
    /// option selects or replaces it.
    SelectService { title: String, option: String },
}

/// Price and time totals for the current selection set.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    #[cfg_attr(feature = "openapi", schema(example = 13998))]
    pub total_price_cents: i64,
    /// Display form of the total, e.g. "139.98".
    #[cfg_attr(feature = "openapi", schema(example = "139.98"))]
    pub total_price: String,
    #[cfg_attr(feature = "openapi", schema(example = 135))]
    pub total_duration_minutes: i64,
}
