// --- File: crates/detailify_booking/src/logic.rs ---

use crate::catalog::{find_entry, CatalogEntry};
use crate::models::{BookingRequest, FormEvent, QuoteSummary, SelectedService};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use detailify_common::services::{BoxedError, Clock, NotificationService};
use detailify_config::{BookingConfig, MailerConfig};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum BookingError {
    /// A selection references a title the catalog does not have. The
    /// presentation layer only offers catalog titles, so this is a desync
    /// bug, not user error.
    #[error("Selection references unknown service: {0}")]
    UnknownService(String),
    #[error("Selection references unknown option '{option}' for service '{service}'")]
    UnknownOption { service: String, option: String },
    #[error("No booking session with id {0}")]
    SessionNotFound(Uuid),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid appointment date: {0}")]
    InvalidDate(String),
    #[error("Appointment date {0} is before today")]
    PastDate(String),
    #[error("Email delivery is not available")]
    NotifierUnavailable,
    #[error("Failed to send appointment request: {0}")]
    SendFailed(String),
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Appointment date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-08-15"))]
    pub date: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailableSlotsResponse {
    /// "HH:MM" labels, 30-minute grid, end of day exclusive.
    pub slots: Vec<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionView {
    pub session_id: Uuid,
    pub request: BookingRequest,
    pub summary: QuoteSummary,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppointmentResponse {
    pub success: bool,
    pub message: String,
}

// --- Selection Logic ---

/// Apply one selection toggle to the selection set.
///
/// Four-way semantics: an already-selected title is replaced when the
/// option is non-empty and removed when it is empty; an unselected title
/// is inserted when the option is non-empty, and an empty option on an
/// unselected title is a no-op. Flat entries run through the same logic
/// with the `"default"` sentinel as their option.
pub fn set_selection(selections: &mut Vec<SelectedService>, title: &str, option: &str) {
    match selections.iter().position(|s| s.title == title) {
        Some(index) => {
            if option.is_empty() {
                selections.remove(index);
            } else {
                selections[index].option = option.to_string();
            }
        }
        None => {
            if !option.is_empty() {
                selections.push(SelectedService {
                    title: title.to_string(),
                    option: option.to_string(),
                });
            }
        }
    }
}

/// Price and duration of one selection, resolved against the catalog.
fn selection_rate(selection: &SelectedService) -> Result<(i64, i64), BookingError> {
    let entry = find_entry(&selection.title)
        .ok_or_else(|| BookingError::UnknownService(selection.title.clone()))?;
    match entry {
        CatalogEntry::Tiered { options, .. } => options
            .iter()
            .find(|option| option.name == selection.option)
            .map(|option| (option.price_cents, option.duration_minutes))
            .ok_or_else(|| BookingError::UnknownOption {
                service: selection.title.clone(),
                option: selection.option.clone(),
            }),
        CatalogEntry::Flat {
            price_cents,
            duration_minutes,
            ..
        } => Ok((*price_cents, *duration_minutes)),
    }
}

/// Sum of the selection set's prices, in cents.
///
/// Fails loudly on a selection the catalog cannot resolve instead of
/// silently skipping it; a wrong total is worse than a visible error.
pub fn total_price_cents(selections: &[SelectedService]) -> Result<i64, BookingError> {
    selections
        .iter()
        .try_fold(0i64, |total, selection| Ok(total + selection_rate(selection)?.0))
}

/// Sum of the selection set's estimated durations, in minutes.
pub fn total_duration_minutes(selections: &[SelectedService]) -> Result<i64, BookingError> {
    selections
        .iter()
        .try_fold(0i64, |total, selection| Ok(total + selection_rate(selection)?.1))
}

/// Format euro cents for display, e.g. 13998 -> "139.98".
pub fn format_euros(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Compute the quote for the current selection set.
pub fn quote(selections: &[SelectedService]) -> Result<QuoteSummary, BookingError> {
    let total_price_cents = total_price_cents(selections)?;
    Ok(QuoteSummary {
        total_price_cents,
        total_price: format_euros(total_price_cents),
        total_duration_minutes: total_duration_minutes(selections)?,
    })
}

// --- Availability Logic ---

fn parse_hhmm(value: &str, fallback: NaiveTime) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").unwrap_or(fallback)
}

/// The booking window for a calendar date.
///
/// Weekends get the full 08:00-22:00 day; Monday-Friday only the
/// after-hours 18:30-22:00 evening window. Both are configuration with
/// these values as defaults.
pub fn business_window(date: NaiveDate, config: &BookingConfig) -> (NaiveTime, NaiveTime) {
    let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
    let start = if weekend {
        parse_hhmm(&config.weekend_start, NaiveTime::from_hms_opt(8, 0, 0).unwrap())
    } else {
        parse_hhmm(&config.weekday_start, NaiveTime::from_hms_opt(18, 30, 0).unwrap())
    };
    let end = parse_hhmm(&config.day_end, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    (start, end)
}

/// Lazy sequence of slot start times within `[start, end)`.
///
/// The first slot is the first step-aligned tick at or after `start`; a
/// partial leading interval is skipped. The end bound is exclusive, so a
/// 22:00 day end never yields a 22:00 slot.
pub fn slot_ticks(
    start: NaiveTime,
    end: NaiveTime,
    step_minutes: i64,
) -> impl Iterator<Item = NaiveTime> {
    let step = step_minutes.max(1) as u32;
    let start_minute = start.hour() * 60 + start.minute();
    let end_minute = end.hour() * 60 + end.minute();
    let first = start_minute.div_ceil(step) * step;
    (0u32..)
        .map(move |tick| first + tick * step)
        .take_while(move |minute| *minute < end_minute)
        .map(|minute| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap())
}

/// Derive the bookable "HH:MM" slot labels for a date string.
///
/// An unparseable date yields an empty list: no times to choose from is
/// the safe, user-visible degradation. This is a static business-hours
/// rule only; it does not consult existing bookings.
pub fn available_slots(date: &str, config: &BookingConfig) -> Vec<String> {
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        tracing::debug!("Unparseable appointment date '{}', offering no slots", date);
        return Vec::new();
    };
    let (start, end) = business_window(parsed, config);
    slot_ticks(start, end, config.slot_step_minutes)
        .map(|slot| slot.format("%H:%M").to_string())
        .collect()
}

// --- Form Session Reducer ---

/// Apply one user-input event to the form state.
///
/// Pure: consumes the previous state, returns the next. Rendering
/// concerns never enter here, which keeps every transition testable in
/// isolation.
pub fn apply_event(state: BookingRequest, event: FormEvent) -> BookingRequest {
    let mut next = state;
    match event {
        FormEvent::FirstName(value) => next.first_name = value,
        FormEvent::LastName(value) => next.last_name = value,
        FormEvent::Email(value) => next.email = value,
        FormEvent::Phone(value) => next.phone = value,
        FormEvent::LicensePlate(value) => next.license_plate = value,
        FormEvent::Date(value) => next.date = value,
        FormEvent::Time(value) => next.time = value,
        FormEvent::Comments(value) => next.comments = value,
        FormEvent::SelectService { title, option } => {
            set_selection(&mut next.selected_services, &title, &option)
        }
    }
    next
}

// --- Submission Logic ---

/// Render the plain-text appointment request mail.
pub fn render_appointment_email(
    request: &BookingRequest,
) -> Result<(String, String), BookingError> {
    let summary = quote(&request.selected_services)?;
    let mut lines = vec![
        "Nieuwe afspraakaanvraag via de website".to_string(),
        String::new(),
        format!("Naam: {} {}", request.first_name, request.last_name),
        format!("E-mail: {}", request.email),
        format!("Telefoon: {}", request.phone),
        format!("Kenteken: {}", request.license_plate),
        String::new(),
        "Gekozen diensten:".to_string(),
    ];
    for selection in &request.selected_services {
        let (price_cents, duration_minutes) = selection_rate(selection)?;
        lines.push(format!(
            "  - {} ({}): EUR {} ({} min)",
            selection.title,
            selection.option,
            format_euros(price_cents),
            duration_minutes
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Totale prijs: EUR {} | Geschatte tijd: {} minuten",
        summary.total_price, summary.total_duration_minutes
    ));
    lines.push(format!("Datum: {} om {}", request.date, request.time));
    if !request.comments.is_empty() {
        lines.push(format!("Opmerkingen: {}", request.comments));
    }

    let subject = format!(
        "Afspraakaanvraag: {} {}",
        request.first_name, request.last_name
    );
    Ok((subject, lines.join("\n")))
}

fn validate_for_submission(request: &BookingRequest, today: NaiveDate) -> Result<(), BookingError> {
    if request.email.is_empty() {
        return Err(BookingError::MissingField("email"));
    }
    if request.date.is_empty() {
        return Err(BookingError::MissingField("date"));
    }
    if request.time.is_empty() {
        return Err(BookingError::MissingField("time"));
    }
    let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(request.date.clone()))?;
    if date < today {
        return Err(BookingError::PastDate(request.date.clone()));
    }
    Ok(())
}

/// Hand a finished appointment request to the email collaborator.
///
/// One attempt, no retry; the caller resets the form only on success so
/// a failed submission can be retried without data loss.
pub async fn submit_booking_logic(
    notifier: &dyn NotificationService<Error = BoxedError>,
    mailer_config: &MailerConfig,
    clock: &dyn Clock,
    request: &BookingRequest,
) -> Result<AppointmentResponse, BookingError> {
    validate_for_submission(request, clock.today())?;
    let (subject, body) = render_appointment_email(request)?;

    match notifier
        .send_email(&mailer_config.inbox_address, &subject, &body, false)
        .await
    {
        Ok(result) => {
            info!(
                "Appointment request delivered (notification id: {}, status: {})",
                result.id, result.status
            );
            Ok(AppointmentResponse {
                success: true,
                message: "We hebben uw aanvraag ontvangen en nemen spoedig contact met u op."
                    .to_string(),
            })
        }
        Err(err) => {
            // The cause stays in the log; the visitor only gets a retry hint.
            error!("Appointment mail delivery failed: {}", err);
            Err(BookingError::SendFailed(err.to_string()))
        }
    }
}
