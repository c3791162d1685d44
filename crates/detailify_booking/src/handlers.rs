// --- File: crates/detailify_booking/src/handlers.rs ---
use crate::catalog::{find_entry, CatalogEntry, FLAT_SELECTION, SERVICE_CATALOG};
use crate::logic::{
    apply_event, available_slots, quote, submit_booking_logic, AppointmentResponse,
    AvailabilityQuery, AvailableSlotsResponse, BookingError, SessionCreatedResponse, SessionView,
};
use crate::models::{BookingRequest, FormEvent};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use detailify_common::services::{BoxedError, Clock, NotificationService};
use detailify_config::AppConfig;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

// Define shared state needed by booking handlers
pub struct BookingState {
    pub config: Arc<AppConfig>,
    /// The email collaborator; absent when the mailer feature is off or
    /// disabled at runtime.
    pub notifier: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
    pub clock: Arc<dyn Clock>,
    sessions: Mutex<HashMap<Uuid, BookingRequest>>,
}

impl BookingState {
    pub fn new(
        config: Arc<AppConfig>,
        notifier: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            notifier,
            clock,
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct CatalogResponse {
    pub services: &'static [CatalogEntry],
}

/// Map a booking error to the HTTP boundary.
///
/// Desync variants are server bugs and must not leak catalog internals;
/// send failures surface only a generic retry message, the cause stays in
/// the log at the collaborator boundary.
pub(crate) fn map_booking_error(err: BookingError) -> (StatusCode, String) {
    match &err {
        BookingError::SessionNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        BookingError::MissingField(_)
        | BookingError::InvalidDate(_)
        | BookingError::PastDate(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        BookingError::NotifierUnavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Email delivery is not available.".to_string(),
        ),
        BookingError::SendFailed(_) => (
            StatusCode::BAD_GATEWAY,
            "Er is een fout opgetreden. Probeer het later opnieuw of neem telefonisch contact met ons op."
                .to_string(),
        ),
        BookingError::UnknownService(_) | BookingError::UnknownOption { .. } => {
            error!("Catalog desync while serving booking request: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error".to_string(),
            )
        }
    }
}

/// The presentation layer may only offer catalog choices; reject anything
/// else before it reaches the selection set.
fn validate_selection_event(title: &str, option: &str) -> Result<(), BookingError> {
    if option.is_empty() {
        // Deselects are always allowed, selected or not.
        return Ok(());
    }
    let entry =
        find_entry(title).ok_or_else(|| BookingError::UnknownService(title.to_string()))?;
    match entry {
        CatalogEntry::Tiered { options, .. } => {
            if options.iter().any(|candidate| candidate.name == option) {
                Ok(())
            } else {
                Err(BookingError::UnknownOption {
                    service: title.to_string(),
                    option: option.to_string(),
                })
            }
        }
        CatalogEntry::Flat { .. } => {
            if option == FLAT_SELECTION {
                Ok(())
            } else {
                Err(BookingError::UnknownOption {
                    service: title.to_string(),
                    option: option.to_string(),
                })
            }
        }
    }
}

fn session_view(session_id: Uuid, request: BookingRequest) -> Result<SessionView, BookingError> {
    let summary = quote(&request.selected_services)?;
    Ok(SessionView {
        session_id,
        request,
        summary,
    })
}

/// Handler to list the service catalog.
#[axum::debug_handler]
pub async fn get_catalog_handler() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        services: SERVICE_CATALOG,
    })
}

/// Handler to get available time slots for a date.
#[axum::debug_handler]
pub async fn get_availability_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Json<AvailableSlotsResponse> {
    let slots = available_slots(&query.date, &state.config.booking);
    Json(AvailableSlotsResponse { slots })
}

/// Handler to open a fresh, empty appointment form session.
#[axum::debug_handler]
pub async fn create_session_handler(
    State(state): State<Arc<BookingState>>,
) -> Json<SessionCreatedResponse> {
    let session_id = Uuid::new_v4();
    state
        .sessions
        .lock()
        .await
        .insert(session_id, BookingRequest::default());
    info!("Opened booking session {}", session_id);
    Json(SessionCreatedResponse { session_id })
}

/// Handler to read a session's form state and quote.
#[axum::debug_handler]
pub async fn get_session_handler(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, (StatusCode, String)> {
    let request = state
        .sessions
        .lock()
        .await
        .get(&session_id)
        .cloned()
        .ok_or_else(|| map_booking_error(BookingError::SessionNotFound(session_id)))?;
    session_view(session_id, request)
        .map(Json)
        .map_err(map_booking_error)
}

/// Handler to apply one form event to a session.
#[axum::debug_handler]
pub async fn apply_event_handler(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
    Json(event): Json<FormEvent>,
) -> Result<Json<SessionView>, (StatusCode, String)> {
    if let FormEvent::SelectService { title, option } = &event {
        validate_selection_event(title, option)
            .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    }

    let next = {
        let mut sessions = state.sessions.lock().await;
        let request = sessions
            .get_mut(&session_id)
            .ok_or_else(|| map_booking_error(BookingError::SessionNotFound(session_id)))?;
        let next = apply_event(request.clone(), event);
        *request = next.clone();
        next
    };
    session_view(session_id, next)
        .map(Json)
        .map_err(map_booking_error)
}

/// Handler to submit a session's appointment request.
#[axum::debug_handler]
pub async fn submit_session_handler(
    State(state): State<Arc<BookingState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, (StatusCode, String)> {
    let request = state
        .sessions
        .lock()
        .await
        .get(&session_id)
        .cloned()
        .ok_or_else(|| map_booking_error(BookingError::SessionNotFound(session_id)))?;

    let notifier = state
        .notifier
        .as_ref()
        .ok_or_else(|| map_booking_error(BookingError::NotifierUnavailable))?;
    let mailer_config = state
        .config
        .mailer
        .as_ref()
        .ok_or_else(|| map_booking_error(BookingError::NotifierUnavailable))?;

    match submit_booking_logic(
        notifier.as_ref(),
        mailer_config,
        state.clock.as_ref(),
        &request,
    )
    .await
    {
        Ok(response) => {
            // Success wipes the form; a failed send leaves it intact for retry.
            state
                .sessions
                .lock()
                .await
                .insert(session_id, BookingRequest::default());
            info!("Booking session {} submitted and reset", session_id);
            Ok(Json(response))
        }
        Err(err) => Err(map_booking_error(err)),
    }
}
