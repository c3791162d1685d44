// File: crates/detailify_booking/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AppointmentResponse, AvailabilityQuery, AvailableSlotsResponse, SessionCreatedResponse,
    SessionView,
};
use crate::models::{BookingRequest, FormEvent, QuoteSummary, SelectedService};

#[utoipa::path(
    get,
    path = "/catalog",
    responses(
        (status = 200, description = "The full service catalog, in display order",
         example = json!({
             "services": [
                 {
                     "kind": "tiered",
                     "title": "Exterieur Reiniging",
                     "options": [
                         {"name": "Basis", "price_cents": 4999, "duration_minutes": 60,
                          "features": ["Handwas", "Velgen reinigen", "Ramen wassen"]}
                     ]
                 },
                 {
                     "kind": "flat",
                     "title": "Koplampen Polijsten",
                     "price_cents": 5999,
                     "duration_minutes": 45,
                     "description": "Herstel de helderheid van uw koplampen voor betere zichtbaarheid."
                 }
             ]
         })
        )
    )
)]
fn doc_get_catalog_handler() {}

#[utoipa::path(
    get,
    path = "/availability",
    params(
        ("date" = String, Query, description = "Appointment date in YYYY-MM-DD format", example = "2026-08-15", format = "date")
    ),
    responses(
        (status = 200, description = "Bookable time slots for the date", body = AvailableSlotsResponse,
         example = json!({"slots": ["18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30"]})
        )
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    post,
    path = "/appointments/session",
    responses(
        (status = 200, description = "A fresh, empty appointment form session", body = SessionCreatedResponse,
         example = json!({"session_id": "123e4567-e89b-12d3-a456-426614174000"})
        )
    )
)]
fn doc_create_session_handler() {}

#[utoipa::path(
    get,
    path = "/appointments/session/{session_id}",
    params(
        ("session_id" = String, Path, description = "The booking session id")
    ),
    responses(
        (status = 200, description = "Current form state plus quote", body = SessionView),
        (status = 404, description = "Session not found")
    )
)]
fn doc_get_session_handler() {}

#[utoipa::path(
    post,
    path = "/appointments/session/{session_id}/events",
    params(
        ("session_id" = String, Path, description = "The booking session id")
    ),
    request_body(content = FormEvent, example = json!({
        "type": "select_service",
        "value": {"title": "Exterieur Reiniging", "option": "Premium"}
    })),
    responses(
        (status = 200, description = "Updated form state plus quote", body = SessionView),
        (status = 400, description = "Selection references a service or option the catalog does not offer"),
        (status = 404, description = "Session not found")
    )
)]
fn doc_apply_event_handler() {}

#[utoipa::path(
    post,
    path = "/appointments/session/{session_id}/submit",
    params(
        ("session_id" = String, Path, description = "The booking session id")
    ),
    responses(
        (status = 200, description = "Appointment request delivered; the form is reset", body = AppointmentResponse,
         example = json!({
             "success": true,
             "message": "We hebben uw aanvraag ontvangen en nemen spoedig contact met u op."
         })
        ),
        (status = 422, description = "Missing or invalid contact/date fields"),
        (status = 502, description = "Email delivery failed; the form is kept for retry"),
        (status = 503, description = "Email delivery is not available")
    )
)]
fn doc_submit_session_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_catalog_handler,
        doc_get_availability_handler,
        doc_create_session_handler,
        doc_get_session_handler,
        doc_apply_event_handler,
        doc_submit_session_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailableSlotsResponse,
            SessionCreatedResponse,
            SessionView,
            AppointmentResponse,
            BookingRequest,
            SelectedService,
            FormEvent,
            QuoteSummary
        )
    ),
    tags(
        (name = "booking", description = "Appointment booking API")
    ),
    servers(
        (url = "/api", description = "Booking API server")
    )
)]
pub struct BookingApiDoc;
