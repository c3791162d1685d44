// --- File: crates/detailify_booking/src/routes.rs ---

use crate::handlers::{
    apply_event_handler, create_session_handler, get_availability_handler, get_catalog_handler,
    get_session_handler, submit_session_handler, BookingState,
};
use axum::{
    routing::{get, post},
    Router,
};
use detailify_common::services::{BoxedError, NotificationService, SystemClock};
use detailify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the booking feature.
///
/// The notifier is the email collaborator used by submission; pass `None`
/// when email delivery is disabled and submission answers 503.
pub fn routes(
    config: Arc<AppConfig>,
    notifier: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
) -> Router {
    let state = Arc::new(BookingState::new(config, notifier, Arc::new(SystemClock)));

    Router::new()
        .route("/catalog", get(get_catalog_handler))
        .route("/availability", get(get_availability_handler))
        .route("/appointments/session", post(create_session_handler))
        .route(
            "/appointments/session/{session_id}",
            get(get_session_handler),
        )
        .route(
            "/appointments/session/{session_id}/events",
            post(apply_event_handler),
        )
        .route(
            "/appointments/session/{session_id}/submit",
            post(submit_session_handler),
        )
        .with_state(state)
}
