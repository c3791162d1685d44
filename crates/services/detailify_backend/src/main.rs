// File: services/detailify_backend/src/main.rs
use axum::{routing::get, Router};
use detailify_booking::routes as booking_routes;
use detailify_common::services::ServiceFactory;
use detailify_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod service_factory;
use service_factory::DetailifyServiceFactory;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    detailify_common::logging::init();

    let factory = DetailifyServiceFactory::new(config.clone());
    let notifier = factory.notification_service();
    if notifier.is_none() {
        tracing::warn!("No notification service available; appointment submission will answer 503.");
    }

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Detailify API!" }))
        .merge(booking_routes::routes(config.clone(), notifier));

    #[allow(unused_mut)]
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use detailify_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Detailify API",
                version = "0.1.0",
                description = "Detailify Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Detailify", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        tracing::info!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve static files in dev mode
    if cfg!(debug_assertions) {
        tracing::info!("Running in development mode, serving static files from ./dist");
        app = app.fallback_service(ServeDir::new("dist"));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");
    tracing::info!("Starting server at http://{}", addr);
    tracing::info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
