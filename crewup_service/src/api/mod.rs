use anyhow::Context;
use axum::Router;
use context::ApiContext;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Utilities
pub mod context;
pub mod middleware;

// Routes
pub mod health;
pub mod profile;
pub mod projects;

pub mod swagger;

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let port = state.config.port;

    let router = app(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .context("could not bind listener")?;

    tracing::info!("crewup service is up and running on port {}", port);

    axum::serve(listener, router.into_make_service())
        .await
        .context("error starting service")
}

/// Builds the full application router. Exposed so integration tests can mount
/// the same routes without binding a listener.
pub fn app(state: ApiContext) -> Router {
    api_router(state)
        .merge(health::router())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()))
}

fn api_router(state: ApiContext) -> Router {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/profile", profile::router())
        // The session middleware only attaches an identity; each handler
        // decides via its SessionContext extractor whether one is required.
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::attach_session::handler,
        ))
        .with_state(state)
}
