use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use anyhow::Context;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod handlers {
    pub mod api_error;
    pub mod registration_dtos;
    pub mod registration_handlers;
}
mod api {
    pub mod recaptcha;
    pub mod sheets_webhook;
}
mod config {
    pub mod settings;
}

use config::settings::Settings;
use handlers::registration_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    settings: Settings,
    http_client: reqwest::Client,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.upstream_timeout)
            .build()?;
        Ok(Self { settings, http_client })
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/register",
            post(registration_handlers::register)
                .get(registration_handlers::register_method_not_allowed),
        );

    // Everything that is not an API route is the Yew bundle; unknown paths get
    // index.html so client-side routes survive a reload.
    if let Some(dist) = state.settings.frontend_dist.as_deref() {
        let index = format!("{}/index.html", dist.trim_end_matches('/'));
        router = router.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)));
    }

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env();
    config::settings::validate_env(&settings);

    let _guard = settings.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let bind_addr = settings.bind_addr.clone();
    let state = Arc::new(AppState::new(settings).context("failed to build HTTP client")?);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(AppState::new(Settings::default()).unwrap());
        let response = app(state)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_unknown_path_without_bundle_is_404() {
        let state = Arc::new(AppState::new(Settings::default()).unwrap());
        let response = app(state)
            .oneshot(Request::builder().uri("/register").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
