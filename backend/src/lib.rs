use std::path::Path;
use std::sync::Arc;

use axum::{routing::post, Router};
use shared::email::SEND_EMAIL_PATH;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod relay;

pub use config::Config;
pub use error::RelayError;
pub use relay::Webhook;

pub type SharedWebhook = Arc<Webhook>;

/// Relay endpoint plus the built frontend served as the fallback.
pub fn app(webhook: Webhook, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(SEND_EMAIL_PATH, post(relay::send_email))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(webhook))
}
