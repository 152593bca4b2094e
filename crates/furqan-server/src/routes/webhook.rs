//! Webhook Routes - the inbound HTTP surface
//!
//! The platform pushes every update as a POST to the webhook root.
//! Every request path terminates in an acknowledgement: ignored and
//! handled updates alike get 200, only a failed reply delivery gets 500.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tracing::error;

use crate::AppState;

const LIVENESS_BODY: &str = "Bot is running!";

/// Liveness probe, also what a browser sees when opening the bot URL
pub async fn liveness() -> &'static str {
    LIVENESS_BODY
}

/// Process one webhook payload
pub async fn receive_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, (StatusCode, String)> {
    match state.relay.handle(&body).await {
        Ok(_) => Ok("OK"),
        Err(e) => {
            error!(error = %e, "Webhook processing failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(liveness).post(receive_update))
}
