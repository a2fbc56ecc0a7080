//! HTTP routes and handlers
//!
//! Ingress handlers decode upload bodies and deposit them into the slots;
//! egress handlers open a per-viewer fan-out stream and hand it to the
//! transport. The route shapes and response bodies are a fixed wire
//! format that deployed upload devices and viewer pages rely on.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::sse::Sse;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use bytes::Bytes;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::RelayError;
use crate::relay::RelayState;
use crate::stream::{audio_stream, video_stream, MJPEG_CONTENT_TYPE};

/// Build the router with all endpoints
pub fn build_router(state: Arc<RelayState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload_frame))
        .route("/upload-audio", post(upload_audio))
        .route("/stream", get(video_feed))
        .route("/audio-stream", get(audio_feed))
        .route("/status", get(status))
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Serve the embedded viewer page
async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Receive a camera frame from the device
async fn upload_frame(
    State(state): State<Arc<RelayState>>,
    body: Bytes,
) -> Result<&'static str, RelayError> {
    state.video().store(body).await?;
    Ok("OK")
}

/// Receive an audio chunk from the device
async fn upload_audio(
    State(state): State<Arc<RelayState>>,
    body: Bytes,
) -> Result<&'static str, RelayError> {
    state.audio().store(body).await?;
    Ok("OK")
}

/// Stream MJPEG parts to one viewer until the connection closes
async fn video_feed(State(state): State<Arc<RelayState>>) -> Response {
    (
        [
            (header::CONTENT_TYPE, MJPEG_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(video_stream(state)),
    )
        .into_response()
}

/// Stream audio events to one viewer until the connection closes
async fn audio_feed(State(state): State<Arc<RelayState>>) -> Response {
    Sse::new(audio_stream(state)).into_response()
}

/// Report both feeds' freshness and viewer counts
async fn status(State(state): State<Arc<RelayState>>) -> Response {
    Json(state.status().await).into_response()
}
