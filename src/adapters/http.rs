//! HTTP surface: `POST /receipts/process` and `GET /receipts/:id/points`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::core::processor::ReceiptProcessor;
use crate::domain::model::{PointsResponse, ProcessResponse, Receipt};
use crate::utils::error::{ReceiptError, Result};

/// Shared by every handler; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub processor: ReceiptProcessor,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        Self { processor }
    }
}

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// Machine-readable error code
    pub code: String,
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
}

/// POST /receipts/process
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that every malformed submission gets the same 400 error shape.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>> {
    // A bare `null` body is an empty receipt, like a `null` field.
    let receipt = serde_json::from_slice::<Option<Receipt>>(&body)?.unwrap_or_default();
    let id = state.processor.process(receipt)?;
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/:id/points
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let points = state.processor.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    serve_on(listener, state, shutdown_signal()).await
}

pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
