//! HTTP API for predictions, schemas, health checks and Prometheus metrics

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};
use screener_lib::{
    health::ComponentStatus, FieldSpec, HealthRegistry, Outcome, Screen, ScreenerError,
    ScreenerMetrics, ScreeningEngine, StructuredLogger,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScreeningEngine>,
    pub health_registry: HealthRegistry,
    pub metrics: ScreenerMetrics,
    pub logger: StructuredLogger,
}

impl AppState {
    pub fn new(
        engine: Arc<ScreeningEngine>,
        health_registry: HealthRegistry,
        metrics: ScreenerMetrics,
        logger: StructuredLogger,
    ) -> Self {
        Self {
            engine,
            health_registry,
            metrics,
            logger,
        }
    }
}

/// Prediction request body: named field values for the selected screen
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub values: HashMap<String, f64>,
}

/// One entry of the screen listing
#[derive(Debug, Serialize)]
pub struct ScreenInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub schema_version: &'static str,
    pub field_count: usize,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct ScreenList {
    pub screens: Vec<ScreenInfo>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub screen: &'static str,
    pub title: &'static str,
    pub schema_version: &'static str,
    pub fields: &'static [FieldSpec],
}

/// JSON failure body returned for every error; a failed prediction never
/// renders as an empty success.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

fn error_response(err: &ScreenerError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match err {
        ScreenerError::UnknownScreen(_) => (StatusCode::NOT_FOUND, "unknown_screen"),
        ScreenerError::UnregisteredScreen(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "unregistered_screen")
        }
        ScreenerError::ArtifactLoad { .. } => (StatusCode::SERVICE_UNAVAILABLE, "artifact_load"),
        ScreenerError::MissingField { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "missing_field"),
        ScreenerError::InvalidFieldValue { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "invalid_field_value")
        }
        ScreenerError::ArityMismatch { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "arity_mismatch")
        }
        ScreenerError::Inference { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "inference_failed"),
        ScreenerError::UnknownLabel { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "unknown_label"),
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: code.to_string(),
        }),
    )
}

/// Health check response - returns 200 if healthy, 503 if degraded/unhealthy
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_registry.health();

    let status_code = match health.status {
        ComponentStatus::Healthy => StatusCode::OK,
        ComponentStatus::Degraded => StatusCode::OK, // Still operational
        ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

/// Readiness check response - returns 200 if ready, 503 if not ready
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness();

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// List all screens with their availability
async fn list_screens(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let available = state.engine.available_screens();
    let screens: Vec<ScreenInfo> = Screen::ALL
        .into_iter()
        .map(|screen| {
            let descriptor = screen.descriptor();
            ScreenInfo {
                id: screen.id(),
                title: descriptor.title,
                schema_version: descriptor.schema_version,
                field_count: descriptor.field_count(),
                available: available.contains(&screen),
            }
        })
        .collect();
    let total = screens.len();

    Json(ScreenList { screens, total })
}

/// Input schema for one screen
async fn get_schema(Path(screen): Path<String>) -> impl IntoResponse {
    match screener_lib::activate(&screen) {
        Ok(descriptor) => Json(SchemaResponse {
            screen: descriptor.screen.id(),
            title: descriptor.title,
            schema_version: descriptor.schema_version,
            fields: descriptor.fields,
        })
        .into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

/// Run one screening cycle and return the diagnosis
async fn predict(
    State(state): State<Arc<AppState>>,
    Path(screen): Path<String>,
    Json(request): Json<PredictRequest>,
) -> impl IntoResponse {
    let screen: Screen = match screen.parse() {
        Ok(screen) => screen,
        Err(err) => return error_response(&err).into_response(),
    };

    match state.engine.screen(screen, &request.values) {
        Ok(diagnosis) => {
            let outcome = match diagnosis.outcome {
                Outcome::Positive => "positive",
                Outcome::Negative => "negative",
            };
            state
                .logger
                .log_diagnosis(screen.id(), diagnosis.class_label, outcome);
            Json(diagnosis).into_response()
        }
        Err(err) => {
            state
                .logger
                .log_prediction_failure(screen.id(), &err.to_string());
            error_response(&err).into_response()
        }
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .route("/api/v1/screens", get(list_screens))
        .route("/api/v1/screens/:screen/schema", get(get_schema))
        .route("/api/v1/screens/:screen/predict", post(predict))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
