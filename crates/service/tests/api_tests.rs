//! Integration tests for the service API endpoints

use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use screener_lib::{
    health::components, ClassLabel, Classifier, FeatureVector, HealthRegistry, ModelRegistry,
    Screen, ScreenerError, ScreeningEngine,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

/// Deterministic stand-in for a trained artifact
struct FixedClassifier {
    arity: usize,
    label: ClassLabel,
}

impl Classifier for FixedClassifier {
    fn arity(&self) -> usize {
        self.arity
    }

    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, ScreenerError> {
        Ok(self.label)
    }
}

#[derive(Clone)]
struct AppState {
    engine: Arc<ScreeningEngine>,
    health_registry: HealthRegistry,
}

#[derive(Deserialize)]
struct PredictRequest {
    values: HashMap<String, f64>,
}

async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_registry.health();
    let status_code = match health.status {
        screener_lib::ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };
    (status_code, Json(health))
}

async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness();
    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status_code, Json(readiness))
}

fn error_status(err: &ScreenerError) -> StatusCode {
    match err {
        ScreenerError::UnknownScreen(_) => StatusCode::NOT_FOUND,
        ScreenerError::MissingField { .. } | ScreenerError::InvalidFieldValue { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ScreenerError::UnregisteredScreen(_) | ScreenerError::ArtifactLoad { .. } => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn predict(
    State(state): State<Arc<AppState>>,
    Path(screen): Path<String>,
    Json(request): Json<PredictRequest>,
) -> impl IntoResponse {
    let screen: Screen = match screen.parse() {
        Ok(screen) => screen,
        Err(err) => {
            return (
                error_status(&err),
                Json(serde_json::json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    };

    match state.engine.screen(screen, &request.values) {
        Ok(diagnosis) => Json(diagnosis).into_response(),
        Err(err) => (
            error_status(&err),
            Json(serde_json::json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

async fn get_schema(Path(screen): Path<String>) -> impl IntoResponse {
    match screener_lib::activate(&screen) {
        Ok(descriptor) => Json(serde_json::json!({
            "screen": descriptor.screen.id(),
            "schema_version": descriptor.schema_version,
            "fields": descriptor.fields,
        }))
        .into_response(),
        Err(err) => (
            error_status(&err),
            Json(serde_json::json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

fn create_test_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/api/v1/screens/:screen/schema", get(get_schema))
        .route("/api/v1/screens/:screen/predict", post(predict))
        .with_state(state)
}

fn setup_test_app(label: ClassLabel) -> (Router, Arc<AppState>) {
    let registry = ModelRegistry::builder()
        .register(Screen::Diabetes, Box::new(FixedClassifier { arity: 8, label }))
        .register(
            Screen::BreastCancer,
            Box::new(FixedClassifier { arity: 9, label }),
        )
        .build();
    let engine = Arc::new(ScreeningEngine::new(registry));

    let health_registry = HealthRegistry::new();
    health_registry.register(components::MODEL_REGISTRY);
    health_registry.register(components::PREDICTOR);

    let state = Arc::new(AppState {
        engine,
        health_registry,
    });
    let router = create_test_router(state.clone());

    (router, state)
}

fn diabetes_body() -> serde_json::Value {
    serde_json::json!({
        "values": {
            "Pregnancies": 6, "Glucose": 148, "BloodPressure": 72,
            "SkinThickness": 35, "Insulin": 0, "BMI": 33.6,
            "DiabetesPedigreeFunction": 0.627, "Age": 50
        }
    })
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_healthz_returns_ok_when_healthy() {
    let (app, _state) = setup_test_app(1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health = body_json(response).await;
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn test_readyz_returns_503_before_ready() {
    let (app, _state) = setup_test_app(1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/readyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_readyz_returns_ok_when_ready() {
    let (app, state) = setup_test_app(1);
    state.health_registry.set_ready(true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/readyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_predict_diabetes_positive() {
    let (app, _state) = setup_test_app(1);

    let response = app
        .oneshot(post_json("/api/v1/screens/diabetes/predict", &diabetes_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let diagnosis = body_json(response).await;
    assert_eq!(diagnosis["screen"], "diabetes");
    assert_eq!(diagnosis["class_label"], 1);
    assert_eq!(diagnosis["outcome"], "positive");
    assert_eq!(diagnosis["message"], "The person is likely to have diabetes");
}

#[tokio::test]
async fn test_predict_diabetes_negative() {
    let (app, _state) = setup_test_app(0);

    let response = app
        .oneshot(post_json("/api/v1/screens/diabetes/predict", &diabetes_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let diagnosis = body_json(response).await;
    assert_eq!(diagnosis["outcome"], "negative");
}

#[tokio::test]
async fn test_predict_unknown_screen_returns_404() {
    let (app, _state) = setup_test_app(1);

    let response = app
        .oneshot(post_json("/api/v1/screens/liver/predict", &diabetes_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(response).await;
    assert!(error["error"].as_str().unwrap().contains("liver"));
}

#[tokio::test]
async fn test_predict_missing_field_returns_422() {
    let (app, _state) = setup_test_app(1);

    let mut body = diabetes_body();
    body["values"].as_object_mut().unwrap().remove("Glucose");

    let response = app
        .oneshot(post_json("/api/v1/screens/diabetes/predict", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = body_json(response).await;
    assert!(error["error"].as_str().unwrap().contains("Glucose"));
}

#[tokio::test]
async fn test_predict_unregistered_screen_returns_503() {
    let (app, _state) = setup_test_app(1);

    let values: serde_json::Map<String, serde_json::Value> = Screen::Parkinsons
        .descriptor()
        .fields
        .iter()
        .map(|f| (f.name.to_string(), serde_json::json!(f.min)))
        .collect();
    let body = serde_json::json!({ "values": values });

    let response = app
        .oneshot(post_json("/api/v1/screens/parkinsons/predict", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_predict_unknown_label_returns_500() {
    // Stub emits class 9, outside every screen's documented set
    let (app, _state) = setup_test_app(9);

    let response = app
        .oneshot(post_json("/api/v1/screens/diabetes/predict", &diabetes_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_breast_cancer_final_convention_over_http() {
    let (app, _state) = setup_test_app(1);

    let values: serde_json::Map<String, serde_json::Value> = Screen::BreastCancer
        .descriptor()
        .fields
        .iter()
        .map(|f| (f.name.to_string(), serde_json::json!(5)))
        .collect();
    let body = serde_json::json!({ "values": values });

    let response = app
        .oneshot(post_json("/api/v1/screens/breast-cancer/predict", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let diagnosis = body_json(response).await;
    assert_eq!(diagnosis["message"], "The tumor is likely malignant");
}

#[tokio::test]
async fn test_schema_endpoint_lists_declared_fields() {
    let (app, _state) = setup_test_app(1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/screens/diabetes/schema")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let schema = body_json(response).await;
    assert_eq!(schema["schema_version"], "diabetes/v1");
    let fields = schema["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 8);
    assert_eq!(fields[0]["name"], "Pregnancies");
    assert_eq!(fields[7]["name"], "Age");
}

#[tokio::test]
async fn test_schema_unknown_screen_returns_404() {
    let (app, _state) = setup_test_app(1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/screens/liver/schema")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
