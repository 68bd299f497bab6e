// 🌐 HTTP API - axum router and handlers
// POST /v1/educate, GET /health, GET /

use crate::config::{Settings, DESCRIPTION};
use crate::error::LessonError;
use crate::lesson::{educate, LessonRequest, LessonResponse};
use crate::localize::is_recognized_topic;
use crate::VERSION;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

// ============================================================================
// RESPONSE TYPES
// ============================================================================

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    name: String,
    version: &'static str,
    description: &'static str,
}

/// Error body: {"detail": "..."}
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

impl From<LessonError> for ApiError {
    fn from(err: LessonError) -> Self {
        let status = if err.is_client_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        ApiError {
            status,
            detail: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Liveness probe
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "running",
        message: "Service is healthy",
    })
}

/// GET / - Service metadata
async fn service_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(ServiceInfo {
        name: state.settings.app_name.clone(),
        version: VERSION,
        description: DESCRIPTION,
    })
}

/// POST /v1/educate - Localized lesson for {name, region, topic}
async fn educate_user(
    payload: Result<Json<LessonRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request_id = uuid::Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        log::info!("[{}] rejected request body: {}", request_id, rejection.body_text());
        ApiError::from(rejection)
    })?;

    log::info!(
        "[{}] educate region={} topic={:?} recognized={}",
        request_id,
        request.region,
        request.topic,
        is_recognized_topic(request.region, &request.topic)
    );

    let lesson = educate(&request).map_err(|err| {
        if err.is_client_error() {
            log::info!("[{}] invalid request: {}", request_id, err);
        } else {
            log::error!(
                "[{}] failed to render lesson for {} / {:?}: {}",
                request_id,
                request.region,
                request.topic,
                err
            );
        }
        ApiError::from(err)
    })?;

    let etag = format!("\"{}\"", lesson.fingerprint());

    Ok((
        StatusCode::OK,
        [(header::ETAG, etag)],
        Json(LessonResponse::from(lesson)),
    )
        .into_response())
}

// ============================================================================
// Router
// ============================================================================

pub fn router(settings: Arc<Settings>) -> Router {
    let cors_permissive = settings.cors_permissive;
    let state = AppState { settings };

    let v1_routes = Router::new().route("/educate", post(educate_user));

    let app = Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .nest("/v1", v1_routes)
        .with_state(state);

    if cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(Settings::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Option<String>, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let etag = response
            .headers()
            .get(header::ETAG)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, etag, body)
    }

    fn post_educate(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/v1/educate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, _, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "running", "message": "Service is healthy"}));
    }

    #[tokio::test]
    async fn test_service_info() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, _, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Finscope AI");
        assert_eq!(body["version"], VERSION);
    }

    #[tokio::test]
    async fn test_educate_kenya_mpesa() {
        let payload = json!({"name": "Amara", "region": "KE", "topic": "mpesa"});
        let (status, etag, body) = send(post_educate(payload.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        let lesson = body["lesson"].as_str().unwrap();
        assert!(lesson.contains("Hi Amara, let's talk about mpesa in Kenya (English / Swahili)."));
        assert!(lesson.contains("high-interest mobile loans, overspending on airtime/data"));

        let etag = etag.unwrap();
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag.len(), 66);
    }

    #[tokio::test]
    async fn test_educate_india_default_topic() {
        let payload = json!({"name": "Raj", "region": "IN", "topic": "unknown-topic"});
        let (status, _, body) = send(post_educate(payload.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["lesson"].as_str().unwrap().contains(
            "Systematic Investment Plans (SIPs) help build long-term wealth through compounding."
        ));
    }

    #[tokio::test]
    async fn test_same_request_same_etag() {
        let payload = json!({"name": "Raj", "region": "IN", "topic": "savings"}).to_string();
        let (_, first, _) = send(post_educate(payload.clone())).await;
        let (_, second, _) = send(post_educate(payload)).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_us_credit_score_is_internal_error() {
        let payload = json!({"name": "Ana", "region": "US", "topic": "credit score"});
        let (status, etag, body) = send(post_educate(payload.to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(etag.is_none());
        assert!(body["detail"].as_str().unwrap().contains("explainer"));
    }

    #[tokio::test]
    async fn test_unknown_region_rejected() {
        let payload = json!({"name": "Zoe", "region": "FR", "topic": "savings"});
        let (status, _, body) = send(post_educate(payload.to_string())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_short_topic_and_empty_name_rejected() {
        let short_topic = json!({"name": "Zoe", "region": "US", "topic": "x"});
        let (status, _, body) = send(post_educate(short_topic.to_string())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("topic"));

        let empty_name = json!({"name": "", "region": "US", "topic": "savings"});
        let (status, _, body) = send(post_educate(empty_name.to_string())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_missing_field_and_bad_json() {
        let missing = json!({"name": "Zoe", "region": "US"});
        let (status, _, _) = send(post_educate(missing.to_string())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _, body) = send(post_educate("{not json".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }
}
