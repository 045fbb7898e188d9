use crate::pages;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use roastme_app::domain::{Roast, RoastLevel};
use roastme_app::infrastructure::security::InputSanitizer;
use roastme_app::AppContext;
use roastme_errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

#[derive(Debug, Deserialize)]
pub struct RoastPayload {
    pub name: Option<String>,
    pub profession: Option<String>,
    pub level: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoastResponse {
    pub success: bool,
    pub roast: String,
    pub level: RoastLevel,
    pub name: String,
}

impl From<Roast> for RoastResponse {
    fn from(roast: Roast) -> Self {
        Self {
            success: true,
            roast: roast.roast_text,
            level: roast.level,
            name: roast.name,
        }
    }
}

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/roast", post(create_roast))
        .route("/roast", get(pages::form_page).post(pages::submit_form))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(ctx)
}

pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "🔥 RoastMe AI Backend is running!",
        "endpoints": {
            "roast": "POST /api/roast"
        }
    }))
}

async fn create_roast(
    State(ctx): State<AppContext>,
    payload: Result<Json<RoastPayload>, JsonRejection>,
) -> Result<Json<RoastResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!("Rejected roast body: {}", e.body_text());
        AppError::InvalidBody(e.body_text())
    })?;

    let request = InputSanitizer::validate_roast_input(
        payload.name.as_deref(),
        payload.profession.as_deref(),
        payload.level.as_deref(),
        payload.about.as_deref(),
    )
    .inspect_err(log_failure)?;

    tracing::info!("Generating {} roast for {}...", request.level, request.name);
    let roast = ctx.generate_roast.execute(request).await?;
    tracing::info!("Roast generated successfully for {}", roast.name);

    Ok(Json(RoastResponse::from(roast)))
}

pub fn log_failure(e: &AppError) {
    if e.is_client_error() {
        tracing::warn!("Rejected roast request: {}", e);
    } else {
        tracing::error!("Roast request failed: {}", e);
    }
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!("No route for {}", uri);
    AppError::NotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Server error: {}", detail);
    AppError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use roastme_app::application::RoastProvider;
    use roastme_app::domain::RoastPrompt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    const ROAST: &str = "Raj studies so hard the textbooks ask for a break.";

    #[derive(Default)]
    struct StubProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RoastProvider for StubProvider {
        async fn generate(&self, _prompt: &RoastPrompt) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ROAST.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl RoastProvider for FailingProvider {
        async fn generate(&self, _prompt: &RoastPrompt) -> Result<String, AppError> {
            Err(AppError::ProviderError(
                "401 Invalid API Key gsk_leaked_secret".to_string(),
            ))
        }
    }

    fn app_with(provider: Arc<dyn RoastProvider>) -> Router {
        router(AppContext::new(provider))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/").body(Body::empty()).unwrap();
        let (status, json) = send(app_with(Arc::new(StubProvider::default())), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["endpoints"]["roast"], "POST /api/roast");
    }

    #[tokio::test]
    async fn test_roast_success() {
        let provider = Arc::new(StubProvider::default());
        let request = post_json(
            "/api/roast",
            json!({"name": "Raj", "profession": "Student", "level": "soft", "about": ""}),
        );
        let (status, json) = send(app_with(provider.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["roast"], ROAST);
        assert_eq!(json["level"], "soft");
        assert_eq!(json["name"], "Raj");
        assert!(json.get("error").is_none());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_roast_echoes_normalized_fields() {
        let request = post_json(
            "/api/roast",
            json!({"name": "  Raj  ", "profession": " Student ", "level": "BRUTAL"}),
        );
        let (status, json) = send(app_with(Arc::new(StubProvider::default())), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["level"], "brutal");
        assert_eq!(json["name"], "Raj");
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_without_provider_call() {
        let bodies = [
            json!({"profession": "Student", "level": "soft"}),
            json!({"name": "Raj", "level": "soft"}),
            json!({"name": "Raj", "profession": "Student"}),
            json!({"name": "", "profession": "Student", "level": "soft"}),
            json!({"name": null, "profession": "Student", "level": "soft"}),
        ];

        for body in bodies {
            let provider = Arc::new(StubProvider::default());
            let (status, json) =
                send(app_with(provider.clone()), post_json("/api/roast", body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["success"], false);
            assert_eq!(
                json["error"],
                "Missing required fields: name, profession, and level are required"
            );
            assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_invalid_level_rejected() {
        let provider = Arc::new(StubProvider::default());
        let request = post_json(
            "/api/roast",
            json!({"name": "Raj", "profession": "Student", "level": "savage"}),
        );
        let (status, json) = send(app_with(provider.clone()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid roast level"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_generic_500() {
        let request = post_json(
            "/api/roast",
            json!({"name": "Raj", "profession": "Student", "level": "medium"}),
        );
        let (status, json) = send(app_with(Arc::new(FailingProvider)), request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to generate roast. Please try again.");
        assert!(!json.to_string().contains("gsk_leaked_secret"));
        assert!(!json.to_string().contains("Invalid API Key"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let request = Request::post("/api/roast")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, json) = send(app_with(Arc::new(StubProvider::default())), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_body_without_json_content_type_is_invalid_body() {
        let provider = Arc::new(StubProvider::default());
        let request = Request::post("/api/roast")
            .body(Body::from(
                json!({"name": "Raj", "profession": "Student", "level": "soft"}).to_string(),
            ))
            .unwrap();
        let (status, json) = send(app_with(provider.clone()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"success": false, "error": "Invalid request body"}));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_long_name_echoed_whole() {
        let name = "A".repeat(60);
        let request = post_json(
            "/api/roast",
            json!({"name": name, "profession": "Student", "level": "soft"}),
        );
        let (status, json) = send(app_with(Arc::new(StubProvider::default())), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], name);
    }

    #[tokio::test]
    async fn test_unknown_route_and_method() {
        let request = Request::get("/api/nope").body(Body::empty()).unwrap();
        let (status, json) = send(app_with(Arc::new(StubProvider::default())), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({"success": false, "error": "Endpoint not found"}));

        let request = Request::get("/api/roast").body(Body::empty()).unwrap();
        let (status, json) = send(app_with(Arc::new(StubProvider::default())), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Endpoint not found");
    }

    #[tokio::test]
    async fn test_repeated_requests_are_independent() {
        let provider = Arc::new(StubProvider::default());
        let app = app_with(provider.clone());
        let body = json!({"name": "Raj", "profession": "Student", "level": "soft"});

        let (first_status, first) = send(app.clone(), post_json("/api/roast", body.clone())).await;
        let (second_status, second) = send(app, post_json("/api/roast", body)).await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_500() {
        async fn boom() -> &'static str {
            panic!("secret panic detail")
        }

        let app: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let request = Request::get("/boom").body(Body::empty()).unwrap();
        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"success": false, "error": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let origins = vec!["http://localhost:3000".to_string()];
        let app = app_with(Arc::new(StubProvider::default())).layer(cors_layer(&origins));

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/roast")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );

        let request = Request::get("/")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
