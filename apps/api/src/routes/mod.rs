pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::StubCompletion;

    fn router() -> Router {
        build_router(AppState {
            config: Config::for_tests(),
            completion: Arc::new(StubCompletion::replying("unused")),
        })
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "interview-api");
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_upload_bytes"], 1024 * 1024);
    }

    #[tokio::test]
    async fn test_health_does_not_call_completion_service() {
        let stub = Arc::new(StubCompletion::failing());
        let response = build_router(AppState {
            config: Config::for_tests(),
            completion: stub.clone(),
        })
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(stub.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_rejects_get() {
        let response = router()
            .oneshot(Request::get("/analyze").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_analyze_without_multipart_is_client_error() {
        let response = router()
            .oneshot(
                Request::post("/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
