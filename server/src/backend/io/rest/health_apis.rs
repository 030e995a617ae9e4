use axum::{http::StatusCode, response::{IntoResponse, Json}};
use shared::HealthResponse;
use tracing::info;

/// Liveness probe; does not require a caller identity
pub async fn health() -> impl IntoResponse {
    info!("GET /health");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            message: "Spend & streak service is running".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use crate::backend::test_utils::TestApp;
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn test_health_needs_no_identity() {
        let app = TestApp::new().await;
        let (status, body) = app.send(Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
