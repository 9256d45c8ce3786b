pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume",
            get(handlers::handle_get_resume).put(handlers::handle_put_resume),
        )
        .route("/api/v1/resume/compose", post(handlers::handle_compose))
        .route("/api/v1/resume/render", post(handlers::handle_render))
        .route("/api/v1/resume/pdf", get(handlers::handle_get_pdf))
        .route(
            "/api/v1/resume/form",
            get(handlers::handle_get_form).post(handlers::handle_post_form),
        )
        .route(
            "/api/v1/resume/sample",
            get(handlers::handle_get_sample).post(handlers::handle_post_sample),
        )
        .fallback(handlers::handle_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::layout::{default_page_config, FontFamily};
    use crate::storage::JsonFileStore;

    fn test_state(dir: &TempDir) -> AppState {
        let data_file: PathBuf = dir.path().join("resume_data.json");
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                data_file: data_file.clone(),
                font: FontFamily::Times,
            },
            store: Arc::new(JsonFileStore::new(data_file)),
            page_config: default_page_config(FontFamily::Times),
        }
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = TempDir::new().unwrap();
        let response = build_router(test_state(&dir))
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_compose_empty_record_is_header_only() {
        let dir = TempDir::new().unwrap();
        let response = build_router(test_state(&dir))
            .oneshot(json_request(Method::POST, "/api/v1/resume/compose", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let sections = body["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0]["kind"], "header");
        assert_eq!(sections[0]["blocks"][0]["style"], "name_header");
    }

    #[tokio::test]
    async fn test_get_resume_without_file_returns_empty_record() {
        let dir = TempDir::new().unwrap();
        let response = build_router(test_state(&dir))
            .oneshot(get_request("/api/v1/resume"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["personal_info"]["name"], "");
        assert_eq!(body["experience"], json!([]));
    }

    #[tokio::test]
    async fn test_put_then_get_resume() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir));
        let record = json!({
            "personal_info": { "name": "Jane Doe", "email": "jane@example.com" },
            "profile_summary": "Engineer."
        });

        let response = app
            .clone()
            .oneshot(json_request(Method::PUT, "/api/v1/resume", record))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/api/v1/resume")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["personal_info"]["name"], "Jane Doe");
        assert_eq!(body["profile_summary"], "Engineer.");
    }

    #[tokio::test]
    async fn test_render_returns_pdf() {
        let dir = TempDir::new().unwrap();
        let response = build_router(test_state(&dir))
            .oneshot(json_request(
                Method::POST,
                "/api/v1/resume/render",
                json!({ "personal_info": { "name": "Jane Doe" } }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(response.headers()["x-page-count"], "1");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_form_post_saves_collected_record() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir));
        let form = json!({
            "name": "Jane Doe",
            "programming": "Rust, Go",
            "experience": [
                { "job_title": "Dev", "company": "Acme", "responsibilities": "a\nb" },
                { "job_title": "No company" }
            ]
        });

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/v1/resume/form", form))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["experience"].as_array().unwrap().len(), 1);
        assert_eq!(body["skills"]["programming"], json!(["Rust", "Go"]));

        let response = app.oneshot(get_request("/api/v1/resume/form")).await.unwrap();
        let form = body_json(response).await;
        assert_eq!(form["name"], "Jane Doe");
        assert_eq!(form["experience"][0]["responsibilities"], "a\nb");
    }

    #[tokio::test]
    async fn test_sample_post_then_pdf() {
        let dir = TempDir::new().unwrap();
        let app = build_router(test_state(&dir));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/resume/sample")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/api/v1/resume/pdf")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-page-count"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_validation_error() {
        let dir = TempDir::new().unwrap();
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/api/v1/resume")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ \"experience\": 5 }"))
            .unwrap();
        let response = build_router(test_state(&dir)).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let dir = TempDir::new().unwrap();
        let response = build_router(test_state(&dir))
            .oneshot(get_request("/api/v1/nothing"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_stored_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        std::fs::write(&state.config.data_file, "{ not json").unwrap();

        let response = build_router(state)
            .oneshot(get_request("/api/v1/resume"))
            .await
            .unwrap();
        assert!(response.status().is_client_error() || response.status().is_server_error());
        let body = body_json(response).await;
        assert!(body["error"]["code"].is_string());
    }
}
