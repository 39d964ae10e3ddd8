use super::dto::{RenderJobDescriptor, RenderRequest};
use super::error::RenderError;
use super::service::RenderService;
use crate::common::response::{ApiSuccess, ErrorResponse};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Start rendering a video from its stored voice-over and captions
#[utoipa::path(
    post,
    path = "/render-video",
    request_body = RenderRequest,
    responses(
        (status = 200, description = "Render initiated", body = RenderJobDescriptor),
        (status = 500, description = "Render could not be initiated", body = ErrorResponse)
    ),
    tag = "Render"
)]
pub async fn render_video(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match initiate(&state, body).await {
        Ok(job) => ApiSuccess(job, StatusCode::OK).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn initiate(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> Result<RenderJobDescriptor, RenderError> {
    let body = body.map_err(|e| RenderError::InvalidRequest(e.body_text()))?;
    let req = RenderRequest::from_body(&body)?;
    RenderService::initiate(state, req).await
}

#[cfg(test)]
mod tests {
    use crate::app::create_app;
    use crate::modules::render::testing::{InMemoryVideoStore, UnreachableVideoStore, state_with};
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn seeded_store() -> InMemoryVideoStore {
        InMemoryVideoStore::default()
            .with(
                "abc123",
                Some("https://store/a.mp3"),
                Some(json!([
                    {"start": 0, "end": 12.5, "text": "First line"},
                    {"start": 12.5, "end": 47.25, "text": "Second line"}
                ])),
            )
            .with("silent", None, Some(Value::Null))
    }

    async fn send(store: InMemoryVideoStore, method: Method, uri: &str, body: Body) -> Response {
        create_app(state_with(store))
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
        assert_eq!(
            headers["access-control-allow-headers"],
            "Content-Type, Authorization, X-Client-Info, Apikey"
        );
    }

    #[tokio::test]
    async fn initiates_render_for_existing_video() {
        let body = Body::from(r#"{"video_id":"abc123","template_id":3}"#);
        let response = send(seeded_store(), Method::POST, "/render-video", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(
            json["video_url"],
            "https://project.supabase.co/storage/v1/object/public/videos/video_abc123_template_3.mp4"
        );
        assert!(json["message"].as_str().unwrap().starts_with("Video rendering initiated"));
        assert_eq!(
            json["render_details"],
            json!({
                "audio_source": "https://store/a.mp3",
                "captions_count": 2,
                "template": 3,
                "estimated_duration": "47.25"
            })
        );
    }

    #[tokio::test]
    async fn video_without_captions_reports_fallback() {
        let body = Body::from(r#"{"video_id":"silent","template_id":1}"#);
        let response = send(seeded_store(), Method::POST, "/render-video", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["render_details"]["audio_source"], Value::Null);
        assert_eq!(json["render_details"]["captions_count"], 0);
        assert_eq!(json["render_details"]["estimated_duration"], "60.00");
    }

    #[tokio::test]
    async fn same_request_yields_same_locator() {
        let mut urls = Vec::new();
        for _ in 0..2 {
            let body = Body::from(r#"{"video_id":"abc123","template_id":5}"#);
            let response = send(seeded_store(), Method::POST, "/render-video", body).await;
            urls.push(json_body(response).await["video_url"].clone());
        }
        assert_eq!(urls[0], urls[1]);
    }

    #[tokio::test]
    async fn unknown_video_is_reported_as_not_found() {
        let body = Body::from(r#"{"video_id":"ghost","template_id":3}"#);
        let response = send(seeded_store(), Method::POST, "/render-video", body).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&response);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "error": "Video record not found"})
        );
    }

    #[tokio::test]
    async fn unreachable_store_is_reported_as_not_found() {
        let response = create_app(state_with(UnreachableVideoStore))
            .oneshot(
                Request::post("/render-video")
                    .body(Body::from(r#"{"video_id":"abc123","template_id":3}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "error": "Video record not found"})
        );
    }

    #[tokio::test]
    async fn malformed_bodies_get_failure_envelope() {
        for raw in ["", "{", "[]", r#"{"video_id":"abc123"}"#, r#"{"video_id":"abc123","template_id":"x"}"#] {
            let response = send(seeded_store(), Method::POST, "/render-video", Body::from(raw)).await;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "body {:?}", raw);
            assert_cors(&response);
            let json = json_body(response).await;
            assert_eq!(json["success"], false);
            assert!(json["error"].as_str().unwrap().starts_with("Invalid request body"));
        }
    }

    #[tokio::test]
    async fn oversized_body_gets_failure_envelope() {
        let padding = "x".repeat(2 * 1024 * 1024);
        let raw = format!(r#"{{"video_id":"{}","template_id":1}}"#, padding);
        let response = send(seeded_store(), Method::POST, "/render-video", Body::from(raw)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["success"], false);
    }

    #[tokio::test]
    async fn malformed_captions_get_failure_envelope() {
        let store = InMemoryVideoStore::default().with("broken", None, Some(json!("not a list")));
        let body = Body::from(r#"{"video_id":"broken","template_id":2}"#);
        let response = send(store, Method::POST, "/render-video", body).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({
                "success": false,
                "error": "Malformed caption track: expected a list of caption entries"
            })
        );
    }

    #[tokio::test]
    async fn preflight_is_empty_ok_on_any_path() {
        for uri in ["/render-video", "/", "/functions/v1/render-video", "/health"] {
            let response = send(seeded_store(), Method::OPTIONS, uri, Body::from("garbage")).await;

            assert_eq!(response.status(), StatusCode::OK, "uri {}", uri);
            assert_cors(&response);
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(bytes.is_empty());
        }
    }

    #[tokio::test]
    async fn any_other_path_reaches_render_handler() {
        let body = Body::from(r#"{"video_id":"abc123","template_id":4}"#);
        let response = send(seeded_store(), Method::POST, "/functions/v1/render-video", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert!(json["video_url"].as_str().unwrap().ends_with("video_abc123_template_4.mp4"));
    }

    #[tokio::test]
    async fn get_without_body_is_a_failure_not_a_405() {
        let response = send(seeded_store(), Method::GET, "/render-video", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&response);
        assert_eq!(json_body(response).await["success"], false);
    }

    #[tokio::test]
    async fn health_probe_carries_cors_headers() {
        let response = send(seeded_store(), Method::GET, "/health", Body::empty()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
    }
}
