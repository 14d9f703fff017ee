use axum::{Router, extract::State, routing::post};

use crate::{Handler, envelope::Envelope, response::HandlerResponse};

/// Create the endpoint router for local use
///
/// The request body is treated exactly like an API Gateway proxy body.
pub fn endpoint_router() -> Router<Handler> {
    Router::new().route("/v1/narrate", post(narrate))
}

async fn narrate(State(handler): State<Handler>, body: String) -> HandlerResponse {
    tracing::debug!("narrate handler called, body_len={}", body.len());

    handler.handle(&Envelope::proxy(body)).await
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use bytes::Bytes;
    use http_body_util::BodyExt;
    use narrate_config::ConfigSource;
    use narrate_storage::{ObjectLocation, ObjectStore, PutObject};
    use tower::ServiceExt;
    use tts::{SpeechRequest, SpeechResponse, SpeechSynthesizer};

    use super::*;

    struct FixedSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for FixedSynthesizer {
        async fn synthesize(&self, _request: SpeechRequest) -> tts::Result<SpeechResponse> {
            Ok(SpeechResponse {
                audio: Bytes::from_static(b"ID3"),
                content_type: "audio/mpeg".to_owned(),
            })
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct AcceptingStore;

    #[async_trait]
    impl ObjectStore for AcceptingStore {
        async fn put(&self, object: PutObject) -> narrate_storage::Result<ObjectLocation> {
            Ok(object.location())
        }

        fn name(&self) -> &str {
            "accepting"
        }
    }

    fn app() -> Router {
        let config: Arc<dyn ConfigSource> =
            Arc::new(HashMap::from([("BUCKET_NAME".to_owned(), "dev-bucket".to_owned())]));
        let handler =
            Handler::new(Arc::new(FixedSynthesizer), Arc::new(AcceptingStore)).with_config_source(config);

        endpoint_router().with_state(handler)
    }

    async fn send(body: &'static str) -> (http::StatusCode, Option<String>, serde_json::Value) {
        let request = http::Request::post("/v1/narrate").body(Body::from(body)).unwrap();
        let response = app().oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn stores_audio_and_returns_location() {
        let (status, content_type, body) = send(r#"{"text":"Hello world"}"#).await;

        assert_eq!(status, http::StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert!(
            body["s3_uri"]
                .as_str()
                .unwrap()
                .starts_with("s3://dev-bucket/polly-audio/beta/")
        );
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let (status, content_type, body) = send("not json").await;

        assert_eq!(status, http::StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body["error"], "Invalid JSON body");
    }

    #[tokio::test]
    async fn empty_body_is_missing_text() {
        let (status, _, body) = send("").await;

        assert_eq!(status, http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing 'text' in request body");
    }
}
