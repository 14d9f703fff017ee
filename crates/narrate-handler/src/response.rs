use std::collections::BTreeMap;

use http::StatusCode;
use narrate_storage::ObjectLocation;
use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Used only if serializing a response body ever fails
const FALLBACK_BODY: &str = r#"{"error":"Internal server error"}"#;

/// Response in the API Gateway proxy integration shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON document serialized as a string
    pub body: String,
}

#[derive(Serialize)]
struct SuccessBody<'a> {
    message: &'a str,
    s3_uri: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl HandlerResponse {
    pub fn success(location: &ObjectLocation) -> Self {
        Self::json(
            StatusCode::OK,
            &SuccessBody {
                message: "Audio generated successfully",
                s3_uri: location.to_string(),
            },
        )
    }

    pub fn from_error(error: &HandlerError) -> Self {
        Self::json(
            error.status_code(),
            &ErrorBody {
                error: error.client_message(),
                detail: error.detail(),
            },
        )
    }

    fn json(status: StatusCode, body: &impl Serialize) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to serialize response body");
            FALLBACK_BODY.to_owned()
        });

        Self {
            status_code: status.as_u16(),
            headers: BTreeMap::from([("content-type".to_owned(), JSON_CONTENT_TYPE.to_owned())]),
            body,
        }
    }
}

#[cfg(feature = "http")]
impl axum::response::IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        for (name, value) in self.headers {
            if let (Ok(name), Ok(value)) = (
                http::HeaderName::try_from(name),
                http::HeaderValue::try_from(value),
            ) {
                response.headers_mut().insert(name, value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn body_json(response: &HandlerResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn error_without_detail_omits_field() {
        let response = HandlerResponse::from_error(&HandlerError::MissingText);

        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"error":"Missing 'text' in request body"}"#);
    }

    #[test]
    fn error_with_detail() {
        let response = HandlerResponse::from_error(&HandlerError::InvalidJson("expected value".to_owned()));

        assert_eq!(response.status_code, 400);
        assert_eq!(
            body_json(&response),
            json!({"error": "Invalid JSON body", "detail": "expected value"})
        );
    }

    #[test]
    fn headers_declare_json() {
        let response = HandlerResponse::from_error(&HandlerError::MissingText);
        assert_eq!(
            response.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn serializes_in_proxy_integration_shape() {
        let response = HandlerResponse::from_error(&HandlerError::MissingText);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 400);
        assert_eq!(value["headers"]["content-type"], "application/json");
        assert!(value["body"].is_string());
    }
}
