//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homerelay_domain::error::HomeRelayError;

/// JSON error body returned when a request could not be served.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HomeRelayError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HomeRelayError);

impl From<HomeRelayError> for ApiError {
    fn from(err: HomeRelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HomeRelayError::Upstream(err) => {
                tracing::error!(error = ?err, "platform unreachable");
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
            HomeRelayError::Decode(err) => {
                tracing::error!(error = %err, "platform sent an undecodable body");
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
            HomeRelayError::Encode(err) => {
                tracing::error!(error = %err, "relay command encoding failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_map_upstream_error_to_bad_gateway() {
        let err = HomeRelayError::Upstream(Box::new(std::io::Error::other("refused")));
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "error": "upstream request failed" })
        );
    }

    #[tokio::test]
    async fn should_map_decode_error_to_bad_gateway() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = HomeRelayError::Decode(homerelay_domain::error::DecodeError {
            status: 200,
            source,
        });
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "error": "invalid upstream response" })
        );
    }

    #[tokio::test]
    async fn should_hide_encode_error_details() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = ApiError::from(HomeRelayError::Encode(source)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "error": "internal server error" })
        );
    }
}
