//! Tests for `RelayError` status mapping and rendering.

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use super::RelayError;
use crate::slack::{ApiError, HttpError};

fn invalid_payload() -> RelayError {
    RelayError::InvalidPayload(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
}

fn api(error: ApiError) -> RelayError {
    RelayError::from(error)
}

mod status {
    use super::*;

    #[test]
    fn caller_mistakes_are_client_errors() {
        assert_eq!(invalid_payload().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::EmptyDisplayName.status(),
            StatusCode::BAD_REQUEST
        );

        let bad_token = http::HeaderValue::from_str("a\nb").unwrap_err();
        assert_eq!(
            api(ApiError::InvalidToken(bad_token)).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_kinds_map_to_404() {
        assert_eq!(RelayError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            api(ApiError::DisplayNameNotFound("alice".to_string())).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn pagination_is_unprocessable() {
        assert_eq!(
            api(ApiError::PaginationRequired).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn upstream_failures_are_gateway_errors() {
        let decode = serde_json::from_str::<serde_json::Value>("<").unwrap_err();
        let cases = [
            (
                api(ApiError::Status {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                api(ApiError::Decode {
                    method: "users.list".to_string(),
                    source: decode,
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                api(ApiError::Slack {
                    method: "users.list",
                    error: "invalid_auth".to_string(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                api(ApiError::Http(HttpError::Connection(Box::new(
                    std::io::Error::other("refused"),
                )))),
                StatusCode::BAD_GATEWAY,
            ),
            (
                api(ApiError::Http(HttpError::Timeout)),
                StatusCode::GATEWAY_TIMEOUT,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "{error}");
        }
    }

    #[test]
    fn local_faults_are_internal_errors() {
        assert_eq!(
            RelayError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            api(ApiError::Http(HttpError::InvalidUrl("x".to_string()))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

mod response {
    use super::*;

    async fn body_json(error: RelayError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn renders_ok_false_with_message() {
        let (status, body) = body_json(api(ApiError::PaginationRequired)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            serde_json::json!({ "ok": false, "error": "requires paginated response" })
        );
    }

    #[test]
    fn method_not_allowed_advertises_post() {
        let response = RelayError::MethodNotAllowed.into_response();

        assert_eq!(response.headers()[header::ALLOW], "POST");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn other_errors_have_no_allow_header() {
        let response = RelayError::NotFound.into_response();

        assert!(response.headers().get(header::ALLOW).is_none());
    }
}
