//! Response checking shared by every endpoint wrapper.
//!
//! The Taskdeck server reports failures as a JSON envelope
//! `{"message": "..."}` alongside a non-success status. `check_response`
//! unwraps that envelope into [`ApiError::Api`] so callers can show the
//! server's own wording; rate limiting is split out as
//! [`ApiError::RateLimited`] so callers can honor `Retry-After`.

use serde::Deserialize;

use crate::error::ApiError;

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// The server's error envelope. Only `message` is read; any other fields in
/// the body are ignored.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// Map a response's status onto the error taxonomy, passing successes
/// through untouched.
///
/// - **429** → [`ApiError::RateLimited`], seconds taken from `Retry-After`
///   (falling back to 60 when the header is missing or unparseable).
/// - **Other non-success** → [`ApiError::Api`] carrying the envelope's
///   `message`. A body that is not the expected envelope (a proxy error, an
///   HTML error page) is carried raw rather than dropped.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ApiError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Pull the server's message out of an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map_or_else(|_| body.to_string(), |envelope| envelope.message)
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(::http::Response::builder().status(status).body(body).unwrap())
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, r#"[{"id":7}]"#);
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn error_envelope_message_is_extracted() {
        let resp = mock_response(401, r#"{"message":"Invalid credentials"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn envelope_with_extra_fields_still_yields_message() {
        let resp = mock_response(400, r#"{"message":"Title is required","field":"title"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { message, .. } => assert_eq!(message, "Title is required"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_envelope_body_is_carried_raw() {
        // A proxy in front of the server answers with HTML, not the envelope.
        let resp = mock_response(502, "<html>Bad Gateway</html>");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>Bad Gateway</html>");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rate_limited_honors_retry_after() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", "30")
                .body("")
                .unwrap(),
        );
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn rate_limited_without_header_uses_fallback() {
        let resp = mock_response(429, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: DEFAULT_RETRY_AFTER_SECS
            }
        ));
    }
}
