//! Response status handling for introspection requests.

use crate::error::SourceError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`SourceError::Unauthorized`], carrying the
///   credential variable name so the message can suggest setting it.
/// - **Other non-success status** → [`SourceError::Api`] with status code
///   and response body.
pub async fn check_response(
    resp: reqwest::Response,
    auth_env: Option<&str>,
) -> Result<reqwest::Response, SourceError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(SourceError::Unauthorized {
            status: status.as_u16(),
            auth_env: auth_env.map(str::to_string),
        });
    }
    if !status.is_success() {
        return Err(SourceError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn unauthorized_keeps_env_name() {
        let err = check_response(mock_response(401, ""), Some("GQL_AUTH_OLD"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SourceError::Unauthorized { status: 401, auth_env: Some(ref name) } if name == "GQL_AUTH_OLD"
        ));
    }

    #[tokio::test]
    async fn server_error_carries_body() {
        let err = check_response(mock_response(500, "boom"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Api { status: 500, ref message } if message == "boom"));
    }

    #[tokio::test]
    async fn forbidden_is_an_api_error() {
        let err = check_response(mock_response(403, ""), Some("GQL_AUTH_NEW"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(mock_response(200, "{}"), None).await.unwrap();
        assert_eq!(resp.status(), 200);
    }
}
