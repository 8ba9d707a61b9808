//! Error classification for tool calls.
//!
//! Every tool body runs inside [`handle_api_errors`], the last boundary
//! before a result crosses back to the caller. A failure of any kind comes
//! out as a [`ToolError`]; nothing is re-raised or retried here.

use std::future::Future;

use super::error::{ErrorCategory, ToolError};
use crate::api::ApiError;

/// Run `operation` and turn any failure into a [`ToolError`].
///
/// Success values are passed through untouched.
pub async fn handle_api_errors<T, F>(operation: F) -> Result<T, ToolError>
where
    F: Future<Output = anyhow::Result<T>>,
{
    operation.await.map_err(|err| classify(&err))
}

/// Map a failure onto its category.
///
/// Fixed codes override whatever the failure carries for not-found,
/// rate-limit and validation errors. Anything that is not an [`ApiError`]
/// is a `general_error` without status.
pub fn classify(err: &anyhow::Error) -> ToolError {
    let message = err.to_string();

    let Some(api_err) = err.downcast_ref::<ApiError>() else {
        return ToolError::general(message);
    };

    match api_err {
        ApiError::Authentication { .. } => ToolError::new(
            ErrorCategory::AuthenticationError,
            message,
            Some(api_err.status_code().unwrap_or(401)),
        ),
        ApiError::NotFound { .. } => ToolError::new(ErrorCategory::NotFound, message, Some(404)),
        ApiError::RateLimit { .. } => {
            ToolError::new(ErrorCategory::RateLimitError, message, Some(429))
        }
        ApiError::Validation { .. } => {
            ToolError::new(ErrorCategory::ValidationError, message, Some(422))
        }
        ApiError::Api { .. } => {
            ToolError::new(ErrorCategory::ApiError, message, api_err.status_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    async fn fail_with(err: anyhow::Error) -> ToolError {
        assert_err!(handle_api_errors(async { Err::<(), _>(err) }).await)
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let value = assert_ok!(handle_api_errors(async { Ok(json!({"id": 7})) }).await);
        assert_eq!(value, json!({"id": 7}));
    }

    #[tokio::test]
    async fn test_authentication_defaults_to_401() {
        let err = fail_with(ApiError::authentication("bad key", None).into()).await;
        assert_eq!(err.category, ErrorCategory::AuthenticationError);
        assert_eq!(err.status_code, Some(401));
        assert_eq!(err.message, "bad key");
    }

    #[tokio::test]
    async fn test_authentication_keeps_carried_code() {
        let err = fail_with(ApiError::authentication("forbidden", Some(403)).into()).await;
        assert_eq!(err.status_code, Some(403));
    }

    #[tokio::test]
    async fn test_fixed_codes_override_carried_codes() {
        let err = fail_with(ApiError::from_status(404, "gone").into()).await;
        assert_eq!((err.category, err.status_code), (ErrorCategory::NotFound, Some(404)));

        let err = fail_with(
            ApiError::NotFound {
                message: "odd".into(),
                status_code: Some(410),
            }
            .into(),
        )
        .await;
        assert_eq!(err.status_code, Some(404));

        let err = fail_with(
            ApiError::RateLimit {
                message: "slow down".into(),
                status_code: Some(503),
            }
            .into(),
        )
        .await;
        assert_eq!(
            (err.category, err.status_code),
            (ErrorCategory::RateLimitError, Some(429))
        );

        let err = fail_with(
            ApiError::Validation {
                message: "bad limit".into(),
                status_code: Some(400),
            }
            .into(),
        )
        .await;
        assert_eq!(
            (err.category, err.status_code),
            (ErrorCategory::ValidationError, Some(422))
        );
    }

    #[tokio::test]
    async fn test_api_error_passes_code_through() {
        let err = fail_with(ApiError::api("upstream broke", Some(502)).into()).await;
        assert_eq!((err.category, err.status_code), (ErrorCategory::ApiError, Some(502)));

        let err = fail_with(ApiError::api("unknown", None).into()).await;
        assert_eq!(err.status_code, None);
    }

    #[tokio::test]
    async fn test_unrecognized_failure_is_general() {
        let err = fail_with(anyhow::anyhow!("connection reset by peer")).await;
        assert_eq!(err.category, ErrorCategory::GeneralError);
        assert_eq!(err.status_code, None);
        assert_eq!(err.message, "connection reset by peer");

        let io = std::io::Error::other("disk on fire");
        let err = fail_with(io.into()).await;
        assert_eq!(err.message, "disk on fire");
        assert_eq!(err.category, ErrorCategory::GeneralError);
    }
}
