//! Failures raised by the upstream intelligence API.

use thiserror::Error;

/// Recognized API-domain failures.
///
/// The display string is the upstream message, unchanged. Anything the
/// client cannot map onto one of these variants (transport faults, decode
/// errors) is raised as a plain `anyhow::Error` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing or rejected credentials.
    #[error("{message}")]
    Authentication {
        message: String,
        status_code: Option<u16>,
    },

    /// No entity matches the identifier.
    #[error("{message}")]
    NotFound {
        message: String,
        status_code: Option<u16>,
    },

    /// The caller exceeded the upstream rate limit.
    #[error("{message}")]
    RateLimit {
        message: String,
        status_code: Option<u16>,
    },

    /// The upstream rejected the request parameters.
    #[error("{message}")]
    Validation {
        message: String,
        status_code: Option<u16>,
    },

    /// Any other error response from the API.
    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },
}

impl ApiError {
    pub fn authentication(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::Authentication {
            message: message.into(),
            status_code,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            status_code: None,
        }
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::RateLimit {
            message: message.into(),
            status_code: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            status_code: None,
        }
    }

    pub fn api(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::Api {
            message: message.into(),
            status_code,
        }
    }

    /// Map an HTTP error status onto the failure kind it represents.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let status_code = Some(status);
        match status {
            401 | 403 => Self::Authentication {
                message,
                status_code,
            },
            404 => Self::NotFound {
                message,
                status_code,
            },
            429 => Self::RateLimit {
                message,
                status_code,
            },
            400 | 422 => Self::Validation {
                message,
                status_code,
            },
            _ => Self::Api {
                message,
                status_code,
            },
        }
    }

    /// The status code carried by the failure, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { status_code, .. }
            | Self::NotFound { status_code, .. }
            | Self::RateLimit { status_code, .. }
            | Self::Validation { status_code, .. }
            | Self::Api { status_code, .. } => *status_code,
        }
    }
}
