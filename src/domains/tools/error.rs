//! Tool-specific error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed set of failure categories reported to tool callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    AuthenticationError,
    NotFound,
    RateLimitError,
    ValidationError,
    ApiError,
    GeneralError,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationError => "authentication_error",
            Self::NotFound => "not_found",
            Self::RateLimitError => "rate_limit_error",
            Self::ValidationError => "validation_error",
            Self::ApiError => "api_error",
            Self::GeneralError => "general_error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure returned by a tool call.
///
/// Serializes as `{"error": ..., "status_code": ..., "type": ...}`;
/// `status_code` is left out when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{category}: {message}")]
pub struct ToolError {
    #[serde(rename = "error")]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    #[serde(rename = "type")]
    pub category: ErrorCategory,
}

impl ToolError {
    pub fn new(category: ErrorCategory, message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status_code,
            category,
        }
    }

    /// A failure that matched no recognized API error.
    pub fn general(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::GeneralError, message, None)
    }

    /// JSON form sent back to the caller.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("error".to_string(), self.message.clone().into());
        if let Some(code) = self.status_code {
            map.insert("status_code".to_string(), code.into());
        }
        map.insert("type".to_string(), self.category.as_str().into());
        serde_json::Value::Object(map)
    }
}

/// Fatal errors raised while discovering and registering tools.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two different definitions claim the same name.
    #[error("Tool '{name}' from module '{module}' is already registered by module '{existing}'")]
    DuplicateTool {
        name: String,
        module: String,
        existing: String,
    },

    /// A tool module failed to produce its definitions.
    #[error("Failed to load tool module '{module}': {reason}")]
    ModuleLoad { module: String, reason: String },

    /// A tool module loaded but declared nothing.
    #[error("Tool module '{0}' declares no tools")]
    EmptyModule(String),
}

impl RegistryError {
    /// Create a new "duplicate tool" error.
    pub fn duplicate(
        name: impl Into<String>,
        module: impl Into<String>,
        existing: impl Into<String>,
    ) -> Self {
        Self::DuplicateTool {
            name: name.into(),
            module: module.into(),
            existing: existing.into(),
        }
    }

    /// Create a new "module load" error.
    pub fn module_load(module: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModuleLoad {
            module: module.into(),
            reason: reason.into(),
        }
    }
}
