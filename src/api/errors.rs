use serde_json::Value;
use std::fmt;

/// Maximum number of error body characters surfaced to the caller.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    Config(String),
    /// No HTTP response at all: refused connection, DNS failure, timeout or a
    /// transport-level block.
    Connectivity(String),
    /// The CSRF token could not be refreshed after a mismatch.
    Csrf(String),
    Validation { message: String, details: String },
    Unauthorized(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Storage(String),
}

impl ApiError {
    /// Classifies a non-success status and its body.
    ///
    /// `419` is not special here: by the time a response reaches this point the
    /// single CSRF retry has already been spent.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized(
                backend_message(body).unwrap_or_else(|| "Invalid credentials".to_string()),
            ),
            422 => {
                let message = backend_message(body)
                    .unwrap_or_else(|| "Validation failed. Please check your input.".to_string());
                let details = validation_details(body).unwrap_or_else(|| message.clone());
                Self::Validation { message, details }
            }
            _ => Self::Http {
                status,
                message: sanitize_body(body),
            },
        }
    }

    /// Local input rejected before any request is sent.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Validation {
            details: message.clone(),
            message,
        }
    }

    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Validation { .. } => Some(422),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(message) => write!(formatter, "Config error: {message}"),
            ApiError::Connectivity(message) => write!(
                formatter,
                "API server is not accessible ({message}). Check that the backend is running and that CORS allows this origin."
            ),
            ApiError::Csrf(message) => write!(formatter, "CSRF error: {message}"),
            ApiError::Validation { details, .. } => {
                write!(formatter, "Validation failed: {details}")
            }
            ApiError::Unauthorized(message) => write!(formatter, "Unauthorized: {message}"),
            ApiError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            ApiError::Parse(message) => write!(formatter, "Response error: {message}"),
            ApiError::Serialization(message) => write!(formatter, "Request error: {message}"),
            ApiError::Storage(message) => write!(formatter, "Session storage error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub(crate) fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

/// Top-level `message` of a JSON error body.
fn backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToString::to_string)
}

/// Joins the field-level messages of a Laravel validation body
/// (`{"errors": {"field": ["msg", ...]}}`) into one readable line.
fn validation_details(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let errors = value.get("errors")?.as_object()?;

    let messages: Vec<String> = errors
        .values()
        .flat_map(|field| match field {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            Value::String(message) => vec![message.clone()],
            _ => Vec::new(),
        })
        .collect();

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_joined() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "employee_number": ["The employee number field is required."],
                "password": ["The password field is required.", "Too short."]
            }
        }"#;

        let err = ApiError::from_status(422, body);
        assert_eq!(
            err,
            ApiError::Validation {
                message: "The given data was invalid.".to_string(),
                details: "The employee number field is required.; The password field is required.; Too short."
                    .to_string(),
            }
        );
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn validation_without_field_errors_uses_message() {
        let err = ApiError::from_status(422, r#"{"message":"Bad input"}"#);
        assert_eq!(
            err.to_string(),
            "Validation failed: Bad input".to_string()
        );
    }

    #[test]
    fn unauthorized_defaults_to_invalid_credentials() {
        assert_eq!(
            ApiError::from_status(401, ""),
            ApiError::Unauthorized("Invalid credentials".to_string())
        );
        assert_eq!(
            ApiError::from_status(401, r#"{"message":"Unauthenticated."}"#),
            ApiError::Unauthorized("Unauthenticated.".to_string())
        );
    }

    #[test]
    fn other_statuses_keep_code_and_sanitized_body() {
        let long = "x".repeat(500);
        match ApiError::from_status(500, &long) {
            ApiError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message.len(), MAX_ERROR_CHARS);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(
            ApiError::from_status(419, "  "),
            ApiError::Http {
                status: 419,
                message: "Request failed.".to_string()
            }
        );
    }

    #[test]
    fn connectivity_is_distinguished() {
        let err = ApiError::Connectivity("connection refused".to_string());
        assert!(err.is_connectivity());
        assert!(err.to_string().contains("not accessible"));
        assert!(!ApiError::from_status(404, "").is_connectivity());
    }
}
