//! Error types for the domain layer.
//!
//! Three layers of error, from the inside out:
//!
//! - `ValidationError` - a value object refused its input
//! - `DomainError` - what a port implementation reports, tagged with an `ErrorCode`
//! - `ServiceError` - what an application handler reports to the API surface
//!
//! # HTTP Status Mapping
//!
//! | ServiceError | HTTP Status |
//! |--------------|-------------|
//! | ValidationFailed | 400 |
//! | Unauthorized | 401 |
//! | Forbidden | 403 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Store | 500 |

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Accepts `value` unless it is empty or whitespace-only.
    pub fn non_empty(field: &str, value: impl Into<String>) -> Result<String, Self> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(Self::empty_field(field))
        } else {
            Ok(value)
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes reported by port implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,

    /// A uniqueness constraint rejected the write.
    Conflict,

    /// A referenced row does not exist.
    NotFound,

    Unauthorized,
    Forbidden,

    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Shorthand for an opaque store failure.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

/// Errors returned by application handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Required input missing or malformed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// A uniqueness rule was violated on purpose-visible data (e.g. username).
    #[error("{0}")]
    Conflict(String),

    /// Bad credentials or missing/invalid bearer token. Carries no detail
    /// about which part was wrong.
    #[error("Invalid username or password")]
    Unauthorized,

    /// Authenticated, but the role does not allow the operation.
    #[error("Permission denied")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    /// Any data-access failure. The message is for logs only.
    #[error("Store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ServiceError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Validation error for a required field that is absent or blank.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::validation(field, "is required")
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ServiceError::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        ServiceError::Store(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ServiceError::Conflict(_) => ErrorCode::Conflict,
            ServiceError::Unauthorized => ErrorCode::Unauthorized,
            ServiceError::Forbidden => ErrorCode::Forbidden,
            ServiceError::NotFound(_) => ErrorCode::NotFound,
            ServiceError::Store(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        let message = match err {
            ValidationError::EmptyField { .. } => "cannot be empty".to_string(),
            ValidationError::InvalidFormat { reason, .. } => reason,
        };
        ServiceError::ValidationFailed { field, message }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ServiceError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::Conflict => ServiceError::Conflict(err.message),
            ErrorCode::NotFound => ServiceError::NotFound(err.message),
            ErrorCode::Unauthorized => ServiceError::Unauthorized,
            ErrorCode::Forbidden => ServiceError::Forbidden,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                ServiceError::Store(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("title");
        assert_eq!(format!("{}", err), "Field 'title' cannot be empty");
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::Conflict, "Username already taken");
        assert_eq!(format!("{}", err), "[CONFLICT] Username already taken");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::database("insert failed").with_detail("table", "albums");
        assert_eq!(err.details.get("table"), Some(&"albums".to_string()));
    }

    #[test]
    fn service_error_from_validation_keeps_field() {
        let err: ServiceError = ValidationError::empty_field("artist").into();
        assert_eq!(err, ServiceError::validation("artist", "cannot be empty"));
    }

    #[test]
    fn service_error_from_domain_maps_codes() {
        let conflict: ServiceError =
            DomainError::new(ErrorCode::Conflict, "Username already taken").into();
        assert_eq!(conflict, ServiceError::conflict("Username already taken"));

        let missing: ServiceError = DomainError::new(ErrorCode::NotFound, "No such album").into();
        assert_eq!(missing.code(), ErrorCode::NotFound);

        let store: ServiceError = DomainError::database("connection reset").into();
        assert!(matches!(store, ServiceError::Store(msg) if msg.contains("connection reset")));
    }

    #[test]
    fn unauthorized_message_is_generic() {
        assert_eq!(
            ServiceError::Unauthorized.to_string(),
            "Invalid username or password"
        );
    }
}
