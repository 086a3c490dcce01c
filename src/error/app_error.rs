use axum::extract::rejection::{JsonRejection, QueryRejection};
use thiserror::Error;
use validator::ValidationErrors;

use crate::error::DatabaseErrorConverter;

/// Application-wide error type.
///
/// The first five variants are domain outcomes and render to the caller
/// with the human-readable message from their `Display` impl. The
/// remaining variants are infrastructure faults whose sources must never
/// leak into a response body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Target entity does not exist
    #[error("{entity} with {field} '{value}' does not exist")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Unique field already taken by another active record
    #[error("{entity} with {field} '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Acting user does not own the target, or credentials do not match
    #[error("{message}")]
    Forbidden { message: String },

    /// Malformed field value
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Request is structurally invalid
    #[error("{message}")]
    BadRequest { message: String },

    /// Missing or invalid bearer token
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn not_found(entity: &str, field: &str, value: impl ToString) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn duplicate(entity: &str, field: &str, value: impl ToString) -> Self {
        AppError::Duplicate {
            entity: entity.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        AppError::Forbidden {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized {
            message: message.into(),
        }
    }

    /// Wraps a connection pool checkout failure.
    pub fn pool<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::ConnectionPool {
            source: anyhow::Error::new(error),
        }
    }

    /// True for the variants that represent a domain outcome rather than
    /// an infrastructure fault.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            AppError::NotFound { .. }
                | AppError::Duplicate { .. }
                | AppError::Forbidden { .. }
                | AppError::Validation { .. }
                | AppError::BadRequest { .. }
        )
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let (field, reason) = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, errs)| {
                let reason = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                (field.to_string(), reason)
            })
            .unwrap_or_else(|| ("request".to_string(), "validation failed".to_string()));
        AppError::Validation { field, reason }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_flagged_as_domain() {
        assert!(AppError::not_found("user", "nickname", "alice").is_domain());
        assert!(AppError::duplicate("user", "login_id", "alice").is_domain());
        assert!(AppError::forbidden("no").is_domain());
        assert!(!AppError::Internal {
            source: anyhow::anyhow!("boom")
        }
        .is_domain());
    }

    #[test]
    fn duplicate_display_names_the_field() {
        let error = AppError::duplicate("user", "login_id", "alice");
        assert_eq!(
            error.to_string(),
            "user with login_id 'alice' already exists"
        );
    }

    #[test]
    fn not_found_display_names_the_entity() {
        let error = AppError::not_found("board post", "id", 7);
        assert_eq!(error.to_string(), "board post with id '7' does not exist");
    }
}
