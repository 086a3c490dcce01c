//! Conversion of diesel errors into `AppError`.
//!
//! Unique violations are mapped back to `Duplicate` so a write racing a
//! concurrent duplicate still surfaces as the same outcome as the
//! service-level pre-check. The constraint name identifies the entity and
//! field; the offending value is recovered from the error detail when
//! PostgreSQL provides it (`Key (login_id)=(alice) already exists.`).

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::AppError;

/// Known unique constraints, mapped to (entity, field) for error messages.
const UNIQUE_CONSTRAINTS: &[(&str, &str, &str)] = &[
    ("users_login_id_key", "user", "login_id"),
    ("users_nickname_key", "user", "nickname"),
    ("favorites_user_login_id_game_id_key", "favorite", "game_id"),
];

pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a diesel error into an `AppError`, tagging infrastructure
    /// failures with the operation that produced them.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::NotFound => AppError::NotFound {
                entity: "record".to_string(),
                field: "id".to_string(),
                value: String::new(),
            },
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                let constraint = info.constraint_name().unwrap_or("");
                let (entity, field) = Self::lookup_constraint(constraint);
                let value = info.details().and_then(Self::extract_value).unwrap_or_default();
                AppError::Duplicate {
                    entity: entity.to_string(),
                    field: field.to_string(),
                    value,
                }
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                AppError::BadRequest {
                    message: format!("Referenced record does not exist: {}", info.message()),
                }
            }
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::new(other),
            },
        }
    }

    fn lookup_constraint(constraint: &str) -> (&'static str, &'static str) {
        UNIQUE_CONSTRAINTS
            .iter()
            .find(|(name, _, _)| *name == constraint)
            .map(|(_, entity, field)| (*entity, *field))
            .unwrap_or(("record", "unique field"))
    }

    /// Pulls the duplicated value out of a PostgreSQL detail string of the
    /// form `Key (col)=(value) already exists.`
    fn extract_value(details: &str) -> Option<String> {
        let start = details.find(")=(")? + 3;
        let end = details[start..].find(')')? + start;
        Some(details[start..end].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_value_from_postgres_detail() {
        let detail = "Key (login_id)=(alice) already exists.";
        assert_eq!(
            DatabaseErrorConverter::extract_value(detail),
            Some("alice".to_string())
        );
    }

    #[test]
    fn extract_value_handles_malformed_detail() {
        assert_eq!(DatabaseErrorConverter::extract_value("no key here"), None);
    }

    #[test]
    fn known_constraint_maps_to_entity_and_field() {
        assert_eq!(
            DatabaseErrorConverter::lookup_constraint("users_nickname_key"),
            ("user", "nickname")
        );
    }

    #[test]
    fn unknown_constraint_falls_back_to_generic_names() {
        assert_eq!(
            DatabaseErrorConverter::lookup_constraint("something_else"),
            ("record", "unique field")
        );
    }

    #[test]
    fn not_found_converts_to_not_found_variant() {
        let converted =
            DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "select");
        assert!(matches!(converted, AppError::NotFound { .. }));
    }
}
