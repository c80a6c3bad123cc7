//! Typed error handling for ironview
//!
//! Every failure a view can observe goes through [`ViewError`], so the
//! UI layer can match specifically instead of string-inspecting. All
//! errors are locally recoverable: a validation failure keeps the form
//! open, a missing record is reported and nothing else changes.

use crate::core::record::RecordId;
use thiserror::Error;

/// The main error type for view operations
#[derive(Debug, Error)]
pub enum ViewError {
    /// Form field validation failed; the form stays open for correction
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The targeted record no longer exists
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: &'static str, id: RecordId },

    /// A seeded record collides with an existing id
    #[error("{entity} with id '{id}' already exists")]
    DuplicateId { entity: &'static str, id: RecordId },

    /// A form submission arrived while no form was open
    #[error("no form is open for this view")]
    FormClosed,

    /// View configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ViewError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewError::Validation(_) => "VALIDATION_ERROR",
            ViewError::NotFound { .. } => "RECORD_NOT_FOUND",
            ViewError::DuplicateId { .. } => "DUPLICATE_ID",
            ViewError::FormClosed => "FORM_CLOSED",
            ViewError::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Errors raised while validating submitted form fields
///
/// Messages are written for direct display next to the form, in the
/// "Fill in all required fields" register.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Required field is absent, null, or blank
    #[error("'{field}' is required")]
    MissingField { field: String },

    /// Form payload was not a JSON object
    #[error("form fields must be an object")]
    NotAnObject,

    /// Two fields that must agree do not (e.g. password confirmation)
    #[error("'{field}' does not match '{other}'")]
    Mismatch { field: String, other: String },

    /// Field does not match its declared format
    #[error("'{field}' is not a valid {expected}")]
    InvalidFormat {
        field: String,
        expected: &'static str,
    },

    /// Field is shorter than the allowed minimum
    #[error("'{field}' must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is outside the allowed set
    #[error("'{field}' must be one of: {}", allowed.join(", "))]
    NotInList { field: String, allowed: Vec<String> },

    /// Fields could not be deserialized into the record type
    #[error("invalid fields: {message}")]
    Malformed { message: String },
}

/// Errors related to view configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration content could not be parsed
    #[error("failed to parse config: {message}")]
    Parse { message: String },

    /// A parsed value is out of range or inconsistent
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// A specialized Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingField {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "'email' is required");

        let err = ValidationError::Mismatch {
            field: "confirm_password".to_string(),
            other: "password".to_string(),
        };
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_not_in_list_lists_choices() {
        let err = ValidationError::NotInList {
            field: "plan".to_string(),
            allowed: vec!["Monthly".to_string(), "Annual".to_string()],
        };
        assert!(err.to_string().contains("Monthly, Annual"));
    }

    #[test]
    fn test_not_found_display() {
        let err = ViewError::NotFound {
            entity: "member",
            id: RecordId::from("m42"),
        };
        assert_eq!(err.to_string(), "member with id 'm42' not found");
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_error_codes() {
        let err: ViewError = ValidationError::NotAnObject.into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(ViewError::FormClosed.error_code(), "FORM_CLOSED");
    }
}
