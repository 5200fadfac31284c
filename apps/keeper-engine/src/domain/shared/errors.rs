//! Domain errors for the keeper engine.

use thiserror::Error;

/// Domain-level errors that can occur in business logic.
///
/// These errors are independent of infrastructure concerns. Roster-shape
/// problems are not errors at this level; they are reported as validation
/// issues so the caller can decide whether to block submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid value for a field.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Entity not found.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        /// Entity type.
        entity_type: String,
        /// Entity identifier.
        id: String,
    },

    /// League settings are inconsistent.
    #[error("Invalid league settings [{field}]: {message}")]
    InvalidSettings {
        /// Settings field.
        field: String,
        /// Error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_invalid_value_display() {
        let err = DomainError::InvalidValue {
            field: "round".to_string(),
            message: "rounds start at 1".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("round"));
        assert!(msg.contains("start at 1"));
    }

    #[test]
    fn domain_error_not_found_display() {
        let err = DomainError::NotFound {
            entity_type: "Player".to_string(),
            id: "p-123".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Player"));
        assert!(msg.contains("p-123"));
    }

    #[test]
    fn domain_error_invalid_settings_display() {
        let err = DomainError::InvalidSettings {
            field: "second_apron".to_string(),
            message: "must be above first_apron".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("second_apron"));
        assert!(msg.contains("above first_apron"));
    }

    #[test]
    fn domain_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::InvalidValue {
            field: "test".to_string(),
            message: "test".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}
