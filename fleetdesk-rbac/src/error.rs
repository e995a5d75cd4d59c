//! Error types for strict parsing of catalog identifiers.
//!
//! The decision functions in [`crate::authority`] never return these; they
//! fail closed instead. These errors exist for boundary code that wants to
//! reject bad input explicitly (form validation, configuration loading).

use thiserror::Error;

/// Parsing errors for roles, resources, actions and permissions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RbacError {
    /// Role string is not part of the catalog
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Resource string is not a known resource
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Action string is not a known action verb
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Permission string is not in `resource:action` form
    #[error("Malformed permission: {0}")]
    MalformedPermission(String),
}

/// Result type for RBAC parsing operations.
pub type RbacResult<T> = Result<T, RbacError>;

impl RbacError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            RbacError::UnknownRole(_) => "UNKNOWN_ROLE",
            RbacError::UnknownResource(_) => "UNKNOWN_RESOURCE",
            RbacError::UnknownAction(_) => "UNKNOWN_ACTION",
            RbacError::MalformedPermission(_) => "MALFORMED_PERMISSION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RbacError::UnknownRole("ghost_role".to_string());
        assert_eq!(err.to_string(), "Unknown role: ghost_role");
        assert_eq!(err.error_code(), "UNKNOWN_ROLE");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            RbacError::UnknownRole(String::new()).error_code(),
            RbacError::UnknownResource(String::new()).error_code(),
            RbacError::UnknownAction(String::new()).error_code(),
            RbacError::MalformedPermission(String::new()).error_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
