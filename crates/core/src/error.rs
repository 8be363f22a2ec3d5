use std::fmt;

use serde::Serialize;

use crate::types::DbId;

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl CoreError {
    /// Shorthand for a validation failure on a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation(vec![FieldViolation::new(field, message)])
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
