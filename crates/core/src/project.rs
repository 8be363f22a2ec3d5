//! Project entity, the caller-supplied input payload, and its validation rules.
//!
//! [`ProjectInput`] is what arrives from the outside world. Passing it through
//! [`ProjectInput::validate_new`] is the only way to obtain a [`NewProject`],
//! which is the only shape the persistence gateway accepts for writes.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldViolation};
use crate::types::DbId;

/// Entity label used in not-found errors.
pub const PROJECT_ENTITY: &str = "Project";

/// Maximum length of a project name in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a project description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Field declaration order, used to report violations deterministically.
const FIELD_ORDER: &[&str] = &[
    "id",
    "name",
    "description",
    "status",
    "owner",
    "start_date",
    "end_date",
];

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored project, including its system-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Free text; no fixed set of states is enforced.
    pub status: String,
    pub owner: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A validated project record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    name: String,
    description: Option<String>,
    status: String,
    owner: Option<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl NewProject {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Attach a storage-assigned id.
    pub fn into_project(self, id: DbId) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            owner: self.owner,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// DTO for creating or replacing a project.
///
/// Every field tolerates being absent on the wire so that a missing value is
/// reported as a validation failure on that field rather than a parse error.
/// `id` is ignored on create and must match the path id on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProjectInput {
    #[serde(default)]
    pub id: DbId,

    #[serde(default)]
    #[validate(
        custom(function = "name_present"),
        length(max = 100, message = "Name cannot exceed 100 characters")
    )]
    pub name: String,

    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "status_present"))]
    pub status: String,

    pub owner: Option<String>,

    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<NaiveDate>,

    #[validate(required(message = "End date is required"))]
    pub end_date: Option<NaiveDate>,
}

impl ProjectInput {
    /// Check every field rule plus the date-range invariant.
    ///
    /// All violations are collected, not just the first one. On success the
    /// returned [`NewProject`] carries no id.
    pub fn validate_new(&self) -> Result<NewProject, CoreError> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => field_violations(&errors),
        };

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                violations.push(FieldViolation::new(
                    "end_date",
                    "Start date cannot be after end date",
                ));
            }
        }

        match (self.start_date, self.end_date) {
            (Some(start_date), Some(end_date)) if violations.is_empty() => Ok(NewProject {
                name: self.name.clone(),
                description: self.description.clone(),
                status: self.status.clone(),
                owner: self.owner.clone(),
                start_date,
                end_date,
            }),
            _ => Err(CoreError::Validation(violations)),
        }
    }
}

fn name_present(name: &str) -> Result<(), ValidationError> {
    require_text(name, "Name is required")
}

fn status_present(status: &str) -> Result<(), ValidationError> {
    require_text(status, "Status is required")
}

fn require_text(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required").with_message(Cow::Borrowed(message)))
    } else {
        Ok(())
    }
}

/// Flatten `validator` output into per-field violations in declaration order.
fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| err.code.to_string());
                FieldViolation::new(field.to_string(), message)
            })
        })
        .collect();

    violations.sort_by_key(|v| {
        FIELD_ORDER
            .iter()
            .position(|f| *f == v.field)
            .unwrap_or(FIELD_ORDER.len())
    });
    violations
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
