//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::person::Field;

/// Domain errors represent business rule violations.
///
/// All of them are recoverable and user-facing: the presentation layer shows
/// every one, the rejected operation commits nothing, and the user may retry
/// with corrected input. Equality is derived so tests can assert whole
/// violation lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("the {field} field is required")]
    MissingField { field: Field },

    #[error("the {field} field must be numeric")]
    InvalidNumber { field: Field, value: String },

    #[error("person already exists: {name} {surname}")]
    DuplicatePerson { name: String, surname: String },
}
