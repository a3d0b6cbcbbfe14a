//! The person record and its validation.

use std::fmt;

use crate::domain::error::DomainError;

/// A field of the person form, as named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Surname,
    Age,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::Age => "age",
        };
        f.write_str(name)
    }
}

/// Raw field values as captured from the form, before validation.
///
/// Values are kept verbatim (no trimming), so a rejected submission can
/// re-populate the form exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub surname: String,
    pub age: String,
}

impl PersonDraft {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age: age.into(),
        }
    }
}

/// An entry of the roster.
///
/// Equality is structural: two persons are the same record iff all three
/// fields match exactly. There is no identity field and no mutation after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub surname: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age,
        }
    }

    /// Validate a draft into a person.
    ///
    /// Every rule is checked (no short-circuit) and every violation is
    /// collected, in field order name, surname, age:
    /// - name must be non-empty
    /// - surname must be non-empty
    /// - age must parse as a base-10 integer
    ///
    /// Pure function: the same draft always yields the same result.
    pub fn parse(draft: &PersonDraft) -> Result<Self, Vec<DomainError>> {
        let mut errors = Vec::new();

        if draft.name.is_empty() {
            errors.push(DomainError::MissingField { field: Field::Name });
        }
        if draft.surname.is_empty() {
            errors.push(DomainError::MissingField {
                field: Field::Surname,
            });
        }
        let age = match draft.age.parse::<i32>() {
            Ok(age) => Some(age),
            Err(_) => {
                errors.push(DomainError::InvalidNumber {
                    field: Field::Age,
                    value: draft.age.clone(),
                });
                None
            }
        };

        match (errors.is_empty(), age) {
            (true, Some(age)) => Ok(Self {
                name: draft.name.clone(),
                surname: draft.surname.clone(),
                age,
            }),
            _ => Err(errors),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.surname, self.age)
    }
}
