//! Roster service
//!
//! Validates drafts and commits them to the in-memory roster.

use itertools::Itertools;
use tracing::debug;

use crate::domain::{DomainError, Person, PersonDraft, Roster};

/// Service owning the in-memory roster.
///
/// The roster lives for the duration of the process: it starts empty and is
/// never persisted.
#[derive(Debug, Default)]
pub struct RosterService {
    roster: Roster,
}

impl RosterService {
    /// Create a service with an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and, if well-formed, append it to the roster.
    ///
    /// Validation violations come back collected, in field order (name,
    /// surname, age). A duplicate comes back as a single-element list, so the
    /// presentation layer renders every rejection the same way. On rejection
    /// the roster is unchanged.
    pub fn submit(&mut self, draft: &PersonDraft) -> Result<Person, Vec<DomainError>> {
        let person = Person::parse(draft).map_err(|errors| {
            debug!("submit rejected: {}", errors.iter().join("; "));
            errors
        })?;

        self.roster.insert(person.clone()).map_err(|e| {
            debug!("submit rejected: {}", e);
            vec![e]
        })?;

        debug!(
            "submit accepted: {} ({} on roster)",
            person,
            self.roster.len()
        );
        Ok(person)
    }

    /// The underlying roster, for rendering.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
