//! Add-person session
//!
//! The interaction state machine behind the add flow: `Idle` means no form
//! is open, `Editing` holds the values currently on the form. Submitting an
//! ill-formed or duplicate draft keeps the form open with its values
//! retained; a successful submit or a cancel returns to `Idle`.

use tracing::debug;

use crate::application::services::RosterService;
use crate::domain::{DomainError, Person, PersonDraft, Roster};

/// State of the add-person form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No form open
    #[default]
    Idle,
    /// Form open, holding the values currently entered
    Editing { draft: PersonDraft },
}

/// Outcome of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The person was appended to the roster; the form closed.
    Added(Person),
    /// The submission was rejected; the form stays open, draft retained.
    Rejected(Vec<DomainError>),
}

/// Drives the add-person flow over a [`RosterService`].
#[derive(Debug, Default)]
pub struct SessionService {
    roster: RosterService,
    state: SessionState,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the form (an "add" request): `Idle → Editing` with an empty
    /// draft. Re-opening while editing keeps the current draft.
    pub fn open(&mut self) {
        if matches!(self.state, SessionState::Idle) {
            debug!("session: open form");
            self.state = SessionState::Editing {
                draft: PersonDraft::default(),
            };
        }
    }

    /// Submit the form.
    ///
    /// Runs validation and the duplicate-rejecting insert. `Added` closes
    /// the form; `Rejected` keeps it open with the submitted draft retained
    /// verbatim for the retry.
    pub fn submit(&mut self, draft: PersonDraft) -> SubmitOutcome {
        match self.roster.submit(&draft) {
            Ok(person) => {
                debug!("session: form closed after add");
                self.state = SessionState::Idle;
                SubmitOutcome::Added(person)
            }
            Err(errors) => {
                self.state = SessionState::Editing { draft };
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Close the form without touching the roster; the draft is discarded.
    pub fn cancel(&mut self) {
        debug!("session: cancel");
        self.state = SessionState::Idle;
    }

    /// The draft currently on the form, if one is open.
    pub fn draft(&self) -> Option<&PersonDraft> {
        match &self.state {
            SessionState::Editing { draft } => Some(draft),
            SessionState::Idle => None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn roster(&self) -> &Roster {
        self.roster.roster()
    }
}
