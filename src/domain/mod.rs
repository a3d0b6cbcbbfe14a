//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod person;
pub mod roster;

pub use error::DomainError;
pub use person::{Field, Person, PersonDraft};
pub use roster::Roster;
