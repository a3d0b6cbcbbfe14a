//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services are concrete structs, not traits; the presentation layer drives
//! them with plain values and renders their plain results.

mod roster;
mod session;

pub use roster::RosterService;
pub use session::{SessionService, SessionState, SubmitOutcome};
