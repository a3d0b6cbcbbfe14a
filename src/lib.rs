//! agenda: an interactive terminal roster of people.
//!
//! The core is a pure validator/roster pair; the terminal session is a thin
//! presentation adapter over it. Layering:
//! - `domain` — Person, validation, the duplicate-rejecting roster
//! - `application` — services and the add-form state machine
//! - `infrastructure` — console boundary and DI wiring
//! - `cli` — argument parsing, dispatch, terminal rendering

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
