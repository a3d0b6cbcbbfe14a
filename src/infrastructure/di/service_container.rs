//! Service container for dependency injection
//!
//! Wires up the settings and the console boundary.

use std::sync::Arc;

use crate::config::Settings;
use crate::infrastructure::traits::{Console, StdConsole};

/// Container holding the wired application dependencies.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Console abstraction
    pub console: Arc<dyn Console>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(StdConsole))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, console: Arc<dyn Console>) -> Self {
        Self {
            settings: Arc::new(settings),
            console,
        }
    }
}
