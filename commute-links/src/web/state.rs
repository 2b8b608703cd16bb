//! Application state for the web layer.

use std::sync::Arc;

use crate::clock::Clock;
use crate::links::LinkGenerator;
use crate::refresh::RefreshController;

/// Shared application state.
///
/// Everything in here is immutable, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    /// Link generator for the configured commute
    pub generator: Arc<LinkGenerator>,

    /// Wall clock used for every refresh
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(generator: LinkGenerator, clock: impl Clock + 'static) -> Self {
        Self {
            generator: Arc::new(generator),
            clock: Arc::new(clock),
        }
    }

    /// A fresh, unmounted controller for one request.
    pub fn controller(&self) -> RefreshController {
        RefreshController::new(self.generator.clone(), self.clock.clone())
    }
}
