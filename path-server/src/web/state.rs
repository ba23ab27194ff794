//! Application state for the web layer.

use std::sync::Arc;

use crate::service::ScheduleService;

/// Shared application state.
pub struct AppState<S> {
    /// Schedule lookups and departure queries
    pub service: Arc<ScheduleService<S>>,

    /// Number of departures returned when a request does not say
    pub default_limit: usize,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(service: ScheduleService<S>, default_limit: usize) -> Self {
        Self {
            service: Arc::new(service),
            default_limit,
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            default_limit: self.default_limit,
        }
    }
}
