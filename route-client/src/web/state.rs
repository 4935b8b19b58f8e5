//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{RoutePlanner, RoutingBackend};

/// Shared application state.
///
/// The planner owns the one UI state every page view presents: the web
/// surface is a single shared page, so all browsers see and edit the same
/// selectors and results area.
pub struct AppState<B> {
    pub planner: Arc<RoutePlanner<B>>,
}

impl<B: RoutingBackend> AppState<B> {
    pub fn new(planner: RoutePlanner<B>) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            planner: Arc::clone(&self.planner),
        }
    }
}
