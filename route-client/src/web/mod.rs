//! Web surface for the route planner.
//!
//! A thin adapter: it copies form values into the planner's UI state and
//! renders snapshots of that state as HTML.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
