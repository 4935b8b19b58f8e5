//! Route planner client component.
//!
//! Loads the stop catalog once at startup, turns user submissions into
//! backend route queries and applies the answers to the UI state. Every
//! submission is tagged with a sequence number so the response ordering
//! policy can be chosen explicitly.

mod error;
mod ordering;
mod session;


pub use error::ValidationError;
pub use ordering::{ResponseOrdering, UnknownOrdering};
pub use session::{RoutePlanner, RoutingBackend, Submission};
