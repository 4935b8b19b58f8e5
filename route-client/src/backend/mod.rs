//! Routing backend client.
//!
//! The backend owns the stop catalog and the routing algorithm. This module
//! only speaks its two JSON endpoints:
//! - `GET /api/stops` returns `[{ id, name }, ...]`
//! - `GET /api/route?from=&to=&time=` returns `{ from, to, results }`

mod client;
mod error;
mod mock;
mod types;

pub use client::{BackendConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, RoutingClient};
pub use error::BackendError;
pub use mock::{MockBackend, RouteGate};
pub use types::{RouteQuery, RouteResponse, RouteResult, Stop, StopId};
