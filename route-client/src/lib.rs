//! Transit route finder client.
//!
//! Loads a stop catalog from a routing backend, lets the user pick an
//! origin, destination and departure time, and shows the route options the
//! backend computes. The backend does all the routing; this crate is the
//! interaction model plus a small web surface.

pub mod backend;
pub mod config;
pub mod planner;
pub mod ui;
pub mod web;
