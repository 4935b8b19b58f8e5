//! Display-independent UI model.
//!
//! The selectors, time input and results area live in a plain [`UiState`]
//! value. Renderers return [`ResultsView`] descriptions instead of touching
//! a display, so everything here is testable without a browser.

pub mod render;
mod state;
mod view;

pub use state::{ResultsArea, SelectOption, StopSelector, UiState};
pub use view::{Element, ResultsView, RouteHeader, RouteRow};
