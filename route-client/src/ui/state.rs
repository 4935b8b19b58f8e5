//! UI state: the two stop selectors, the time input and the results area.

use crate::backend::{RouteQuery, Stop, StopId};

use super::view::ResultsView;

/// One entry of a stop selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: StopId,
    pub label: String,
}

/// A stop selector that behaves like an HTML `<select>`.
///
/// Once options exist, one of them is selected (the first by default).
/// Selecting a value that is not an option clears the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopSelector {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl StopSelector {
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Replace every option with one per stop, in catalog order.
    pub fn replace_options(&mut self, stops: &[Stop]) {
        self.options = stops
            .iter()
            .map(|s| SelectOption {
                value: s.id.clone(),
                label: s.name.clone(),
            })
            .collect();
        self.selected = if self.options.is_empty() { None } else { Some(0) };
    }

    pub fn select(&mut self, value: &str) {
        self.selected = self.options.iter().position(|o| o.value.as_str() == value);
    }

    /// Currently selected stop, if any.
    pub fn value(&self) -> Option<&StopId> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| &o.value)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

/// The results area plus the sequence number of the submission that last
/// wrote it (0 before any submission).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsArea {
    view: ResultsView,
    sequence: u64,
}

impl ResultsArea {
    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Replace the content, recording which submission produced it.
    pub fn show(&mut self, sequence: u64, view: ResultsView) {
        self.view = view;
        self.sequence = sequence;
    }

    /// Replace the content without changing the recorded submission.
    pub fn replace(&mut self, view: ResultsView) {
        self.view = view;
    }
}

/// Everything the client displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub origin: StopSelector,
    pub destination: StopSelector,
    pub time: String,
    pub results: ResultsArea,
}

impl UiState {
    /// Mirror one stop catalog into both selectors.
    pub fn populate_stops(&mut self, stops: &[Stop]) {
        self.origin.replace_options(stops);
        self.destination.replace_options(stops);
    }

    /// Build a query from the current control values.
    ///
    /// Returns `None` if the origin, destination or time is empty. The time
    /// is taken as-is, without trimming or format checks.
    pub fn route_query(&self) -> Option<RouteQuery> {
        let from = self.origin.value().filter(|id| !id.as_str().is_empty())?;
        let to = self.destination.value().filter(|id| !id.as_str().is_empty())?;
        if self.time.is_empty() {
            return None;
        }
        Some(RouteQuery::new(from.clone(), to.clone(), self.time.clone()))
    }
}
