//! Display descriptions for the results area.
//!
//! Renderers produce a [`ResultsView`]; adapters decide how to draw it.

use std::fmt;

/// Header line naming the origin and destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteHeader {
    pub from: String,
    pub to: String,
}

impl fmt::Display for RouteHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Best Options from {} to {}:", self.from, self.to)
    }
}

/// One route option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    pub arrival_time: String,
    pub trips: u32,
}

impl fmt::Display for RouteRow {
    // "1 trips" is intentional: the count is shown without pluralisation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arrive at {} ({} trips)", self.arrival_time, self.trips)
    }
}

/// A single element of the results area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Informational text
    Message(String),
    /// User-visible error text
    Error(String),
    Header(RouteHeader),
    Row(RouteRow),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Message(text) | Element::Error(text) => f.write_str(text),
            Element::Header(header) => header.fmt(f),
            Element::Row(row) => row.fmt(f),
        }
    }
}

/// Full content of the results area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsView {
    elements: Vec<Element>,
    pending: bool,
}

impl ResultsView {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            pending: false,
        }
    }

    /// A view standing in for an outstanding request.
    pub fn pending(elements: Vec<Element>) -> Self {
        Self {
            elements,
            pending: true,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Whether this view is a placeholder for an unresolved request.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &RouteRow> {
        self.elements.iter().filter_map(|e| match e {
            Element::Row(row) => Some(row),
            _ => None,
        })
    }

    /// The text of every element, in display order.
    pub fn lines(&self) -> Vec<String> {
        self.elements.iter().map(ToString::to_string).collect()
    }
}
