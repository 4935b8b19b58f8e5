//! Askama templates for the web frontend.

use askama::Template;

use crate::ui::{Element, ResultsView, StopSelector, UiState};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Route search page: selectors, time input and results area.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub origin: SelectorView,
    pub destination: SelectorView,
    pub time: String,
    pub results: ResultsView,
    /// Blocking message the user must acknowledge
    pub alert: Option<String>,
}

impl IndexTemplate {
    pub fn from_state(ui: &UiState, alert: Option<String>) -> Self {
        Self {
            origin: SelectorView::from_selector(&ui.origin),
            destination: SelectorView::from_selector(&ui.destination),
            time: ui.time.clone(),
            results: ui.results.view().clone(),
            alert,
        }
    }
}

// ============================================================================
// Fragment Templates (no base.html)
// ============================================================================

/// Results area on its own.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub results: ResultsView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A `<select>` ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectorView {
    pub fn from_selector(selector: &StopSelector) -> Self {
        let options = selector
            .options()
            .iter()
            .enumerate()
            .map(|(i, o)| OptionView {
                value: o.value.to_string(),
                label: o.label.clone(),
                selected: selector.is_selected(i),
            })
            .collect();
        Self { options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{RouteResponse, RouteResult, Stop};
    use crate::ui::render;

    fn state() -> UiState {
        let mut ui = UiState::default();
        ui.populate_stops(&[Stop::new("1", "Main St"), Stop::new("2", "Oak Ave")]);
        ui.destination.select("2");
        ui.time = "08:30".into();
        ui
    }

    #[test]
    fn selector_view_marks_selection() {
        let view = SelectorView::from_selector(&state().destination);
        assert_eq!(view.options.len(), 2);
        assert!(!view.options[0].selected);
        assert!(view.options[1].selected);
        assert_eq!(view.options[1].label, "Oak Ave");
    }

    #[test]
    fn index_renders_both_selectors_and_time() {
        let html = IndexTemplate::from_state(&state(), None).render().unwrap();

        assert!(html.contains(r#"<option value="1" selected>Main St</option>"#));
        assert!(html.contains(r#"<option value="2" selected>Oak Ave</option>"#));
        assert!(html.contains(r#"value="08:30""#));
        assert!(!html.contains("<dialog"));
    }

    #[test]
    fn index_renders_alert_dialog() {
        let html = IndexTemplate::from_state(&state(), Some("Please select a start, end, and time.".into()))
            .render()
            .unwrap();
        assert!(html.contains("<dialog open"));
        assert!(html.contains("Please select a start, end, and time."));
    }

    #[test]
    fn pending_results_refresh_the_page() {
        let mut ui = state();
        ui.results.show(1, render::searching());
        let html = IndexTemplate::from_state(&ui, None).render().unwrap();
        assert!(html.contains(r#"http-equiv="refresh""#));
        assert!(html.contains("url=/search"));
        assert!(html.contains("<p>Searching...</p>"));
    }

    #[test]
    fn results_fragment_markup() {
        let response = RouteResponse::new("Main St", "Oak Ave", vec![RouteResult::new("08:47", 1)]);
        let html = ResultsTemplate {
            results: render::render_response(&response),
        }
        .render()
        .unwrap();

        assert!(html.contains("<h3>Best Options from Main St to Oak Ave:</h3>"));
        assert!(html.contains(r#"<div class="result-item">Arrive at 08:47 (1 trips)</div>"#));
    }

    #[test]
    fn error_fragment_markup() {
        let html = ResultsTemplate {
            results: render::stops_unavailable(),
        }
        .render()
        .unwrap();
        assert!(html.contains(r#"<p class="error">Error: Could not connect to the routing backend server.</p>"#));
    }

    #[test]
    fn labels_are_escaped() {
        let response = RouteResponse::new("<b>", "Oak Ave", vec![RouteResult::new("08:47", 1)]);
        let html = ResultsTemplate {
            results: render::render_response(&response),
        }
        .render()
        .unwrap();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
