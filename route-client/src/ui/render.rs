//! Result renderer: turns backend answers and failures into results-area
//! content.

use crate::backend::RouteResponse;

use super::view::{Element, ResultsView, RouteHeader, RouteRow};

pub const SEARCHING_MESSAGE: &str = "Searching...";
pub const NO_PATH_MESSAGE: &str = "No path found for the selected route.";
pub const STOPS_UNAVAILABLE_MESSAGE: &str =
    "Error: Could not connect to the routing backend server.";
pub const ROUTE_UNAVAILABLE_MESSAGE: &str =
    "Error: Could not get route from the routing backend server.";

/// Render a route answer.
///
/// Rows keep the backend's order. The header uses the labels echoed by the
/// backend rather than the identifiers that were submitted.
pub fn render_response(response: &RouteResponse) -> ResultsView {
    let options = response.options();
    if options.is_empty() {
        return ResultsView::new(vec![Element::Message(NO_PATH_MESSAGE.to_string())]);
    }

    let header = Element::Header(RouteHeader {
        from: response.from.clone(),
        to: response.to.clone(),
    });

    let rows = options.iter().map(|r| {
        Element::Row(RouteRow {
            arrival_time: r.arrival_time.clone(),
            trips: r.trips,
        })
    });

    ResultsView::new(std::iter::once(header).chain(rows).collect())
}

/// Placeholder shown while a route request is outstanding.
pub fn searching() -> ResultsView {
    ResultsView::pending(vec![Element::Message(SEARCHING_MESSAGE.to_string())])
}

/// Shown when the stop catalog could not be loaded.
pub fn stops_unavailable() -> ResultsView {
    ResultsView::new(vec![Element::Error(STOPS_UNAVAILABLE_MESSAGE.to_string())])
}

/// Shown when a route request failed.
pub fn route_unavailable() -> ResultsView {
    ResultsView::new(vec![Element::Error(ROUTE_UNAVAILABLE_MESSAGE.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RouteResult;

    #[test]
    fn empty_results_render_only_no_path_message() {
        let view = render_response(&RouteResponse::new("Main St", "Oak Ave", vec![]));
        assert_eq!(view.lines(), vec![NO_PATH_MESSAGE.to_string()]);
        assert_eq!(view.rows().count(), 0);
    }

    #[test]
    fn absent_results_render_no_path_message() {
        let response = RouteResponse {
            from: "Main St".into(),
            to: "Oak Ave".into(),
            results: None,
        };
        assert_eq!(
            render_response(&response).elements(),
            &[Element::Message(NO_PATH_MESSAGE.to_string())]
        );
    }

    #[test]
    fn rows_follow_backend_order() {
        let response = RouteResponse::new(
            "Main St",
            "Oak Ave",
            vec![RouteResult::new("10:05", 1), RouteResult::new("10:20", 2)],
        );

        assert_eq!(
            render_response(&response).lines(),
            vec![
                "Best Options from Main St to Oak Ave:",
                "Arrive at 10:05 (1 trips)",
                "Arrive at 10:20 (2 trips)",
            ]
        );
    }

    #[test]
    fn later_options_are_not_reranked() {
        let response = RouteResponse::new(
            "A",
            "B",
            vec![RouteResult::new("11:00", 0), RouteResult::new("09:00", 3)],
        );
        let arrivals: Vec<_> = render_response(&response)
            .rows()
            .map(|r| r.arrival_time.clone())
            .collect();
        assert_eq!(arrivals, vec!["11:00", "09:00"]);
    }

    #[test]
    fn placeholder_and_failures() {
        assert!(searching().is_pending());
        assert_eq!(searching().lines(), vec![SEARCHING_MESSAGE]);
        assert_eq!(
            stops_unavailable().elements(),
            &[Element::Error(STOPS_UNAVAILABLE_MESSAGE.to_string())]
        );
        assert_eq!(route_unavailable().lines(), vec![ROUTE_UNAVAILABLE_MESSAGE]);
    }
}
