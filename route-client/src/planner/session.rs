//! The client component: stop bootstrap, route submission and result
//! application.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::backend::{BackendError, RouteQuery, RouteResponse, Stop};
use crate::ui::{ResultsView, UiState, render};

use super::error::ValidationError;
use super::ordering::ResponseOrdering;

/// Trait for talking to the routing backend.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait RoutingBackend: Send + Sync + 'static {
    /// Fetch the full stop catalog.
    fn fetch_stops(&self) -> impl Future<Output = Result<Vec<Stop>, BackendError>> + Send;

    /// Fetch route options for a query.
    fn fetch_route(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<RouteResponse, BackendError>> + Send;
}

/// Owns the UI state and drives it from backend answers.
///
/// Submissions are independent: nothing is cached, deduplicated or
/// cancelled. Each one runs as its own task and writes the results area when
/// it resolves, subject to the configured [`ResponseOrdering`].
pub struct RoutePlanner<B> {
    backend: Arc<B>,
    ui: Arc<RwLock<UiState>>,
    ordering: ResponseOrdering,
    next_sequence: AtomicU64,
}

impl<B: RoutingBackend> RoutePlanner<B> {
    pub fn new(backend: B, ordering: ResponseOrdering) -> Self {
        Self {
            backend: Arc::new(backend),
            ui: Arc::new(RwLock::new(UiState::default())),
            ordering,
            next_sequence: AtomicU64::new(0),
        }
    }

    /// A copy of the current UI state.
    pub async fn snapshot(&self) -> UiState {
        self.ui.read().await.clone()
    }

    pub async fn select_origin(&self, value: &str) {
        self.ui.write().await.origin.select(value);
    }

    pub async fn select_destination(&self, value: &str) {
        self.ui.write().await.destination.select(value);
    }

    pub async fn set_time(&self, time: impl Into<String>) {
        self.ui.write().await.time = time.into();
    }

    /// Load the stop catalog into both selectors.
    ///
    /// On failure the selectors are left untouched and the results area
    /// shows a connectivity error. There is no retry; calling this again
    /// (a page reload) is the retry, and a success clears that error.
    pub async fn bootstrap(&self) -> Result<usize, BackendError> {
        match self.backend.fetch_stops().await {
            Ok(stops) => {
                let mut ui = self.ui.write().await;
                ui.populate_stops(&stops);
                if *ui.results.view() == render::stops_unavailable() {
                    ui.results.replace(ResultsView::default());
                }
                info!(count = stops.len(), "loaded stop catalog");
                Ok(stops.len())
            }
            Err(e) => {
                error!(error = %e, "failed to fetch stops");
                self.ui
                    .write()
                    .await
                    .results
                    .replace(render::stops_unavailable());
                Err(e)
            }
        }
    }

    /// Submit a route query built from the current control values.
    ///
    /// If any input is empty nothing is sent and the results area is left
    /// as it was. Otherwise the results area switches to the searching
    /// placeholder and the request runs in a spawned task.
    pub async fn submit(&self) -> Result<Submission, ValidationError> {
        let (query, sequence) = {
            let mut ui = self.ui.write().await;
            let Some(query) = ui.route_query() else {
                debug!("route submission rejected: missing input");
                return Err(ValidationError::MissingInput);
            };
            // Assigned under the lock so placeholder order matches sequence order.
            let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed) + 1;
            ui.results.show(sequence, render::searching());
            (query, sequence)
        };

        debug!(sequence, from = %query.from, to = %query.to, time = %query.time, "submitting route query");

        let backend = Arc::clone(&self.backend);
        let ui = Arc::clone(&self.ui);
        let ordering = self.ordering;

        let handle = tokio::spawn(async move {
            let view = match backend.fetch_route(&query).await {
                Ok(response) => render::render_response(&response),
                Err(e) => {
                    error!(
                        error = %e,
                        sequence,
                        from = %query.from,
                        to = %query.to,
                        time = %query.time,
                        "failed to fetch route"
                    );
                    render::route_unavailable()
                }
            };
            apply_completion(&ui, ordering, sequence, view).await;
        });

        Ok(Submission { sequence, handle })
    }
}

/// Write a resolved submission into the results area.
async fn apply_completion(
    ui: &RwLock<UiState>,
    ordering: ResponseOrdering,
    sequence: u64,
    view: ResultsView,
) {
    let mut ui = ui.write().await;
    let shown = ui.results.sequence();

    if !ordering.accepts(sequence, shown) {
        debug!(sequence, shown, "discarding stale route response");
        return;
    }

    ui.results.show(sequence, view);
}

/// An in-flight route request.
///
/// Dropping it does not cancel the request.
#[derive(Debug)]
pub struct Submission {
    sequence: u64,
    handle: JoinHandle<()>,
}

impl Submission {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Wait until the response has been applied (or discarded).
    pub async fn finished(self) {
        if let Err(e) = self.handle.await {
            error!(error = %e, sequence = self.sequence, "route request task failed");
        }
    }
}
