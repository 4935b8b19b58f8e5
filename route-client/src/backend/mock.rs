//! In-memory routing backend for tests and offline development.
//!
//! Route answers are scripted per [`RouteQuery`], so concurrent submissions
//! resolve deterministically regardless of task scheduling. A scripted answer
//! can be gated: it is held back until the test releases it, which makes
//! completion order fully controllable.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::{Mutex, oneshot};

use crate::planner::RoutingBackend;

use super::error::BackendError;
use super::types::{RouteQuery, RouteResponse, Stop};

type Outcome<T> = Result<T, String>;

struct ScriptedRoute {
    outcome: Outcome<RouteResponse>,
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Default)]
struct MockState {
    stops: Option<Outcome<Vec<Stop>>>,
    routes: HashMap<RouteQuery, VecDeque<ScriptedRoute>>,
    stop_calls: usize,
    route_queries: Vec<RouteQuery>,
}

/// Handle that releases a gated route answer.
pub struct RouteGate(oneshot::Sender<()>);

impl RouteGate {
    /// Let the held-back answer resolve.
    pub fn release(self) {
        // The receiver is gone only if the request task was dropped.
        let _ = self.0.send(());
    }
}

/// Mock routing backend that serves scripted answers.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this catalog from `fetch_stops`.
    pub async fn set_stops(&self, stops: Vec<Stop>) {
        self.state.lock().await.stops = Some(Ok(stops));
    }

    /// Make `fetch_stops` fail as if the backend were unreachable.
    pub async fn fail_stops(&self, message: impl Into<String>) {
        self.state.lock().await.stops = Some(Err(message.into()));
    }

    /// Queue an answer for `query`.
    pub async fn push_route(&self, query: RouteQuery, response: RouteResponse) {
        self.push(query, Ok(response), None).await;
    }

    /// Queue a failure for `query`.
    pub async fn push_route_failure(&self, query: RouteQuery, message: impl Into<String>) {
        self.push(query, Err(message.into()), None).await;
    }

    /// Queue an answer for `query` that resolves only once the returned gate
    /// is released.
    pub async fn push_gated_route(&self, query: RouteQuery, response: RouteResponse) -> RouteGate {
        let (tx, rx) = oneshot::channel();
        self.push(query, Ok(response), Some(rx)).await;
        RouteGate(tx)
    }

    async fn push(
        &self,
        query: RouteQuery,
        outcome: Outcome<RouteResponse>,
        gate: Option<oneshot::Receiver<()>>,
    ) {
        let mut state = self.state.lock().await;
        state
            .routes
            .entry(query)
            .or_default()
            .push_back(ScriptedRoute { outcome, gate });
    }

    /// Number of `fetch_stops` calls so far.
    pub async fn stop_calls(&self) -> usize {
        self.state.lock().await.stop_calls
    }

    /// Every route query received, in arrival order.
    pub async fn route_queries(&self) -> Vec<RouteQuery> {
        self.state.lock().await.route_queries.clone()
    }
}

impl RoutingBackend for MockBackend {
    async fn fetch_stops(&self) -> Result<Vec<Stop>, BackendError> {
        let mut state = self.state.lock().await;
        state.stop_calls += 1;

        match &state.stops {
            Some(Ok(stops)) => Ok(stops.clone()),
            Some(Err(message)) => Err(BackendError::Unavailable {
                message: message.clone(),
            }),
            None => Err(BackendError::Unavailable {
                message: "no stop catalog configured".to_string(),
            }),
        }
    }

    async fn fetch_route(&self, query: &RouteQuery) -> Result<RouteResponse, BackendError> {
        let scripted = {
            let mut state = self.state.lock().await;
            state.route_queries.push(query.clone());
            state
                .routes
                .get_mut(query)
                .and_then(|queue| queue.pop_front())
        };

        let Some(scripted) = scripted else {
            return Err(BackendError::Api {
                status: 404,
                message: format!(
                    "No mock route for {} -> {} at {}",
                    query.from, query.to, query.time
                ),
            });
        };

        if let Some(gate) = scripted.gate {
            gate.await.map_err(|_| BackendError::Unavailable {
                message: "gate dropped before release".to_string(),
            })?;
        }

        scripted
            .outcome
            .map_err(|message| BackendError::Unavailable { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{RouteResult, StopId};

    fn query(time: &str) -> RouteQuery {
        RouteQuery::new(StopId::new("1"), StopId::new("2"), time)
    }

    #[tokio::test]
    async fn serves_configured_stops() {
        let mock = MockBackend::new();
        mock.set_stops(vec![Stop::new("1", "Main St")]).await;

        let stops = mock.fetch_stops().await.unwrap();
        assert_eq!(stops, vec![Stop::new("1", "Main St")]);
        assert_eq!(mock.stop_calls().await, 1);
    }

    #[tokio::test]
    async fn unconfigured_stops_fail() {
        let mock = MockBackend::new();
        assert!(mock.fetch_stops().await.is_err());
    }

    #[tokio::test]
    async fn scripted_routes_are_consumed_in_order() {
        let mock = MockBackend::new();
        let first = RouteResponse::new("A", "B", vec![RouteResult::new("08:47", 1)]);
        mock.push_route(query("08:30"), first.clone()).await;
        mock.push_route_failure(query("08:30"), "boom").await;

        assert_eq!(mock.fetch_route(&query("08:30")).await.unwrap(), first);
        assert!(mock.fetch_route(&query("08:30")).await.is_err());
        assert!(mock.fetch_route(&query("08:30")).await.is_err());
        assert_eq!(mock.route_queries().await.len(), 3);
    }

    #[tokio::test]
    async fn gated_route_waits_for_release() {
        let mock = MockBackend::new();
        let response = RouteResponse::new("A", "B", vec![]);
        let gate = mock.push_gated_route(query("09:00"), response.clone()).await;

        let pending = tokio::spawn({
            let mock = mock.clone();
            async move { mock.fetch_route(&query("09:00")).await }
        });

        tokio::task::yield_now().await;
        assert!(!pending.is_finished());

        gate.release();
        assert_eq!(pending.await.unwrap().unwrap(), response);
    }
}
