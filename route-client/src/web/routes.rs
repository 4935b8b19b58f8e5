//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tracing::error;

use crate::planner::RoutingBackend;
use crate::ui::UiState;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router<B: RoutingBackend>(state: AppState<B>) -> Router {
    Router::new()
        .route("/", get(index_page::<B>))
        .route("/search", get(search_page::<B>))
        .route("/find", post(find_route::<B>))
        .route("/results", get(results_fragment::<B>))
        .route("/health", get(health))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Page load: fetch the stop catalog, then render the page.
///
/// A failed fetch leaves the selectors as they were and puts the
/// connectivity error in the results area; reloading tries again.
async fn index_page<B: RoutingBackend>(
    State(state): State<AppState<B>>,
) -> Result<Html<String>, AppError> {
    // Failure is already logged and shown in the results area.
    let _ = state.planner.bootstrap().await;
    let ui = state.planner.snapshot().await;
    render_page(&ui, None)
}

/// The page as it currently stands, without reloading the catalog.
async fn search_page<B: RoutingBackend>(
    State(state): State<AppState<B>>,
) -> Result<Html<String>, AppError> {
    let ui = state.planner.snapshot().await;
    render_page(&ui, None)
}

/// Just the results area, for polling.
async fn results_fragment<B: RoutingBackend>(
    State(state): State<AppState<B>>,
) -> Result<Html<String>, AppError> {
    let ui = state.planner.snapshot().await;
    let template = ResultsTemplate {
        results: ui.results.view().clone(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Apply the submitted control values and run a route search.
///
/// Missing input re-renders the page with an alert and leaves the results
/// area alone. Otherwise the search runs in the background and the browser
/// is sent (303) to `/search`, which shows the placeholder until it resolves.
async fn find_route<B: RoutingBackend>(
    State(state): State<AppState<B>>,
    Form(req): Form<FindRequest>,
) -> Result<Response, AppError> {
    let planner = &state.planner;
    planner
        .select_origin(req.from.as_deref().unwrap_or_default())
        .await;
    planner
        .select_destination(req.to.as_deref().unwrap_or_default())
        .await;
    planner.set_time(req.time.unwrap_or_default()).await;

    match planner.submit().await {
        Ok(_submission) => Ok(Redirect::to("/search").into_response()),
        Err(e) => {
            let ui = planner.snapshot().await;
            Ok(render_page(&ui, Some(e.to_string()))?.into_response())
        }
    }
}

fn render_page(ui: &UiState, alert: Option<String>) -> Result<Html<String>, AppError> {
    let html = IndexTemplate::from_state(ui, alert)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
    Ok(Html(html))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
