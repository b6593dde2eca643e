//! HTTP server and route handlers

use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::info;

use crate::ai::Summarizer;
use crate::web::flow::{self, SubmissionOutcome};
use crate::web::views;

/// Application state shared across routes.
///
/// The summarizer is built once at startup and reused by every request;
/// it only ever sees read-only inference calls, so sharing is safe.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
    pub lottie_json: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    pub text: String,
}

/// Starts the Axum HTTP server.
pub async fn start_server(bind_addr: &str, state: AppState) -> Result<()> {
    let app = router(state);

    info!("Web server listening on {}", bind_addr);
    let listener = TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/summarize", post(summarize))
        .with_state(state)
}

/// `GET /` - the blank input form.
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(views::page(
        &SubmissionOutcome::Skipped,
        "",
        state.lottie_json.as_deref(),
    ))
}

/// `POST /summarize` - run the flow and re-render the page with the outcome.
async fn summarize(
    State(state): State<AppState>,
    Form(form): Form<SummarizeForm>,
) -> Html<String> {
    let outcome = flow::handle_submission(&state.summarizer, &form.text).await;
    Html(views::page(
        &outcome,
        &form.text,
        state.lottie_json.as_deref(),
    ))
}
