/// Recap - a web service that summarizes pasted text and exports the result as a PDF.
///
/// This crate implements a small single-binary architecture:
/// 1. An axum web server that renders the input form and receives submissions
/// 2. A summarization adapter that calls a pretrained model over HTTP
/// 3. A PDF exporter that turns the summary into a downloadable data URI
///
/// # Architecture
///
/// The system uses:
/// - axum for the HTTP surface
/// - reqwest for calls to the Hugging Face Inference API
/// - printpdf for document export
/// - Tokio for async runtime
///
/// The flow per submission is strictly linear: capture the form text,
/// summarize it, export the summary. The only process-wide state is the
/// cached summarizer handle and the optional decorative animation JSON.
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod export;
pub mod web;

/// Configure structured logging with JSON format.
///
/// This function sets up tracing-subscriber with a JSON formatter and should
/// be called once at the start of the binary.
///
/// # Example
///
/// ```
/// // Initialize structured logging at startup
/// recap::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
