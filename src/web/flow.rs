//! Per-submission request flow
//!
//! Each form submission runs the same linear pipeline: capture the text,
//! summarize it, export the PDF. Nothing is carried over between
//! submissions.

use std::sync::Arc;

use tracing::{error, info};

use crate::ai::Summarizer;
use crate::core::models::SourceText;
use crate::export;

/// Result of handling one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Blank or whitespace-only input; the summarizer was never invoked.
    Skipped,
    /// Summary produced and exported.
    Completed {
        summary: String,
        pdf_data_uri: String,
    },
    /// The summarizer or the exporter failed; `message` is shown to the user.
    Failed { message: String },
}

/// Run the capture -> summarize -> export pipeline for one submission.
pub async fn handle_submission(
    summarizer: &Arc<dyn Summarizer>,
    raw_text: &str,
) -> SubmissionOutcome {
    let Some(source) = SourceText::new(raw_text) else {
        // Blank submissions are ignored without an error, matching the
        // form's behavior of doing nothing until there is text.
        return SubmissionOutcome::Skipped;
    };

    info!("Summarizing submission");

    let summary = match summarizer.summarize(&source).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Summarization failed: {e}");
            return SubmissionOutcome::Failed {
                message: format!("Summarization failed: {e}"),
            };
        }
    };

    let pdf_bytes = match export::render_pdf(&summary) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("PDF export failed: {e}");
            return SubmissionOutcome::Failed {
                message: format!("Summarization failed: {e}"),
            };
        }
    };

    info!(
        "Summary ready ({} characters, {} PDF bytes)",
        summary.as_str().chars().count(),
        pdf_bytes.len()
    );

    SubmissionOutcome::Completed {
        summary: summary.as_str().to_string(),
        pdf_data_uri: export::pdf_data_uri(&pdf_bytes),
    }
}
