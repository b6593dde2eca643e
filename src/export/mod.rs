//! Document export: PDF rendering and data-URI packaging

pub mod pdf;

// Re-export main entry points for convenience
pub use pdf::{pdf_data_uri, render_pdf};
