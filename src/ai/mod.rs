//! Summarization adapter

pub mod client;

// Re-export main types for convenience
pub use client::{ModelClient, Summarizer};
