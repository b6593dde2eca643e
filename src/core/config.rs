use std::env;
use std::net::SocketAddr;

use crate::errors::RecapError;

/// Default summarization model on the Hugging Face Inference API.
pub const DEFAULT_MODEL_ID: &str = "facebook/bart-large-cnn";

/// Default address the web server binds to.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default decorative animation fetched for the page header.
pub const DEFAULT_LOTTIE_URL: &str =
    "https://assets2.lottiefiles.com/packages/lf20_j1adxtyb.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub model_id: String,
    pub hf_api_token: Option<String>,
    pub lottie_url: String,
}

impl AppConfig {
    /// Read configuration from the environment. Every variable has a default
    /// or is optional; the only way this fails is a `RECAP_BIND_ADDR` that
    /// does not parse as a socket address, which is rejected here instead of
    /// surfacing later as a bind error.
    pub fn from_env() -> Result<Self, RecapError> {
        let bind_addr =
            env::var("RECAP_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        bind_addr.parse::<SocketAddr>().map_err(|e| {
            RecapError::ConfigError(format!("RECAP_BIND_ADDR {bind_addr:?}: {e}"))
        })?;

        Ok(Self {
            bind_addr,
            model_id: env::var("RECAP_MODEL_ID")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            hf_api_token: env::var("HF_API_TOKEN").ok(),
            lottie_url: env::var("RECAP_LOTTIE_URL")
                .unwrap_or_else(|_| DEFAULT_LOTTIE_URL.to_string()),
        })
    }
}
