use std::sync::Arc;

use recap::ai::ModelClient;
use recap::core::config::AppConfig;
use recap::web::lottie::load_lottie;
use recap::web::server::{start_server, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    recap::setup_logging();

    let config = AppConfig::from_env()?;

    // Decorative only; None just renders the page without it.
    let lottie_json = load_lottie(&config.lottie_url).await;

    let state = AppState {
        summarizer: Arc::new(ModelClient::new(
            &config.model_id,
            config.hf_api_token.clone(),
        )),
        lottie_json,
    };

    start_server(&config.bind_addr, state).await
}
