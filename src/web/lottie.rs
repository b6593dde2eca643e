//! Decorative animation fetch
//!
//! The page header shows a small animation loaded from a public URL. The
//! asset is purely decorative, so every failure mode degrades to "no
//! animation" instead of surfacing an error.

use serde_json::Value;
use tracing::warn;

/// Fetch the animation descriptor once at startup.
///
/// Returns the raw JSON text on success, `None` on any failure (non-200
/// status, network error, or a body that is not valid JSON).
pub async fn load_lottie(url: &str) -> Option<String> {
    let response = match reqwest::get(url).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Animation fetch failed: {e}");
            return None;
        }
    };

    if !response.status().is_success() {
        warn!("Animation fetch returned status {}", response.status());
        return None;
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Animation body read failed: {e}");
            return None;
        }
    };

    validate_animation_json(&body)
}

/// Keep the body only if it parses as a JSON object; the page inlines it
/// into a script block, so anything else must be discarded.
fn validate_animation_json(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(_)) => Some(body.to_string()),
        Ok(_) | Err(_) => {
            warn!("Animation body is not a JSON object, ignoring");
            None
        }
    }
}
