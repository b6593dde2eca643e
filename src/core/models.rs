use serde::{Deserialize, Serialize};

/// Text pasted by the user, trimmed and guaranteed non-empty.
///
/// The constructor is the single place where the "non-empty after trimming"
/// rule is enforced; everything downstream can rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceText(String);

impl SourceText {
    /// Trim the raw form input and reject blank submissions.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The model's output. Length bounds are enforced by the summarization
/// request parameters, not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryText(String);

impl SummaryText {
    #[must_use]
    pub fn new(text: String) -> Self {
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
