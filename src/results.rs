use serde::{Deserialize, Serialize};

/// Title used when the page could not be loaded
pub const LOAD_ERROR_TITLE: &str = "Error loading website";

/// Title used when the page was loaded but could not be parsed
pub const PARSE_ERROR_TITLE: &str = "Error parsing website";

/// Title used when the document has no `<title>` element
pub const MISSING_TITLE: &str = "No Title Found";

/// Result of a single fetch attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// Page was loaded and parsed
    Success { title: String, text: String },
    /// Network, timeout or HTTP status failure
    TransportError { cause: String },
    /// Body was received but could not be turned into text
    ParseError { cause: String },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

/// Represents a fetched page with its title and cleaned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// URL the page was requested from
    pub url: String,

    /// Page title, or a sentinel title when `failed` is set
    pub title: String,

    /// Cleaned page text, or a readable error description when `failed` is set
    pub text: String,

    /// Whether the fetch failed
    pub failed: bool,

    /// Bare failure cause (empty on success)
    pub failure_reason: String,
}

impl PageContent {
    /// Build the page content for a fetch outcome
    pub fn from_outcome(url: &str, outcome: FetchOutcome) -> Self {
        let url = url.to_string();
        match outcome {
            FetchOutcome::Success { title, text } => Self {
                url,
                title,
                text,
                failed: false,
                failure_reason: String::new(),
            },
            FetchOutcome::TransportError { cause } => Self {
                url,
                title: LOAD_ERROR_TITLE.to_string(),
                text: format!("Failed to load website: {cause}"),
                failed: true,
                failure_reason: cause,
            },
            FetchOutcome::ParseError { cause } => Self {
                url,
                title: PARSE_ERROR_TITLE.to_string(),
                text: format!("Failed to parse website content: {cause}"),
                failed: true,
                failure_reason: cause,
            },
        }
    }

    /// Recover the tagged outcome this page was built from
    pub fn outcome(&self) -> FetchOutcome {
        if !self.failed {
            return FetchOutcome::Success {
                title: self.title.clone(),
                text: self.text.clone(),
            };
        }

        let cause = self.failure_reason.clone();
        if self.title == PARSE_ERROR_TITLE {
            FetchOutcome::ParseError { cause }
        } else {
            FetchOutcome::TransportError { cause }
        }
    }
}
