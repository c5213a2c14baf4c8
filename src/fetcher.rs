use crate::config::ReaderConfig;
use crate::error::{ConfigResult, FetchError};
use crate::parsers::Parser;
use crate::results::{FetchOutcome, PageContent};
use crate::utils::describe_error;
use std::time::Duration;

/// Fetches a single page and turns it into title and cleaned text.
///
/// Failures never escape as errors: they come back as
/// `FetchOutcome::TransportError` / `FetchOutcome::ParseError`, or as a
/// `PageContent` carrying the matching sentinel title.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a fetcher with the timeout and user agent from the configuration
    pub fn new(config: &ReaderConfig) -> ConfigResult<Self> {
        Self::with_settings(config.fetch_timeout(), &config.user_agent)
    }

    pub fn with_settings(timeout: Duration, user_agent: &str) -> ConfigResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page, mapping every failure into the returned content
    pub async fn fetch(&self, url: &str) -> PageContent {
        PageContent::from_outcome(url, self.fetch_outcome(url).await)
    }

    /// Fetch a page and report the tagged outcome
    pub async fn fetch_outcome(&self, url: &str) -> FetchOutcome {
        ::log::info!("Fetching {}", url);

        let body = match self.download(url).await {
            Ok(body) => body,
            Err(e) => {
                let cause = describe_error(&e);
                ::log::warn!("Failed to load {}: {}", url, cause);
                return FetchOutcome::TransportError { cause };
            }
        };

        ::log::debug!("Received {} bytes from {}", body.len(), url);

        match Parser::parse(&body) {
            Ok(result) => {
                ::log::info!(
                    "Fetched '{}' from {} ({} characters)",
                    result.title,
                    url,
                    result.content.len()
                );
                FetchOutcome::Success {
                    title: result.title,
                    text: result.content,
                }
            }
            Err(e) => {
                ::log::warn!("Failed to parse {}: {}", url, e);
                FetchOutcome::ParseError {
                    cause: e.to_string(),
                }
            }
        }
    }

    /// GET the URL and decode the whole body, rejecting every non-2xx status.
    ///
    /// The body is decoded with the charset from `content-type`, UTF-8 when
    /// none is declared.
    async fn download(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text_with_charset("utf-8").await?)
    }
}
