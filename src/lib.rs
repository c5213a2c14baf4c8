// Re-export modules
pub mod chat;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fetcher;
pub mod parsers;
pub mod results;
pub mod summary;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use chat::{ChatBackend, ChatMessage, ChatRole, OpenAiChat};
pub use config::ReaderConfig;
pub use credentials::{AcceptAnyKey, KeyValidator, PatternValidator};
pub use error::{ChatError, ConfigError};
pub use fetcher::PageFetcher;
pub use results::{FetchOutcome, PageContent};
pub use summary::SummaryClient;

/// Fetches a page and asks a chat model to summarize it.
///
/// Construction is the only fallible step: a missing or malformed credential
/// stops the reader before any network activity. After that every call
/// returns a string, either the summary or a description of what failed.
pub struct WebReader<B = OpenAiChat> {
    fetcher: PageFetcher,
    summarizer: SummaryClient<B>,
}

impl WebReader<OpenAiChat> {
    /// Create a reader with the default key format check
    pub fn new(config: &ReaderConfig) -> Result<Self, ConfigError> {
        Self::with_validator(config, &PatternValidator::default())
    }

    /// Create a reader with a custom key format check
    pub fn with_validator(
        config: &ReaderConfig,
        validator: &dyn KeyValidator,
    ) -> Result<Self, ConfigError> {
        config.validate(validator)?;
        ::log::debug!("Creating web reader with {:?}", config);

        let backend = OpenAiChat::new(config)?;
        Self::with_backend(config, backend)
    }
}

impl<B: ChatBackend> WebReader<B> {
    /// Create a reader that talks to the given chat backend
    pub fn with_backend(config: &ReaderConfig, backend: B) -> Result<Self, ConfigError> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
            summarizer: SummaryClient::new(backend).with_system_prompt(&config.system_prompt),
        })
    }

    /// Replace the system prompt used for later summaries
    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) {
        self.summarizer.set_system_prompt(prompt);
    }

    pub fn fetcher(&self) -> &PageFetcher {
        &self.fetcher
    }

    pub fn summarizer(&self) -> &SummaryClient<B> {
        &self.summarizer
    }

    /// Fetch the page at `url` and return its markdown summary
    pub async fn summarize(&self, url: &str) -> String {
        let page = self.fetcher.fetch(url).await;
        self.summarizer.summarize(&page).await
    }

    /// Check that the chat endpoint answers
    pub async fn test_connection(&self) -> String {
        self.summarizer.test_connection().await
    }
}
