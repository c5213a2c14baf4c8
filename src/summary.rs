use crate::chat::{ChatBackend, ChatMessage};
use crate::results::PageContent;
use crate::utils::describe_error;

/// System prompt used unless the caller sets another one
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an assistant that analyzes the contents of a website \
and provides a short summary of price, ignoring text that might be navigation related. \
Respond in markdown.";

/// Message sent by `test_connection`
pub const CONNECTION_TEST_MESSAGE: &str =
    "Hello, GPT! This is a test message. Please reply with a random number.";

/// Builds the chat request for a page and relays the model's reply.
///
/// Every failure comes back as a descriptive string; nothing here returns an
/// error to the caller.
pub struct SummaryClient<B> {
    backend: B,
    system_prompt: String,
}

impl<B: ChatBackend> SummaryClient<B> {
    /// Create a client that uses the default system prompt
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Use a different system prompt for subsequent calls
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) {
        self.system_prompt = prompt.into();
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Summarize a page with the configured system prompt
    pub async fn summarize(&self, page: &PageContent) -> String {
        self.summarize_with_prompt(page, &self.system_prompt).await
    }

    /// Summarize a page with an explicit system prompt
    pub async fn summarize_with_prompt(&self, page: &PageContent, system_prompt: &str) -> String {
        if page.failed {
            ::log::warn!("Skipping summary of {}: {}", page.url, page.text);
            return format!("Failed to process website: {}", page.text);
        }

        let messages = messages_for(page, system_prompt);
        match self.backend.complete(&messages).await {
            Ok(summary) => {
                ::log::info!("Summarized {} ({} characters)", page.url, summary.len());
                summary
            }
            Err(e) => {
                ::log::error!("Summary request for {} failed: {}", page.url, e);
                format!("Error generating summary: {}", describe_error(&e))
            }
        }
    }

    /// Send a fixed message to check that the endpoint answers
    pub async fn test_connection(&self) -> String {
        let messages = [ChatMessage::user(CONNECTION_TEST_MESSAGE)];
        match self.backend.complete(&messages).await {
            Ok(reply) => reply,
            Err(e) => {
                ::log::error!("Connection test failed: {}", e);
                format!("Connection test failed: {}", describe_error(&e))
            }
        }
    }
}

/// The system and user messages sent for a page
pub fn messages_for(page: &PageContent, system_prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt),
        ChatMessage::user(user_prompt_for(page)),
    ]
}

pub fn user_prompt_for(page: &PageContent) -> String {
    format!(
        "You are looking at a website titled {}\n\
         The contents of this website is as follows; \
         please provide a short summary of this website in markdown. \
         If it includes news or price, then summarize these too.\n\n{}",
        page.title, page.text
    )
}
