use crate::chat::ChatBackend;
use crate::chat::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::ReaderConfig;
use crate::error::{ChatError, ChatResult, ConfigResult};
use crate::utils::excerpt;
use url::Url;

/// Longest error body kept in a `ChatError::Status`
const ERROR_BODY_LIMIT: usize = 500;

/// Client for an OpenAI-compatible chat-completions API
pub struct OpenAiChat {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl OpenAiChat {
    pub fn new(config: &ReaderConfig) -> ConfigResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.chat_completions_url()?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ChatBackend for OpenAiChat {
    async fn complete(&self, messages: &[ChatMessage]) -> ChatResult<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        ::log::debug!(
            "Sending {} messages to {} (model {})",
            messages.len(),
            self.endpoint,
            self.model
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        // Check status before parsing
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            ::log::error!("Chat API error {}: {}", status, excerpt(&body, 200));
            return Err(ChatError::Status {
                status,
                body: excerpt(&body, ERROR_BODY_LIMIT),
            });
        }

        let response = response.json::<ChatCompletionResponse>().await?;

        if let Some(error) = response.error {
            return Err(ChatError::Api(error.message));
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ChatError::EmptyResponse)
    }
}
