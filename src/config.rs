use crate::credentials::KeyValidator;
use crate::error::{ConfigError, ConfigResult};
use crate::summary::DEFAULT_SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Configuration for the web reader
#[derive(Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Credential for the chat-completion API
    #[serde(default)]
    pub api_key: String,

    /// Model identifier sent with every chat request
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// System prompt used unless a call overrides it
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Timeout for the page fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Timeout for the chat-completion request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User agent sent with the page fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for model
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Default value for api_base
fn default_api_base() -> String {
    "https://api.openai.com/v1/".to_string()
}

/// Default value for system_prompt
fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

/// Default value for fetch_timeout_secs
fn default_fetch_timeout_secs() -> u64 {
    10
}

/// Default value for request_timeout_secs
fn default_request_timeout_secs() -> u64 {
    60
}

/// Default value for user_agent
fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ReaderConfig {
    /// Create a new configuration with default values
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: default_model(),
            api_base: default_api_base(),
            system_prompt: default_system_prompt(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the credential and endpoint before any request is made
    pub fn validate(&self, validator: &dyn KeyValidator) -> ConfigResult<()> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        validator.validate(&self.api_key)?;
        self.chat_completions_url()?;
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full URL of the chat-completions endpoint under `api_base`
    pub fn chat_completions_url(&self) -> ConfigResult<Url> {
        let invalid = |source| ConfigError::InvalidApiBase {
            url: self.api_base.clone(),
            source,
        };

        // Without a trailing slash `join` would replace the last path segment
        let mut base = self.api_base.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        Url::parse(&base)
            .and_then(|base| base.join("chat/completions"))
            .map_err(invalid)
    }
}

impl fmt::Debug for ReaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("system_prompt", &self.system_prompt)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
