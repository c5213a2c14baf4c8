/// Startup errors. These stop the reader before any network activity.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No API key was found - please check your configuration")]
    MissingApiKey,

    #[error("API key doesn't match {expected}; please check you're using the right key")]
    UnexpectedKeyFormat { expected: String },

    #[error("API key has whitespace at start or end - please remove them")]
    SurroundingWhitespace,

    #[error("Invalid key pattern: {0}")]
    KeyPattern(#[from] regex::Error),

    #[error("Invalid API base URL '{url}': {source}")]
    InvalidApiBase {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failures talking to the chat-completion endpoint
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("API error: {0}")]
    Api(String),

    #[error("Response contained no message content")]
    EmptyResponse,
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Failures downloading a page
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),
}
