use clap::Parser;
use std::path::PathBuf;
use web_reader::ReaderConfig;
use web_reader::error::ConfigResult;

#[derive(Parser, Debug)]
#[command(name = "web-reader")]
#[command(about = "Fetches a web page and prints a markdown summary written by a chat model")]
#[command(version)]
pub struct Args {
    /// URL of the page to summarize
    #[arg(required_unless_present = "test_connection")]
    pub url: Option<String>,

    /// API key for the chat-completion endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model to ask for the summary
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Replace the default system prompt
    #[arg(short, long)]
    pub system_prompt: Option<String>,

    /// Send a test message to the model before summarizing
    #[arg(long)]
    pub test_connection: bool,

    /// Accept API keys that don't look like OpenAI project keys
    #[arg(long)]
    pub skip_key_check: bool,
}

impl Args {
    /// Build the reader configuration, command-line values taking precedence
    pub fn reader_config(&self) -> ConfigResult<ReaderConfig> {
        let mut config = match &self.config {
            Some(path) => ReaderConfig::from_file(path)?,
            None => ReaderConfig::new(""),
        };

        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(prompt) = &self.system_prompt {
            config.system_prompt = prompt.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_required_without_connection_test() {
        assert!(Args::try_parse_from(["web-reader"]).is_err());
        assert!(Args::try_parse_from(["web-reader", "--test-connection"]).is_ok());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "web-reader",
            "https://example.com",
            "--api-key",
            "sk-proj-cli",
            "--model",
            "gpt-4o",
            "--system-prompt",
            "Only prices.",
        ])
        .unwrap();

        let config = args.reader_config().unwrap();
        assert_eq!(args.url.as_deref(), Some("https://example.com"));
        assert_eq!(config.api_key, "sk-proj-cli");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.system_prompt, "Only prices.");
        assert_eq!(config.fetch_timeout_secs, 10);
    }

    #[test]
    fn test_missing_config_file() {
        let args =
            Args::try_parse_from(["web-reader", "https://example.com", "-c", "/nonexistent.json"])
                .unwrap();
        assert!(args.reader_config().is_err());
    }
}
