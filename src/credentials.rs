//! Pre-flight API key checks.
//!
//! These checks only catch obvious copy/paste mistakes before the first
//! request. They are not a security boundary, and keys issued by other
//! providers will legitimately fail the default format check, so callers can
//! swap the validator or turn it off.

use crate::error::{ConfigError, ConfigResult};
use regex::Regex;

/// Default pattern for OpenAI project keys
pub const OPENAI_PROJECT_KEY_PATTERN: &str = r"^sk-proj-";

/// Checks the format of an API key before it is used
pub trait KeyValidator {
    fn validate(&self, api_key: &str) -> ConfigResult<()>;
}

/// Requires the key to match a regex and carry no surrounding whitespace
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
}

impl PatternValidator {
    /// Create a validator from a regex the key must match
    pub fn new(pattern: &str) -> ConfigResult<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The pattern keys are checked against
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for PatternValidator {
    fn default() -> Self {
        Self::new(OPENAI_PROJECT_KEY_PATTERN).expect("Default key pattern should be valid")
    }
}

impl KeyValidator for PatternValidator {
    fn validate(&self, api_key: &str) -> ConfigResult<()> {
        if !self.pattern.is_match(api_key) {
            return Err(ConfigError::UnexpectedKeyFormat {
                expected: self.pattern.as_str().to_string(),
            });
        }

        if api_key.trim() != api_key {
            return Err(ConfigError::SurroundingWhitespace);
        }

        Ok(())
    }
}

/// Performs no format check.
///
/// A missing key is still rejected by `ReaderConfig::validate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyKey;

impl KeyValidator for AcceptAnyKey {
    fn validate(&self, _api_key: &str) -> ConfigResult<()> {
        Ok(())
    }
}
