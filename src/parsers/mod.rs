pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

pub use html::HtmlError;

/// Result of parsing a page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Trimmed `<title>` text, or the missing-title sentinel
    pub title: String,
    /// Cleaned, single-line visible text
    pub content: String,
}

impl ParseResult {
    /// Creates a new parse result with the given title and content
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }
}

/// Main parser that turns a raw response body into title and text
pub struct Parser;

impl Parser {
    /// Parse a decoded response body as HTML, whatever content type it was served with
    pub fn parse(document: &str) -> Result<ParseResult, HtmlError> {
        html::ensure_text(document)?;
        let extracted = html::parse(document)?;
        let content = text::clean(&extracted.content);
        ::log::debug!(
            "Parsed page '{}' into {} characters of text",
            extracted.title,
            content.len()
        );
        Ok(ParseResult::new(extracted.title, content))
    }
}
