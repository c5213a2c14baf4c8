use crate::parsers::ParseResult;
use crate::results::MISSING_TITLE;
use scraper::{Html, Selector};

/// Elements whose text must never reach the extracted content
const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("response body is not text ({0} bytes of binary data)")]
    Binary(usize),

    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// Rejects decoded bodies that are binary content rather than a page.
///
/// Decoding happens at the HTTP layer using the declared charset; a NUL
/// character surviving that step means the body was never text.
pub fn ensure_text(document: &str) -> Result<(), HtmlError> {
    if document.contains('\0') {
        return Err(HtmlError::Binary(document.len()));
    }
    Ok(())
}

/// Parses an HTML document into its title and raw visible body text.
///
/// The returned content is not cleaned up yet: text nodes are concatenated as
/// they appear, with `<script>` and `<style>` subtrees left out entirely.
pub fn parse(html: &str) -> Result<ParseResult, HtmlError> {
    let doc = Html::parse_document(html);

    let title = extract_title(&doc)?.unwrap_or_else(|| MISSING_TITLE.to_string());
    let content = extract_visible_text(&doc)?;

    Ok(ParseResult::new(title, content))
}

/// Extracts the trimmed text of the first `<title>` element
pub fn extract_title(doc: &Html) -> Result<Option<String>, HtmlError> {
    let title_selector = selector("title")?;
    Ok(doc
        .select(&title_selector)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string()))
}

/// Extracts every text node under `<body>` that is not inside a hidden element
pub fn extract_visible_text(doc: &Html) -> Result<String, HtmlError> {
    let body_selector = selector("body")?;
    // Frameset documents have no body; fall back to the whole tree
    let root = doc
        .select(&body_selector)
        .next()
        .unwrap_or_else(|| doc.root_element());

    let text = root
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
            })
        })
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect::<String>();

    Ok(text)
}

fn selector(css: &str) -> Result<Selector, HtmlError> {
    Selector::parse(css).map_err(|e| HtmlError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}
