use crate::parsers::{HtmlError, Parser};
use crate::results::MISSING_TITLE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_cleaned_text() {
        let html = "<html><head><title>Foo</title></head><body>  A   B\nC  </body></html>";
        let result = Parser::parse(html).unwrap();
        assert_eq!(result.title, "Foo");
        assert_eq!(result.content, "A B C");
    }

    #[test]
    fn test_script_and_style_never_in_output() {
        let html = r#"<html>
            <head>
                <title>Prices</title>
                <style>body { content: "Style text looks visible"; }</style>
                <script>document.write("Script text looks visible");</script>
            </head>
            <body>
                <h1>Plans</h1>
                <script type="application/ld+json">{"name": "Hidden JSON"}</script>
                <p>Basic  $5</p>
                <style>p::after { content: "Hidden style"; }</style>
                <noscript>Enable JavaScript</noscript>
            </body>
        </html>"#;
        let result = Parser::parse(html).unwrap();

        assert_eq!(result.title, "Prices");
        assert!(!result.content.contains("Style text"));
        assert!(!result.content.contains("Script text"));
        assert!(!result.content.contains("Hidden JSON"));
        assert!(!result.content.contains("Hidden style"));
        assert!(result.content.contains("Plans"));
        assert!(result.content.contains("Basic $5"));
    }

    #[test]
    fn test_missing_title_sentinel() {
        let result = Parser::parse("<html><body><p>No head here</p></body></html>").unwrap();
        assert_eq!(result.title, MISSING_TITLE);
        assert_eq!(result.content, "No head here");
    }

    #[test]
    fn test_malformed_html_is_best_effort() {
        let result = Parser::parse("<title>Broken</title><div><p>Unclosed <b>tags").unwrap();
        assert_eq!(result.title, "Broken");
        assert_eq!(result.content, "Unclosed tags");
    }

    #[test]
    fn test_plain_text_body_is_treated_as_html() {
        let result = Parser::parse("just some text\n\nmore text").unwrap();
        assert_eq!(result.title, MISSING_TITLE);
        assert_eq!(result.content, "just some text more text");
    }

    #[test]
    fn test_nul_in_body_is_a_parse_error() {
        let err = Parser::parse("\u{fffd}\u{fffd}\0\x10").unwrap_err();
        assert!(matches!(err, HtmlError::Binary(_)));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let html = "<html><head><title>Same</title></head><body><p>One  two</p></body></html>";
        let first = Parser::parse(html).unwrap();
        let second = Parser::parse(html).unwrap();
        assert_eq!(first, second);
    }
}
