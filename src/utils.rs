use std::error::Error;

/// Renders an error together with its chain of sources.
///
/// reqwest only names the failing URL in its top-level message; the useful
/// part ("operation timed out", "dns error", ...) lives in the sources.
pub fn describe_error(err: &(dyn Error + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }

    description
}

/// Shortens text to at most `max_chars` characters, marking the cut
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn test_describe_error_includes_sources() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "operation timed out",
        ));
        assert_eq!(describe_error(&err), "outer failure: operation timed out");
    }

    #[test]
    fn test_describe_error_without_source() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "plain");
        assert_eq!(describe_error(&err), "plain");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("héllo wörld", 5), "héllo...");
    }
}
