//! Fragment extraction: which slice of the document the rich-text mirror
//! edits, and how the edited result is written back.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Records which extraction strategy produced the editable fragment, so the
/// write-back uses the matching strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// An explicit selection in the code buffer; the remembered byte range
    /// is replaced verbatim on write-back
    Selection(Range<usize>),
    /// The inner content of the `<body>` container; write-back re-locates
    /// the body in the current document and replaces only its inner content
    Body,
    /// The whole document (no body container found)
    Full,
}

fn body_regex() -> &'static Regex {
    static BODY_REGEX: OnceLock<Regex> = OnceLock::new();
    BODY_REGEX.get_or_init(|| {
        Regex::new(r"(?is)<body[^>]*>(.*?)</body>").expect("Invalid body regex")
    })
}

fn head_regex() -> &'static Regex {
    static HEAD_REGEX: OnceLock<Regex> = OnceLock::new();
    HEAD_REGEX
        .get_or_init(|| Regex::new(r"(?is)<head[^>]*>.*?</head>").expect("Invalid head regex"))
}

/// Byte range of the content between `<body …>` and `</body>`, if the
/// document has a recognizable body container
pub fn body_inner_range(html: &str) -> Option<Range<usize>> {
    body_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.range())
}

/// The document minus its head section. Fallback for documents without a
/// body container; returns the input unchanged when there is no head either.
pub fn strip_head(html: &str) -> String {
    head_regex().replace(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_inner_range_simple() {
        let html = "<html><body><p>hi</p></body></html>";

        let range = body_inner_range(html).expect("Should find body");

        assert_eq!(&html[range], "<p>hi</p>");
    }

    #[test]
    fn test_body_inner_range_with_attributes() {
        let html = r#"<body class="email" style="margin:0">content</body>"#;

        let range = body_inner_range(html).expect("Should find body");

        assert_eq!(&html[range], "content");
    }

    #[test]
    fn test_body_inner_range_case_insensitive() {
        let html = "<BODY>x</BODY>";

        assert!(body_inner_range(html).is_some());
    }

    #[test]
    fn test_body_inner_range_missing() {
        assert_eq!(body_inner_range("<div>no body here</div>"), None);
    }

    #[test]
    fn test_body_inner_range_multiline() {
        let html = "<body>\n<p>line 1</p>\n<p>line 2</p>\n</body>";

        let range = body_inner_range(html).expect("Should find body");

        assert_eq!(&html[range], "\n<p>line 1</p>\n<p>line 2</p>\n");
    }

    #[test]
    fn test_strip_head_removes_head_section() {
        let html = "<html><head><title>t</title><style>p{}</style></head><div>kept</div></html>";

        assert_eq!(strip_head(html), "<html><div>kept</div></html>");
    }

    #[test]
    fn test_strip_head_without_head_is_noop() {
        let html = "<div>as-is</div>";

        assert_eq!(strip_head(html), html);
    }
}
