//! HTML minification for the "copy to the email platform" workflow:
//! comments out, inter-tag whitespace out, runs of whitespace collapsed.
//! Conditional comments (`<!--[if mso]> … <![endif]-->`) are kept because
//! Outlook still needs them.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<!--(.*?)-->").expect("Invalid comment regex"))
}

fn inter_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">\s+<").expect("Invalid inter-tag regex"))
}

fn whitespace_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("Invalid whitespace-run regex"))
}

/// Compress HTML for pasting into an email platform's template box.
///
/// Not a real minifier: no parsing, no attribute rewriting. Whitespace
/// inside `<pre>` is not special-cased; email templates don't use it.
pub fn minify_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    // Strip comments, keeping conditional ones
    let minified = comment_regex().replace_all(html, |caps: &Captures| {
        let inner = &caps[1];
        if inner.starts_with('[') || inner.starts_with('<') {
            caps[0].to_string()
        } else {
            String::new()
        }
    });

    let minified = inter_tag_regex().replace_all(&minified, "><");
    let minified = minified.trim();
    whitespace_run_regex().replace_all(minified, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minify_removes_comments() {
        let html = "<div><!-- internal note --><p>kept</p></div>";

        assert_eq!(minify_html(html), "<div><p>kept</p></div>");
    }

    #[test]
    fn test_minify_keeps_conditional_comments() {
        let html = "<!--[if mso]><table><tr><td><![endif]-->content<!--<![endif]-->";

        let minified = minify_html(html);

        assert!(minified.contains("<!--[if mso]>"));
        assert!(minified.contains("<!--<![endif]-->"));
    }

    #[test]
    fn test_minify_removes_inter_tag_whitespace() {
        let html = "<table>\n  <tr>\n    <td>x</td>\n  </tr>\n</table>";

        assert_eq!(minify_html(html), "<table><tr><td>x</td></tr></table>");
    }

    #[test]
    fn test_minify_trims_and_collapses_runs() {
        let html = "  <p>two   spaces\tand a tab</p>  ";

        assert_eq!(minify_html(html), "<p>two spaces and a tab</p>");
    }

    #[test]
    fn test_minify_empty_input() {
        assert_eq!(minify_html(""), "");
    }

    #[test]
    fn test_minify_preserves_liquid_tags() {
        let html = "<p>\n  {{ shop.name }}\n</p>";

        let minified = minify_html(html);

        assert!(minified.contains("{{ shop.name }}"));
    }
}
