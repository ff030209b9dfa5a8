//! Direct-manipulation helpers for the code view: wrapping a selection in
//! tags, inserting canned email components at the caret, and a rough
//! formatting cleanup pass. These are the toolbar actions, minus the
//! toolbar.

use regex::Regex;
use std::sync::OnceLock;

use crate::editing::document::Document;

/// Wrap the current selection in a start/end tag pair.
///
/// With an empty selection the tags are inserted adjacent and the caret is
/// parked between them, ready for typing.
pub fn wrap_selection(doc: &mut Document, start_tag: &str, end_tag: &str) {
    let range = doc.selection();
    let selected = doc.selected_text().unwrap_or_default();
    let was_empty = selected.is_empty();

    let wrapped = format!("{start_tag}{selected}{end_tag}");
    doc.replace_range(range.clone(), &wrapped);

    if was_empty {
        doc.set_caret(range.start + start_tag.len());
    }
}

/// Anchor element for an inline link
pub fn link_html(url: &str, text: &str) -> String {
    let link_text = if text.is_empty() { "Link Text" } else { text };
    format!(r#"<a href="{url}">{link_text}</a>"#)
}

/// Call-to-action button styled for email clients
pub fn button_html(text: &str, url: &str) -> String {
    format!(
        r#"<a href="{url}" style="display: inline-block; background-color: #3490dc; color: white; padding: 12px 24px; text-decoration: none; font-weight: bold; border-radius: 4px; text-align: center;">{text}</a>"#
    )
}

/// Horizontal divider
pub fn divider_html() -> &'static str {
    r#"<hr style="border: 0; height: 1px; background-color: #e2e8f0; margin: 24px 0;">"#
}

/// Table skeleton with a header row and `rows - 1` body rows
pub fn table_html(rows: usize, cols: usize) -> String {
    let rows = rows.max(1);
    let cols = cols.max(1);

    let mut table = String::from("<table style=\"width: 100%; border-collapse: collapse;\">\n");

    table.push_str("  <thead>\n    <tr>\n");
    for c in 0..cols {
        table.push_str(&format!(
            "      <th style=\"padding: 8px; border-bottom: 1px solid #e2e8f0; text-align: left;\">Header {}</th>\n",
            c + 1
        ));
    }
    table.push_str("    </tr>\n  </thead>\n");

    table.push_str("  <tbody>\n");
    for r in 0..rows.saturating_sub(1) {
        table.push_str("    <tr>\n");
        for c in 0..cols {
            table.push_str(&format!(
                "      <td style=\"padding: 8px; border-bottom: 1px solid #e2e8f0;\">Cell {}-{}</td>\n",
                r + 1,
                c + 1
            ));
        }
        table.push_str("    </tr>\n");
    }
    table.push_str("  </tbody>\n</table>");

    table
}

fn close_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"</(div|p|table|tr|td|th|thead|tbody|tfoot|h[1-6]|ul|ol|li|section|article|header|footer)>",
        )
        .expect("Invalid close-block regex")
    })
}

fn open_container_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<(div|table|thead|tbody|tfoot|ul|ol|section|article|header|footer)([^>]*)>")
            .expect("Invalid open-container regex")
    })
}

fn open_row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(tr)([^>]*)>").expect("Invalid row regex"))
}

fn open_cell_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(td|th)([^>]*)>").expect("Invalid cell regex"))
}

fn open_text_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(h[1-6]|p)([^>]*)>").expect("Invalid text-block regex"))
}

fn blank_lines_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n\s*\n").expect("Invalid blank-line regex"))
}

/// Rough readability pass over pasted or machine-generated HTML: newlines
/// around block boundaries, cell indentation, collapsed blank runs. Not a
/// formatter, just cleanup.
pub fn clean_formatting(html: &str) -> String {
    let cleaned = close_block_regex().replace_all(html, "</${1}>\n");
    let cleaned = open_container_regex().replace_all(&cleaned, "\n<${1}${2}>\n");
    let cleaned = open_row_regex().replace_all(&cleaned, "  <${1}${2}>\n");
    let cleaned = open_cell_regex().replace_all(&cleaned, "    <${1}${2}>");
    let cleaned = open_text_regex().replace_all(&cleaned, "\n<${1}${2}>");

    let mut collapsed = cleaned.into_owned();
    // The pattern overlaps itself, so iterate to a fixed point
    loop {
        let next = blank_lines_regex().replace_all(&collapsed, "\n\n").into_owned();
        if next == collapsed {
            return next;
        }
        collapsed = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_selection_wraps_selected_text() {
        let mut doc = Document::from_text("make this bold");
        doc.set_selection(10..14);

        wrap_selection(&mut doc, "<strong>", "</strong>");

        assert_eq!(doc.text(), "make this <strong>bold</strong>");
    }

    #[test]
    fn test_wrap_selection_empty_parks_caret_between_tags() {
        let mut doc = Document::from_text("ab");
        doc.set_caret(1);

        wrap_selection(&mut doc, "<em>", "</em>");

        assert_eq!(doc.text(), "a<em></em>b");
        // Caret sits between the tags so typing lands inside
        assert_eq!(doc.selection(), 5..5);
    }

    #[test]
    fn test_wrap_selection_preserves_liquid_tags() {
        let mut doc = Document::from_text("{{ shop.name }}");
        doc.set_selection(0..15);

        wrap_selection(&mut doc, "<h1>", "</h1>");

        assert_eq!(doc.text(), "<h1>{{ shop.name }}</h1>");
    }

    #[test]
    fn test_link_html_defaults_text() {
        assert_eq!(
            link_html("https://example.com", ""),
            r#"<a href="https://example.com">Link Text</a>"#
        );
        assert_eq!(
            link_html("https://example.com", "Shop"),
            r#"<a href="https://example.com">Shop</a>"#
        );
    }

    #[test]
    fn test_table_html_dimensions() {
        let table = table_html(3, 2);

        assert_eq!(table.matches("<th ").count(), 2);
        // 3 rows = 1 header row + 2 body rows of 2 cells each
        assert_eq!(table.matches("<td ").count(), 4);
        assert!(table.starts_with("<table"));
        assert!(table.ends_with("</table>"));
    }

    #[test]
    fn test_table_html_clamps_degenerate_sizes() {
        let table = table_html(0, 0);

        assert_eq!(table.matches("<th ").count(), 1);
        assert_eq!(table.matches("<td ").count(), 0);
    }

    #[test]
    fn test_clean_formatting_breaks_after_closing_blocks() {
        let cleaned = clean_formatting("<p>a</p><p>b</p>");

        assert!(cleaned.contains("</p>\n"));
    }

    #[test]
    fn test_clean_formatting_collapses_blank_runs() {
        let cleaned = clean_formatting("<span>a</span>\n\n\n\n\n<span>b</span>");

        assert!(!cleaned.contains("\n\n\n"));
        assert!(cleaned.contains("\n\n"));
    }

    #[test]
    fn test_clean_formatting_leaves_inline_content_alone() {
        let html = "plain text with {{ shop.name }} and <em>emphasis</em>";

        assert_eq!(clean_formatting(html), html);
    }
}
