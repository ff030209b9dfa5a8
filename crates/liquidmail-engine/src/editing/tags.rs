//! Liquid tag protection for the rich-text mirror.
//!
//! The rich-text surface does not understand Liquid syntax, so before a
//! fragment is handed to it every well-formed tag is wrapped in an inert
//! marker span. The marker carries the verbatim tag text in a
//! `data-liquid-source` attribute (HTML-attribute-escaped), which makes the
//! wrap/unwrap a lossless round trip even when the surface reformats the
//! marker's visible content: `unprotect(protect(x)) == x`.
//!
//! This is regex based and deliberately best effort. Nested or unbalanced
//! tags are left untouched rather than guessed at.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// The two lexical forms of a Liquid tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `{{ … }}` output/interpolation tag
    Variable,
    /// `{% … %}` control tag (conditionals, loops)
    Control,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Variable => "variable",
            TagKind::Control => "control",
        }
    }
}

/// Matches one well-formed output tag or control tag. The character classes
/// exclude braces so a match can never span two tags; unbalanced forms
/// simply fail to match and pass through unmodified.
fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| {
        Regex::new(r"\{\{[^{}]*?\}\}|\{%[^{}]*?%\}").expect("Invalid liquid tag regex")
    })
}

/// Matches a protection marker, keyed off the `data-liquid-source`
/// attribute so formatting added around or inside the span by the
/// rich-text surface does not defeat unwrapping.
fn marker_regex() -> &'static Regex {
    static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKER_REGEX.get_or_init(|| {
        Regex::new(r#"(?s)<span\b[^>]*data-liquid-source="([^"]*)"[^>]*>.*?</span>"#)
            .expect("Invalid liquid marker regex")
    })
}

/// Classify a matched tag by its opening delimiter
fn kind_of(tag: &str) -> TagKind {
    if tag.starts_with("{{") {
        TagKind::Variable
    } else {
        TagKind::Control
    }
}

/// Wrap every well-formed Liquid tag in `fragment` in an inert marker span.
///
/// Text outside matched tags is untouched.
pub fn protect(fragment: &str) -> String {
    tag_regex()
        .replace_all(fragment, |caps: &Captures| {
            let tag = &caps[0];
            let kind = kind_of(tag);
            let source = html_escape::encode_double_quoted_attribute(tag);
            let label = html_escape::encode_text(tag);
            format!(
                r#"<span class="liquid-tag" data-liquid-kind="{}" data-liquid-source="{}" contenteditable="false">{}</span>"#,
                kind.as_str(),
                source,
                label,
            )
        })
        .into_owned()
}

/// Replace every marker span with the verbatim tag text it carries.
///
/// Exact inverse of [`protect`] for all well-formed input.
pub fn unprotect(fragment: &str) -> String {
    marker_regex()
        .replace_all(fragment, |caps: &Captures| {
            html_escape::decode_html_entities(&caps[1]).into_owned()
        })
        .into_owned()
}

/// Count the protected markers in a fragment (used by the session to log
/// how many tags survived a round trip)
pub fn marker_count(fragment: &str) -> usize {
    marker_regex().find_iter(fragment).count()
}
