//! End-to-end session flows over the real starter template.

use std::ops::Range;
use std::time::{Duration, Instant};

use liquidmail_engine::editing::compose;
use liquidmail_engine::editing::document::Document;
use liquidmail_engine::editing::session::{
    ChangeSource, EditorSession, RichTextSurface, SessionOptions,
};
use liquidmail_engine::editing::tags;
use liquidmail_engine::minify::minify_html;
use liquidmail_engine::preview::{self, PreviewOptions};
use liquidmail_engine::snippets;
use liquidmail_engine::templates::DEFAULT_TEMPLATE;

struct FakeRichText {
    html: String,
}

impl FakeRichText {
    fn new() -> Self {
        Self {
            html: String::new(),
        }
    }
}

impl RichTextSurface for FakeRichText {
    fn is_ready(&self) -> bool {
        true
    }

    fn html(&self) -> String {
        self.html.clone()
    }

    fn set_html(&mut self, html: &str) {
        self.html = html.to_string();
    }
}

fn default_session() -> EditorSession<Document, FakeRichText> {
    EditorSession::new(
        Document::from_text(DEFAULT_TEMPLATE),
        FakeRichText::new(),
        SessionOptions::default(),
    )
}

#[test]
fn default_template_round_trips_byte_identical() {
    let mut session = default_session();
    session.code_mut().set_caret(0);

    session.sync_to_rich_text().unwrap();
    session.settle();
    session.sync_to_code().unwrap();

    assert_eq!(session.code().text(), DEFAULT_TEMPLATE);
}

#[test]
fn every_liquid_tag_in_default_template_is_protected() {
    let mut session = default_session();
    session.code_mut().set_caret(0);

    session.sync_to_rich_text().unwrap();

    let mirrored = session.rich().html();
    let range: Range<usize> =
        liquidmail_engine::editing::fragment::body_inner_range(DEFAULT_TEMPLATE).unwrap();
    let body = &DEFAULT_TEMPLATE[range];

    // Every tag in the body reaches the mirror as a marker, and the
    // markers unwrap back to the original body
    assert_eq!(tags::marker_count(&mirrored), tags::marker_count(&tags::protect(body)));
    assert_eq!(tags::unprotect(&mirrored), body);
}

#[test]
fn rich_text_edit_flows_back_after_quiet_window() {
    let mut session = default_session();
    session.code_mut().set_caret(0);
    session.sync_to_rich_text().unwrap();
    session.settle();
    let t0 = Instant::now();

    let edited = format!("{}<p>P.S. thanks!</p>", session.rich().html());
    session.rich_mut().set_html(&edited);
    session.rich_text_changed(ChangeSource::User, t0);

    assert!(session.poll(t0 + Duration::from_millis(800)));
    let text = session.code().text();
    assert!(text.contains("<p>P.S. thanks!</p>"));
    // The head survives the body-targeted write-back
    assert!(text.contains("<title>{{ shop.name }} - Order Confirmation</title>"));
}

#[test]
fn snippet_insertion_survives_the_mirror() {
    let block = snippets::find_block("customer-note").unwrap();
    let mut session = default_session();
    let insert_at = DEFAULT_TEMPLATE.find("<div class=\"footer\">").unwrap();
    session.code_mut().set_caret(insert_at);
    session.code_mut().insert(block.code);
    session.code_mut().set_caret(0);

    session.sync_to_rich_text().unwrap();
    session.settle();
    session.sync_to_code().unwrap();

    assert!(session.code().text().contains("{% if order.note %}"));
    assert!(session.code().text().contains("{% endif %}"));
}

#[test]
fn wrapped_selection_round_trips() {
    let mut doc = Document::from_text("<body>make me bold</body>");
    let start = "<body>".len();
    doc.set_selection(start..start + "make me bold".len());
    compose::wrap_selection(&mut doc, "<strong>", "</strong>");

    assert_eq!(doc.text(), "<body><strong>make me bold</strong></body>");

    let mut session = EditorSession::new(doc, FakeRichText::new(), SessionOptions::default());
    session.code_mut().set_caret(0);
    session.sync_to_rich_text().unwrap();
    session.settle();
    session.sync_to_code().unwrap();
    assert_eq!(
        session.code().text(),
        "<body><strong>make me bold</strong></body>"
    );
}

#[test]
fn preview_of_default_template_has_no_liquid_left_over() {
    let rendered = preview::render(DEFAULT_TEMPLATE, &PreviewOptions::default());

    assert!(!rendered.contains("{{"));
    assert!(!rendered.contains("{%"));
    assert!(rendered.contains("Your Shopify Store"));
    // Loop body repeated per the default repeat count
    assert_eq!(rendered.matches("Sample Product").count(), 3);
}

#[test]
fn minified_template_still_round_trips_tags() {
    let minified = minify_html(DEFAULT_TEMPLATE);

    assert!(minified.len() < DEFAULT_TEMPLATE.len());
    assert_eq!(
        tags::unprotect(&tags::protect(&minified)),
        minified,
        "minified output must keep all tags wrappable"
    );
}
