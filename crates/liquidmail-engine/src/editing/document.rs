use xi_rope::Rope;
use xi_rope::delta::Builder;

/// The full HTML template held by the code editor.
///
/// Document is the single source of truth for the editing session. It keeps:
///
/// - the entire template (head, body, embedded Liquid tags) in one
///   `xi_rope::Rope` buffer, so saving writes back exactly the bytes that
///   were edited with no formatting drift;
/// - the current selection as a byte range into that buffer;
/// - a version counter incremented on every edit, which lets collaborators
///   (preview, rich-text mirror) cheaply detect staleness.
///
/// All mutation goes through [`Document::replace_range`] and
/// [`Document::insert`], which compile to rope deltas and keep the
/// selection inside the buffer.
pub struct Document {
    /// Rope buffer containing the entire template as UTF-8 text
    pub(crate) buffer: Rope,
    /// Current selection as byte offsets in the buffer; empty range = caret
    pub(crate) selection: std::ops::Range<usize>,
    /// Incremented on each edit, used for change detection
    pub(crate) version: u64,
}

impl Document {
    /// Create a new document from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    /// Create a new document from a string slice
    pub fn from_text(text: &str) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        Self {
            buffer,
            selection: len..len, // caret at end, matching a freshly loaded file
            version: 0,
        }
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get the document's content as raw bytes (exact round-trip)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    /// Get the buffer length in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get the current selection range
    pub fn selection(&self) -> std::ops::Range<usize> {
        self.selection.clone()
    }

    /// Set the selection range, clamped to the buffer
    pub fn set_selection(&mut self, selection: std::ops::Range<usize>) {
        let len = self.buffer.len();
        let start = selection.start.min(len);
        let end = selection.end.min(len).max(start);
        self.selection = start..end;
    }

    /// Place the caret (empty selection) at the given byte offset
    pub fn set_caret(&mut self, at: usize) {
        self.set_selection(at..at);
    }

    /// The selected text, if the selection is non-empty
    pub fn selected_text(&self) -> Option<String> {
        if self.selection.is_empty() {
            None
        } else {
            Some(self.slice_to_cow(self.selection.clone()).into_owned())
        }
    }

    /// Replace a byte range with new text.
    ///
    /// The caret ends up just after the inserted text; a selection that
    /// covered the replaced range collapses there too.
    pub fn replace_range(&mut self, range: std::ops::Range<usize>, text: &str) {
        let len = self.buffer.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);

        let mut builder = Builder::new(len);
        builder.replace(start..end, Rope::from(text));
        self.buffer = builder.build().apply(&self.buffer);

        self.set_caret(start + text.len());
        self.version += 1;
    }

    /// Insert text at the current caret, replacing the selection if any
    pub fn insert(&mut self, text: &str) {
        self.replace_range(self.selection.clone(), text);
    }

    /// Replace the whole buffer, collapsing the selection to the end
    pub fn set_text(&mut self, text: &str) {
        self.replace_range(0..self.buffer.len(), text);
    }

    /// Slice the buffer to a cow string, clamping the range to the buffer
    pub(crate) fn slice_to_cow(&self, range: std::ops::Range<usize>) -> std::borrow::Cow<'_, str> {
        let doc_len = self.buffer.len();
        let start = range.start.min(doc_len);
        let end = range.end.min(doc_len).max(start);
        self.buffer.slice_to_cow(start..end)
    }
}

impl Clone for Document {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            selection: self.selection.clone(),
            version: self.version,
        }
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        // Rope equality is structural; compare rendered text instead
        self.buffer.to_string() == other.buffer.to_string()
            && self.selection == other.selection
            && self.version == other.version
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("len", &self.buffer.len())
            .field("selection", &self.selection)
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ Basic document tests ============

    #[test]
    fn test_document_from_bytes_valid_utf8() {
        let text = "<p>Hello {{ customer.first_name }}</p>";
        let bytes = text.as_bytes();

        let doc = Document::from_bytes(bytes).expect("Should create document from valid UTF-8");

        assert_eq!(doc.to_bytes(), bytes);
        assert_eq!(doc.version(), 0);
        assert_eq!(doc.selection(), text.len()..text.len());
    }

    #[test]
    fn test_document_from_bytes_invalid_utf8() {
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];

        let result = Document::from_bytes(&invalid_bytes);

        assert!(result.is_err());
    }

    #[test]
    fn test_document_to_bytes_preserves_content() {
        let original =
            "<!DOCTYPE html>\n<html>\n<body>\n<p>hi {{ shop.name }}</p>\n</body>\n</html>";

        let doc = Document::from_text(original);

        // Exact byte round-trip
        assert_eq!(doc.to_bytes(), original.as_bytes());
    }

    #[test]
    fn test_document_with_unicode() {
        let text = "<p>Hello 世界! 🦀 {{ shop.name }}</p>";

        let doc = Document::from_text(text);

        assert_eq!(doc.text(), text);
    }

    #[test]
    fn test_document_with_windows_line_endings() {
        let text = "<p>Line 1</p>\r\n<p>Line 2</p>\r\n";

        let doc = Document::from_text(text);

        assert_eq!(doc.to_bytes(), text.as_bytes());
    }

    // ============ Edit tests ============

    #[test]
    fn test_replace_range_updates_text_and_version() {
        let mut doc = Document::from_text("<b>X</b>");

        doc.replace_range(3..4, "Y");

        assert_eq!(doc.text(), "<b>Y</b>");
        assert_eq!(doc.version(), 1);
        assert_eq!(doc.selection(), 4..4);
    }

    #[test]
    fn test_replace_range_clamps_out_of_bounds() {
        let mut doc = Document::from_text("abc");

        doc.replace_range(2..99, "Z");

        assert_eq!(doc.text(), "abZ");
    }

    #[test]
    fn test_insert_at_caret() {
        let mut doc = Document::from_text("<p></p>");
        doc.set_caret(3);

        doc.insert("{{ shop.name }}");

        assert_eq!(doc.text(), "<p>{{ shop.name }}</p>");
        assert_eq!(doc.selection(), 18..18);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut doc = Document::from_text("<p>old</p>");
        doc.set_selection(3..6);

        doc.insert("new");

        assert_eq!(doc.text(), "<p>new</p>");
    }

    #[test]
    fn test_set_text_replaces_everything() {
        let mut doc = Document::from_text("stale");

        doc.set_text("<p>fresh</p>");

        assert_eq!(doc.text(), "<p>fresh</p>");
        assert_eq!(doc.version(), 1);
    }

    #[test]
    fn test_selected_text() {
        let mut doc = Document::from_text("<a><b>X</b></a>");
        doc.set_selection(6..7);

        assert_eq!(doc.selected_text().as_deref(), Some("X"));

        doc.set_caret(0);
        assert_eq!(doc.selected_text(), None);
    }

    #[test]
    fn test_set_selection_clamps_to_buffer() {
        let mut doc = Document::from_text("abc");

        doc.set_selection(1..99);

        assert_eq!(doc.selection(), 1..3);
    }
}
