//! The editing session: two surfaces, one document, no feedback loops.
//!
//! [`EditorSession`] owns the code surface (source of truth) and the
//! rich-text mirror, and carries all the state that used to be ambient in
//! earlier iterations: the in-flight direction flags, the remembered edit
//! target, and the debounce deadline. Change notifications and the mode
//! toggle all funnel through it.

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::editing::document::Document;
use crate::editing::fragment::{self, EditTarget};
use crate::editing::tags;
use crate::preview::PreviewOptions;

/// Plain-text surface holding the full template. Code is the source of
/// truth; the session reads and writes it through this seam.
pub trait CodeSurface {
    fn value(&self) -> String;
    fn set_value(&mut self, text: &str);
    /// Current non-empty selection as a byte range, if any
    fn selection(&self) -> Option<Range<usize>>;
    fn replace_range(&mut self, range: Range<usize>, text: &str);
    /// Re-measure after being hidden; layout hook, no content change
    fn refresh(&mut self) {}
}

/// WYSIWYG surface mirroring the editable fragment
pub trait RichTextSurface {
    /// False until the surface has finished initializing; syncing into an
    /// unready surface is an error, not a panic
    fn is_ready(&self) -> bool;
    fn html(&self) -> String;
    fn set_html(&mut self, html: &str);
}

impl CodeSurface for Document {
    fn value(&self) -> String {
        self.text()
    }

    fn set_value(&mut self, text: &str) {
        self.set_text(text);
    }

    fn selection(&self) -> Option<Range<usize>> {
        let sel = Document::selection(self);
        if sel.is_empty() { None } else { Some(sel) }
    }

    fn replace_range(&mut self, range: Range<usize>, text: &str) {
        Document::replace_range(self, range, text);
    }
}

/// Which surface is live for direct user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorView {
    Code,
    RichText,
}

/// Origin of a rich-text change notification. Programmatic writes (our own
/// syncs, snippet insertion) must never be mistaken for user edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    User,
    Api,
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("rich-text editor is not ready yet")]
    RichTextNotReady,
    #[error("rich-text editor was never synced; nothing to write back")]
    NeverSynced,
}

/// Deadline-based debouncer. The host injects the clock, which keeps the
/// quiet-window behavior deterministic under test.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Note a change; resets any pending deadline (last write wins)
    pub fn note(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the quiet window has elapsed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Session tunables. The initial view and quiet window vary by front end,
/// so they are configuration, not contract.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub initial_view: EditorView,
    pub quiet_window: Duration,
    pub auto_sync: bool,
    pub preview: PreviewOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            initial_view: EditorView::Code,
            quiet_window: Duration::from_millis(750),
            auto_sync: true,
            preview: PreviewOptions::default(),
        }
    }
}

/// Keeps the two surfaces consistent without infinite recursion or loss of
/// Liquid syntax.
///
/// Invariants:
/// - while `from_code` is set, rich-text change notifications are ignored;
///   while `from_rich_text` is set, code change notifications are ignored.
///   The host clears both via [`EditorSession::settle`] once it has drained
///   the change events a programmatic write produced.
/// - `edit_target` always records the extraction strategy of the *last*
///   code→rich-text sync, and write-back uses the same strategy.
pub struct EditorSession<C, R> {
    code: C,
    rich: R,
    view: EditorView,
    edit_target: Option<EditTarget>,
    from_code: bool,
    from_rich_text: bool,
    auto_sync: bool,
    debounce: Debouncer,
    preview_dirty: bool,
    preview_opts: PreviewOptions,
}

impl<C: CodeSurface, R: RichTextSurface> EditorSession<C, R> {
    pub fn new(code: C, rich: R, opts: SessionOptions) -> Self {
        Self {
            code,
            rich,
            view: opts.initial_view,
            edit_target: None,
            from_code: false,
            from_rich_text: false,
            auto_sync: opts.auto_sync,
            debounce: Debouncer::new(opts.quiet_window),
            preview_dirty: true,
            preview_opts: opts.preview,
        }
    }

    pub fn view(&self) -> EditorView {
        self.view
    }

    pub fn code(&self) -> &C {
        &self.code
    }

    pub fn code_mut(&mut self) -> &mut C {
        &mut self.code
    }

    pub fn rich(&self) -> &R {
        &self.rich
    }

    pub fn rich_mut(&mut self) -> &mut R {
        &mut self.rich
    }

    pub fn auto_sync(&self) -> bool {
        self.auto_sync
    }

    pub fn set_auto_sync(&mut self, enabled: bool) {
        self.auto_sync = enabled;
        if !enabled {
            self.debounce.cancel();
        }
    }

    pub fn sync_in_flight(&self) -> bool {
        self.from_code || self.from_rich_text
    }

    pub fn edit_target(&self) -> Option<&EditTarget> {
        self.edit_target.as_ref()
    }

    /// Push the code buffer's content into the rich-text mirror.
    ///
    /// Fragment precedence: explicit selection, then body container, then
    /// the whole document (minus any head section). Overwrites unsynced
    /// rich-text edits; code is the source of truth at sync time.
    pub fn sync_to_rich_text(&mut self) -> Result<(), SyncError> {
        if !self.rich.is_ready() {
            return Err(SyncError::RichTextNotReady);
        }

        let doc = self.code.value();
        let (fragment_text, target) = match self.code.selection() {
            Some(sel) => match doc.get(sel.clone()) {
                Some(selected) => (selected.to_string(), EditTarget::Selection(sel)),
                None => {
                    // Stale selection range from the surface; ignore it and
                    // fall back to the document-level strategies
                    log::warn!("ignoring out-of-bounds selection {sel:?}");
                    Self::document_fragment(&doc)
                }
            },
            None => Self::document_fragment(&doc),
        };

        let protected = tags::protect(&fragment_text);
        self.from_code = true;
        self.rich.set_html(&protected);
        self.edit_target = Some(target);
        log::debug!(
            "code -> rich text: {} bytes, {} protected tags",
            protected.len(),
            tags::marker_count(&protected)
        );
        Ok(())
    }

    fn document_fragment(doc: &str) -> (String, EditTarget) {
        match fragment::body_inner_range(doc) {
            Some(inner) => (doc[inner].to_string(), EditTarget::Body),
            None => (fragment::strip_head(doc), EditTarget::Full),
        }
    }

    /// Write the rich-text mirror's content back into the code buffer,
    /// using the extraction strategy remembered from the last
    /// [`EditorSession::sync_to_rich_text`].
    pub fn sync_to_code(&mut self) -> Result<(), SyncError> {
        if !self.rich.is_ready() {
            return Err(SyncError::RichTextNotReady);
        }
        let Some(target) = self.edit_target.clone() else {
            return Err(SyncError::NeverSynced);
        };

        let content = tags::unprotect(&self.rich.html());
        self.from_rich_text = true;

        match target {
            EditTarget::Selection(range) => {
                self.code.replace_range(range.clone(), &content);
                // The replaced span has a new length; remember it so
                // repeated write-backs keep hitting the same region
                self.edit_target =
                    Some(EditTarget::Selection(range.start..range.start + content.len()));
            }
            EditTarget::Body => {
                let current = self.code.value();
                match fragment::body_inner_range(&current) {
                    Some(inner) => self.code.replace_range(inner, &content),
                    None => {
                        // Body container vanished since the last sync;
                        // degrade to a whole-document write
                        log::warn!("body container missing on write-back, replacing document");
                        self.code.set_value(&content);
                    }
                }
            }
            EditTarget::Full => self.code.set_value(&content),
        }

        self.preview_dirty = true;
        log::debug!("rich text -> code: {} bytes written back", content.len());
        Ok(())
    }

    /// Clear the in-flight direction flags. The host calls this after the
    /// change events of a programmatic write have been dispatched, so they
    /// are not mistaken for new user input.
    pub fn settle(&mut self) {
        self.from_code = false;
        self.from_rich_text = false;
    }

    /// Rich-text change notification. Only genuine user edits arm the
    /// debounced write-back; programmatic writes and anything arriving
    /// while a code→rich-text sync is in flight are ignored.
    pub fn rich_text_changed(&mut self, source: ChangeSource, now: Instant) {
        if source != ChangeSource::User || self.from_code {
            return;
        }
        if !self.auto_sync {
            log::debug!("auto-sync disabled, dropping rich-text change");
            return;
        }
        self.debounce.note(now);
    }

    /// Code change notification; marks the preview stale. Ignored while a
    /// rich-text→code write is in flight (that write already did).
    pub fn code_changed(&mut self) {
        if self.from_rich_text {
            return;
        }
        self.preview_dirty = true;
    }

    /// Drive the debouncer. Returns true when a deferred rich-text→code
    /// sync actually ran. Errors here are logged and swallowed; the code
    /// buffer keeps its last-known-good content.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.debounce.fire(now) {
            return false;
        }
        match self.sync_to_code() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("debounced sync to code failed: {e}");
                false
            }
        }
    }

    /// Explicit user action switching the visible surface.
    ///
    /// - `Code → RichText` syncs code into the mirror first; fails (without
    ///   flipping) when the mirror is not ready.
    /// - `RichText → Code` forces an immediate, non-debounced write-back so
    ///   no edits are lost, then asks the code surface to re-measure.
    pub fn toggle_to(&mut self, view: EditorView) -> Result<(), SyncError> {
        if view == self.view {
            return Ok(());
        }
        match view {
            EditorView::RichText => {
                self.sync_to_rich_text()?;
                self.view = EditorView::RichText;
            }
            EditorView::Code => {
                self.debounce.cancel();
                if let Err(e) = self.sync_to_code() {
                    // Keep the code buffer's last-known-good content and
                    // flip anyway; one bad sync must not wedge the session
                    log::warn!("sync on toggle failed: {e}");
                }
                self.view = EditorView::Code;
                self.code.refresh();
            }
        }
        Ok(())
    }

    /// Render the preview from the code buffer's current value
    pub fn render_preview(&self) -> String {
        crate::preview::render(&self.code.value(), &self.preview_opts)
    }

    /// True once per change; the host re-renders the preview when set
    pub fn take_preview_dirty(&mut self) -> bool {
        std::mem::take(&mut self.preview_dirty)
    }
}
