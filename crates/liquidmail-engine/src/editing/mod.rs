/*!
 * # Editing Core
 *
 * Two surfaces, one document. The code surface holds the full HTML
 * template and is the single source of truth; the rich-text mirror shows
 * an editable fragment of it with Liquid tags wrapped in inert markers.
 * The [`EditorSession`] keeps the two consistent.
 *
 * ## Key pieces
 *
 * - **`document`**: rope-backed text buffer with byte-range selection and a
 *   version counter. Exact byte round-trip on save.
 * - **`tags`**: regex-based Liquid tag protection. `unprotect(protect(x))
 *   == x` for well-formed input; unbalanced tags pass through untouched.
 * - **`fragment`**: which slice of the document the mirror edits
 *   ([`EditTarget`]: selection, body container, or whole document) and the
 *   matching write-back strategy.
 * - **`session`**: the synchronizer itself. In-flight direction flags stop
 *   a sync's own change events from triggering the reverse sync; a
 *   deadline debouncer collapses rapid rich-text edits into one
 *   write-back; the mode toggle forces an immediate sync so no edits are
 *   lost when switching views.
 * - **`compose`**: direct-edit helpers (wrap selection, canned component
 *   HTML, formatting cleanup).
 *
 * ## Flow
 *
 * User edits a surface → session pushes the change to the other surface
 * (guarded, debounced for rich-text edits, forced on view toggle) → the
 * preview is re-rendered from the code buffer. Sync failures are logged
 * and leave the surfaces in their last-known-good state; nothing here is
 * fatal to the session.
 */

pub mod compose;
pub mod document;
pub mod fragment;
pub mod session;
pub mod tags;

pub use document::Document;
pub use fragment::EditTarget;
pub use session::{
    ChangeSource, CodeSurface, Debouncer, EditorSession, EditorView, RichTextSurface,
    SessionOptions, SyncError,
};
pub use tags::TagKind;
