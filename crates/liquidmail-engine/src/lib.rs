pub mod editing;
pub mod io;
pub mod minify;
pub mod preview;
pub mod snippets;
pub mod templates;

// Re-export key types for easier usage
pub use editing::{compose::*, document::*, fragment::*, session::*, tags::*};
pub use io::*;
pub use minify::*;
pub use preview::*;
pub use snippets::*;
pub use templates::*;
