//! Local-then-remote resolution of the spec index and documents.

pub mod document;
pub mod index;
pub mod path;

pub use document::{fetch_document, FetchError};
pub use index::{load_index, Index, IndexEntry, IndexError, IndexOrigin};
pub use path::normalize_file_ref;
