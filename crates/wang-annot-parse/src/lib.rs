//! wang-annot-parse: Block walker and mark translator for Wang annotations.
//!
//! This crate reads the binary annotation blob stored in TIFF tag 32932
//! (structure decoding), groups its blocks into marks (block walking) and
//! turns each mark into one call on an [`AnnotationHandler`] (translation).
//! It depends on wang-annot-core for shared data types.

pub mod cursor;
pub mod error;
pub mod handler;
pub mod record;
pub mod structures;
pub mod translator;
pub mod walker;

pub use cursor::Cursor;
pub use error::{DecodeError, TranslateError};
pub use handler::{AnnotationCollector, AnnotationHandler, dispatch};
pub use record::{MarkRecord, NamedBlock};
pub use translator::{send, translate};
pub use walker::{BlockType, BlockWalker, decode};
pub use wang_annot_core;
