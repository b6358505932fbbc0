//! wang-annot-core: Backend-independent data types for Wang annotations.
//!
//! This crate provides the decoded mark structures (attributes, text,
//! hyperlinks, rotation, DIB payloads), the annotation records handed to
//! sinks, and the error, warning and option types shared by the decoder.

pub mod annotation;
pub mod color;
pub mod dib;
pub mod error;
pub mod font;
pub mod geometry;
pub mod mark;
pub mod options;

pub use annotation::{
    Annotation, EmbeddedImageAnnotation, FreehandAnnotation, LineAnnotation, LinkAnnotation,
    PolygonAnnotation, RectangleAnnotation, RubberStampAnnotation, StickyNoteAnnotation,
    TextAnnotation,
};
pub use color::ColorTriple;
pub use dib::{BITMAP_INFO_HEADER_LEN, DibInfoHeader, DibPayload};
pub use error::{DecodeSummary, DecodeWarning, DecodeWarningCode, WangError};
pub use font::{FACE_NAME_LEN, FONT_DESCRIPTOR_LEN, FontDescriptor};
pub use geometry::{Bounds, PageGeometry, PixelRect, Point};
pub use mark::{DisplayText, Hyperlink, MarkAttributes, MarkInfo, MarkType, RotationInfo};
pub use options::{DecodeOptions, FormatVariant, VariantPolicy};

/// TIFF tag number of the Wang annotation blob.
pub const WANG_ANNOTATION_TAG: u16 = 32932;
