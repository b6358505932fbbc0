//! wang-annot: Decode Wang/Kofax annotations stored in TIFF files.
//!
//! This is the public API facade crate for wang-annot-rs. It re-exports types
//! from wang-annot-core and uses wang-annot-parse to walk the annotation blob.
//!
//! # Architecture
//!
//! - **wang-annot-core**: Decoded mark structures, annotation records, errors
//!   and options
//! - **wang-annot-parse**: Structure decoding, block walking and translation
//! - **wang-annot** (this crate): Public API that ties everything together
//!
//! # Example
//!
//! ```
//! use wang_annot::{Annotation, collect_annotations};
//!
//! // header, then one filled rectangle mark
//! let mut tag = vec![0, 0, 0, 0, 1, 0, 0, 0];
//! tag.extend_from_slice(&5i32.to_le_bytes());
//! tag.extend_from_slice(&164i32.to_le_bytes());
//! let mut attributes = [0u8; 164];
//! attributes[0] = 6;
//! attributes[12] = 110;
//! attributes[16] = 60;
//! tag.extend_from_slice(&attributes);
//!
//! let annotations = collect_annotations(&tag).unwrap();
//! assert!(matches!(annotations[0], Annotation::Rectangle(_)));
//! ```

pub use wang_annot_core;
pub use wang_annot_parse;

pub use wang_annot_core::{
    Annotation, Bounds, ColorTriple, DecodeOptions, DecodeSummary, DecodeWarning,
    DecodeWarningCode, DibInfoHeader, DibPayload, EmbeddedImageAnnotation, FreehandAnnotation,
    LineAnnotation, LinkAnnotation, MarkInfo, MarkType, PageGeometry, PixelRect, Point,
    PolygonAnnotation, RectangleAnnotation, RubberStampAnnotation, StickyNoteAnnotation,
    TextAnnotation, VariantPolicy, WANG_ANNOTATION_TAG, WangError,
};
pub use wang_annot_parse::{AnnotationCollector, AnnotationHandler};

/// Decode a tag with default options, sending each mark to `handler`.
///
/// On failure, calls already made on `handler` are not undone; a caller that
/// must apply a tag all-or-nothing should buffer, as [`collect_annotations`]
/// does.
pub fn decode_tag<H: AnnotationHandler + ?Sized>(
    data: &[u8],
    handler: &mut H,
) -> Result<DecodeSummary, WangError> {
    decode_tag_with_options(data, handler, &DecodeOptions::default())
}

/// Decode a tag with explicit options.
pub fn decode_tag_with_options<H: AnnotationHandler + ?Sized>(
    data: &[u8],
    handler: &mut H,
    options: &DecodeOptions,
) -> Result<DecodeSummary, WangError> {
    Ok(wang_annot_parse::decode(data, handler, options)?)
}

/// Decode a tag and return its annotations in stream order.
///
/// Nothing is returned unless every mark translated.
pub fn collect_annotations(data: &[u8]) -> Result<Vec<Annotation>, WangError> {
    let mut collector = AnnotationCollector::new();
    decode_tag(data, &mut collector)?;
    Ok(collector.annotations)
}

/// Serialize annotations as a JSON array.
#[cfg(feature = "serde")]
pub fn annotations_to_json(annotations: &[Annotation]) -> serde_json::Result<String> {
    serde_json::to_string(annotations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_tag_has_no_annotations() {
        let annotations = collect_annotations(&[0, 0, 0, 0, 1, 0, 0, 0]).unwrap();
        assert!(annotations.is_empty());
    }

    #[test]
    fn decode_errors_become_wang_errors() {
        let err = collect_annotations(&[0, 0, 0]).unwrap_err();
        assert!(matches!(err, WangError::Truncated { .. }));
    }

    #[test]
    fn tag_number() {
        assert_eq!(WANG_ANNOTATION_TAG, 32932);
    }
}
