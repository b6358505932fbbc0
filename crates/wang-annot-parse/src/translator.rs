//! Mark-to-annotation translation.
//!
//! [`translate`] turns one complete [`MarkRecord`] into the single
//! [`Annotation`] a sink receives for it. Point lists are stored relative to
//! the upper-left corner of the mark's bounds and are moved into image space
//! here.

use wang_annot_core::{
    Annotation, Bounds, DisplayText, EmbeddedImageAnnotation, FreehandAnnotation, LineAnnotation,
    LinkAnnotation, MarkAttributes, MarkType, Point, PolygonAnnotation, RectangleAnnotation,
    RubberStampAnnotation, StickyNoteAnnotation, TextAnnotation,
};

use crate::error::TranslateError;
use crate::handler::{AnnotationHandler, dispatch};
use crate::record::MarkRecord;

/// Translate a complete mark.
///
/// Fails if the record has no attributes, if the mark kind has no
/// translation, or if a named block the kind depends on is missing.
pub fn translate(record: &MarkRecord) -> Result<Annotation, TranslateError> {
    let attributes = record
        .attributes
        .as_ref()
        .ok_or(TranslateError::Unsupported(MarkType::Invalid))?;

    match attributes.mark_type {
        MarkType::StraightLine => straight_line(attributes, record),
        MarkType::FreehandLine => freehand_line(attributes, record),
        MarkType::HollowRectangle | MarkType::FilledRectangle => Ok(rectangle(attributes)),
        MarkType::HollowPolygon | MarkType::FilledPolygon => polygon(attributes, record),
        MarkType::TypedText => typed_text(attributes, record),
        MarkType::AttachANote => attach_a_note(attributes, record),
        MarkType::TextStamp => text_stamp(attributes, record),
        // OCR regions carry their sequence number as text and render like
        // text from file.
        MarkType::TextFromFile | MarkType::OcrRegion => text_from_file(attributes, record),
        MarkType::ImageEmbedded => image_embedded(attributes, record),
        kind @ (MarkType::ImageReference | MarkType::Form | MarkType::Invalid) => {
            Err(TranslateError::Unsupported(kind))
        }
    }
}

/// Translate `record` and hand the result to `handler`.
///
/// [`on_mark`](AnnotationHandler::on_mark) is called first, then exactly one
/// annotation method. Nothing is called if translation fails.
pub fn send<H: AnnotationHandler + ?Sized>(
    record: &MarkRecord,
    sequence: usize,
    handler: &mut H,
) -> Result<(), TranslateError> {
    let annotation = translate(record)?;
    if let Some(info) = record.info(sequence) {
        handler.on_mark(&info);
    }
    dispatch(handler, annotation);
    Ok(())
}

fn points_in_image(bounds: &Bounds, points: &[Point]) -> Vec<Point> {
    points.iter().map(|&point| bounds.to_image(point)).collect()
}

fn require_points<'r>(
    attributes: &MarkAttributes,
    record: &'r MarkRecord,
) -> Result<&'r [Point], TranslateError> {
    record
        .points
        .as_deref()
        .ok_or(TranslateError::MissingBlock {
            mark_type: attributes.mark_type,
            block: "OiAnoDat",
        })
}

fn require_text<'r>(
    attributes: &MarkAttributes,
    record: &'r MarkRecord,
) -> Result<&'r DisplayText, TranslateError> {
    record
        .display_text
        .as_ref()
        .ok_or(TranslateError::MissingBlock {
            mark_type: attributes.mark_type,
            block: "OiAnText",
        })
}

fn straight_line(
    attributes: &MarkAttributes,
    record: &MarkRecord,
) -> Result<Annotation, TranslateError> {
    let points = require_points(attributes, record)?;
    let [first, second] = points else {
        return Err(TranslateError::PointCount {
            mark_type: attributes.mark_type,
            expected: 2,
            found: points.len(),
        });
    };

    if attributes.highlighting {
        return Ok(Annotation::FreehandHighlighter(FreehandAnnotation {
            points: points_in_image(&attributes.bounds, points),
            color: attributes.color1,
            line_width: attributes.line_width,
        }));
    }

    // Only the first x is shifted by the bounds; the format stores the
    // other three coordinates as they are.
    Ok(Annotation::Line(LineAnnotation {
        start: Point::new(attributes.bounds.left.wrapping_add(first.x), first.y),
        end: *second,
        color: attributes.color1,
        line_width: attributes.line_width,
    }))
}

fn freehand_line(
    attributes: &MarkAttributes,
    record: &MarkRecord,
) -> Result<Annotation, TranslateError> {
    let points = require_points(attributes, record)?;
    Ok(Annotation::Freehand(FreehandAnnotation {
        points: points_in_image(&attributes.bounds, points),
        color: attributes.color1,
        line_width: attributes.line_width,
    }))
}

fn rectangle(attributes: &MarkAttributes) -> Annotation {
    let fill = attributes.mark_type == MarkType::FilledRectangle;
    Annotation::Rectangle(RectangleAnnotation {
        rect: attributes.bounds.to_pixel_rect(),
        border_color: attributes.color1,
        fill_color: attributes.color1,
        fill,
        border_width: if fill { 0 } else { attributes.line_width },
    })
}

fn polygon(attributes: &MarkAttributes, record: &MarkRecord) -> Result<Annotation, TranslateError> {
    let points = require_points(attributes, record)?;
    let fill = attributes.mark_type == MarkType::FilledPolygon;
    Ok(Annotation::Polygon(PolygonAnnotation {
        points: points_in_image(&attributes.bounds, points),
        border_color: attributes.color1,
        fill_color: attributes.color1,
        fill,
        border_width: if fill { 0 } else { attributes.line_width },
    }))
}

fn typed_text(
    attributes: &MarkAttributes,
    record: &MarkRecord,
) -> Result<Annotation, TranslateError> {
    let text = require_text(attributes, record)?;
    let font = &attributes.font;

    if let Some(link) = &record.hyperlink {
        return Ok(Annotation::Link(LinkAnnotation {
            rect: attributes.bounds.to_pixel_rect(),
            text: text.text.clone(),
            italic: font.italic,
            underline: font.underline,
            face_name: font.face_name.clone(),
            color: attributes.color1,
            target: link.target(),
        }));
    }

    Ok(Annotation::Text(text_annotation(attributes, text)))
}

fn text_from_file(
    attributes: &MarkAttributes,
    record: &MarkRecord,
) -> Result<Annotation, TranslateError> {
    let text = require_text(attributes, record)?;
    Ok(Annotation::Text(text_annotation(attributes, text)))
}

fn text_annotation(attributes: &MarkAttributes, text: &DisplayText) -> TextAnnotation {
    TextAnnotation {
        rect: attributes.bounds.to_pixel_rect(),
        text: text.text.clone(),
        italic: attributes.font.italic,
        underline: attributes.font.underline,
        face_name: attributes.font.face_name.clone(),
        rotation: text.rotation_degrees(),
        color: attributes.color1,
    }
}

fn attach_a_note(
    attributes: &MarkAttributes,
    record: &MarkRecord,
) -> Result<Annotation, TranslateError> {
    let text = require_text(attributes, record)?;
    Ok(Annotation::StickyNote(StickyNoteAnnotation {
        rect: attributes.bounds.to_pixel_rect(),
        text: text.text.clone(),
        fore_color: attributes.color1,
        fill_color: attributes.color2,
        italic: attributes.font.italic,
        underline: attributes.font.underline,
        face_name: attributes.font.face_name.clone(),
    }))
}

fn text_stamp(
    attributes: &MarkAttributes,
    record: &MarkRecord,
) -> Result<Annotation, TranslateError> {
    let text = require_text(attributes, record)?;
    Ok(Annotation::RubberStamp(RubberStampAnnotation {
        rect: attributes.bounds.to_pixel_rect(),
        text: text.text.clone(),
        rotation: text.rotation_degrees(),
        color: attributes.color1,
    }))
}

fn image_embedded(
    attributes: &MarkAttributes,
    record: &MarkRecord,
) -> Result<Annotation, TranslateError> {
    let missing = |block| TranslateError::MissingBlock {
        mark_type: attributes.mark_type,
        block,
    };
    let filename = record.filename.as_ref().ok_or_else(|| missing("OiFilNam"))?;
    let image = record.dib.as_ref().ok_or_else(|| missing("OiDIB"))?;

    Ok(Annotation::EmbeddedImage(EmbeddedImageAnnotation {
        rect: attributes.bounds.to_pixel_rect(),
        filename: filename.clone(),
        image: image.clone(),
        rotation_code: record.rotation.as_ref().map(|rotation| rotation.code),
    }))
}
