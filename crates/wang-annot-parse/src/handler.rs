//! Annotation sink callback trait.
//!
//! Defines the [`AnnotationHandler`] trait through which decoded marks leave
//! the decoder. The block walker calls one annotation method per translated
//! mark, in stream order, preceded by [`on_mark`](AnnotationHandler::on_mark).

use wang_annot_core::{
    Annotation, DecodeWarning, EmbeddedImageAnnotation, FreehandAnnotation, LineAnnotation,
    LinkAnnotation, MarkInfo, PolygonAnnotation, RectangleAnnotation, RubberStampAnnotation,
    StickyNoteAnnotation, TextAnnotation,
};

/// Callback handler receiving translated annotations.
///
/// All methods have default no-op implementations, so a sink only overrides
/// the annotation kinds it can render.
///
/// Calls made before a decode fails are not rolled back. A sink that must
/// apply a tag atomically should buffer calls and commit them only once the
/// decode reports success; [`AnnotationCollector`] does exactly that.
pub trait AnnotationHandler {
    /// Called before the annotation call of each mark.
    fn on_mark(&mut self, _info: &MarkInfo) {}

    /// A straight line.
    fn on_line(&mut self, _annotation: LineAnnotation) {}

    /// A highlighter stroke; highlighted straight lines arrive here.
    fn on_freehand_highlighter(&mut self, _annotation: FreehandAnnotation) {}

    fn on_freehand(&mut self, _annotation: FreehandAnnotation) {}

    /// Typed text, text from file and OCR regions.
    fn on_text(&mut self, _annotation: TextAnnotation) {}

    /// Typed text carrying a hyperlink.
    fn on_link(&mut self, _annotation: LinkAnnotation) {}

    fn on_sticky_note(&mut self, _annotation: StickyNoteAnnotation) {}

    fn on_rectangle(&mut self, _annotation: RectangleAnnotation) {}

    fn on_polygon(&mut self, _annotation: PolygonAnnotation) {}

    fn on_embedded_image(&mut self, _annotation: EmbeddedImageAnnotation) {}

    fn on_rubber_stamp(&mut self, _annotation: RubberStampAnnotation) {}

    /// Called when a non-fatal warning is encountered during decoding.
    ///
    /// Warnings never change the outcome of the decode.
    fn on_warning(&mut self, _warning: DecodeWarning) {}
}

/// Route an [`Annotation`] to the matching handler method.
pub fn dispatch<H: AnnotationHandler + ?Sized>(handler: &mut H, annotation: Annotation) {
    match annotation {
        Annotation::Line(a) => handler.on_line(a),
        Annotation::FreehandHighlighter(a) => handler.on_freehand_highlighter(a),
        Annotation::Freehand(a) => handler.on_freehand(a),
        Annotation::Text(a) => handler.on_text(a),
        Annotation::Link(a) => handler.on_link(a),
        Annotation::StickyNote(a) => handler.on_sticky_note(a),
        Annotation::Rectangle(a) => handler.on_rectangle(a),
        Annotation::Polygon(a) => handler.on_polygon(a),
        Annotation::EmbeddedImage(a) => handler.on_embedded_image(a),
        Annotation::RubberStamp(a) => handler.on_rubber_stamp(a),
    }
}

/// A handler that records every call it receives.
#[derive(Debug, Clone, Default)]
pub struct AnnotationCollector {
    pub annotations: Vec<Annotation>,
    pub marks: Vec<MarkInfo>,
    pub warnings: Vec<DecodeWarning>,
}

impl AnnotationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl AnnotationHandler for AnnotationCollector {
    fn on_mark(&mut self, info: &MarkInfo) {
        self.marks.push(info.clone());
    }

    fn on_line(&mut self, annotation: LineAnnotation) {
        self.annotations.push(Annotation::Line(annotation));
    }

    fn on_freehand_highlighter(&mut self, annotation: FreehandAnnotation) {
        self.annotations
            .push(Annotation::FreehandHighlighter(annotation));
    }

    fn on_freehand(&mut self, annotation: FreehandAnnotation) {
        self.annotations.push(Annotation::Freehand(annotation));
    }

    fn on_text(&mut self, annotation: TextAnnotation) {
        self.annotations.push(Annotation::Text(annotation));
    }

    fn on_link(&mut self, annotation: LinkAnnotation) {
        self.annotations.push(Annotation::Link(annotation));
    }

    fn on_sticky_note(&mut self, annotation: StickyNoteAnnotation) {
        self.annotations.push(Annotation::StickyNote(annotation));
    }

    fn on_rectangle(&mut self, annotation: RectangleAnnotation) {
        self.annotations.push(Annotation::Rectangle(annotation));
    }

    fn on_polygon(&mut self, annotation: PolygonAnnotation) {
        self.annotations.push(Annotation::Polygon(annotation));
    }

    fn on_embedded_image(&mut self, annotation: EmbeddedImageAnnotation) {
        self.annotations.push(Annotation::EmbeddedImage(annotation));
    }

    fn on_rubber_stamp(&mut self, annotation: RubberStampAnnotation) {
        self.annotations.push(Annotation::RubberStamp(annotation));
    }

    fn on_warning(&mut self, warning: DecodeWarning) {
        self.warnings.push(warning);
    }
}
