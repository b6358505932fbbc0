//! Annotation records handed to sinks.
//!
//! Each translated mark produces exactly one of these records. Geometry is in
//! image pixel space: rectangles as [`PixelRect`], strokes as absolute
//! [`Point`] lists. Colors keep the wire component order of [`ColorTriple`].

use crate::{ColorTriple, DibPayload, PixelRect, Point};

/// A straight line between two points.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineAnnotation {
    pub start: Point,
    pub end: Point,
    pub color: ColorTriple,
    pub line_width: u32,
}

/// A freehand stroke; also used for highlighter strokes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreehandAnnotation {
    pub points: Vec<Point>,
    pub color: ColorTriple,
    pub line_width: u32,
}

/// Free-standing text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAnnotation {
    pub rect: PixelRect,
    pub text: String,
    pub italic: bool,
    pub underline: bool,
    pub face_name: String,
    /// Rotation in degrees.
    pub rotation: i32,
    pub color: ColorTriple,
}

/// Text that navigates to a target when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkAnnotation {
    pub rect: PixelRect,
    pub text: String,
    pub italic: bool,
    pub underline: bool,
    pub face_name: String,
    pub color: ColorTriple,
    pub target: String,
}

/// An Attach-a-Note mark.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickyNoteAnnotation {
    pub rect: PixelRect,
    pub text: String,
    pub fore_color: ColorTriple,
    pub fill_color: ColorTriple,
    pub italic: bool,
    pub underline: bool,
    pub face_name: String,
}

/// A hollow or filled rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleAnnotation {
    pub rect: PixelRect,
    pub border_color: ColorTriple,
    pub fill_color: ColorTriple,
    pub fill: bool,
    /// Always 0 for filled rectangles.
    pub border_width: u32,
}

/// A hollow or filled polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonAnnotation {
    pub points: Vec<Point>,
    pub border_color: ColorTriple,
    pub fill_color: ColorTriple,
    pub fill: bool,
    /// Always 0 for filled polygons.
    pub border_width: u32,
}

/// An image carried inside the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmbeddedImageAnnotation {
    pub rect: PixelRect,
    pub filename: String,
    pub image: DibPayload,
    /// Rotation code of the `OiAnoDat` record, if the mark carried one.
    pub rotation_code: Option<i32>,
}

/// Stamped text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RubberStampAnnotation {
    pub rect: PixelRect,
    pub text: String,
    /// Rotation in degrees.
    pub rotation: i32,
    pub color: ColorTriple,
}

/// Any record a sink can receive, used by collecting sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Annotation {
    Line(LineAnnotation),
    FreehandHighlighter(FreehandAnnotation),
    Freehand(FreehandAnnotation),
    Text(TextAnnotation),
    Link(LinkAnnotation),
    StickyNote(StickyNoteAnnotation),
    Rectangle(RectangleAnnotation),
    Polygon(PolygonAnnotation),
    EmbeddedImage(EmbeddedImageAnnotation),
    RubberStamp(RubberStampAnnotation),
}

impl Annotation {
    /// Short lowercase name of the record kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Annotation::Line(_) => "line",
            Annotation::FreehandHighlighter(_) => "freehand_highlighter",
            Annotation::Freehand(_) => "freehand",
            Annotation::Text(_) => "text",
            Annotation::Link(_) => "link",
            Annotation::StickyNote(_) => "sticky_note",
            Annotation::Rectangle(_) => "rectangle",
            Annotation::Polygon(_) => "polygon",
            Annotation::EmbeddedImage(_) => "embedded_image",
            Annotation::RubberStamp(_) => "rubber_stamp",
        }
    }
}
