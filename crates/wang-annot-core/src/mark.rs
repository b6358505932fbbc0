//! Decoded Wang mark structures.
//!
//! Provides [`MarkType`] and [`MarkAttributes`] (the fixed 164-byte
//! `OIAN_MARK_ATTRIBUTES` block) plus the payloads of the named blocks a mark
//! may carry: [`DisplayText`], [`Hyperlink`] and [`RotationInfo`].

use crate::{Bounds, ColorTriple, FontDescriptor};

/// The kind of an annotation mark, as encoded in `uType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkType {
    /// Raw values 0, 11 and anything above 15.
    Invalid,
    ImageEmbedded,
    ImageReference,
    StraightLine,
    FreehandLine,
    HollowRectangle,
    FilledRectangle,
    TypedText,
    TextFromFile,
    TextStamp,
    AttachANote,
    Form,
    OcrRegion,
    HollowPolygon,
    FilledPolygon,
}

impl MarkType {
    /// Map a raw `uType` value to a mark type.
    ///
    /// The gaps of the encoding (0 and 11) and every out-of-range value map
    /// to [`MarkType::Invalid`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::ImageEmbedded,
            2 => Self::ImageReference,
            3 => Self::StraightLine,
            4 => Self::FreehandLine,
            5 => Self::HollowRectangle,
            6 => Self::FilledRectangle,
            7 => Self::TypedText,
            8 => Self::TextFromFile,
            9 => Self::TextStamp,
            10 => Self::AttachANote,
            12 => Self::Form,
            13 => Self::OcrRegion,
            14 => Self::HollowPolygon,
            15 => Self::FilledPolygon,
            _ => Self::Invalid,
        }
    }

    /// Whether an `OiAnoDat` block of this mark holds an `AN_POINTS` list.
    pub fn carries_points(&self) -> bool {
        matches!(
            self,
            Self::StraightLine | Self::FreehandLine | Self::HollowPolygon | Self::FilledPolygon
        )
    }

    /// Whether an `OiAnoDat` block of this mark holds an `AN_NEW_ROTATE_STRUCT`.
    pub fn carries_rotation(&self) -> bool {
        matches!(self, Self::ImageEmbedded)
    }

    /// Human-readable name, used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::ImageEmbedded => "image embedded",
            Self::ImageReference => "image reference",
            Self::StraightLine => "straight line",
            Self::FreehandLine => "freehand line",
            Self::HollowRectangle => "hollow rectangle",
            Self::FilledRectangle => "filled rectangle",
            Self::TypedText => "typed text",
            Self::TextFromFile => "text from file",
            Self::TextStamp => "text stamp",
            Self::AttachANote => "attach-a-note",
            Self::Form => "form",
            Self::OcrRegion => "OCR region",
            Self::HollowPolygon => "hollow polygon",
            Self::FilledPolygon => "filled polygon",
        }
    }
}

impl std::fmt::Display for MarkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The attribute block that opens every mark.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkAttributes {
    pub mark_type: MarkType,
    /// Bounding rectangle in image units; can also encode two points.
    pub bounds: Bounds,
    /// Main color: lines, rectangles, standalone text.
    pub color1: ColorTriple,
    /// Secondary color, e.g. the text of an Attach-a-Note.
    pub color2: ColorTriple,
    pub highlighting: bool,
    pub transparent: bool,
    /// Line width in pixels.
    pub line_width: u32,
    pub font: FontDescriptor,
    pub visible: bool,
}

impl MarkAttributes {
    /// Attributes of the given type with every other field zeroed.
    pub fn new(mark_type: MarkType) -> Self {
        Self {
            mark_type,
            bounds: Bounds::default(),
            color1: ColorTriple::default(),
            color2: ColorTriple::default(),
            highlighting: false,
            transparent: false,
            line_width: 0,
            font: FontDescriptor::default(),
            visible: false,
        }
    }
}

/// Text of a text-bearing mark (`OIAN_TEXTPRIVDATA`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayText {
    /// Baseline angle in tenths of a degree; normally 0, 900, 1800 or 2700.
    pub orientation: i32,
    /// 72000 divided by the vertical resolution at creation time.
    pub creation_scale: u32,
    pub text: String,
}

impl DisplayText {
    /// Whether the orientation is one of the four documented angles.
    pub fn has_standard_orientation(&self) -> bool {
        matches!(self.orientation, 0 | 900 | 1800 | 2700)
    }

    /// Orientation in whole degrees (integer division, truncating).
    pub fn rotation_degrees(&self) -> i32 {
        self.orientation / 10
    }
}

/// A hyperlink attached to a mark (`HYPERLINK_NB`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperlink {
    pub link: String,
    pub location: String,
    pub working_directory: String,
    /// Flag bit 2: the link refers to this document.
    pub internal_link: bool,
    /// Flag bit 1: the hyperlink may be removed from the mark.
    pub can_remove: bool,
}

impl Hyperlink {
    /// The link target handed to sinks.
    ///
    /// Internal links join working directory, link and location; external
    /// links use the link string alone.
    pub fn target(&self) -> String {
        if self.internal_link {
            format!("{}{}{}", self.working_directory, self.link, self.location)
        } else {
            self.link.clone()
        }
    }
}

/// Scaling and resolution of an embedded image (`AN_NEW_ROTATE_STRUCT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationInfo {
    /// 1 = original, 2 = right, 3 = flip, 4 = left, 5..8 = mirrored variants.
    pub code: i32,
    /// Expected to be 1000; kept for diagnostics.
    pub scale: i32,
    pub horizontal_res_dpi: i32,
    pub vertical_res_dpi: i32,
}

/// Per-mark metadata passed to sinks alongside each annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkInfo {
    /// Zero-based position of the mark in the tag.
    pub sequence: usize,
    pub mark_type: MarkType,
    /// `OiGroup` string, if any.
    pub group: Option<String>,
    /// `OiIndex` string, if any.
    pub index: Option<String>,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_type_known_values() {
        assert_eq!(MarkType::from_raw(1), MarkType::ImageEmbedded);
        assert_eq!(MarkType::from_raw(3), MarkType::StraightLine);
        assert_eq!(MarkType::from_raw(6), MarkType::FilledRectangle);
        assert_eq!(MarkType::from_raw(10), MarkType::AttachANote);
        assert_eq!(MarkType::from_raw(12), MarkType::Form);
        assert_eq!(MarkType::from_raw(15), MarkType::FilledPolygon);
    }

    #[test]
    fn mark_type_gaps_are_invalid() {
        assert_eq!(MarkType::from_raw(0), MarkType::Invalid);
        assert_eq!(MarkType::from_raw(11), MarkType::Invalid);
        assert_eq!(MarkType::from_raw(16), MarkType::Invalid);
        assert_eq!(MarkType::from_raw(u32::MAX), MarkType::Invalid);
    }

    #[test]
    fn ano_dat_interpretation() {
        assert!(MarkType::StraightLine.carries_points());
        assert!(MarkType::FreehandLine.carries_points());
        assert!(MarkType::HollowPolygon.carries_points());
        assert!(MarkType::FilledPolygon.carries_points());
        assert!(!MarkType::ImageEmbedded.carries_points());
        assert!(MarkType::ImageEmbedded.carries_rotation());
        assert!(!MarkType::ImageReference.carries_rotation());
        assert!(!MarkType::TypedText.carries_points());
    }

    #[test]
    fn display_text_rotation() {
        let text = DisplayText {
            orientation: 2700,
            creation_scale: 360,
            text: "Hello".to_string(),
        };
        assert_eq!(text.rotation_degrees(), 270);
        assert!(text.has_standard_orientation());

        let odd = DisplayText {
            orientation: 455,
            ..text
        };
        assert_eq!(odd.rotation_degrees(), 45);
        assert!(!odd.has_standard_orientation());
    }

    #[test]
    fn hyperlink_target_external() {
        let link = Hyperlink {
            link: "http://www.orpalis.com".to_string(),
            location: "top".to_string(),
            working_directory: "C:\\docs\\".to_string(),
            internal_link: false,
            can_remove: true,
        };
        assert_eq!(link.target(), "http://www.orpalis.com");
    }

    #[test]
    fn hyperlink_target_internal() {
        let link = Hyperlink {
            link: "source\\001.jpg".to_string(),
            location: "#1".to_string(),
            working_directory: "C:\\docs\\".to_string(),
            internal_link: true,
            can_remove: false,
        };
        assert_eq!(link.target(), "C:\\docs\\source\\001.jpg#1");
    }

    #[test]
    fn mark_type_display() {
        assert_eq!(MarkType::AttachANote.to_string(), "attach-a-note");
        assert_eq!(MarkType::Invalid.to_string(), "invalid");
    }
}
