//! Font attributes of text marks (the Win32 `LOGFONT` layout).

/// Size of the face name field in a `LOGFONT`, in bytes.
pub const FACE_NAME_LEN: usize = 28;

/// Encoded size of a [`FontDescriptor`], in bytes.
pub const FONT_DESCRIPTOR_LEN: usize = 56;

/// Font attributes carried in every mark's attribute block.
///
/// Only `italic`, `underline` and `face_name` influence translation today;
/// the remaining fields are decoded so sinks can inspect them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontDescriptor {
    pub height: i32,
    pub width: i32,
    pub escapement: i32,
    pub orientation: i32,
    pub weight: i32,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
    pub char_set: u8,
    pub out_precision: u8,
    pub clip_precision: u8,
    pub quality: u8,
    pub pitch_and_family: u8,
    /// Face name, truncated at the first NUL (at most 28 characters).
    pub face_name: String,
}

impl FontDescriptor {
    /// Whether the weight is at least `FW_BOLD` (700).
    pub fn is_bold(&self) -> bool {
        self.weight >= 700
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_is_empty() {
        let font = FontDescriptor::default();
        assert_eq!(font.height, 0);
        assert!(!font.italic);
        assert!(font.face_name.is_empty());
    }

    #[test]
    fn bold_threshold() {
        let regular = FontDescriptor {
            weight: 400,
            ..FontDescriptor::default()
        };
        let bold = FontDescriptor {
            weight: 700,
            ..FontDescriptor::default()
        };
        assert!(!regular.is_bold());
        assert!(bold.is_bold());
    }
}
