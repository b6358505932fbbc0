//! Per-mark accumulator filled by the block walker.

use wang_annot_core::{
    DibPayload, DisplayText, Hyperlink, MarkAttributes, MarkInfo, MarkType, Point, RotationInfo,
};

/// A decoded named block, ready to be stored in a [`MarkRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedBlock {
    /// `OiAnoDat` of a point-carrying mark.
    Points(Vec<Point>),
    /// `OiAnoDat` of an embedded image.
    Rotation(RotationInfo),
    /// `OiFilNam`
    Filename(String),
    /// `OiDIB`
    Dib(DibPayload),
    /// `OiGroup`
    Group(String),
    /// `OiIndex`
    Index(String),
    /// `OiAnText`
    Text(DisplayText),
    /// `OiHypLnk`
    Hyperlink(Hyperlink),
    /// A block the decoder does not know; its payload was skipped.
    Unknown { name: String, size: usize },
}

impl NamedBlock {
    /// The on-wire name of the block.
    pub fn name(&self) -> &str {
        match self {
            NamedBlock::Points(_) | NamedBlock::Rotation(_) => "OiAnoDat",
            NamedBlock::Filename(_) => "OiFilNam",
            NamedBlock::Dib(_) => "OiDIB",
            NamedBlock::Group(_) => "OiGroup",
            NamedBlock::Index(_) => "OiIndex",
            NamedBlock::Text(_) => "OiAnText",
            NamedBlock::Hyperlink(_) => "OiHypLnk",
            NamedBlock::Unknown { name, .. } => name,
        }
    }
}

/// Everything decoded so far for one mark.
///
/// The walker keeps two of these: the default record, filled by default
/// named blocks, and the current mark, which starts as a copy of the default
/// record each time an attributes block opens a new mark. A later block of
/// the same name replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkRecord {
    pub attributes: Option<MarkAttributes>,
    pub display_text: Option<DisplayText>,
    pub hyperlink: Option<Hyperlink>,
    pub rotation: Option<RotationInfo>,
    pub points: Option<Vec<Point>>,
    pub dib: Option<DibPayload>,
    pub filename: Option<String>,
    pub group: Option<String>,
    pub index: Option<String>,
}

impl MarkRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_attributes(&self) -> bool {
        self.attributes.is_some()
    }

    /// Type of the mark, once its attributes block has been read.
    pub fn mark_type(&self) -> Option<MarkType> {
        self.attributes.as_ref().map(|attributes| attributes.mark_type)
    }

    /// Store a decoded named block. Unknown blocks leave the record untouched.
    pub fn apply(&mut self, block: NamedBlock) {
        match block {
            NamedBlock::Points(points) => self.points = Some(points),
            NamedBlock::Rotation(rotation) => self.rotation = Some(rotation),
            NamedBlock::Filename(filename) => self.filename = Some(filename),
            NamedBlock::Dib(dib) => self.dib = Some(dib),
            NamedBlock::Group(group) => self.group = Some(group),
            NamedBlock::Index(index) => self.index = Some(index),
            NamedBlock::Text(text) => self.display_text = Some(text),
            NamedBlock::Hyperlink(link) => self.hyperlink = Some(link),
            NamedBlock::Unknown { .. } => {}
        }
    }

    /// Metadata passed to [`on_mark`](crate::AnnotationHandler::on_mark).
    ///
    /// Returns `None` until the attributes block has been read.
    pub fn info(&self, sequence: usize) -> Option<MarkInfo> {
        let attributes = self.attributes.as_ref()?;
        Some(MarkInfo {
            sequence,
            mark_type: attributes.mark_type,
            group: self.group.clone(),
            index: self.index.clone(),
            visible: attributes.visible,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = MarkRecord::new();
        assert!(!record.has_attributes());
        assert_eq!(record.mark_type(), None);
        assert_eq!(record.info(0), None);
    }

    #[test]
    fn apply_stores_each_block() {
        let mut record = MarkRecord::new();
        record.apply(NamedBlock::Group("[Untitled]".to_string()));
        record.apply(NamedBlock::Index("0".to_string()));
        record.apply(NamedBlock::Filename("C:\\a.bmp".to_string()));
        record.apply(NamedBlock::Dib(DibPayload::new(vec![1, 2, 3])));
        record.apply(NamedBlock::Points(vec![Point::new(1, 1)]));

        assert_eq!(record.group.as_deref(), Some("[Untitled]"));
        assert_eq!(record.index.as_deref(), Some("0"));
        assert_eq!(record.filename.as_deref(), Some("C:\\a.bmp"));
        assert_eq!(record.dib.as_ref().map(DibPayload::len), Some(3));
        assert_eq!(record.points, Some(vec![Point::new(1, 1)]));
    }

    #[test]
    fn later_block_replaces_earlier() {
        let mut record = MarkRecord::new();
        record.apply(NamedBlock::Group("first".to_string()));
        record.apply(NamedBlock::Group("second".to_string()));
        assert_eq!(record.group.as_deref(), Some("second"));
    }

    #[test]
    fn unknown_block_is_ignored() {
        let mut record = MarkRecord::new();
        record.apply(NamedBlock::Unknown {
            name: "OiXyzzy".to_string(),
            size: 4,
        });
        assert_eq!(record, MarkRecord::new());
    }

    #[test]
    fn copy_of_default_does_not_leak_back() {
        let mut default = MarkRecord::new();
        default.apply(NamedBlock::Group("shared".to_string()));

        let mut first = default.clone();
        first.attributes = Some(MarkAttributes::new(MarkType::FreehandLine));
        first.apply(NamedBlock::Points(vec![Point::new(3, 4)]));

        let second = default.clone();
        assert_eq!(second.group.as_deref(), Some("shared"));
        assert_eq!(second.points, None);
        assert!(!second.has_attributes());
        assert_eq!(default.points, None);
    }

    #[test]
    fn info_carries_group_and_visibility() {
        let mut record = MarkRecord::new();
        let mut attributes = MarkAttributes::new(MarkType::TypedText);
        attributes.visible = true;
        record.attributes = Some(attributes);
        record.apply(NamedBlock::Index("7".to_string()));

        let info = record.info(3).unwrap();
        assert_eq!(info.sequence, 3);
        assert_eq!(info.mark_type, MarkType::TypedText);
        assert_eq!(info.group, None);
        assert_eq!(info.index.as_deref(), Some("7"));
        assert!(info.visible);
    }

    #[test]
    fn block_names() {
        assert_eq!(NamedBlock::Points(Vec::new()).name(), "OiAnoDat");
        assert_eq!(NamedBlock::Dib(DibPayload::default()).name(), "OiDIB");
        assert_eq!(
            NamedBlock::Unknown {
                name: "OiFoo".to_string(),
                size: 0
            }
            .name(),
            "OiFoo"
        );
    }
}
