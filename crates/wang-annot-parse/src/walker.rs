//! Top-level block walker.
//!
//! A tag is an 8-byte header followed by `[i32 type][i32 size]` block pairs.
//! Default named blocks (type 2) update a baseline record inherited by every
//! later mark, attribute blocks (type 5) close the pending mark and open a
//! new one, and named blocks (type 6) update the open mark. Marks are handed
//! to the sink as they close. The first failure aborts the walk.

#[cfg(feature = "tracing")]
use tracing::{debug, trace, warn};
use wang_annot_core::{
    DecodeOptions, DecodeSummary, DecodeWarning, DecodeWarningCode, FormatVariant, MarkType,
    VariantPolicy,
};

use crate::cursor::Cursor;
use crate::error::DecodeError;
use crate::handler::AnnotationHandler;
use crate::record::{MarkRecord, NamedBlock};
use crate::structures::{
    read_char_string, read_dib, read_display_text, read_hyperlink, read_mark_attributes,
    read_named_block_header, read_points, read_rotation,
};
use crate::translator;

/// Encoded size of the tag header.
pub const TAG_HEADER_LEN: usize = 8;

/// Encoded size of a block type/size pair.
pub const BLOCK_PAIR_LEN: usize = 8;

const EXPECTED_ROTATION_SCALE: i32 = 1000;

/// Kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Type 2: a named block inherited by every following mark.
    DefaultNamedBlock,
    /// Type 5: the attributes opening a new mark.
    Attributes,
    /// Type 6: a named block of the open mark.
    NamedBlock,
    /// Any other type code.
    Invalid(i32),
}

impl BlockType {
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => BlockType::DefaultNamedBlock,
            5 => BlockType::Attributes,
            6 => BlockType::NamedBlock,
            other => BlockType::Invalid(other),
        }
    }
}

/// Read the tag header and report the integer layout it announces.
pub fn read_header(cursor: &mut Cursor<'_>) -> Result<FormatVariant, DecodeError> {
    cursor.ensure(TAG_HEADER_LEN, "tag header")?;
    // reserved
    cursor.skip(4)?;
    Ok(FormatVariant::from_word(cursor.read_u32()?))
}

/// Read a block type/size pair.
///
/// Unknown type codes are returned as [`BlockType::Invalid`]; only a short
/// stream or a negative size fails here.
pub fn read_block_type(cursor: &mut Cursor<'_>) -> Result<(BlockType, usize), DecodeError> {
    cursor.ensure(BLOCK_PAIR_LEN, "block type")?;
    let code = cursor.read_i32()?;
    let size = cursor.read_i32()?;
    let size = usize::try_from(size).map_err(|_| DecodeError::InvalidValue {
        context: "block size",
        value: i64::from(size),
    })?;
    Ok((BlockType::from_code(code), size))
}

/// Decode an `OiAnoDat` payload, whose layout depends on the mark type.
pub fn decode_ano_dat(
    cursor: &mut Cursor<'_>,
    size: usize,
    kind: Option<MarkType>,
) -> Result<NamedBlock, DecodeError> {
    match kind {
        Some(mark_type) if mark_type.carries_points() => {
            read_points(cursor, size).map(NamedBlock::Points)
        }
        Some(mark_type) if mark_type.carries_rotation() => {
            read_rotation(cursor, size).map(NamedBlock::Rotation)
        }
        other => Err(DecodeError::AnoDatNotApplicable(other)),
    }
}

/// Read a named block: its 12-byte header, then the payload it announces.
///
/// `kind` is the type of the mark the block belongs to, if any.
pub fn read_named_block(
    cursor: &mut Cursor<'_>,
    declared: usize,
    kind: Option<MarkType>,
) -> Result<NamedBlock, DecodeError> {
    let header = read_named_block_header(cursor, declared)?;
    cursor.ensure(header.size, "named block payload")?;
    #[cfg(feature = "tracing")]
    trace!(name = %header.name, size = header.size, "named block");

    let size = header.size;
    match header.name.as_str() {
        "OiAnoDat" => decode_ano_dat(cursor, size, kind),
        "OiFilNam" => read_char_string(cursor, size).map(NamedBlock::Filename),
        "OiDIB" => read_dib(cursor, size).map(NamedBlock::Dib),
        "OiGroup" => read_char_string(cursor, size).map(NamedBlock::Group),
        "OiIndex" => read_char_string(cursor, size).map(NamedBlock::Index),
        "OiAnText" => read_display_text(cursor, size).map(NamedBlock::Text),
        "OiHypLnk" => read_hyperlink(cursor, size).map(NamedBlock::Hyperlink),
        _ => {
            cursor.skip(size)?;
            Ok(NamedBlock::Unknown {
                name: header.name,
                size,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Default,
    Mark,
}

/// State of one walk over a tag.
pub struct BlockWalker<'a, 'h, H: AnnotationHandler + ?Sized> {
    cursor: Cursor<'a>,
    handler: &'h mut H,
    options: &'h DecodeOptions,
    default: MarkRecord,
    current: MarkRecord,
    opened: usize,
    emitted: usize,
    blocks: usize,
    warnings: usize,
}

impl<'a, 'h, H: AnnotationHandler + ?Sized> BlockWalker<'a, 'h, H> {
    pub fn new(data: &'a [u8], handler: &'h mut H, options: &'h DecodeOptions) -> Self {
        Self {
            cursor: Cursor::new(data),
            handler,
            options,
            default: MarkRecord::new(),
            current: MarkRecord::new(),
            opened: 0,
            emitted: 0,
            blocks: 0,
            warnings: 0,
        }
    }

    /// Byte offset reached so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Walk the whole tag.
    pub fn run(&mut self) -> Result<DecodeSummary, DecodeError> {
        let input_len = self.cursor.available();
        if let Some(limit) = self.options.max_input_bytes.filter(|&limit| input_len > limit) {
            return Err(DecodeError::ResourceLimitExceeded {
                limit_name: "max_input_bytes",
                limit_value: limit,
                actual_value: input_len,
            });
        }

        if read_header(&mut self.cursor)? == FormatVariant::Legacy16 {
            match self.options.variant_policy {
                VariantPolicy::Reject => return Err(DecodeError::UnsupportedVariant),
                VariantPolicy::AssumeIntel32 => self.warn(DecodeWarning::new(
                    DecodeWarningCode::UnsupportedVariant,
                    "16-bit layout flag ignored, decoding as 32-bit",
                )),
            }
        }

        while !self.cursor.is_at_end() {
            self.step()?;
        }
        self.finish_mark()?;

        Ok(DecodeSummary {
            marks: self.emitted,
            blocks: self.blocks,
            warnings: self.warnings,
        })
    }

    fn step(&mut self) -> Result<(), DecodeError> {
        #[cfg(feature = "tracing")]
        let offset = self.cursor.position();
        let (block_type, size) = read_block_type(&mut self.cursor)?;
        self.cursor.ensure(size, "block")?;
        self.blocks += 1;
        #[cfg(feature = "tracing")]
        debug!(offset, ?block_type, size, "block");

        match block_type {
            BlockType::DefaultNamedBlock => self.named_block(size, Scope::Default),
            BlockType::Attributes => self.open_mark(size),
            BlockType::NamedBlock => self.named_block(size, Scope::Mark),
            BlockType::Invalid(code) => Err(DecodeError::InvalidBlockType(code)),
        }
    }

    /// Index of the open mark, if one has been opened.
    fn current_index(&self) -> Option<usize> {
        self.current
            .has_attributes()
            .then(|| self.opened.saturating_sub(1))
    }

    fn open_mark(&mut self, size: usize) -> Result<(), DecodeError> {
        if let Some(limit) = self.options.max_marks.filter(|&limit| self.opened >= limit) {
            return Err(DecodeError::ResourceLimitExceeded {
                limit_name: "max_marks",
                limit_value: limit,
                actual_value: self.opened + 1,
            });
        }

        self.finish_mark()?;

        let mut record = self.default.clone();
        record.attributes = Some(read_mark_attributes(&mut self.cursor, size)?);
        self.current = record;
        self.opened += 1;
        Ok(())
    }

    /// Hand the open mark, if any, to the sink.
    fn finish_mark(&mut self) -> Result<(), DecodeError> {
        let Some(index) = self.current_index() else {
            return Ok(());
        };
        translator::send(&self.current, index, &mut *self.handler)
            .map_err(|source| DecodeError::MarkRejected { index, source })?;
        self.emitted += 1;
        #[cfg(feature = "tracing")]
        debug!(
            index,
            mark_type = %self.current.mark_type().unwrap_or(MarkType::Invalid),
            "mark emitted"
        );
        Ok(())
    }

    fn named_block(&mut self, size: usize, scope: Scope) -> Result<(), DecodeError> {
        let (kind, mark_index) = match scope {
            Scope::Default => (None, None),
            Scope::Mark => (self.current.mark_type(), self.current_index()),
        };

        let block = read_named_block(&mut self.cursor, size, kind)?;
        self.inspect(&block, mark_index);

        match scope {
            Scope::Default => self.default.apply(block),
            Scope::Mark => self.current.apply(block),
        }
        Ok(())
    }

    /// Report oddities in a decoded block that do not stop the walk.
    fn inspect(&mut self, block: &NamedBlock, mark_index: Option<usize>) {
        let warning = match block {
            NamedBlock::Unknown { name, size } => DecodeWarning::new(
                DecodeWarningCode::UnknownNamedBlock,
                format!("skipped {size} bytes of unknown named block"),
            )
            .in_block(name.as_str()),
            NamedBlock::Rotation(rotation) if rotation.scale != EXPECTED_ROTATION_SCALE => {
                DecodeWarning::new(
                    DecodeWarningCode::UnexpectedRotationScale,
                    format!(
                        "rotation scale {}, expected {EXPECTED_ROTATION_SCALE}",
                        rotation.scale
                    ),
                )
                .in_block(block.name())
            }
            NamedBlock::Text(text) if !text.has_standard_orientation() => DecodeWarning::new(
                DecodeWarningCode::UnusualOrientation,
                format!(
                    "text orientation {} is not a multiple of 90 degrees",
                    text.orientation
                ),
            )
            .in_block(block.name()),
            _ => return,
        };
        self.warn(warning.for_mark(mark_index));
    }

    fn warn(&mut self, warning: DecodeWarning) {
        if !self.options.collect_warnings {
            return;
        }
        #[cfg(feature = "tracing")]
        trace!(code = %warning.code, "decode warning");
        self.warnings += 1;
        self.handler.on_warning(warning);
    }
}

/// Decode a complete tag, sending each mark to `handler` in stream order.
///
/// Marks emitted before a failure are not retracted.
pub fn decode<H: AnnotationHandler + ?Sized>(
    data: &[u8],
    handler: &mut H,
    options: &DecodeOptions,
) -> Result<DecodeSummary, DecodeError> {
    let mut walker = BlockWalker::new(data, handler, options);
    let result = walker.run();
    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        warn!(offset = walker.position(), error = %err, "annotation decode aborted");
    }
    result
}
