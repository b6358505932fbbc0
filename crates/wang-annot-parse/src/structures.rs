//! Decoders for the fixed-layout and length-prefixed structures of a tag.
//!
//! Each decoder takes the declared byte budget of its structure and either
//! returns the decoded value, having consumed exactly that budget, or fails
//! without consuming anything.

use encoding_rs::WINDOWS_1252;
use wang_annot_core::{
    Bounds, ColorTriple, DibPayload, DisplayText, FACE_NAME_LEN, FONT_DESCRIPTOR_LEN,
    FontDescriptor, Hyperlink, MarkAttributes, MarkType, Point, RotationInfo,
};

use crate::cursor::Cursor;
use crate::error::DecodeError;

/// Encoded size of a named block header: 8-byte name and 4-byte size.
pub const NAMED_BLOCK_HEADER_LEN: usize = 12;

/// Encoded size of `OIAN_MARK_ATTRIBUTES`.
pub const MARK_ATTRIBUTES_LEN: usize = 164;

/// Encoded size of `AN_NEW_ROTATE_STRUCT`.
pub const ROTATION_LEN: usize = 56;

const NAME_LEN: usize = 8;
const RECTANGLE_LEN: usize = 16;
const RGB_QUAD_LEN: usize = 4;
const POINTS_FIXED_LEN: usize = 8;
const POINT_LEN: usize = 8;
const DISPLAY_TEXT_FIXED_LEN: usize = 16;

/// Header preceding every named block payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBlockHeader {
    /// Block name with trailing NULs removed, e.g. `OiAnoDat`.
    pub name: String,
    /// Size of the payload that follows the header.
    pub size: usize,
}

fn non_negative(value: i32, context: &'static str) -> Result<usize, DecodeError> {
    usize::try_from(value).map_err(|_| DecodeError::InvalidValue {
        context,
        value: i64::from(value),
    })
}

fn expect_size(
    declared: usize,
    expected: usize,
    context: &'static str,
) -> Result<(), DecodeError> {
    if declared != expected {
        return Err(DecodeError::SizeMismatch {
            context,
            expected,
            declared,
        });
    }
    Ok(())
}

/// Decode an 8-bit string, cut at the first NUL.
fn decode_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(&bytes[..end]);
    text.into_owned()
}

/// Read a named block header. `declared` must be exactly 12.
pub fn read_named_block_header(
    cursor: &mut Cursor<'_>,
    declared: usize,
) -> Result<NamedBlockHeader, DecodeError> {
    expect_size(declared, NAMED_BLOCK_HEADER_LEN, "named block header")?;
    cursor.ensure(NAMED_BLOCK_HEADER_LEN, "named block header")?;
    let name = read_char_string(cursor, NAME_LEN)?;
    let size = non_negative(cursor.read_i32()?, "named block size")?;
    Ok(NamedBlockHeader { name, size })
}

/// Read a fixed-width string field of `len` bytes.
///
/// The result stops at the first NUL, but all `len` bytes are consumed.
pub fn read_char_string(cursor: &mut Cursor<'_>, len: usize) -> Result<String, DecodeError> {
    cursor.read_bytes(len).map(decode_string)
}

/// Read an `AN_POINTS` list: max and count, then `max` coordinate pairs of
/// which only the first `count` are meaningful.
pub fn read_points(cursor: &mut Cursor<'_>, declared: usize) -> Result<Vec<Point>, DecodeError> {
    if declared < POINTS_FIXED_LEN {
        return Err(DecodeError::SizeMismatch {
            context: "point list",
            expected: POINTS_FIXED_LEN,
            declared,
        });
    }
    let mut lookahead = cursor.clone();
    let mut body = Cursor::new(lookahead.read_bytes(declared)?);

    let max = non_negative(body.read_i32()?, "maximum point count")?;
    let count = non_negative(body.read_i32()?, "point count")?;
    if max < count {
        return Err(DecodeError::InvalidValue {
            context: "point count above maximum",
            value: count as i64,
        });
    }
    let expected = max
        .checked_mul(POINT_LEN)
        .and_then(|len| len.checked_add(POINTS_FIXED_LEN))
        .unwrap_or(usize::MAX);
    expect_size(declared, expected, "point list")?;

    let coordinates = body.read_i32s(count * 2)?;
    let points = coordinates
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect();

    *cursor = lookahead;
    Ok(points)
}

/// Read an `AN_NEW_ROTATE_STRUCT`. `declared` must be exactly 56.
pub fn read_rotation(
    cursor: &mut Cursor<'_>,
    declared: usize,
) -> Result<RotationInfo, DecodeError> {
    expect_size(declared, ROTATION_LEN, "rotation")?;
    cursor.ensure(ROTATION_LEN, "rotation")?;

    let code = cursor.read_i32()?;
    let scale = cursor.read_i32()?;
    // nominal resolution, superseded by the original resolution below
    cursor.skip(8)?;
    let horizontal_res_dpi = cursor.read_i32()?;
    let vertical_res_dpi = cursor.read_i32()?;
    // two reserved booleans and six reserved longs
    cursor.skip(32)?;

    Ok(RotationInfo {
        code,
        scale,
        horizontal_res_dpi,
        vertical_res_dpi,
    })
}

/// Read an `LRECT` as left, top, right, bottom.
pub fn read_rectangle(cursor: &mut Cursor<'_>) -> Result<Bounds, DecodeError> {
    cursor.ensure(RECTANGLE_LEN, "rectangle")?;
    let raw = [
        cursor.read_i32()?,
        cursor.read_i32()?,
        cursor.read_i32()?,
        cursor.read_i32()?,
    ];
    Ok(Bounds::from_array(raw))
}

/// Read an `RGBQUAD`: blue, green, red, then a reserved byte.
pub fn read_rgb_quad(cursor: &mut Cursor<'_>) -> Result<ColorTriple, DecodeError> {
    cursor.ensure(RGB_QUAD_LEN, "RGB quad")?;
    let blue = cursor.read_byte()?;
    let green = cursor.read_byte()?;
    let red = cursor.read_byte()?;
    cursor.skip(1)?;
    Ok(ColorTriple::new(blue, green, red))
}

/// Read a `LOGFONT`. Requires at least 56 bytes.
pub fn read_font(cursor: &mut Cursor<'_>) -> Result<FontDescriptor, DecodeError> {
    cursor.ensure(FONT_DESCRIPTOR_LEN, "font")?;
    Ok(FontDescriptor {
        height: cursor.read_i32()?,
        width: cursor.read_i32()?,
        escapement: cursor.read_i32()?,
        orientation: cursor.read_i32()?,
        weight: cursor.read_i32()?,
        italic: cursor.read_byte()? != 0,
        underline: cursor.read_byte()? != 0,
        strikeout: cursor.read_byte()? != 0,
        char_set: cursor.read_byte()?,
        out_precision: cursor.read_byte()?,
        clip_precision: cursor.read_byte()?,
        quality: cursor.read_byte()?,
        pitch_and_family: cursor.read_byte()?,
        face_name: read_char_string(cursor, FACE_NAME_LEN)?,
    })
}

/// Read an `OIAN_MARK_ATTRIBUTES` block. `declared` must be exactly 164.
pub fn read_mark_attributes(
    cursor: &mut Cursor<'_>,
    declared: usize,
) -> Result<MarkAttributes, DecodeError> {
    expect_size(declared, MARK_ATTRIBUTES_LEN, "mark attributes")?;
    cursor.ensure(MARK_ATTRIBUTES_LEN, "mark attributes")?;

    let mark_type = MarkType::from_raw(cursor.read_u32()?);
    let bounds = read_rectangle(cursor)?;
    let color1 = read_rgb_quad(cursor)?;
    let color2 = read_rgb_quad(cursor)?;
    let highlighting = cursor.read_bool32()?;
    let transparent = cursor.read_bool32()?;
    let line_width = cursor.read_u32()?;
    // uStartingPoint, uEndPoint
    cursor.skip(8)?;
    let font = read_font(cursor)?;
    // bMinimizable
    cursor.skip(4)?;
    // time_t; not decoded
    cursor.skip(8)?;
    let visible = cursor.read_bool32()?;
    // dwReserved4 and lReserved[10]
    cursor.skip(4)?;
    cursor.skip(40)?;

    Ok(MarkAttributes {
        mark_type,
        bounds,
        color1,
        color2,
        highlighting,
        transparent,
        line_width,
        font,
        visible,
    })
}

/// Read an `OIAN_TEXTPRIVDATA` block; padding after the text is skipped.
pub fn read_display_text(
    cursor: &mut Cursor<'_>,
    declared: usize,
) -> Result<DisplayText, DecodeError> {
    if declared < DISPLAY_TEXT_FIXED_LEN {
        return Err(DecodeError::SizeMismatch {
            context: "display text",
            expected: DISPLAY_TEXT_FIXED_LEN,
            declared,
        });
    }
    let mut lookahead = cursor.clone();
    let mut body = Cursor::new(lookahead.read_bytes(declared)?);

    let orientation = body.read_i32()?;
    // uReserved1
    body.skip(4)?;
    let creation_scale = body.read_u32()?;
    let text_len = non_negative(body.read_u32()? as i32, "text length")?;
    if text_len > declared - DISPLAY_TEXT_FIXED_LEN {
        return Err(DecodeError::SizeMismatch {
            context: "display text",
            expected: DISPLAY_TEXT_FIXED_LEN + text_len,
            declared,
        });
    }
    let text = read_char_string(&mut body, text_len)?;

    *cursor = lookahead;
    Ok(DisplayText {
        orientation,
        creation_scale,
        text,
    })
}

/// Read an `OiDIB` payload verbatim.
pub fn read_dib(cursor: &mut Cursor<'_>, declared: usize) -> Result<DibPayload, DecodeError> {
    cursor
        .read_bytes(declared)
        .map(|bytes| DibPayload::new(bytes.to_vec()))
}

/// Read a `HYPERLINK_NB` block.
///
/// The three length-prefixed strings and the flag word must fit in the
/// declared size; bytes left over after the flag word are skipped.
pub fn read_hyperlink(cursor: &mut Cursor<'_>, declared: usize) -> Result<Hyperlink, DecodeError> {
    let mut lookahead = cursor.clone();
    let mut body = Cursor::new(lookahead.read_bytes(declared)?);

    body.ensure(4, "hyperlink version")?;
    let _version = body.read_i32()?;

    let mut strings = [String::new(), String::new(), String::new()];
    for slot in strings.iter_mut() {
        body.ensure(4, "hyperlink string length")?;
        let len = non_negative(body.read_i32()?, "hyperlink string length")?;
        body.ensure(len, "hyperlink string")?;
        *slot = read_char_string(&mut body, len)?;
    }

    body.ensure(4, "hyperlink flags")?;
    let flags = body.read_i32()?;

    *cursor = lookahead;
    let [link, location, working_directory] = strings;
    Ok(Hyperlink {
        link,
        location,
        working_directory,
        internal_link: flags & 2 != 0,
        can_remove: flags & 1 != 0,
    })
}
