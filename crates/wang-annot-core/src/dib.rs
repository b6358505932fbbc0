//! Embedded image payloads (`OiDIB` blocks).
//!
//! The bytes are carried opaquely. [`DibPayload::info_header`] peeks the
//! leading `BITMAPINFOHEADER` so sinks can size the image without decoding
//! pixels.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

/// Size of a Win32 `BITMAPINFOHEADER`, in bytes.
pub const BITMAP_INFO_HEADER_LEN: usize = 40;

/// An owned device-independent bitmap, exactly as stored in the tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DibPayload {
    bytes: Vec<u8>,
}

/// Dimensions reported by a DIB's `BITMAPINFOHEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DibInfoHeader {
    /// `biSize`; 40 for a plain `BITMAPINFOHEADER`, larger for V4/V5 headers.
    pub header_size: u32,
    pub width: i32,
    /// Negative for top-down bitmaps.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
}

impl DibPayload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Peek the `BITMAPINFOHEADER` at the start of the payload.
    ///
    /// Returns `None` when fewer than 40 bytes are present or when `biSize`
    /// is smaller than a `BITMAPINFOHEADER` (e.g. an OS/2 core header).
    pub fn info_header(&self) -> Option<DibInfoHeader> {
        if self.bytes.len() < BITMAP_INFO_HEADER_LEN {
            return None;
        }
        let mut reader = Cursor::new(&self.bytes[..BITMAP_INFO_HEADER_LEN]);
        let header_size = reader.read_u32::<LittleEndian>().ok()?;
        if (header_size as usize) < BITMAP_INFO_HEADER_LEN {
            return None;
        }
        let width = reader.read_i32::<LittleEndian>().ok()?;
        let height = reader.read_i32::<LittleEndian>().ok()?;
        let planes = reader.read_u16::<LittleEndian>().ok()?;
        let bit_count = reader.read_u16::<LittleEndian>().ok()?;
        Some(DibInfoHeader {
            header_size,
            width,
            height,
            planes,
            bit_count,
        })
    }
}

impl From<Vec<u8>> for DibPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_header_bytes(width: i32, height: i32, bit_count: u16) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&40u32.to_le_bytes());
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&bit_count.to_le_bytes());
        bytes.resize(40, 0);
        bytes
    }

    #[test]
    fn short_payload_has_no_header() {
        let dib = DibPayload::new(vec![104, 101, 108, 108]);
        assert_eq!(dib.len(), 4);
        assert!(dib.info_header().is_none());
    }

    #[test]
    fn reads_dimensions() {
        let mut bytes = info_header_bytes(640, -480, 24);
        bytes.extend_from_slice(&[0xFF; 12]);
        let dib = DibPayload::new(bytes);
        let header = dib.info_header().unwrap();
        assert_eq!(header.header_size, 40);
        assert_eq!(header.width, 640);
        assert_eq!(header.height, -480);
        assert_eq!(header.planes, 1);
        assert_eq!(header.bit_count, 24);
    }

    #[test]
    fn core_header_is_rejected() {
        let mut bytes = info_header_bytes(16, 16, 8);
        bytes[0] = 12;
        assert!(DibPayload::new(bytes).info_header().is_none());
    }

    #[test]
    fn bytes_are_kept_verbatim() {
        let dib = DibPayload::from(vec![1, 2, 3]);
        assert_eq!(dib.as_bytes(), &[1, 2, 3]);
        assert_eq!(dib.into_bytes(), vec![1, 2, 3]);
        assert!(DibPayload::default().is_empty());
    }
}
