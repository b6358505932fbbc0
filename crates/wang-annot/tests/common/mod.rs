//! Shared test utilities for integration tests.
//!
//! Provides a builder producing synthetic annotation tags byte by byte.

#![allow(dead_code)]

/// Attribute values of a synthetic mark.
#[derive(Debug, Clone)]
pub struct MarkSpec {
    pub mark_type: u32,
    pub bounds: [i32; 4],
    pub color1: [u8; 3],
    pub color2: [u8; 3],
    pub highlighting: bool,
    pub line_width: u32,
    pub italic: bool,
    pub underline: bool,
    pub face_name: &'static str,
    pub visible: bool,
}

impl MarkSpec {
    pub fn new(mark_type: u32, bounds: [i32; 4]) -> Self {
        Self {
            mark_type,
            bounds,
            color1: [0, 0, 0],
            color2: [0, 0, 0],
            highlighting: false,
            line_width: 1,
            italic: false,
            underline: false,
            face_name: "Arial",
            visible: true,
        }
    }

    pub fn color1(mut self, color: [u8; 3]) -> Self {
        self.color1 = color;
        self
    }

    pub fn color2(mut self, color: [u8; 3]) -> Self {
        self.color2 = color;
        self
    }

    pub fn line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    pub fn highlighting(mut self) -> Self {
        self.highlighting = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn encode(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(164);
        body.extend_from_slice(&self.mark_type.to_le_bytes());
        for value in self.bounds {
            body.extend_from_slice(&value.to_le_bytes());
        }
        body.extend_from_slice(&self.color1);
        body.push(0);
        body.extend_from_slice(&self.color2);
        body.push(0);
        body.extend_from_slice(&u32::from(self.highlighting).to_le_bytes());
        // transparent
        body.extend_from_slice(&[0; 4]);
        body.extend_from_slice(&self.line_width.to_le_bytes());
        // starting and end points
        body.extend_from_slice(&[0; 8]);

        // LOGFONT: five longs, eight bytes, 28-byte face name
        body.extend_from_slice(&12i32.to_le_bytes());
        body.extend_from_slice(&[0; 12]);
        body.extend_from_slice(&400i32.to_le_bytes());
        body.push(u8::from(self.italic));
        body.push(u8::from(self.underline));
        body.extend_from_slice(&[0; 6]);
        let mut face = [0u8; 28];
        face[..self.face_name.len()].copy_from_slice(self.face_name.as_bytes());
        body.extend_from_slice(&face);

        // minimizable and time
        body.extend_from_slice(&[0; 12]);
        body.extend_from_slice(&u32::from(self.visible).to_le_bytes());
        // reserved
        body.extend_from_slice(&[0; 44]);

        assert_eq!(body.len(), 164);
        body
    }
}

/// Builds a tag block by block.
#[derive(Debug, Clone)]
pub struct TagBuilder {
    bytes: Vec<u8>,
}

impl TagBuilder {
    /// A tag announcing the 32-bit layout.
    pub fn new() -> Self {
        Self {
            bytes: vec![0, 0, 0, 0, 1, 0, 0, 0],
        }
    }

    /// A tag whose header carries the 16-bit layout flag.
    pub fn legacy() -> Self {
        Self { bytes: vec![0; 8] }
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn pair(self, code: i32, size: i32) -> Self {
        let mut pair = code.to_le_bytes().to_vec();
        pair.extend_from_slice(&size.to_le_bytes());
        self.raw(&pair)
    }

    pub fn mark(self, spec: MarkSpec) -> Self {
        self.pair(5, 164).raw(&spec.encode())
    }

    fn named_block(self, code: i32, name: &str, payload: &[u8]) -> Self {
        let mut field = [0u8; 8];
        field[..name.len()].copy_from_slice(name.as_bytes());
        self.pair(code, 12)
            .raw(&field)
            .raw(&(payload.len() as i32).to_le_bytes())
            .raw(payload)
    }

    /// A named block of the open mark.
    pub fn named(self, name: &str, payload: &[u8]) -> Self {
        self.named_block(6, name, payload)
    }

    /// A named block inherited by every later mark.
    pub fn default_named(self, name: &str, payload: &[u8]) -> Self {
        self.named_block(2, name, payload)
    }

    pub fn points(self, points: &[(i32, i32)]) -> Self {
        self.named("OiAnoDat", &points_payload(points))
    }

    pub fn text(self, orientation: i32, text: &str) -> Self {
        self.named("OiAnText", &text_payload(orientation, text))
    }

    pub fn group(self, group: &str) -> Self {
        self.named("OiGroup", &nul_terminated(group))
    }

    pub fn default_group(self, group: &str) -> Self {
        self.default_named("OiGroup", &nul_terminated(group))
    }

    pub fn index(self, index: &str) -> Self {
        self.named("OiIndex", &nul_terminated(index))
    }

    pub fn hyperlink(self, link: &str, location: &str, working_directory: &str, flags: i32) -> Self {
        let mut payload = 1i32.to_le_bytes().to_vec();
        for part in [link, location, working_directory] {
            payload.extend_from_slice(&(part.len() as i32).to_le_bytes());
            payload.extend_from_slice(part.as_bytes());
        }
        payload.extend_from_slice(&flags.to_le_bytes());
        self.named("OiHypLnk", &payload)
    }

    pub fn rotation(self, code: i32, scale: i32, dpi: i32) -> Self {
        let mut payload = Vec::with_capacity(56);
        for value in [code, scale, dpi, dpi, dpi, dpi] {
            payload.extend_from_slice(&value.to_le_bytes());
        }
        payload.extend_from_slice(&[0; 32]);
        self.named("OiAnoDat", &payload)
    }

    pub fn filename(self, name: &str) -> Self {
        self.named("OiFilNam", &nul_terminated(name))
    }

    pub fn dib(self, bytes: &[u8]) -> Self {
        self.named("OiDIB", bytes)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

impl Default for TagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn nul_terminated(text: &str) -> Vec<u8> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

pub fn points_payload(points: &[(i32, i32)]) -> Vec<u8> {
    let count = points.len() as i32;
    let mut bytes = count.to_le_bytes().to_vec();
    bytes.extend_from_slice(&count.to_le_bytes());
    for (x, y) in points {
        bytes.extend_from_slice(&x.to_le_bytes());
        bytes.extend_from_slice(&y.to_le_bytes());
    }
    bytes
}

pub fn text_payload(orientation: i32, text: &str) -> Vec<u8> {
    let mut bytes = orientation.to_le_bytes().to_vec();
    bytes.extend_from_slice(&1000u32.to_le_bytes());
    bytes.extend_from_slice(&360u32.to_le_bytes());
    bytes.extend_from_slice(&(text.len() as u32 + 1).to_le_bytes());
    bytes.extend_from_slice(&nul_terminated(text));
    // padding to a 4-byte boundary
    while bytes.len() % 4 != 0 {
        bytes.push(0);
    }
    bytes
}

/// A 40-byte `BITMAPINFOHEADER` followed by one 24-bit pixel.
pub fn tiny_dib(width: i32, height: i32) -> Vec<u8> {
    let mut bytes = 40u32.to_le_bytes().to_vec();
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&[0; 24]);
    bytes.extend_from_slice(&[255, 0, 0, 0]);
    bytes
}
