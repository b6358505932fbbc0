//! Sequential little-endian reader over the tag bytes.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::DecodeError;

/// A forward-only reader over an immutable byte buffer.
///
/// Every read is bounds checked: a read past the end fails with
/// [`DecodeError::Truncated`] and leaves the offset untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Number of bytes left to read.
    pub fn available(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Fail with [`DecodeError::Truncated`] unless `needed` bytes remain.
    pub fn ensure(&self, needed: usize, context: &'static str) -> Result<(), DecodeError> {
        let available = self.available();
        if available < needed {
            return Err(DecodeError::Truncated {
                context,
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Borrow the next `count` bytes and advance past them.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], DecodeError> {
        self.ensure(count, "byte run")?;
        let bytes = &self.data[self.offset..self.offset + count];
        self.offset += count;
        Ok(bytes)
    }

    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.read_bytes(4).map(LittleEndian::read_u32)
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        self.read_bytes(4).map(LittleEndian::read_i32)
    }

    /// Read a 4-byte boolean; any nonzero value is `true`.
    pub fn read_bool32(&mut self) -> Result<bool, DecodeError> {
        Ok(self.read_u32()? != 0)
    }

    /// Read `count` consecutive signed 32-bit integers.
    pub fn read_i32s(&mut self, count: usize) -> Result<Vec<i32>, DecodeError> {
        let len = count.checked_mul(4).ok_or(DecodeError::Truncated {
            context: "integer run",
            needed: usize::MAX,
            available: self.available(),
        })?;
        let bytes = self.read_bytes(len)?;
        let mut values = vec![0; count];
        LittleEndian::read_i32_into(bytes, &mut values);
        Ok(values)
    }

    /// Advance past `count` bytes without reading them.
    pub fn skip(&mut self, count: usize) -> Result<(), DecodeError> {
        self.ensure(count, "skipped bytes")?;
        self.offset += count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let data = [0x01, 0x02, 0x03, 0x04, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_u32().unwrap(), 0x0403_0201);
        assert_eq!(cursor.read_i32().unwrap(), -1);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.available(), 0);
    }

    #[test]
    fn read_byte_advances_by_one() {
        let data = [7, 8];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_byte().unwrap(), 7);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.available(), 1);
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn read_bool32_nonzero_is_true() {
        let data = [0, 0, 0, 0, 0, 1, 0, 0];
        let mut cursor = Cursor::new(&data);
        assert!(!cursor.read_bool32().unwrap());
        assert!(cursor.read_bool32().unwrap());
    }

    #[test]
    fn read_i32s_in_order() {
        let data = [217, 2, 0, 0, 190, 1, 0, 0, 0xFE, 0xFF, 0xFF, 0xFF];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_i32s(3).unwrap(), vec![729, 446, -2]);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn short_read_fails_without_consuming() {
        let data = [1, 2, 3];
        let mut cursor = Cursor::new(&data);
        let err = cursor.read_u32().unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                context: "byte run",
                needed: 4,
                available: 3,
            }
        );
        assert_eq!(cursor.available(), 3);
    }

    #[test]
    fn skip_past_end_fails() {
        let data = [0; 4];
        let mut cursor = Cursor::new(&data);
        cursor.skip(3).unwrap();
        assert!(cursor.skip(2).is_err());
        assert_eq!(cursor.available(), 1);
    }

    #[test]
    fn empty_cursor_is_at_end() {
        let cursor = Cursor::new(&[]);
        assert!(cursor.is_at_end());
        assert!(cursor.ensure(1, "header").is_err());
        assert!(cursor.ensure(0, "header").is_ok());
    }
}
