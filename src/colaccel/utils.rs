//! Low-level byte reading utilities

use byteorder::{ByteOrder, LittleEndian};

use super::types::error::{AccelError, Result};

/// Random-access little-endian view over an immutable byte buffer.
///
/// There is no cursor: every read names its own offset, so a view can be
/// shared freely between record decoders.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `width` bytes starting at `offset`.
    ///
    /// Fails with [`AccelError::OutOfBounds`] if the range leaves the buffer,
    /// including when `offset + width` overflows.
    pub fn bytes(&self, offset: usize, width: usize) -> Result<&'a [u8]> {
        offset
            .checked_add(width)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(AccelError::OutOfBounds {
                offset,
                width,
                buffer_len: self.data.len(),
            })
    }

    /// Reads an IEEE-754 binary32. The bit pattern is passed through as-is.
    pub fn read_f32(&self, offset: usize) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.bytes(offset, 4)?))
    }

    pub fn read_i32(&self, offset: usize) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.bytes(offset, 4)?))
    }

    pub fn read_u32(&self, offset: usize) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.bytes(offset, 4)?))
    }

    pub fn read_u16(&self, offset: usize) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.bytes(offset, 2)?))
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.bytes(offset, 1)?[0])
    }
}
