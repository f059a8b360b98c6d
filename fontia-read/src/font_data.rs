//! raw font bytes

use std::ops::Range;

use types::Scalar;

use crate::read::ReadError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice that remembers where the slice
/// started in the original file, so that errors can report absolute offsets.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    total_pos: usize,
    bytes: &'a [u8],
}

/// A cursor for reading sequential fields out of [`FontData`].
///
/// Every read is bounds checked; a read past the end reports
/// [`ReadError::TruncatedInput`] and still advances the cursor.
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData {
            total_pos: 0,
            bytes,
        }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The absolute position of the first byte of this data in the file.
    pub fn position(&self) -> usize {
        self.total_pos
    }

    /// Returns the data starting at `pos`, or `None` if `pos` is past the end.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData {
            bytes,
            total_pos: self.total_pos.saturating_add(pos),
        })
    }

    /// Ensure that `len` bytes are available at `offset`.
    pub fn check_range(&self, offset: usize, len: usize) -> Result<(), ReadError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(()),
            _ => Err(self.truncated(offset, len)),
        }
    }

    /// Read a big-endian scalar at `offset`.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        self.check_range(offset, T::RAW_BYTE_LEN)?;
        self.bytes
            .get(offset..offset + T::RAW_BYTE_LEN)
            .and_then(T::read)
            .ok_or_else(|| self.truncated(offset, T::RAW_BYTE_LEN))
    }

    /// Return the bytes in `range`, or a [`ReadError::TruncatedInput`] if
    /// they are not all present.
    pub fn read_bytes(&self, range: Range<usize>) -> Result<&'a [u8], ReadError> {
        let len = range.end.saturating_sub(range.start);
        self.check_range(range.start, len)?;
        self.bytes
            .get(range.clone())
            .ok_or_else(|| self.truncated(range.start, len))
    }

    /// The bytes in `range` as `FontData` that keeps its absolute position,
    /// or a [`ReadError::TruncatedInput`] if they are not all present.
    pub fn read_data(&self, range: Range<usize>) -> Result<FontData<'a>, ReadError> {
        let bytes = self.read_bytes(range.clone())?;
        Ok(FontData {
            bytes,
            total_pos: self.total_pos.saturating_add(range.start),
        })
    }

    /// Interpret the bytes in `range` as a slice of fixed-size records.
    ///
    /// The records are plain byte arrays, so any alignment and any bit
    /// pattern is acceptable; the only failure is running out of bytes.
    pub fn read_array<T: bytemuck::AnyBitPattern>(
        &self,
        range: Range<usize>,
    ) -> Result<&'a [T], ReadError> {
        let bytes = self.read_bytes(range.clone())?;
        bytemuck::try_cast_slice(bytes).map_err(|_| self.truncated(range.start, range.len()))
    }

    /// A cursor whose first read is at `pos`.
    pub(crate) fn cursor_at(&self, pos: usize) -> Cursor<'a> {
        Cursor { pos, data: *self }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    fn truncated(&self, offset: usize, expected: usize) -> ReadError {
        ReadError::TruncatedInput {
            offset: self.total_pos.saturating_add(offset),
            expected,
            available: self.bytes.len().saturating_sub(offset),
        }
    }
}

impl<'a> Cursor<'a> {
    pub(crate) fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos += T::RAW_BYTE_LEN;
        temp
    }

    /// Read `len` consecutive records of type `T`.
    pub(crate) fn read_array<T: bytemuck::AnyBitPattern>(
        &mut self,
        len: usize,
    ) -> Result<&'a [T], ReadError> {
        let len = len.saturating_mul(std::mem::size_of::<T>());
        let temp = self
            .data
            .read_array(self.pos..self.pos.saturating_add(len));
        self.pos += len;
        temp
    }

    /// The absolute position of the cursor in the file.
    pub(crate) fn position(&self) -> usize {
        self.data.total_pos + self.pos
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}
