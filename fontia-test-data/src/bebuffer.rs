//! small utilities used in tests

use std::collections::HashMap;

use fontia_types::{Scalar, Tag};

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
    tagged_locations: HashMap<String, usize>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    pub fn push_with_tag(mut self, item: impl Scalar, tag: &str) -> Self {
        self.tagged_locations
            .insert(tag.to_string(), self.data.len());
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    /// Append raw bytes, such as an already encoded string.
    pub fn extend_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.data.extend_from_slice(bytes.as_ref());
        self
    }

    /// Write a table tag.
    pub fn push_tag(self, tag: Tag) -> Self {
        self.extend_bytes(tag.to_be_bytes())
    }

    /// Write a string as UTF-16BE, the encoding of Windows and Unicode
    /// platform names.
    pub fn push_utf16(self, s: &str) -> Self {
        self.extend(s.encode_utf16())
    }

    pub fn offset_for(&self, tag: &str) -> usize {
        // panic on unrecognized tags
        self.tagged_locations.get(tag).copied().unwrap()
    }

    pub fn write_at(&mut self, tag: &str, item: impl Scalar) {
        let offset = self.offset_for(tag);
        self.write_at_offset(offset, item);
    }

    /// Overwrite the bytes at `offset` with `item`.
    pub fn write_at_offset(&mut self, offset: usize, item: impl Scalar) {
        let raw = item.to_raw();
        let new_data: &[u8] = raw.as_ref();
        let data = &mut self.data[offset..];

        if data.len() < new_data.len() {
            panic!("not enough room left in buffer for the requested write.");
        }

        for (left, right) in data.iter_mut().zip(new_data) {
            *left = *right
        }
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
