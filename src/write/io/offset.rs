// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// An in-memory byte sink which tracks the current byte offset and packs little-endian integers.
///
/// Writes into a `Vec<u8>` cannot fail, so none of the primitives return a `Result`.
#[derive(Debug, Default)]
pub struct OffsetWriter {
    inner: Vec<u8>,
}

impl OffsetWriter {
    /// Constructs a new writer with room for `capacity` bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: Vec::with_capacity(capacity) }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> usize {
        self.inner.len()
    }

    pub fn write_u16(&mut self, value: u16) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_all(&mut self, bytes: &[u8]) {
        self.inner.extend_from_slice(bytes);
    }

    /// Consumes this wrapper and returns the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}
