// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

use crate::date::ZipDateTime;
use crate::entry::builder::ZipEntryBuilder;

/// Metadata describing a single ZIP entry.
///
/// # Builder pattern
/// Entries are constructed through [`ZipEntryBuilder`], or via [`ZipEntry::new`] which stamps the entry with the
/// current local time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZipEntry {
    pub(crate) filename: String,
    pub(crate) last_modification_date: ZipDateTime,
}

impl From<ZipEntryBuilder> for ZipEntry {
    fn from(builder: ZipEntryBuilder) -> Self {
        builder.0
    }
}

impl ZipEntry {
    pub(crate) fn new(filename: String) -> Self {
        ZipEntry { filename, last_modification_date: ZipDateTime::now() }
    }

    /// Returns the entry's filename.
    ///
    /// Names are stored as their UTF-8 bytes.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the entry's last modification time & date.
    pub fn last_modification_date(&self) -> &ZipDateTime {
        &self.last_modification_date
    }
}

/// An entry paired with the bytes it will hold.
///
/// The content is owned; once constructed the entry has no tie back to wherever the bytes were read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub(crate) entry: ZipEntry,
    pub(crate) content: Vec<u8>,
}

impl ArchiveEntry {
    /// Constructs an entry stamped with the current local time.
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self { entry: ZipEntry::new(filename.into()), content }
    }

    /// Constructs an entry from prepared metadata.
    pub fn with_entry<E: Into<ZipEntry>>(entry: E, content: Vec<u8>) -> Self {
        Self { entry: entry.into(), content }
    }

    /// Returns the entry's metadata.
    pub fn entry(&self) -> &ZipEntry {
        &self.entry
    }

    pub fn filename(&self) -> &str {
        self.entry.filename()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consumes the entry, returning its metadata and content.
    pub fn into_parts(self) -> (ZipEntry, Vec<u8>) {
        (self.entry, self.content)
    }
}
