// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing ZIP files.
//!
//! Every entry is written with the "stored" method; content is copied verbatim after its local file header.
//!
//! # Example
//! ### Incremental writer
//! ```
//! # use capture_zip::{ZipEntryBuilder, ZipFileWriter};
//! # use capture_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut writer = ZipFileWriter::new();
//!
//! let data = b"This is an example file.";
//! let opts = ZipEntryBuilder::new(String::from("foo.txt"));
//!
//! writer.write_entry_whole(opts, data)?;
//! let archive: Vec<u8> = writer.close()?;
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```
//! ### Whole list
//! ```
//! # use capture_zip::{encode, ArchiveEntry};
//! # use capture_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let archive = encode(&[ArchiveEntry::new("notes.txt", b"left wall".to_vec())])?;
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub(crate) mod entry_whole;
pub(crate) mod io;

use std::collections::HashSet;

use crate::core::cdr::{self, CentralDirectoryRecord};
use crate::core::eocdr::{self, RawEndOfCentralDirectoryRecord};
use crate::entry::{ArchiveEntry, ZipEntry};
use crate::error::{Result, ZipError};
use crate::spec::consts::{
    CDH_LENGTH, EOCDR_LENGTH, LFH_LENGTH, NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE, SIGNATURE_LENGTH,
};

use entry_whole::EntryWholeWriter;
use io::offset::OffsetWriter;

/// A ZIP file writer which builds the archive in memory.
///
/// # Note
/// - [`ZipFileWriter::close()`] must be called to obtain a valid archive; dropping the writer discards the buffer.
pub struct ZipFileWriter {
    pub(crate) writer: OffsetWriter,
    pub(crate) cd_entries: Vec<CentralDirectoryRecord>,
    pub(crate) filenames: HashSet<String>,
}

impl Default for ZipFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipFileWriter {
    /// Construct a new ZIP file writer over an empty buffer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Construct a new ZIP file writer whose buffer can hold `capacity` bytes before reallocating.
    ///
    /// [`archive_size()`] gives the exact capacity for a known set of entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { writer: OffsetWriter::with_capacity(capacity), cd_entries: Vec::new(), filenames: HashSet::new() }
    }

    /// Write a new ZIP entry of known size and data.
    ///
    /// The entry is validated against the format limits and the names already written before any byte is appended,
    /// so a rejected entry leaves the writer unchanged.
    pub fn write_entry_whole<E: Into<ZipEntry>>(&mut self, entry: E, data: &[u8]) -> Result<()> {
        let entry = entry.into();
        EntryWholeWriter::from_raw(self, &entry, data).write()
    }

    /// Returns the current byte offset, ie. where the next local file header would start.
    pub fn offset(&self) -> usize {
        self.writer.offset()
    }

    /// Returns the number of entries written so far.
    pub fn len(&self) -> usize {
        self.cd_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cd_entries.is_empty()
    }

    /// Consumes this ZIP writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Writing all central directory headers.
    /// - Writing the end of central directory header.
    pub fn close(mut self) -> Result<Vec<u8>> {
        let cd_offset = self.writer.offset() as u64;
        let cd_offset_u32 = fit_u32(cd_offset)?;

        for record in &self.cd_entries {
            cdr::write(&mut self.writer, record);
        }

        let cd_size = fit_u32(self.writer.offset() as u64 - cd_offset)?;
        let num_entries: u16 =
            self.cd_entries.len().try_into().map_err(|_| ZipError::TooManyEntries(self.cd_entries.len()))?;

        tracing::debug!(cd_offset, cd_size, num_entries, "writing end of central directory record");

        let eocdr = RawEndOfCentralDirectoryRecord::single_disk(num_entries, cd_size, cd_offset_u32);
        eocdr::write(&mut self.writer, &eocdr);

        Ok(self.writer.into_inner())
    }
}

/// Encodes an ordered list of entries into a complete, uncompressed ZIP archive.
///
/// The whole list is validated before anything is written: an oversized entry, a duplicate name or more than 65535
/// entries rejects the encode outright rather than producing a truncated archive. Entry order is preserved in both
/// the local records and the central directory.
#[tracing::instrument(skip_all, fields(entries = entries.len()))]
pub fn encode(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    let size = validate(entries.iter().map(|entry| (entry.filename(), entry.content.len() as u64)))?;
    let capacity = usize::try_from(size).map_err(|_| ZipError::ArchiveTooLarge(size))?;

    let mut writer = ZipFileWriter::with_capacity(capacity);
    for entry in entries {
        EntryWholeWriter::from_raw(&mut writer, &entry.entry, &entry.content).write()?;
    }

    writer.close()
}

/// Calculates the exact size of the archive [`encode()`] would produce for the given names and content sizes.
pub fn archive_size<'a, I: IntoIterator<Item = (&'a str, u64)>>(files: I) -> u64 {
    let (local, central) = files.into_iter().fold((0u64, 0u64), |(local, central), (name, size)| {
        (local + local_record_size(name, size), central + central_record_size(name))
    });

    local + central + (SIGNATURE_LENGTH + EOCDR_LENGTH) as u64
}

fn local_record_size(name: &str, size: u64) -> u64 {
    (SIGNATURE_LENGTH + LFH_LENGTH + name.len()) as u64 + size
}

fn central_record_size(name: &str) -> u64 {
    (SIGNATURE_LENGTH + CDH_LENGTH + name.len()) as u64
}

/// Checks a full list of entries against the ZIP32 limits, returning the archive size it would produce.
pub(crate) fn validate<'a, I: IntoIterator<Item = (&'a str, u64)>>(files: I) -> Result<u64> {
    let mut names = HashSet::new();
    let mut local = 0u64;
    let mut central = 0u64;

    for (name, size) in files {
        check_filename(name)?;
        check_entry_size(name, size)?;
        check_offset(local)?;

        if !names.insert(name) {
            return Err(ZipError::DuplicateFilename(name.to_string()));
        }
        if names.len() > NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::TooManyEntries(names.len()));
        }

        local += local_record_size(name, size);
        central += central_record_size(name);
    }

    check_offset(local)?;
    check_offset(central)?;

    Ok(local + central + (SIGNATURE_LENGTH + EOCDR_LENGTH) as u64)
}

pub(crate) fn check_filename(name: &str) -> Result<()> {
    if name.len() > u16::MAX as usize {
        return Err(ZipError::FileNameTooLarge(name.len()));
    }
    Ok(())
}

pub(crate) fn check_entry_size(name: &str, size: u64) -> Result<()> {
    if size > NON_ZIP64_MAX_SIZE as u64 {
        return Err(ZipError::EntryTooLarge { filename: name.to_string(), size });
    }
    Ok(())
}

pub(crate) fn check_offset(offset: u64) -> Result<()> {
    fit_u32(offset).map(|_| ())
}

fn fit_u32(value: u64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ZipError::ArchiveTooLarge(value))
}
