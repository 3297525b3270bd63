// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::cdr::CentralDirectoryRecord;
use crate::core::lfh::{self, LocalFileHeader, RawLocalFileHeader};
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::spec::consts::NON_ZIP64_MAX_NUM_FILES;
use crate::spec::crc::crc32;
use crate::spec::header::GeneralPurposeFlag;
use crate::write::{check_entry_size, check_filename, check_offset, ZipFileWriter};

// Compression method "stored".
const STORED: u16 = 0;

pub struct EntryWholeWriter<'b, 'c> {
    writer: &'b mut ZipFileWriter,
    entry: &'c ZipEntry,
    data: &'c [u8],
}

impl<'b, 'c> EntryWholeWriter<'b, 'c> {
    pub fn from_raw(writer: &'b mut ZipFileWriter, entry: &'c ZipEntry, data: &'c [u8]) -> Self {
        Self { writer, entry, data }
    }

    pub fn write(mut self) -> Result<()> {
        let filename = self.entry.filename();
        let lh_offset = self.writer.writer.offset() as u64;

        check_filename(filename)?;
        check_entry_size(filename, self.data.len() as u64)?;
        check_offset(lh_offset)?;

        if self.writer.filenames.contains(filename) {
            return Err(ZipError::DuplicateFilename(filename.to_string()));
        }
        if self.writer.cd_entries.len() >= NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::TooManyEntries(self.writer.cd_entries.len() + 1));
        }

        let date = self.entry.last_modification_date();
        let raw = RawLocalFileHeader {
            version_needed_to_extract: crate::spec::version::as_needed_to_extract(),
            general_purpose_flags: GeneralPurposeFlag::for_filename(filename).into(),
            compression_method: STORED,
            last_mod_file_time: date.time(),
            last_mod_file_date: date.date(),
            crc_32: crc32(self.data),
            compressed_size: self.data.len() as u32,
            uncompressed_size: self.data.len() as u32,
            file_name_length: filename.len() as u16,
            extra_field_length: 0,
        };

        tracing::debug!(filename, lh_offset, size = self.data.len(), crc = raw.crc_32, "writing entry");

        let header = LocalFileHeader { raw, file_name: filename.as_bytes().to_vec() };
        lfh::write(&mut self.writer.writer, &header);
        self.writer.writer.write_all(self.data);

        let record = CentralDirectoryRecord::mirror(
            &raw,
            header.file_name,
            crate::spec::version::as_made_by(),
            lh_offset as u32,
        );
        self.writer.cd_entries.push(record);
        self.writer.filenames.insert(filename.to_string());

        Ok(())
    }
}
