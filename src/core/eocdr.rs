// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::raw;

pub use crate::spec::consts::EOCDR_SIGNATURE as SIGNATURE;

raw! {
    RawEndOfCentralDirectoryRecord {
        number_of_this_disk, u16, write_u16,
        number_of_the_disk_with_the_start_of_the_central_directory, u16, write_u16,
        total_number_of_entries_in_the_central_directory_on_this_disk, u16, write_u16,
        total_number_of_entries_in_the_central_directory, u16, write_u16,
        size_of_the_central_directory, u32, write_u32,
        offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number, u32, write_u32,
        zip_file_comment_length, u16, write_u16
    }
}

const _: () = assert!(RAW_LENGTH == crate::spec::consts::EOCDR_LENGTH);

impl RawEndOfCentralDirectoryRecord {
    /// Builds the record for a single-disk archive without a comment.
    pub fn single_disk(entries: u16, cd_size: u32, cd_offset: u32) -> Self {
        Self {
            number_of_this_disk: 0,
            number_of_the_disk_with_the_start_of_the_central_directory: 0,
            total_number_of_entries_in_the_central_directory_on_this_disk: entries,
            total_number_of_entries_in_the_central_directory: entries,
            size_of_the_central_directory: cd_size,
            offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number: cd_offset,
            zip_file_comment_length: 0,
        }
    }
}

/// Writes the end of central directory record to the given writer.
///
/// This function does so by:
/// - writing the signature of the end of central directory record
/// - writing the raw end of central directory record
#[tracing::instrument(skip_all, fields(offset = writer.offset()))]
pub fn write(writer: &mut OffsetWriter, raw: &RawEndOfCentralDirectoryRecord) {
    writer.write_u32(SIGNATURE);

    raw_write(writer, raw);
}
