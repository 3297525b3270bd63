// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::lfh::RawLocalFileHeader;
use crate::core::{raw, raw_deref};

pub use crate::spec::consts::CDH_SIGNATURE as SIGNATURE;

raw! {
    RawCentralDirectoryRecord {
        version_made_by, u16, write_u16,
        version_needed_to_extract, u16, write_u16,
        general_purpose_bit_flag, u16, write_u16,
        compression_method, u16, write_u16,
        last_mod_file_time, u16, write_u16,
        last_mod_file_date, u16, write_u16,
        crc_32, u32, write_u32,
        compressed_size, u32, write_u32,
        uncompressed_size, u32, write_u32,
        file_name_length, u16, write_u16,
        extra_field_length, u16, write_u16,
        file_comment_length, u16, write_u16,
        disk_number_start, u16, write_u16,
        internal_file_attributes, u16, write_u16,
        external_file_attributes, u32, write_u32,
        relative_offset_of_local_header, u32, write_u32
    }
}

const _: () = assert!(RAW_LENGTH == crate::spec::consts::CDH_LENGTH);

#[derive(Clone, Debug)]
pub struct CentralDirectoryRecord {
    pub raw: RawCentralDirectoryRecord,
    pub file_name: Vec<u8>,
}

raw_deref!(CentralDirectoryRecord, RawCentralDirectoryRecord);

impl CentralDirectoryRecord {
    /// Mirrors a local file header into its central directory counterpart.
    ///
    /// Every shared field is copied verbatim so the two records can never disagree; attributes, disk number and
    /// comment are left zeroed.
    pub fn mirror(lfh: &RawLocalFileHeader, file_name: Vec<u8>, version_made_by: u16, lh_offset: u32) -> Self {
        let raw = RawCentralDirectoryRecord {
            version_made_by,
            version_needed_to_extract: lfh.version_needed_to_extract,
            general_purpose_bit_flag: lfh.general_purpose_flags,
            compression_method: lfh.compression_method,
            last_mod_file_time: lfh.last_mod_file_time,
            last_mod_file_date: lfh.last_mod_file_date,
            crc_32: lfh.crc_32,
            compressed_size: lfh.compressed_size,
            uncompressed_size: lfh.uncompressed_size,
            file_name_length: lfh.file_name_length,
            extra_field_length: lfh.extra_field_length,
            file_comment_length: 0,
            disk_number_start: 0,
            internal_file_attributes: 0,
            external_file_attributes: 0,
            relative_offset_of_local_header: lh_offset,
        };

        Self { raw, file_name }
    }
}

/// Writes a central directory record to the given writer.
///
/// This function does so by:
/// - writing the signature of the central directory record
/// - writing the raw central directory record
/// - writing the file name
#[tracing::instrument(skip_all, fields(offset = writer.offset()))]
pub fn write(writer: &mut OffsetWriter, header: &CentralDirectoryRecord) {
    writer.write_u32(SIGNATURE);

    raw_write(writer, &header.raw);
    writer.write_all(&header.file_name);
}
