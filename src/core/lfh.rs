// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::core::{raw, raw_deref};

pub use crate::spec::consts::LFH_SIGNATURE as SIGNATURE;

raw! {
    RawLocalFileHeader {
        version_needed_to_extract, u16, write_u16,
        general_purpose_flags, u16, write_u16,
        compression_method, u16, write_u16,
        last_mod_file_time, u16, write_u16,
        last_mod_file_date, u16, write_u16,
        crc_32, u32, write_u32,
        compressed_size, u32, write_u32,
        uncompressed_size, u32, write_u32,
        file_name_length, u16, write_u16,
        extra_field_length, u16, write_u16
    }
}

const _: () = assert!(RAW_LENGTH == crate::spec::consts::LFH_LENGTH);

#[derive(Clone, Debug)]
pub struct LocalFileHeader {
    pub raw: RawLocalFileHeader,
    pub file_name: Vec<u8>,
}

raw_deref!(LocalFileHeader, RawLocalFileHeader);

/// Writes a local file header to the given writer.
///
/// This function does so by:
/// - writing the signature of the local file header
/// - writing the raw local file header
/// - writing the file name
#[tracing::instrument(skip_all, fields(offset = writer.offset()))]
pub fn write(writer: &mut OffsetWriter, header: &LocalFileHeader) {
    writer.write_u32(SIGNATURE);

    raw_write(writer, &header.raw);
    writer.write_all(&header.file_name);
}
