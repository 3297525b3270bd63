// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

/// The maximum number of files that can be stored in a non-ZIP64 archive.
pub const NON_ZIP64_MAX_NUM_FILES: u16 = u16::MAX;

/// The maximum size (and offset) that can be expressed in a non-ZIP64 archive.
pub const NON_ZIP64_MAX_SIZE: u32 = u32::MAX;

// Stored entries never need more than version 2.0 to extract.
pub const VERSION_NEEDED: u16 = 20;
