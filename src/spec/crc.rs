// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The CRC-32 checksum stored alongside every ZIP entry.
//!
//! Reflected polynomial `0xEDB88320`, initial register `0xFFFFFFFF` and a final XOR of `0xFFFFFFFF`; the same
//! checksum PNG and gzip use.

use crc32fast::Hasher;

/// Computes the CRC-32 of the given bytes.
///
/// ```
/// assert_eq!(capture_zip::crc32(b""), 0);
/// assert_eq!(capture_zip::crc32(b"123456789"), 0xCBF43926);
/// ```
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
