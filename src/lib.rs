// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! An uncompressed ZIP archive writer for depth-camera capture bundles.
//!
//! ## Features
//! - Byte-exact "stored" ZIP archives built entirely in memory.
//! - Validation of the classic ZIP limits (65535 entries, 4 GiB per entry) before anything is written.
//! - Capture bundles assembled from files and in-memory buffers, with an explicit report of omitted sources.
//! - An explicit capture catalog persisted as a JSON sidecar.
//! - Optional `tokio` integration for running encodes off the calling thread.
//!
//! [Read more.](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT)
//!
//! ## Example
//! ```
//! # use capture_zip::{encode, ArchiveEntry};
//! # use capture_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let entries = vec![
//!     ArchiveEntry::new("calibration.json", br#"{"fx":100}"#.to_vec()),
//!     ArchiveEntry::new("depth.bin", vec![0u8; 500]),
//! ];
//!
//! let archive = encode(&entries)?;
//! assert_eq!(&archive[0..4], b"PK\x03\x04");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod bundle;
pub(crate) mod core;
pub mod date;
pub mod entry;
pub mod error;
pub mod spec;
pub mod store;
pub mod write;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use crate::bundle::{Bundle, BundleReport, BundleSource, OmittedEntry};
pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::{builder::ZipEntryBuilder, ArchiveEntry, ZipEntry};
pub use crate::spec::crc::crc32;
pub use crate::store::{CaptureRecord, CaptureStore};
pub use crate::write::{encode, ZipFileWriter};
