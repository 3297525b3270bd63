// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use std::path::PathBuf;

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("an archive may hold at most 65535 entries, attempted to write {0}")]
    TooManyEntries(usize),
    #[error("entry '{filename}' is {size} bytes, exceeding the 4 GiB entry limit")]
    EntryTooLarge { filename: String, size: u64 },
    #[error("filename length of {0} bytes exceeds the 65535 byte limit")]
    FileNameTooLarge(usize),
    #[error("archive offset {0} exceeds the 4 GiB limit of the ZIP32 layout")]
    ArchiveTooLarge(u64),
    #[error("an entry named '{0}' was already written to this archive")]
    DuplicateFilename(String),

    #[error("source for entry '{name}' is unavailable: {source}")]
    SourceUnavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write archive to {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("an upstream I/O operation returned an error: {0}")]
    UpstreamIo(#[from] std::io::Error),

    #[error("capture catalog is corrupt: {0}")]
    StoreCorrupt(#[source] serde_json::Error),
    #[error("capture catalog could not be serialised: {0}")]
    CatalogEncode(#[source] serde_json::Error),
    #[error("failed to write capture catalog to {path:?}: {source}")]
    CatalogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("capture catalog version {found} is newer than the supported version {supported}")]
    UnsupportedCatalogVersion { found: u32, supported: u32 },
    #[error("capture '{id}' refers to {path:?}, which is not inside the store root")]
    CapturePathOutsideRoot { id: String, path: PathBuf },
    #[error("no capture with id '{0}' exists in the catalog")]
    UnknownCapture(String),
    #[error("a capture with id '{0}' already exists in the catalog")]
    DuplicateCapture(String),

    #[cfg(feature = "tokio")]
    #[error("a background archive task failed: {0}")]
    TaskJoin(#[from] ::tokio::task::JoinError),
}

impl ZipError {
    /// Returns true if this error stems from one of the classic ZIP format ceilings.
    pub fn is_format_limit(&self) -> bool {
        matches!(
            self,
            ZipError::TooManyEntries(_)
                | ZipError::EntryTooLarge { .. }
                | ZipError::FileNameTooLarge(_)
                | ZipError::ArchiveTooLarge(_)
        )
    }
}
