// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Running archive work from within a `tokio` runtime.
//!
//! Encoding is purely computational, so it is moved onto the blocking pool rather than stalling an async worker;
//! persisting the result goes through `tokio::fs`.
//!
//! ### Example
//! ```no_run
//! # use capture_zip::{ArchiveEntry, Bundle};
//! # use capture_zip::error::ZipError;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let archive = capture_zip::tokio::encode(vec![ArchiveEntry::new("a.txt", b"a".to_vec())]).await?;
//!
//! let mut bundle = Bundle::new();
//! bundle.add_bytes("calibration.json", br#"{"fx":100}"#.to_vec());
//! let report = capture_zip::tokio::write_bundle(bundle, "/tmp/capture.zip").await?;
//! #   Ok(())
//! # }
//! ```

use std::path::Path;

use ::tokio::io::AsyncWriteExt;
use ::tokio::task::spawn_blocking;

use crate::bundle::{Bundle, BundleReport};
use crate::entry::ArchiveEntry;
use crate::error::{Result, ZipError};

/// Encodes the entries on the blocking pool.
pub async fn encode(entries: Vec<ArchiveEntry>) -> Result<Vec<u8>> {
    spawn_blocking(move || crate::write::encode(&entries)).await?
}

/// Resolves and encodes a bundle on the blocking pool, then writes the archive to `path`.
pub async fn write_bundle(bundle: Bundle, path: impl AsRef<Path>) -> Result<BundleReport> {
    let report = spawn_blocking(move || bundle.encode()).await??;
    persist(path.as_ref(), &report.archive).await?;
    Ok(report)
}

/// Writes a finished archive to `path`, creating or truncating the file.
pub async fn persist(path: &Path, archive: &[u8]) -> Result<()> {
    let failure = |source| ZipError::WriteFailure { path: path.to_path_buf(), source };

    let mut file = ::tokio::fs::File::create(path).await.map_err(failure)?;
    file.write_all(archive).await.map_err(failure)?;
    file.sync_all().await.map_err(failure)?;

    tracing::debug!(?path, len = archive.len(), "persisted archive");
    Ok(())
}
