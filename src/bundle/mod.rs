// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Assembling capture bundles from files and in-memory buffers.
//!
//! A [`Bundle`] maps in-archive names to their sources. Resolution is best-effort: a source which cannot be read is
//! left out of the archive and reported in [`BundleReport::omitted`], since a partial capture is more useful than
//! none.
//!
//! # Example
//! ```no_run
//! # use capture_zip::Bundle;
//! # use capture_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut bundle = Bundle::new();
//! bundle.add_bytes("calibration.json", br#"{"fx":100}"#.to_vec());
//! bundle.add_path("depth.tiff", "/captures/0001/depth.tiff");
//!
//! let report = bundle.write_to("/tmp/capture-0001.zip")?;
//! for omitted in &report.omitted {
//!     eprintln!("left out {}: {}", omitted.name, omitted.reason);
//! }
//! #   Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::date::ZipDateTime;
use crate::entry::builder::ZipEntryBuilder;
use crate::entry::ArchiveEntry;
use crate::error::{Result, ZipError};

/// Where the bytes of a bundle entry come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BundleSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl BundleSource {
    fn load(&self) -> std::io::Result<Vec<u8>> {
        match self {
            BundleSource::Path(path) => std::fs::read(path),
            BundleSource::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

/// An entry which was left out of an archive because its source could not be read.
#[derive(Debug)]
pub struct OmittedEntry {
    pub name: String,
    pub reason: std::io::Error,
}

/// The outcome of encoding a bundle.
#[derive(Debug)]
pub struct BundleReport {
    /// The complete archive.
    pub archive: Vec<u8>,
    /// Names of the entries which made it into the archive, in archive order.
    pub written: Vec<String>,
    /// Entries skipped because their source was unavailable.
    pub omitted: Vec<OmittedEntry>,
}

impl BundleReport {
    /// Returns true if every source was included.
    pub fn is_complete(&self) -> bool {
        self.omitted.is_empty()
    }
}

/// An ordered mapping from in-archive names to their sources.
#[derive(Clone, Debug, Default)]
pub struct Bundle {
    sources: Vec<(String, BundleSource)>,
    timestamp: Option<ZipDateTime>,
}

impl Bundle {
    /// Constructs an empty bundle whose entries will be stamped with the time they are resolved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty bundle whose entries will all carry the given timestamp, typically the capture time.
    pub fn with_timestamp(timestamp: ZipDateTime) -> Self {
        Self { sources: Vec::new(), timestamp: Some(timestamp) }
    }

    /// Constructs a bundle from every regular file directly within `dir`.
    ///
    /// Entries are named after their file names and ordered by name. Subdirectories are not descended into, and
    /// files whose names are not valid UTF-8 are skipped.
    #[tracing::instrument(skip_all, fields(dir = ?dir.as_ref()))]
    pub fn from_directory(dir: impl AsRef<Path>) -> Result<Self> {
        let mut files = Vec::new();

        for dir_entry in std::fs::read_dir(dir.as_ref())? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }

            match dir_entry.file_name().into_string() {
                Ok(name) => files.push((name, dir_entry.path())),
                Err(name) => tracing::warn!(?name, "skipping file with a non UTF-8 name"),
            }
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));

        let mut bundle = Self::new();
        for (name, path) in files {
            bundle.add_path(name, path);
        }

        Ok(bundle)
    }

    /// Returns the timestamp applied to every entry, if one was fixed.
    pub fn timestamp(&self) -> Option<ZipDateTime> {
        self.timestamp
    }

    /// Fixes the timestamp applied to every entry.
    pub fn set_timestamp(&mut self, timestamp: ZipDateTime) -> &mut Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Adds a source under the given name.
    ///
    /// Adding a name which is already present replaces its source but keeps its original position.
    pub fn add(&mut self, name: impl Into<String>, source: BundleSource) -> &mut Self {
        let name = name.into();

        match self.sources.iter().position(|(existing, _)| *existing == name) {
            Some(index) => {
                tracing::debug!(name = %name, "replacing bundle source");
                self.sources[index].1 = source;
            }
            None => self.sources.push((name, source)),
        }

        self
    }

    pub fn add_bytes(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> &mut Self {
        self.add(name, BundleSource::Bytes(bytes))
    }

    pub fn add_path(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> &mut Self {
        self.add(name, BundleSource::Path(path.into()))
    }

    /// Returns the entry names in archive order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Loads every source, skipping (and reporting) those which cannot be read.
    pub fn resolve(&self) -> (Vec<ArchiveEntry>, Vec<OmittedEntry>) {
        let timestamp = self.timestamp.unwrap_or_else(ZipDateTime::now);
        let mut entries = Vec::with_capacity(self.sources.len());
        let mut omitted = Vec::new();

        for (name, source) in &self.sources {
            match source.load() {
                Ok(content) => entries.push(entry(name, timestamp, content)),
                Err(reason) => {
                    tracing::warn!(name = %name, %reason, "omitting unavailable source from bundle");
                    omitted.push(OmittedEntry { name: name.clone(), reason });
                }
            }
        }

        (entries, omitted)
    }

    /// Loads every source, failing on the first which cannot be read.
    pub fn resolve_strict(&self) -> Result<Vec<ArchiveEntry>> {
        let timestamp = self.timestamp.unwrap_or_else(ZipDateTime::now);

        self.sources
            .iter()
            .map(|(name, source)| match source.load() {
                Ok(content) => Ok(entry(name, timestamp, content)),
                Err(source) => Err(ZipError::SourceUnavailable { name: name.clone(), source }),
            })
            .collect()
    }

    /// Resolves and encodes this bundle into an archive held in memory.
    #[tracing::instrument(skip_all, fields(sources = self.sources.len()))]
    pub fn encode(&self) -> Result<BundleReport> {
        let (entries, omitted) = self.resolve();
        let archive = crate::write::encode(&entries)?;
        let written = entries.iter().map(|entry| entry.filename().to_string()).collect();

        Ok(BundleReport { archive, written, omitted })
    }

    /// Resolves and encodes this bundle, then writes the archive to `path`.
    ///
    /// A failing write is reported as [`ZipError::WriteFailure`] and not retried.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<BundleReport> {
        let report = self.encode()?;
        persist(path, &report.archive)?;
        Ok(report)
    }
}

fn entry(name: &str, timestamp: ZipDateTime, content: Vec<u8>) -> ArchiveEntry {
    let entry = ZipEntryBuilder::new(name.to_string()).last_modification_date(timestamp);
    ArchiveEntry::with_entry(entry, content)
}

/// Writes a finished archive to `path`, creating or truncating the file.
///
/// The data is flushed to storage before returning; the file handle is closed when it leaves scope.
#[tracing::instrument(skip_all, fields(path = ?path.as_ref(), len = archive.len()))]
pub fn persist(path: impl AsRef<Path>, archive: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let failure = |source| ZipError::WriteFailure { path: path.to_path_buf(), source };

    let mut file = File::create(path).map_err(failure)?;
    file.write_all(archive).map_err(failure)?;
    file.sync_all().map_err(failure)?;

    Ok(())
}
