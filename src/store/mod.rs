// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A catalog of captures persisted as a JSON sidecar.
//!
//! The store is an explicit object: callers open it, pass it to whatever needs it, and call [`CaptureStore::save`]
//! when they want changes persisted. Nothing is written implicitly.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::bundle::{Bundle, BundleReport};
use crate::date::ZipDateTime;
use crate::error::{Result, ZipError};

/// The file name of the catalog sidecar within the store's root.
pub const SIDECAR_NAME: &str = "captures.json";

/// The in-archive name given to a capture's free-form note.
pub const NOTE_ENTRY_NAME: &str = "note.txt";

const CATALOG_VERSION: u32 = 1;

/// A single capture and the files that make it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRecord {
    pub id: String,
    pub captured_at: DateTime<Utc>,
    /// The capture's directory; relative paths are resolved against the store root.
    ///
    /// It must name a directory strictly inside the root.
    pub directory: PathBuf,
    /// File names within `directory`, in the order they should appear in an export.
    ///
    /// Each must be a single path component.
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CaptureRecord {
    /// Constructs a record captured now.
    pub fn new(id: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self { id: id.into(), captured_at: Utc::now(), directory: directory.into(), files: Vec::new(), note: None }
    }

    pub fn captured_at(mut self, captured_at: DateTime<Utc>) -> Self {
        self.captured_at = captured_at;
        self
    }

    pub fn file(mut self, name: impl Into<String>) -> Self {
        self.files.push(name.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Returns the capture time as stored in archive headers (local wall clock).
    pub fn zip_date_time(&self) -> ZipDateTime {
        ZipDateTime::from_chrono(&self.captured_at.with_timezone(&Local))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Catalog {
    #[serde(default)]
    version: u32,
    captures: Vec<CaptureRecord>,
}

/// A catalog of capture records rooted at a directory.
#[derive(Debug)]
pub struct CaptureStore {
    root: PathBuf,
    records: Vec<CaptureRecord>,
}

impl CaptureStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    ///
    /// A missing sidecar yields an empty catalog; a sidecar which cannot be parsed is an error.
    #[tracing::instrument(skip_all, fields(root = ?root.as_ref()))]
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;

        let catalog = match std::fs::read(root.join(SIDECAR_NAME)) {
            Ok(bytes) => serde_json::from_slice::<Catalog>(&bytes).map_err(ZipError::StoreCorrupt)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Catalog::default(),
            Err(err) => return Err(err.into()),
        };

        if catalog.version > CATALOG_VERSION {
            return Err(ZipError::UnsupportedCatalogVersion { found: catalog.version, supported: CATALOG_VERSION });
        }
        let records = catalog.captures;

        tracing::debug!(records = records.len(), "opened capture store");
        Ok(Self { root, records })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sidecar_path(&self) -> PathBuf {
        self.root.join(SIDECAR_NAME)
    }

    /// Persists the catalog.
    ///
    /// The sidecar is written to a temporary file and renamed into place, so a failed save never leaves a truncated
    /// catalog behind.
    #[tracing::instrument(skip_all, fields(records = self.records.len()))]
    pub fn save(&self) -> Result<()> {
        let catalog = Catalog { version: CATALOG_VERSION, captures: self.records.clone() };
        let bytes = serde_json::to_vec_pretty(&catalog).map_err(ZipError::CatalogEncode)?;

        let target = self.sidecar_path();
        let staging = self.root.join(format!("{SIDECAR_NAME}.tmp"));
        let failure = |source| ZipError::CatalogWrite { path: target.clone(), source };

        let mut file = std::fs::File::create(&staging).map_err(failure)?;
        file.write_all(&bytes).map_err(failure)?;
        file.sync_all().map_err(failure)?;
        drop(file);

        std::fs::rename(&staging, &target).map_err(failure)?;
        Ok(())
    }

    /// Adds a record, rejecting ids which are already present.
    ///
    /// The record's directory and file names are checked to stay within the store root.
    pub fn add(&mut self, record: CaptureRecord) -> Result<()> {
        check_record(&self.root, &record)?;

        if self.get(&record.id).is_some() {
            return Err(ZipError::DuplicateCapture(record.id));
        }

        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CaptureRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns every record in insertion order.
    pub fn records(&self) -> &[CaptureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes a record, optionally deleting its directory from disk.
    ///
    /// A directory which is already gone is not an error. A directory which is not strictly inside the store root is
    /// never deleted; the record is kept and an error returned instead.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, id: &str, delete_files: bool) -> Result<CaptureRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| ZipError::UnknownCapture(id.to_string()))?;

        if delete_files {
            let record = &self.records[index];
            if !is_inside_root(&self.root, &record.directory) {
                return Err(ZipError::CapturePathOutsideRoot { id: record.id.clone(), path: record.directory.clone() });
            }

            let directory = self.directory_of(record);
            match std::fs::remove_dir_all(&directory) {
                Ok(()) => tracing::debug!(?directory, "deleted capture directory"),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }

        Ok(self.records.remove(index))
    }

    /// Returns the absolute directory of a record.
    pub fn directory_of(&self, record: &CaptureRecord) -> PathBuf {
        self.root.join(&record.directory)
    }

    /// Builds the bundle for a capture: each of its files plus its note, stamped with the capture time.
    pub fn bundle(&self, id: &str) -> Result<Bundle> {
        let record = self.get(id).ok_or_else(|| ZipError::UnknownCapture(id.to_string()))?;
        check_record(&self.root, record)?;
        let directory = self.directory_of(record);

        let mut bundle = Bundle::with_timestamp(record.zip_date_time());
        for name in &record.files {
            bundle.add_path(name.as_str(), directory.join(name));
        }
        if let Some(note) = &record.note {
            bundle.add_bytes(NOTE_ENTRY_NAME, note.as_bytes().to_vec());
        }

        Ok(bundle)
    }

    /// Exports a capture as a ZIP archive at `dest`.
    pub fn export(&self, id: &str, dest: impl AsRef<Path>) -> Result<BundleReport> {
        self.bundle(id)?.write_to(dest)
    }
}

// Records loaded from a sidecar bypass `add`, so `remove` and `bundle` check again.
fn check_record(root: &Path, record: &CaptureRecord) -> Result<()> {
    let outside = |path: PathBuf| ZipError::CapturePathOutsideRoot { id: record.id.clone(), path };

    if !is_inside_root(root, &record.directory) {
        return Err(outside(record.directory.clone()));
    }
    if let Some(name) = record.files.iter().find(|name| !is_plain_file_name(name)) {
        return Err(outside(record.directory.join(name)));
    }

    Ok(())
}

/// Returns true if `path`, resolved against `root`, names something strictly below it.
///
/// The check is lexical: `..`, absolute paths elsewhere and paths resolving to the root itself are rejected.
fn is_inside_root(root: &Path, path: &Path) -> bool {
    let relative = match path.is_absolute() {
        true => match path.strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => return false,
        },
        false => path,
    };

    let mut depth = 0;
    for component in relative.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }

    depth > 0
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}
