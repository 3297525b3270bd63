// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

#![allow(dead_code)]

use std::io::{Cursor, Read};
use std::path::PathBuf;

use capture_zip::{ArchiveEntry, ZipDateTime, ZipEntryBuilder};

/// One entry as seen by an independent reader.
#[derive(Debug, PartialEq, Eq)]
pub struct ReadEntry {
    pub name: String,
    pub crc32: u32,
    pub data: Vec<u8>,
}

/// Reads every entry of an archive back through the `zip` crate, in central directory order.
pub fn read_archive(bytes: &[u8]) -> Vec<ReadEntry> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("archive should be readable");
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).unwrap();
        assert_eq!(file.compressed_size(), file.size(), "entries must be stored");

        let mut data = Vec::new();
        file.read_to_end(&mut data).unwrap();
        entries.push(ReadEntry { name: file.name().to_string(), crc32: file.crc32(), data });
    }

    entries
}

/// Returns an empty scratch directory unique to the calling test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("capture_zip").join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// 2024-03-15 14:30:45.
pub fn capture_time() -> ZipDateTime {
    ZipDateTime::from_raw(22639, 29654)
}

pub fn entry(name: &str, content: &[u8]) -> ArchiveEntry {
    let opts = ZipEntryBuilder::new(name.to_string()).last_modification_date(capture_time());
    ArchiveEntry::with_entry(opts, content.to_vec())
}

/// A small capture bundle: calibration JSON plus a 500 byte depth payload.
pub fn capture_entries() -> Vec<ArchiveEntry> {
    let depth: Vec<u8> = (0..500u32).map(|i| (i % 251) as u8).collect();
    vec![entry("calibration.json", br#"{"fx":100}"#), entry("depth.tiff", &depth)]
}
