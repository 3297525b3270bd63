// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::ZipError;
use crate::spec::crc::crc32;
use crate::tests::{u16_at, u32_at};
use crate::write::{archive_size, check_entry_size, encode, validate, ZipFileWriter};
use crate::{ArchiveEntry, ZipDateTime, ZipEntryBuilder};


fn stamp() -> ZipDateTime {
    ZipDateTime::from_raw(22639, 29654)
}

fn stamped(name: &str, content: &[u8]) -> ArchiveEntry {
    let entry = ZipEntryBuilder::new(name.to_string()).last_modification_date(stamp());
    ArchiveEntry::with_entry(entry, content.to_vec())
}

/// Returns (entry count, central directory size, central directory offset) from the trailing EOCDR.
fn eocdr_fields(archive: &[u8]) -> (u16, u32, u32) {
    let eocdr = archive.len() - 22;
    assert_eq!(u32_at(archive, eocdr), 0x06054b50);
    assert_eq!(u16_at(archive, eocdr + 4), u16_at(archive, eocdr + 6));
    assert_eq!(u16_at(archive, eocdr + 8), u16_at(archive, eocdr + 10));
    (u16_at(archive, eocdr + 10), u32_at(archive, eocdr + 12), u32_at(archive, eocdr + 16))
}

#[test]
fn empty() {
    let archive = ZipFileWriter::new().close().expect("failed to close writer");

    let mut expected = b"PK\x05\x06".to_vec();
    expected.extend_from_slice(&[0; 18]);
    assert_eq!(archive, expected);
    assert_eq!(encode(&[]).unwrap(), expected);
}

#[test]
fn single_entry_layout() {
    let data = b"hello depth";
    let archive = encode(&[stamped("a.txt", data)]).expect("failed to encode");

    let mut expected = Vec::new();
    // local file header
    expected.extend_from_slice(b"PK\x03\x04");
    expected.extend_from_slice(&20u16.to_le_bytes());
    expected.extend_from_slice(&0u16.to_le_bytes());
    expected.extend_from_slice(&0u16.to_le_bytes());
    expected.extend_from_slice(&29654u16.to_le_bytes());
    expected.extend_from_slice(&22639u16.to_le_bytes());
    expected.extend_from_slice(&crc32(data).to_le_bytes());
    expected.extend_from_slice(&(data.len() as u32).to_le_bytes());
    expected.extend_from_slice(&(data.len() as u32).to_le_bytes());
    expected.extend_from_slice(&5u16.to_le_bytes());
    expected.extend_from_slice(&0u16.to_le_bytes());
    expected.extend_from_slice(b"a.txt");
    expected.extend_from_slice(data);

    let cd_offset = expected.len() as u32;

    // central directory record
    expected.extend_from_slice(b"PK\x01\x02");
    expected.extend_from_slice(&20u16.to_le_bytes());
    expected.extend_from_slice(&20u16.to_le_bytes());
    expected.extend_from_slice(&0u16.to_le_bytes());
    expected.extend_from_slice(&0u16.to_le_bytes());
    expected.extend_from_slice(&29654u16.to_le_bytes());
    expected.extend_from_slice(&22639u16.to_le_bytes());
    expected.extend_from_slice(&crc32(data).to_le_bytes());
    expected.extend_from_slice(&(data.len() as u32).to_le_bytes());
    expected.extend_from_slice(&(data.len() as u32).to_le_bytes());
    expected.extend_from_slice(&5u16.to_le_bytes());
    expected.extend_from_slice(&[0; 8]);
    expected.extend_from_slice(&0u32.to_le_bytes());
    expected.extend_from_slice(&0u32.to_le_bytes());
    expected.extend_from_slice(b"a.txt");

    let cd_size = expected.len() as u32 - cd_offset;

    // end of central directory record
    expected.extend_from_slice(b"PK\x05\x06");
    expected.extend_from_slice(&[0; 4]);
    expected.extend_from_slice(&1u16.to_le_bytes());
    expected.extend_from_slice(&1u16.to_le_bytes());
    expected.extend_from_slice(&cd_size.to_le_bytes());
    expected.extend_from_slice(&cd_offset.to_le_bytes());
    expected.extend_from_slice(&0u16.to_le_bytes());

    assert_eq!(archive, expected);
}

#[test]
fn central_directory_fields_match_written_bytes() {
    let entries = [stamped("calibration.json", br#"{"fx":100}"#), stamped("depth.tiff", &[7; 500]), stamped("empty", &[])];
    let archive = encode(&entries).unwrap();

    let (count, cd_size, cd_offset) = eocdr_fields(&archive);
    assert_eq!(count, 3);
    assert_eq!(cd_offset as usize + cd_size as usize, archive.len() - 22);

    let locals: usize = entries.iter().map(|e| 30 + e.filename().len() + e.content().len()).sum();
    assert_eq!(cd_offset as usize, locals);

    let mut cursor = cd_offset as usize;
    let mut expected_offset = 0u32;
    for entry in &entries {
        assert_eq!(u32_at(&archive, cursor), 0x02014b50);
        assert_eq!(u32_at(&archive, cursor + 16), crc32(entry.content()));
        assert_eq!(u32_at(&archive, cursor + 42), expected_offset);

        let lfh = expected_offset as usize;
        assert_eq!(u32_at(&archive, lfh), 0x04034b50);
        assert_eq!(&archive[lfh + 30..lfh + 30 + entry.filename().len()], entry.filename().as_bytes());

        expected_offset += (30 + entry.filename().len() + entry.content().len()) as u32;
        cursor += 46 + entry.filename().len();
    }
    assert_eq!(cursor, archive.len() - 22);
}

#[test]
fn entry_order_is_preserved() {
    let archive = encode(&[stamped("z", b"1"), stamped("a", b"2"), stamped("m", b"3")]).unwrap();
    let (_, _, cd_offset) = eocdr_fields(&archive);

    let mut names = Vec::new();
    let mut cursor = cd_offset as usize;
    for _ in 0..3 {
        let len = u16_at(&archive, cursor + 28) as usize;
        names.push(archive[cursor + 46..cursor + 46 + len].to_vec());
        cursor += 46 + len;
    }

    assert_eq!(names, vec![b"z".to_vec(), b"a".to_vec(), b"m".to_vec()]);
}

#[test]
fn deterministic() {
    let entries = [stamped("calibration.json", br#"{"fx":100}"#), stamped("depth.tiff", &[1; 500])];
    assert_eq!(encode(&entries).unwrap(), encode(&entries).unwrap());
}

#[test]
fn archive_size_is_exact() {
    let entries = [stamped("calibration.json", br#"{"fx":100}"#), stamped("depth.tiff", &[1; 500])];
    let archive = encode(&entries).unwrap();

    let sizes = entries.iter().map(|e| (e.filename(), e.content().len() as u64));
    assert_eq!(archive_size(sizes) as usize, archive.len());
    assert_eq!(archive_size([]), 22);
}

#[test]
fn unicode_filename_sets_flag() {
    let archive = encode(&[stamped("tiefe-größe.bin", b"x"), stamped("plain.bin", b"y")]).unwrap();
    let (_, _, cd_offset) = eocdr_fields(&archive);

    assert_eq!(u16_at(&archive, 6), 0x800);
    assert_eq!(u16_at(&archive, cd_offset as usize + 8), 0x800);

    let second_lfh = 30 + "tiefe-größe.bin".len() + 1;
    assert_eq!(u16_at(&archive, second_lfh + 6), 0);
}

#[test]
fn duplicate_filename_rejected() {
    let err = encode(&[stamped("depth.bin", b"1"), stamped("depth.bin", b"2")]).unwrap_err();
    assert!(matches!(err, ZipError::DuplicateFilename(name) if name == "depth.bin"));

    let mut writer = ZipFileWriter::new();
    writer.write_entry_whole(ZipEntryBuilder::new("depth.bin".to_string()), b"1").unwrap();
    let offset = writer.offset();

    let err = writer.write_entry_whole(ZipEntryBuilder::new("depth.bin".to_string()), b"2").unwrap_err();
    assert!(matches!(err, ZipError::DuplicateFilename(_)));
    assert_eq!(writer.offset(), offset);
    assert_eq!(writer.len(), 1);
}

#[test]
fn oversized_entry_rejected() {
    assert!(check_entry_size("depth.bin", u32::MAX as u64).is_ok());

    let err = check_entry_size("depth.bin", u32::MAX as u64 + 1).unwrap_err();
    assert!(err.is_format_limit());
    assert!(matches!(err, ZipError::EntryTooLarge { size, .. } if size == u32::MAX as u64 + 1));

    let err = validate([("small", 10), ("huge", 5 * 1024 * 1024 * 1024)]).unwrap_err();
    assert!(matches!(err, ZipError::EntryTooLarge { filename, .. } if filename == "huge"));
}

#[test]
fn archive_offset_limit() {
    // Two entries which fit individually but push the second local header past 4 GiB.
    let err = validate([("a", u32::MAX as u64), ("b", 1)]).unwrap_err();
    assert!(matches!(err, ZipError::ArchiveTooLarge(_)));
}

#[test]
fn filename_too_long_rejected() {
    let name = "n".repeat(u16::MAX as usize + 1);
    let err = encode(&[stamped(&name, b"")]).unwrap_err();
    assert!(matches!(err, ZipError::FileNameTooLarge(len) if len == u16::MAX as usize + 1));
}

#[test]
fn entry_count_limit() {
    let names: Vec<String> = (0..=u16::MAX as usize).map(|i| format!("{i}")).collect();

    let err = validate(names.iter().map(|name| (name.as_str(), 0))).unwrap_err();
    assert!(matches!(err, ZipError::TooManyEntries(65536)));

    let mut writer = ZipFileWriter::new();
    for name in &names[..u16::MAX as usize] {
        writer.write_entry_whole(ZipEntryBuilder::new(name.clone()), &[]).unwrap();
    }

    let err = writer.write_entry_whole(ZipEntryBuilder::new(names[u16::MAX as usize].clone()), &[]).unwrap_err();
    assert!(matches!(err, ZipError::TooManyEntries(65536)));

    let archive = writer.close().unwrap();
    let (count, _, _) = eocdr_fields(&archive);
    assert_eq!(count, u16::MAX);
}
