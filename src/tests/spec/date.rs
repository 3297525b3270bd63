// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use chrono::{NaiveDate, TimeZone, Utc};

use crate::{ZipDateTime, ZipDateTimeBuilder};

#[test]
fn date_conversion_test_chrono() {
    let original_dt = Utc.timestamp_opt(1666544102, 0).unwrap();
    let zip_dt = ZipDateTime::from_chrono(&original_dt);
    let result_dt = zip_dt.as_chrono().single().expect("expected single unique result");
    assert_eq!(result_dt, original_dt);
}

#[test]
fn date_conversion_test() {
    let year = 2000;
    let month = 9;
    let day = 8;
    let hour = 7;
    let minute = 5;
    let second = 4;

    let mut builder = ZipDateTimeBuilder::new();

    builder = builder.year(year);
    builder = builder.month(month);
    builder = builder.day(day);
    builder = builder.hour(hour);
    builder = builder.minute(minute);
    builder = builder.second(second);

    let built = builder.build();

    assert_eq!(year, built.year());
    assert_eq!(month, built.month());
    assert_eq!(day, built.day());
    assert_eq!(hour, built.hour());
    assert_eq!(minute, built.minute());
    assert_eq!(second, built.second());
}

#[test]
fn packs_capture_timestamp() {
    let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 45).unwrap();
    let packed = ZipDateTime::from_chrono(&dt);

    assert_eq!(packed.date() >> 9, 44);
    assert_eq!((packed.date() >> 5) & 0xF, 3);
    assert_eq!(packed.date() & 0x1F, 15);
    assert_eq!(packed.time() >> 11, 14);
    assert_eq!((packed.time() >> 5) & 0x3F, 30);
    assert_eq!(packed.time() & 0x1F, 22);

    assert_eq!(packed.date(), 22639);
    assert_eq!(packed.time(), 29654);
}

#[test]
fn odd_seconds_truncate() {
    let built = ZipDateTimeBuilder::new().year(2024).month(1).day(1).second(45).build();
    assert_eq!(built.second(), 44);
}

#[test]
fn naive_matches_builder() {
    let naive = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap().and_hms_opt(23, 59, 58).unwrap();
    let expected = ZipDateTimeBuilder::new().year(2019).month(12).day(31).hour(23).minute(59).second(58).build();

    assert_eq!(ZipDateTime::from_naive(&naive), expected);
}

#[test]
fn out_of_range_components_clamp() {
    let early = ZipDateTimeBuilder::new().year(1970).month(0).day(0).build();
    assert_eq!(early.year(), 1980);
    assert_eq!(early.month(), 1);
    assert_eq!(early.day(), 1);

    let late = ZipDateTimeBuilder::new().year(2200).month(13).day(40).hour(25).minute(75).second(61).build();
    assert_eq!(late.year(), 2107);
    assert_eq!(late.month(), 12);
    assert_eq!(late.day(), 31);
    assert_eq!(late.hour(), 23);
    assert_eq!(late.minute(), 59);
    assert_eq!(late.second(), 58);
}

#[test]
fn setters_overwrite() {
    let built = ZipDateTimeBuilder::new().year(2100).year(1990).month(12).month(2).build();
    assert_eq!(built.year(), 1990);
    assert_eq!(built.month(), 2);
}

#[test]
fn raw_fields_round_trip() {
    let packed = ZipDateTime::from_raw(22639, 29654);
    assert_eq!((packed.year(), packed.month(), packed.day()), (2024, 3, 15));
    assert_eq!((packed.hour(), packed.minute(), packed.second()), (14, 30, 44));
}
