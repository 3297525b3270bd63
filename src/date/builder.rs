// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::ZipDateTime;

/// The earliest year representable by the MS-DOS date format.
pub const MIN_YEAR: i32 = 1980;

/// The latest year representable by the MS-DOS date format (seven bits of offset from 1980).
pub const MAX_YEAR: i32 = 2107;

/// A builder for [`ZipDateTime`].
///
/// Each setter clamps its component into the range the packed field can hold, so a builder never produces a value
/// whose fields bleed into one another.
pub struct ZipDateTimeBuilder(pub(crate) ZipDateTime);

impl From<ZipDateTime> for ZipDateTimeBuilder {
    fn from(date: ZipDateTime) -> Self {
        Self(date)
    }
}

impl Default for ZipDateTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipDateTimeBuilder {
    /// Constructs a new builder with both packed fields zeroed.
    pub fn new() -> Self {
        Self(ZipDateTime { date: 0, time: 0 })
    }

    /// Sets the date and time's year.
    ///
    /// Years before 1980 clamp to 1980 and years after 2107 clamp to 2107.
    pub fn year(mut self, year: i32) -> Self {
        let clamped = year.clamp(MIN_YEAR, MAX_YEAR);
        if clamped != year {
            tracing::warn!(year, clamped, "year is outside the MS-DOS date range");
        }

        let offset = (clamped - MIN_YEAR) as u16;
        self.0.date = (self.0.date & !0xFE00) | ((offset << 9) & 0xFE00);
        self
    }

    /// Sets the date and time's month.
    pub fn month(mut self, month: u32) -> Self {
        let month = month.clamp(1, 12) as u16;
        self.0.date = (self.0.date & !0x1E0) | ((month << 5) & 0x1E0);
        self
    }

    /// Sets the date and time's day.
    pub fn day(mut self, day: u32) -> Self {
        let day = day.clamp(1, 31) as u16;
        self.0.date = (self.0.date & !0x1F) | (day & 0x1F);
        self
    }

    /// Sets the date and time's hour.
    pub fn hour(mut self, hour: u32) -> Self {
        let hour = hour.min(23) as u16;
        self.0.time = (self.0.time & !0xF800) | ((hour << 11) & 0xF800);
        self
    }

    /// Sets the date and time's minute.
    pub fn minute(mut self, minute: u32) -> Self {
        let minute = minute.min(59) as u16;
        self.0.time = (self.0.time & !0x7E0) | ((minute << 5) & 0x7E0);
        self
    }

    /// Sets the date and time's second.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds, odd seconds are truncated.
    pub fn second(mut self, second: u32) -> Self {
        let second = (second.min(59) >> 1) as u16;
        self.0.time = (self.0.time & !0x1F) | (second & 0x1F);
        self
    }

    /// Consumes this builder and returns a final [`ZipDateTime`].
    ///
    /// This is equivalent to:
    /// ```
    /// # use capture_zip::{ZipDateTime, ZipDateTimeBuilder};
    /// #
    /// # let builder = ZipDateTimeBuilder::new().year(2024).month(3).day(2);
    /// let date: ZipDateTime = builder.into();
    /// ```
    pub fn build(self) -> ZipDateTime {
        self.into()
    }
}
