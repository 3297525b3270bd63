// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#444
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneralPurposeFlag {
    pub filename_unicode: bool,
}

impl GeneralPurposeFlag {
    /// Derives the flags for an entry from its filename.
    ///
    /// Bit 11 is only set for names which contain non-ASCII characters; pure ASCII names keep a zeroed flag field.
    pub fn for_filename(filename: &str) -> Self {
        Self { filename_unicode: !filename.is_ascii() }
    }
}

impl From<GeneralPurposeFlag> for u16 {
    fn from(flags: GeneralPurposeFlag) -> u16 {
        match flags.filename_unicode {
            false => 0x0,
            true => 0x800,
        }
    }
}
