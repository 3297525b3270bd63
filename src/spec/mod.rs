// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Constants and small encoders taken straight from the ZIP application note.

pub(crate) mod consts;
pub mod crc;
pub(crate) mod header;
pub(crate) mod version;

pub use consts::{NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE};
