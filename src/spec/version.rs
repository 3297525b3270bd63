// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::consts::VERSION_NEEDED;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
pub fn as_needed_to_extract() -> u16 {
    VERSION_NEEDED
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
//
// Upper byte 0 (MS-DOS host) so readers ignore the zeroed external attributes rather than applying them as a
// Unix mode of 000.
pub fn as_made_by() -> u16 {
    VERSION_NEEDED
}
