// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Fixed-layout ZIP records.
//!
//! Each record declares its raw fields once through [`raw!`], which generates the struct, its serialised length and
//! a writer; the variable-length tail (names, comments) is written by the record module itself.

pub mod cdr;
pub mod eocdr;
pub mod lfh;

macro_rules! raw {
    ($name:ident { $($field:ident, $type:ty, $write:ident),* }) => {
        use crate::write::io::offset::OffsetWriter;

        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field : $type),*
        }

        /// The serialised length of the raw header, excluding its signature.
        pub const RAW_LENGTH: usize = 0 $(+ std::mem::size_of::<$type>())*;

        /// Writes the raw underlying header to the given writer.
        pub fn raw_write(writer: &mut OffsetWriter, raw: &$name) {
            $(writer.$write(raw.$field);)*
        }
    }
}

macro_rules! raw_deref {
    ($from:ident, $to:ident) => {
        use std::ops::{Deref, DerefMut};

        impl Deref for $from {
            type Target = $to;

            fn deref(&self) -> &Self::Target {
                &self.raw
            }
        }

        impl DerefMut for $from {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.raw
            }
        }
    };
}

pub(crate) use raw;
pub(crate) use raw_deref;
