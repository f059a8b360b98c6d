//! test data shared between the fontia crates.
//!
//! The fonts here are assembled by hand; every byte is annotated. They carry
//! real table checksums, but only the tables the readers understand.

pub mod bebuffer;

/// A TrueType font with `name` and `post` tables, with the names of Alegreya Black.
#[rustfmt::skip]
pub static ALEGREYA_NAMES: &[u8] = &[
    // table directory
    0x00, 0x01, 0x00, 0x00, // sfnt version 1.0
    0x00, 0x02, // numTables 2
    0x00, 0x20, 0x00, 0x01, 0x00, 0x00, // searchRange 32, entrySelector 1, rangeShift 0
    0x6E, 0x61, 0x6D, 0x65, // 'name'
    0xEA, 0x24, 0xDA, 0x54, // checksum
    0x00, 0x00, 0x00, 0x2C, // offset 44
    0x00, 0x00, 0x00, 0xDA, // length 218
    0x70, 0x6F, 0x73, 0x74, // 'post'
    0xFF, 0xB8, 0x00, 0x32, // checksum
    0x00, 0x00, 0x01, 0x08, // offset 264
    0x00, 0x00, 0x00, 0x20, // length 32
    // 'name' table at 44
    0x00, 0x00, // version 0
    0x00, 0x08, // count 8
    0x00, 0x66, // storageOffset 102
    0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x08, 0x00, 0x00, // Macintosh (1, 0, 0x0000) name id 1: 8 bytes at 0
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x01, 0x00, 0x10, 0x00, 0x08, // Windows (3, 1, 0x0409) name id 1: 16 bytes at 8
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x02, 0x00, 0x0A, 0x00, 0x18, // Windows (3, 1, 0x0409) name id 2: 10 bytes at 24
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x04, 0x00, 0x1C, 0x00, 0x22, // Windows (3, 1, 0x0409) name id 4: 28 bytes at 34
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x05, 0x00, 0x1A, 0x00, 0x3E, // Windows (3, 1, 0x0409) name id 5: 26 bytes at 62
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x06, 0x00, 0x1C, 0x00, 0x58, // Windows (3, 1, 0x0409) name id 6: 28 bytes at 88
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x10, 0x00, 0x10, 0x00, 0x08, // Windows (3, 1, 0x0409) name id 16: 16 bytes at 8
    0x00, 0x03, 0x00, 0x01, 0x04, 0x09, 0x00, 0x11, 0x00, 0x0A, 0x00, 0x18, // Windows (3, 1, 0x0409) name id 17: 10 bytes at 24
    0x41, 0x6C, 0x65, 0x67, 0x72, 0x65, 0x79, 0x61, // Mac Roman "Alegreya"
    0x00, 0x41, 0x00, 0x6C, 0x00, 0x65, 0x00, 0x67, 0x00, 0x72, 0x00, 0x65, 0x00, 0x79, 0x00, 0x61, // UTF-16BE "Alegreya"
    0x00, 0x42, 0x00, 0x6C, 0x00, 0x61, 0x00, 0x63, 0x00, 0x6B, // UTF-16BE "Black"
    0x00, 0x41, 0x00, 0x6C, 0x00, 0x65, 0x00, 0x67, 0x00, 0x72, 0x00, 0x65, 0x00, 0x79, 0x00, 0x61, // UTF-16BE "Alegreya Black"
    0x00, 0x20, 0x00, 0x42, 0x00, 0x6C, 0x00, 0x61, 0x00, 0x63, 0x00, 0x6B, // ...
    0x00, 0x56, 0x00, 0x65, 0x00, 0x72, 0x00, 0x73, 0x00, 0x69, 0x00, 0x6F, 0x00, 0x6E, 0x00, 0x20, // UTF-16BE "Version 2.003"
    0x00, 0x32, 0x00, 0x2E, 0x00, 0x30, 0x00, 0x30, 0x00, 0x33, // ...
    0x00, 0x41, 0x00, 0x6C, 0x00, 0x65, 0x00, 0x67, 0x00, 0x72, 0x00, 0x65, 0x00, 0x79, 0x00, 0x61, // UTF-16BE "Alegreya-Black"
    0x00, 0x2D, 0x00, 0x42, 0x00, 0x6C, 0x00, 0x61, 0x00, 0x63, 0x00, 0x6B, // ...
    0x00, 0x00, // padding
    // 'post' table at 264
    0x00, 0x03, 0x00, 0x00, // version 3.0
    0x00, 0x00, 0x00, 0x00, // italicAngle 0
    0xFF, 0xB5, 0x00, 0x32, // underlinePosition -75, underlineThickness 50
    0x00, 0x00, 0x00, 0x00, // isFixedPitch 0
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // memory usage hints
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // memory usage hints
];

/// A TrueType font with a `post` table and nothing else.
#[rustfmt::skip]
pub static NO_NAME_TABLE: &[u8] = &[
    // table directory
    0x00, 0x01, 0x00, 0x00, // sfnt version 1.0
    0x00, 0x01, // numTables 1
    0x00, 0x10, 0x00, 0x00, 0x00, 0x00, // searchRange 16, entrySelector 0, rangeShift 0
    0x70, 0x6F, 0x73, 0x74, // 'post'
    0xFF, 0xB8, 0x00, 0x32, // checksum
    0x00, 0x00, 0x00, 0x1C, // offset 28
    0x00, 0x00, 0x00, 0x20, // length 32
    // 'post' table at 28
    0x00, 0x03, 0x00, 0x00, // version 3.0
    0x00, 0x00, 0x00, 0x00, // italicAngle 0
    0xFF, 0xB5, 0x00, 0x32, // underlinePosition -75, underlineThickness 50
    0x00, 0x00, 0x00, 0x00, // isFixedPitch 0
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // memory usage hints
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // memory usage hints
];

