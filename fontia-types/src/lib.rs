//! Common [scalar data types][data types] used when reading font files
//!
//! [data types]: https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod name_id;
mod platform_id;
mod raw;
mod tag;

pub use name_id::NameId;
pub use platform_id::PlatformId;
pub use raw::Scalar;
pub use tag::{InvalidTag, Tag};

/// The SFNT version for fonts containing TrueType outlines.
pub const TT_SFNT_VERSION: u32 = 0x00010000;
/// The SFNT version for fonts containing CFF outlines ('OTTO').
pub const CFF_SFNT_VERSION: u32 = 0x4F54544F;
