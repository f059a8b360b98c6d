//! Load OpenType fonts and read the names they carry.
//!
//! `fontia` sits above the low level parsing in
//! [`fontia-read`](fontia_read): it reads a font file, finds its naming
//! table, and copies the well-known strings (family name, version, license
//! and so on) into a plain [`Font`] value.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> Result<(), fontia::FontError> {
//! let font = fontia::Font::load("Alegreya-Black.ttf").await?;
//! println!("{} ({})", font.family_name(), font.version());
//! # Ok(())
//! # }
//! ```
//!
//! [`Font::load`] does not depend on a particular async runtime; any
//! executor can drive it, including a minimal one such as `pollster`. The
//! file is read on the `blocking` thread pool, so the executor is never
//! stalled by disk I/O.

#![forbid(unsafe_code)]

/// Expose our "raw" underlying parser crate.
pub extern crate fontia_read as raw;

mod error;
mod font;

pub use error::FontError;
pub use font::Font;

#[doc(inline)]
pub use raw::types::{NameId, Tag};
#[doc(inline)]
pub use raw::OutlineFormat;
