//! The various font tables
//!
//! Only `name` is decoded; the other tags are here so callers can look
//! up the tables every sfnt font is expected to carry.

use types::Tag;

pub mod name;

/// 'cmap'
pub const CMAP: Tag = Tag::new(b"cmap");
/// 'glyf'
pub const GLYF: Tag = Tag::new(b"glyf");
/// 'head'
pub const HEAD: Tag = Tag::new(b"head");
/// 'hhea'
pub const HHEA: Tag = Tag::new(b"hhea");
/// 'hmtx'
pub const HMTX: Tag = Tag::new(b"hmtx");
/// 'loca'
pub const LOCA: Tag = Tag::new(b"loca");
/// 'maxp'
pub const MAXP: Tag = Tag::new(b"maxp");
/// 'name'
pub const NAME: Tag = name::TAG;
/// 'post'
pub const POST: Tag = Tag::new(b"post");
