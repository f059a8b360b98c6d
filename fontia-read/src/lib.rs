//! Reading OpenType tables
//!
//! This crate provides memory safe parsing of the parts of a font file that
//! describe it: the [table directory][table-directory] at the start of every
//! sfnt font, and the [naming table][name] that holds the family name,
//! version string, license and the other human readable metadata.
//!
//! Every read is bounds checked. Structural problems (a header that is cut
//! short, an unknown version, an invalid tag) are reported as a
//! [`ReadError`] with the absolute offset of the problem; a single
//! undecodable string in the naming table is skipped and recorded instead.
//!
//! For higher level access to font metadata, you may want to look into
//! using `fontia` instead.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use fontia_read::{types::NameId, FontRef, TableProvider};
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let font = FontRef::new(&font_bytes).expect("failed to read font data");
//! let name = font.name().expect("missing 'name' table");
//!
//! for record in name.iter() {
//!     println!("{}: {}", record.name_id(), record.value());
//! }
//! ```
//!
//! [table-directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory
//! [name]: https://learn.microsoft.com/en-us/typography/opentype/spec/name

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod font_data;
mod read;
mod table_directory;
mod table_provider;
pub mod tables;

pub use font_data::FontData;
pub use read::{DecodeFailure, ReadError, StringOrigin};
pub use table_directory::{OutlineFormat, SearchParams, TableDirectory, TableRecord};
pub use table_provider::TableProvider;

/// Public re-export of the fontia-types crate.
pub extern crate fontia_types as types;

use types::Tag;

/// Reference to an in-memory font.
///
/// This is a simple implementation of the [`TableProvider`] trait backed
/// by a borrowed slice containing font data.
#[derive(Clone, Debug)]
pub struct FontRef<'a> {
    data: FontData<'a>,
    table_directory: TableDirectory,
}

impl<'a> FontRef<'a> {
    /// Creates a new reference to an in-memory font backed by the given data.
    ///
    /// The data must be a single font (not a font collection) and must begin
    /// with a table directory to be considered valid.
    pub fn new(data: &'a [u8]) -> Result<Self, ReadError> {
        let data = FontData::new(data);
        let table_directory = TableDirectory::read(data, 0)?;
        Ok(FontRef {
            data,
            table_directory,
        })
    }

    /// Returns the underlying font data.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    /// Returns the data for the table with the specified tag, if present
    /// and within the bounds of the font.
    ///
    /// Checksums are not verified.
    pub fn table_data(&self, tag: Tag) -> Option<FontData<'a>> {
        self.data_for_tag(tag)
    }
}

impl<'a> TableProvider<'a> for FontRef<'a> {
    fn font_data(&self) -> FontData<'a> {
        self.data
    }

    fn table_directory(&self) -> &TableDirectory {
        &self.table_directory
    }
}

#[cfg(test)]
mod tests {
    use fontia_test_data as test_data;
    use pretty_assertions::assert_eq;

    use super::*;
    use types::NameId;

    #[test]
    fn read_simple_font() {
        let font = FontRef::new(test_data::ALEGREYA_NAMES).unwrap();
        let directory = font.table_directory();
        assert_eq!(directory.outline_format(), OutlineFormat::TrueType);
        assert!(directory.search_params_are_consistent());
        assert!(directory.contains(tables::NAME));

        let name = font.name().unwrap();
        assert_eq!(name.get(NameId::FAMILY_NAME).unwrap().value(), "Alegreya");
        assert_eq!(name.get(NameId::SUBFAMILY_NAME).unwrap().value(), "Black");
        assert!(name.decode_errors().is_empty());
    }

    #[test]
    fn table_data() {
        let font = FontRef::new(test_data::ALEGREYA_NAMES).unwrap();
        let record = *font.table_directory().get(tables::NAME).unwrap();
        let data = font.table_data(tables::NAME).unwrap();
        assert_eq!(data.position(), record.offset() as usize);
        assert_eq!(data.len(), record.length() as usize);
        assert!(font.table_data(tables::GLYF).is_none());
    }

    #[test]
    fn font_without_names() {
        let font = FontRef::new(test_data::NO_NAME_TABLE).unwrap();
        assert_eq!(font.name(), Err(ReadError::TableNotFound(tables::NAME)));
    }

    #[test]
    fn not_a_font() {
        assert!(matches!(
            FontRef::new(b"wOFF\0\0\0\0\0\0\0\0"),
            Err(ReadError::UnsupportedVersion { structure: "sfnt", .. })
        ));
        assert!(matches!(
            FontRef::new(&[]),
            Err(ReadError::TruncatedInput { offset: 0, .. })
        ));
    }
}
