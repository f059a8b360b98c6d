//! a trait for things that can serve font tables

use types::Tag;

use crate::{tables, FontData, ReadError, TableDirectory};

/// An interface for accessing tables from a font (or font-like object)
pub trait TableProvider<'a> {
    /// All of the font's bytes; table offsets are relative to these.
    fn font_data(&self) -> FontData<'a>;

    fn table_directory(&self) -> &TableDirectory;

    fn data_for_tag(&self, tag: Tag) -> Option<FontData<'a>> {
        self.expect_data_for_tag(tag).ok()
    }

    fn expect_data_for_tag(&self, tag: Tag) -> Result<FontData<'a>, ReadError> {
        let record = self.table_directory().get(tag)?;
        self.font_data().read_data(record.data_range())
    }

    /// Read the `name` table.
    ///
    /// Strings are only read from within the table's declared length.
    fn name(&self) -> Result<tables::name::Name, ReadError> {
        let data = self.expect_data_for_tag(tables::name::TAG)?;
        tables::name::Name::read(data, 0)
    }
}
