//! The font facade.

use std::path::Path;

use fontia_read::{tables::name::Name, types::NameId, FontRef, OutlineFormat, TableProvider};

use crate::FontError;

/// The names of a font, copied out of its naming table.
///
/// A name the font doesn't provide is the empty string. When the naming
/// table has several records for the same name (different platforms or
/// languages), the English Windows string is preferred; see
/// [`Name::get`] for the full rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Font {
    copyright_notice: String,
    family_name: String,
    subfamily_name: String,
    unique_id: String,
    full_name: String,
    version: String,
    postscript_name: String,
    trademark: String,
    manufacturer: String,
    designer: String,
    description: String,
    vendor_url: String,
    designer_url: String,
    license_description: String,
    license_url: String,
    typographic_family_name: String,
    typographic_subfamily_name: String,
    outline_format: OutlineFormat,
}

impl Font {
    /// Read the font at `path`.
    ///
    /// Opening and reading the file happen on a background thread, and the
    /// returned future is pending until the whole file has been read. The
    /// file is closed again before anything is parsed, whether or not the
    /// read succeeds.
    pub async fn load(path: impl AsRef<Path>) -> Result<Font, FontError> {
        let path = path.as_ref().to_owned();
        let read = {
            let path = path.clone();
            blocking::unblock(move || std::fs::read(path))
        };
        let bytes = read.await.map_err(|source| FontError::Io {
            path: path.clone(),
            source,
        })?;
        log::trace!("read {} bytes from {}", bytes.len(), path.display());
        Font::from_bytes(&bytes)
    }

    /// Read a font that is already in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Font, FontError> {
        let font = FontRef::new(data)?;
        log::trace!(
            "table directory has {} tables",
            font.table_directory().len()
        );
        let name = font.name()?;
        log::trace!(
            "name table version {} has {} names",
            name.version(),
            name.len()
        );
        Ok(Font::from_name_table(
            &name,
            font.table_directory().outline_format(),
        ))
    }

    fn from_name_table(name: &Name, outline_format: OutlineFormat) -> Font {
        let get = |id: NameId| {
            name.get(id)
                .map(|record| record.value().to_owned())
                .unwrap_or_default()
        };
        Font {
            copyright_notice: get(NameId::COPYRIGHT_NOTICE),
            family_name: get(NameId::FAMILY_NAME),
            subfamily_name: get(NameId::SUBFAMILY_NAME),
            unique_id: get(NameId::UNIQUE_ID),
            full_name: get(NameId::FULL_NAME),
            version: get(NameId::VERSION_STRING),
            postscript_name: get(NameId::POSTSCRIPT_NAME),
            trademark: get(NameId::TRADEMARK),
            manufacturer: get(NameId::MANUFACTURER),
            designer: get(NameId::DESIGNER),
            description: get(NameId::DESCRIPTION),
            vendor_url: get(NameId::VENDOR_URL),
            designer_url: get(NameId::DESIGNER_URL),
            license_description: get(NameId::LICENSE_DESCRIPTION),
            license_url: get(NameId::LICENSE_URL),
            typographic_family_name: get(NameId::TYPOGRAPHIC_FAMILY_NAME),
            typographic_subfamily_name: get(NameId::TYPOGRAPHIC_SUBFAMILY_NAME),
            outline_format,
        }
    }

    /// The name copied for `id`, if `id` is one of the names a `Font`
    /// carries.
    pub fn get(&self, id: NameId) -> Option<&str> {
        let value = match id {
            NameId::COPYRIGHT_NOTICE => &self.copyright_notice,
            NameId::FAMILY_NAME => &self.family_name,
            NameId::SUBFAMILY_NAME => &self.subfamily_name,
            NameId::UNIQUE_ID => &self.unique_id,
            NameId::FULL_NAME => &self.full_name,
            NameId::VERSION_STRING => &self.version,
            NameId::POSTSCRIPT_NAME => &self.postscript_name,
            NameId::TRADEMARK => &self.trademark,
            NameId::MANUFACTURER => &self.manufacturer,
            NameId::DESIGNER => &self.designer,
            NameId::DESCRIPTION => &self.description,
            NameId::VENDOR_URL => &self.vendor_url,
            NameId::DESIGNER_URL => &self.designer_url,
            NameId::LICENSE_DESCRIPTION => &self.license_description,
            NameId::LICENSE_URL => &self.license_url,
            NameId::TYPOGRAPHIC_FAMILY_NAME => &self.typographic_family_name,
            NameId::TYPOGRAPHIC_SUBFAMILY_NAME => &self.typographic_subfamily_name,
            _ => return None,
        };
        Some(value)
    }

    /// Every name a `Font` carries, by ascending id, including empty ones.
    pub fn names(&self) -> impl Iterator<Item = (NameId, &str)> + '_ {
        (0..=14)
            .chain([16, 17])
            .map(NameId::new)
            .filter_map(|id| Some((id, self.get(id)?)))
    }

    /// Copyright notice (name id 0).
    pub fn copyright_notice(&self) -> &str {
        &self.copyright_notice
    }

    /// Font family name (name id 1).
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Font subfamily name (name id 2).
    pub fn subfamily_name(&self) -> &str {
        &self.subfamily_name
    }

    /// Unique font identifier (name id 3).
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Full font name (name id 4).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Version string (name id 5).
    pub fn version(&self) -> &str {
        &self.version
    }

    /// PostScript name (name id 6).
    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    /// Trademark notice (name id 7).
    pub fn trademark(&self) -> &str {
        &self.trademark
    }

    /// Manufacturer name (name id 8).
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Designer name (name id 9).
    pub fn designer(&self) -> &str {
        &self.designer
    }

    /// Description of the typeface (name id 10).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// URL of the font vendor (name id 11).
    pub fn vendor_url(&self) -> &str {
        &self.vendor_url
    }

    /// URL of the typeface designer (name id 12).
    pub fn designer_url(&self) -> &str {
        &self.designer_url
    }

    /// License description (name id 13).
    pub fn license_description(&self) -> &str {
        &self.license_description
    }

    /// License information URL (name id 14).
    pub fn license_url(&self) -> &str {
        &self.license_url
    }

    /// Typographic family name (name id 16).
    pub fn typographic_family_name(&self) -> &str {
        &self.typographic_family_name
    }

    /// Typographic subfamily name (name id 17).
    pub fn typographic_subfamily_name(&self) -> &str {
        &self.typographic_subfamily_name
    }

    /// Whether the font has TrueType or CFF outlines.
    pub fn outline_format(&self) -> OutlineFormat {
        self.outline_format
    }
}

#[cfg(test)]
mod tests {
    use fontia_read::{tables, ReadError};
    use fontia_test_data::{self as test_data, bebuffer::BeBuffer};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn copies_names() {
        let font = Font::from_bytes(test_data::ALEGREYA_NAMES).unwrap();
        assert_eq!(font.family_name(), "Alegreya");
        assert_eq!(font.subfamily_name(), "Black");
        assert_eq!(font.full_name(), "Alegreya Black");
        assert_eq!(font.version(), "Version 2.003");
        assert_eq!(font.postscript_name(), "Alegreya-Black");
        assert_eq!(font.typographic_family_name(), "Alegreya");
        assert_eq!(font.typographic_subfamily_name(), "Black");
        assert_eq!(font.outline_format(), OutlineFormat::TrueType);
    }

    #[test]
    fn missing_names_are_empty() {
        let font = Font::from_bytes(test_data::ALEGREYA_NAMES).unwrap();
        assert_eq!(font.copyright_notice(), "");
        assert_eq!(font.unique_id(), "");
        assert_eq!(font.license_url(), "");
        assert_eq!(font.get(NameId::LICENSE_URL), Some(""));
        assert_eq!(font.get(NameId::SAMPLE_TEXT), None);

        let names: Vec<_> = font.names().map(|(id, _)| id.to_u16()).collect();
        assert_eq!(
            names,
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16, 17]
        );
    }

    #[test]
    fn missing_name_table() {
        let err = Font::from_bytes(test_data::NO_NAME_TABLE).unwrap_err();
        assert!(matches!(
            err,
            FontError::Read(ReadError::TableNotFound(tag)) if tag == tables::NAME
        ));
    }

    #[test]
    fn empty_name_table() {
        let buf = BeBuffer::new()
            .push(fontia_read::types::CFF_SFNT_VERSION)
            .extend([1u16, 16, 0, 0])
            .push_tag(tables::NAME)
            .extend([0u32, 28, 6])
            .extend([0u16, 0, 6]);
        let font = Font::from_bytes(&buf).unwrap();
        assert_eq!(font.outline_format(), OutlineFormat::Cff);
        assert!(font.names().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn corrupt_directory() {
        let mut bytes = test_data::ALEGREYA_NAMES.to_vec();
        // first byte of the 'name' tag
        bytes[12] = 0x01;
        assert!(matches!(
            Font::from_bytes(&bytes),
            Err(FontError::Read(ReadError::InvalidTag { offset: 12, .. }))
        ));
    }
}
