//! The [table directory](https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory)
//! at the start of every sfnt font.

use std::ops::Range;

use indexmap::IndexMap;
use types::{Tag, CFF_SFNT_VERSION, TT_SFNT_VERSION};

use crate::{FontData, ReadError};

/// The on-disk form of a table record: four big-endian u32 fields.
#[derive(Clone, Copy, bytemuck::AnyBitPattern)]
#[repr(C)]
struct RawTableRecord {
    tag: [u8; 4],
    checksum: [u8; 4],
    offset: [u8; 4],
    length: [u8; 4],
}

/// Location and checksum of a single table in the font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableRecord {
    tag: Tag,
    checksum: u32,
    offset: u32,
    length: u32,
}

impl TableRecord {
    /// Size of the record in the directory, in bytes.
    pub const RAW_BYTE_LEN: usize = std::mem::size_of::<RawTableRecord>();

    /// Table identifier.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Checksum for the table, as stored. It is not verified.
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Offset from the beginning of the font data.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length of the table, in bytes.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The byte range of the table in the font data.
    pub fn data_range(&self) -> Range<usize> {
        let start = self.offset as usize;
        start..start.saturating_add(self.length as usize)
    }

    fn from_raw(raw: &RawTableRecord, offset: usize) -> Result<Self, ReadError> {
        let tag = Tag::new_checked(&raw.tag)
            .map_err(|error| ReadError::InvalidTag { offset, error })?;
        Ok(TableRecord {
            tag,
            checksum: u32::from_be_bytes(raw.checksum),
            offset: u32::from_be_bytes(raw.offset),
            length: u32::from_be_bytes(raw.length),
        })
    }
}

/// The binary search hints stored in the directory header.
///
/// Readers don't need these (lookups go through a map) but a font that
/// stores the wrong values is probably damaged in other ways too.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub search_range: u32,
    pub entry_selector: u32,
    pub range_shift: u32,
}

impl SearchParams {
    /// The values a well-formed directory with `num_tables` entries stores.
    pub fn for_table_count(num_tables: u16) -> Self {
        if num_tables == 0 {
            return SearchParams::default();
        }
        let entry_selector = num_tables.ilog2();
        let search_range = (TableRecord::RAW_BYTE_LEN as u32) << entry_selector;
        let range_shift = (num_tables as u32 * TableRecord::RAW_BYTE_LEN as u32) - search_range;
        SearchParams {
            search_range,
            entry_selector,
            range_shift,
        }
    }
}

/// Which kind of glyph outlines the sfnt version promises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutlineFormat {
    /// Version 0x00010000; outlines are in `glyf`.
    TrueType,
    /// Version 'OTTO'; outlines are in `CFF ` or `CFF2`.
    Cff,
}

/// A decoded table directory.
///
/// Tags are unique: when a font lists the same tag more than once, the
/// last record wins, but the tag keeps the position where it first
/// appeared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDirectory {
    sfnt_version: u32,
    num_tables: u16,
    stored_params: SearchParams,
    records: IndexMap<Tag, TableRecord>,
}

impl TableDirectory {
    /// Length of the fixed header, before the table records.
    pub const HEADER_LEN: usize = 12;

    /// Read the directory that begins `start` bytes into `data`.
    pub fn read(data: FontData<'_>, start: usize) -> Result<Self, ReadError> {
        data.check_range(start, Self::HEADER_LEN)?;
        let mut cursor = data.cursor_at(start);
        let sfnt_version: u32 = cursor.read()?;
        if sfnt_version != TT_SFNT_VERSION && sfnt_version != CFF_SFNT_VERSION {
            return Err(ReadError::UnsupportedVersion {
                structure: "sfnt",
                version: sfnt_version,
            });
        }
        let num_tables: u16 = cursor.read()?;
        let stored_params = SearchParams {
            search_range: cursor.read::<u16>()?.into(),
            entry_selector: cursor.read::<u16>()?.into(),
            range_shift: cursor.read::<u16>()?.into(),
        };

        let records_start = cursor.position();
        let raw_records: &[RawTableRecord] = cursor.read_array(num_tables as usize)?;
        let mut records = IndexMap::with_capacity(raw_records.len());
        for (i, raw) in raw_records.iter().enumerate() {
            let record_offset = records_start + i * TableRecord::RAW_BYTE_LEN;
            let record = TableRecord::from_raw(raw, record_offset)?;
            if let Some(prev) = records.insert(record.tag, record) {
                log::debug!(
                    "duplicate '{}' record at offset {record_offset} replaces table at {}",
                    record.tag,
                    prev.offset
                );
            }
        }

        let directory = TableDirectory {
            sfnt_version,
            num_tables,
            stored_params,
            records,
        };
        if !directory.search_params_are_consistent() {
            log::debug!(
                "table directory search params {:?} do not match {} tables",
                directory.stored_params,
                num_tables
            );
        }
        Ok(directory)
    }

    /// The raw sfnt version.
    pub fn sfnt_version(&self) -> u32 {
        self.sfnt_version
    }

    pub fn outline_format(&self) -> OutlineFormat {
        if self.sfnt_version == CFF_SFNT_VERSION {
            OutlineFormat::Cff
        } else {
            OutlineFormat::TrueType
        }
    }

    /// The number of records in the file, including duplicates.
    pub fn num_tables(&self) -> u16 {
        self.num_tables
    }

    /// The number of distinct tables.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search_params(&self) -> SearchParams {
        self.stored_params
    }

    /// `true` if the stored search hints match the number of tables.
    pub fn search_params_are_consistent(&self) -> bool {
        self.stored_params == SearchParams::for_table_count(self.num_tables)
    }

    /// Returns the record for `tag`, or [`ReadError::TableNotFound`].
    pub fn get(&self, tag: Tag) -> Result<&TableRecord, ReadError> {
        self.records.get(&tag).ok_or(ReadError::TableNotFound(tag))
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.records.contains_key(&tag)
    }

    /// Iterate over the records, in the order their tags first appeared.
    pub fn iter(&self) -> impl Iterator<Item = &TableRecord> + '_ {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use fontia_test_data::bebuffer::BeBuffer;

    use super::*;

    fn directory(version: u32, records: &[(&[u8; 4], u32, u32)]) -> BeBuffer {
        let n = records.len() as u16;
        let params = SearchParams::for_table_count(n);
        let mut buf = BeBuffer::new().push(version).push(n).extend([
            params.search_range as u16,
            params.entry_selector as u16,
            params.range_shift as u16,
        ]);
        for (tag, offset, length) in records {
            buf = buf.extend_bytes(*tag).extend([0xCAFE_u32, *offset, *length]);
        }
        buf
    }

    #[test]
    fn reads_records_in_order() {
        let buf = directory(
            TT_SFNT_VERSION,
            &[(b"head", 100, 54), (b"name", 200, 300), (b"cvt ", 500, 8)],
        );
        let dir = TableDirectory::read(FontData::new(&buf), 0).unwrap();
        assert_eq!(dir.outline_format(), OutlineFormat::TrueType);
        assert_eq!(dir.len(), 3);
        assert!(dir.search_params_are_consistent());

        let name = dir.get(Tag::new(b"name")).unwrap();
        assert_eq!((name.offset(), name.length()), (200, 300));
        assert_eq!(name.checksum(), 0xCAFE);
        assert_eq!(name.data_range(), 200..500);
        assert!(dir.contains(Tag::new(b"cvt ")));

        let tags: Vec<_> = dir.iter().map(|rec| rec.tag().to_string()).collect();
        assert_eq!(tags, ["head", "name", "cvt "]);
    }

    #[test]
    fn missing_table() {
        let buf = directory(CFF_SFNT_VERSION, &[(b"CFF ", 28, 10)]);
        let dir = TableDirectory::read(FontData::new(&buf), 0).unwrap();
        assert_eq!(dir.outline_format(), OutlineFormat::Cff);
        assert_eq!(
            dir.get(Tag::new(b"name")),
            Err(ReadError::TableNotFound(Tag::new(b"name")))
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let buf = directory(
            TT_SFNT_VERSION,
            &[(b"name", 100, 10), (b"head", 120, 54), (b"name", 200, 20)],
        );
        let dir = TableDirectory::read(FontData::new(&buf), 0).unwrap();
        assert_eq!(dir.num_tables(), 3);
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get(Tag::new(b"name")).unwrap().offset(), 200);
        assert_eq!(
            dir.iter().next().map(TableRecord::tag),
            Some(Tag::new(b"name"))
        );
    }

    #[test]
    fn empty_directory() {
        let buf = directory(TT_SFNT_VERSION, &[]);
        let dir = TableDirectory::read(FontData::new(&buf), 0).unwrap();
        assert!(dir.is_empty());
        assert_eq!(dir.search_params(), SearchParams::default());
        assert!(dir.search_params_are_consistent());
    }

    #[test]
    fn search_params() {
        // Roboto has 22 tables
        assert_eq!(
            SearchParams::for_table_count(0x16),
            SearchParams {
                search_range: 256,
                entry_selector: 4,
                range_shift: 96
            }
        );
        assert_eq!(
            SearchParams::for_table_count(1),
            SearchParams {
                search_range: 16,
                entry_selector: 0,
                range_shift: 0
            }
        );
        assert_eq!(
            SearchParams::for_table_count(u16::MAX).search_range,
            16 << 15
        );
    }

    #[test]
    fn inconsistent_search_params_are_not_fatal() {
        let buf = BeBuffer::new()
            .push(TT_SFNT_VERSION)
            .extend([1u16, 0, 0, 0])
            .extend_bytes(b"name")
            .extend([0u32, 28, 4]);
        let dir = TableDirectory::read(FontData::new(&buf), 0).unwrap();
        assert!(!dir.search_params_are_consistent());
        assert!(dir.contains(Tag::new(b"name")));
    }

    #[test]
    fn rejects_unknown_versions() {
        for version in [0x7474_6366_u32, 0x7472_7565, 0] {
            let buf = directory(version, &[]);
            assert_eq!(
                TableDirectory::read(FontData::new(&buf), 0),
                Err(ReadError::UnsupportedVersion {
                    structure: "sfnt",
                    version
                })
            );
        }
    }

    #[test]
    fn truncated_header() {
        let buf = directory(TT_SFNT_VERSION, &[]);
        assert_eq!(
            TableDirectory::read(FontData::new(&buf[..11]), 0),
            Err(ReadError::TruncatedInput {
                offset: 0,
                expected: 12,
                available: 11
            })
        );
        assert!(matches!(
            TableDirectory::read(FontData::new(&buf), 4),
            Err(ReadError::TruncatedInput { offset: 4, .. })
        ));
    }

    #[test]
    fn truncated_records() {
        let buf = directory(TT_SFNT_VERSION, &[(b"head", 44, 54), (b"name", 98, 10)]);
        assert_eq!(
            TableDirectory::read(FontData::new(&buf[..40]), 0),
            Err(ReadError::TruncatedInput {
                offset: 12,
                expected: 32,
                available: 28
            })
        );
    }

    #[test]
    fn invalid_tag_reports_record_offset() {
        let buf = directory(TT_SFNT_VERSION, &[(b"head", 44, 54), (b"n me", 98, 10)]);
        assert!(matches!(
            TableDirectory::read(FontData::new(&buf), 0),
            Err(ReadError::InvalidTag { offset: 28, .. })
        ));
    }

    #[test]
    fn directory_at_nonzero_start() {
        let inner = directory(TT_SFNT_VERSION, &[(b"name", 0, 0)]);
        let mut bytes = vec![0xFF; 8];
        bytes.extend_from_slice(&inner);
        let dir = TableDirectory::read(FontData::new(&bytes), 8).unwrap();
        assert!(dir.contains(Tag::new(b"name")));
    }
}
