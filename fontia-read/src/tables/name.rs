//! The [name (Naming)](https://docs.microsoft.com/en-us/typography/opentype/spec/name) table

use std::collections::BTreeMap;

use types::{PlatformId, Tag};

use crate::read::{DecodeFailure, StringOrigin};
use crate::{FontData, ReadError};

pub use types::NameId;

/// 'name'
pub const TAG: Tag = Tag::new(b"name");

const HEADER_LEN: usize = 6;
// For version 1 tables, language ids at or above this index the lang tag records.
const BASE_LANGUAGE_TAG_ID: u16 = 0x8000;
const WINDOWS_ENGLISH_US: u16 = 0x0409;
const MAC_ENGLISH: u16 = 0;

#[derive(Clone, Copy, bytemuck::AnyBitPattern)]
#[repr(C)]
struct RawNameRecord {
    platform_id: [u8; 2],
    encoding_id: [u8; 2],
    language_id: [u8; 2],
    name_id: [u8; 2],
    length: [u8; 2],
    string_offset: [u8; 2],
}

#[derive(Clone, Copy, bytemuck::AnyBitPattern)]
#[repr(C)]
struct RawLangTagRecord {
    length: [u8; 2],
    lang_tag_offset: [u8; 2],
}

/// A decoded [Naming table](https://docs.microsoft.com/en-us/typography/opentype/spec/name)
///
/// Every string is decoded while the table is read. Records that cannot be
/// decoded are left out and reported through [`Name::decode_errors`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name {
    version: u16,
    storage_offset: u16,
    records: Vec<NameRecord>,
    // name id -> index into `records` of the preferred record
    selected: BTreeMap<NameId, usize>,
    lang_tag_records: Vec<LangTagRecord>,
    decode_errors: Vec<ReadError>,
}

/// Part of [Name]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameRecord {
    platform_id: PlatformId,
    encoding_id: u16,
    language_id: u16,
    name_id: NameId,
    length: u16,
    string_offset: u16,
    value: String,
}

/// Part of [Name]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangTagRecord {
    length: u16,
    lang_tag_offset: u16,
    language_tag: Option<String>,
}

impl Name {
    /// Read the table that starts `offset` bytes into `data`.
    ///
    /// `data` is normally the whole font, so that offsets in errors are
    /// relative to the start of the file.
    pub fn read(data: FontData<'_>, offset: usize) -> Result<Self, ReadError> {
        data.check_range(offset, HEADER_LEN)?;
        let mut cursor = data.cursor_at(offset);
        let version: u16 = cursor.read()?;
        let count: u16 = cursor.read()?;
        let storage_offset: u16 = cursor.read()?;
        if version > 1 {
            return Err(ReadError::UnsupportedVersion {
                structure: "name",
                version: version.into(),
            });
        }

        let raw_records: &[RawNameRecord] = cursor.read_array(count as usize)?;
        let raw_lang_tags: &[RawLangTagRecord] = if version == 1 {
            let lang_tag_count: u16 = cursor.read()?;
            cursor.read_array(lang_tag_count as usize)?
        } else {
            &[]
        };

        let storage = offset + storage_offset as usize;
        let mut decode_errors = Vec::new();

        let mut lang_tag_records = Vec::with_capacity(raw_lang_tags.len());
        for (i, raw) in raw_lang_tags.iter().enumerate() {
            let length = u16::from_be_bytes(raw.length);
            let lang_tag_offset = u16::from_be_bytes(raw.lang_tag_offset);
            let start = storage + lang_tag_offset as usize;
            let bytes = data.read_bytes(start..start + length as usize)?;
            let language_tag = match decode_utf16_be(bytes) {
                Ok(tag) => Some(tag),
                Err(reason) => {
                    let error = ReadError::StringDecodeError {
                        origin: StringOrigin::LanguageTag(i as u16),
                        offset: data.position() + start,
                        reason,
                    };
                    log::warn!("skipping language tag record: {error}");
                    decode_errors.push(error);
                    None
                }
            };
            lang_tag_records.push(LangTagRecord {
                length,
                lang_tag_offset,
                language_tag,
            });
        }

        let mut records = Vec::with_capacity(raw_records.len());
        for raw in raw_records {
            match NameRecord::decode(raw, data, storage) {
                Ok(record) => records.push(record),
                Err(error) => {
                    log::warn!("skipping name record: {error}");
                    decode_errors.push(error);
                }
            }
        }

        let selected = select_preferred(&records);
        Ok(Name {
            version,
            storage_offset,
            records,
            selected,
            lang_tag_records,
            decode_errors,
        })
    }

    /// Table version number (0 or 1).
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Offset to the start of string storage, from the start of the table.
    pub fn storage_offset(&self) -> u16 {
        self.storage_offset
    }

    /// The preferred record for `name_id`.
    ///
    /// When several records share a name id, Windows Unicode BMP wins over
    /// Windows full Unicode, then the Unicode platform, then Macintosh, then
    /// anything else. Within a platform English beats other languages, and
    /// lower language ids beat higher ones. Remaining ties go to the record
    /// that comes first in the table.
    pub fn get(&self, name_id: NameId) -> Result<&NameRecord, ReadError> {
        self.selected
            .get(&name_id)
            .and_then(|idx| self.records.get(*idx))
            .ok_or(ReadError::NameRecordNotFound(name_id))
    }

    /// Every record that was decoded, in table order.
    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    /// The preferred record for each name id, by ascending id.
    pub fn iter(&self) -> impl Iterator<Item = &NameRecord> + '_ {
        self.selected.values().filter_map(|idx| self.records.get(*idx))
    }

    /// The number of distinct name ids with a usable record.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Language-tag records (version 1 only), in table order.
    pub fn lang_tag_records(&self) -> &[LangTagRecord] {
        &self.lang_tag_records
    }

    /// Records and language tags that were skipped, with the reason.
    pub fn decode_errors(&self) -> &[ReadError] {
        &self.decode_errors
    }

    /// The BCP-47 tag for a record whose language id refers to a
    /// language-tag record.
    ///
    /// Returns `None` for version 0 tables, for language ids below 0x8000,
    /// and when the referenced tag is missing or could not be decoded.
    pub fn language_tag(&self, record: &NameRecord) -> Option<&str> {
        if self.version != 1 || record.language_id < BASE_LANGUAGE_TAG_ID {
            return None;
        }
        let index = (record.language_id - BASE_LANGUAGE_TAG_ID) as usize;
        self.lang_tag_records.get(index)?.language_tag()
    }
}

impl NameRecord {
    fn decode(raw: &RawNameRecord, data: FontData<'_>, storage: usize) -> Result<Self, ReadError> {
        let platform_id = PlatformId::new(u16::from_be_bytes(raw.platform_id));
        let encoding_id = u16::from_be_bytes(raw.encoding_id);
        let name_id = NameId::new(u16::from_be_bytes(raw.name_id));
        let length = u16::from_be_bytes(raw.length);
        let string_offset = u16::from_be_bytes(raw.string_offset);

        let start = storage + string_offset as usize;
        let bytes = data.read_bytes(start..start + length as usize)?;
        let value = Encoding::new(platform_id, encoding_id)
            .decode(bytes)
            .ok_or(ReadError::UnsupportedEncoding {
                name_id,
                platform_id,
                encoding_id,
            })?
            .map_err(|reason| ReadError::StringDecodeError {
                origin: StringOrigin::Name(name_id),
                offset: data.position() + start,
                reason,
            })?;

        Ok(NameRecord {
            platform_id,
            encoding_id,
            language_id: u16::from_be_bytes(raw.language_id),
            name_id,
            length,
            string_offset,
            value,
        })
    }

    pub fn platform_id(&self) -> PlatformId {
        self.platform_id
    }

    pub fn encoding_id(&self) -> u16 {
        self.encoding_id
    }

    pub fn language_id(&self) -> u16 {
        self.language_id
    }

    pub fn name_id(&self) -> NameId {
        self.name_id
    }

    /// String length, in bytes.
    pub fn length(&self) -> u16 {
        self.length
    }

    /// Offset of the string from the start of the storage area.
    pub fn string_offset(&self) -> u16 {
        self.string_offset
    }

    /// The decoded string.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn encoding(&self) -> Encoding {
        Encoding::new(self.platform_id, self.encoding_id)
    }

    fn is_english(&self) -> bool {
        match self.platform_id {
            PlatformId::Windows => self.language_id == WINDOWS_ENGLISH_US,
            PlatformId::Macintosh => self.language_id == MAC_ENGLISH,
            _ => false,
        }
    }

    // lower is better
    fn preference(&self) -> (u8, bool, u16) {
        let tier = match (self.platform_id, self.encoding_id) {
            (PlatformId::Windows, 1) => 0,
            (PlatformId::Windows, 10) => 1,
            (PlatformId::Unicode, _) => 2,
            (PlatformId::Macintosh, _) => 3,
            _ => 4,
        };
        (tier, !self.is_english(), self.language_id)
    }
}

impl LangTagRecord {
    /// Length of the tag string, in bytes.
    pub fn length(&self) -> u16 {
        self.length
    }

    /// Offset of the tag from the start of the storage area.
    pub fn lang_tag_offset(&self) -> u16 {
        self.lang_tag_offset
    }

    /// The decoded tag, or `None` if it was not valid UTF-16.
    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref()
    }
}

fn select_preferred(records: &[NameRecord]) -> BTreeMap<NameId, usize> {
    let mut best: BTreeMap<NameId, usize> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        best.entry(record.name_id)
            .and_modify(|current| {
                if record.preference() < records[*current].preference() {
                    *current = idx;
                }
            })
            .or_insert(idx);
    }
    best
}

/// The encoding used by the name table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf16Be,
    MacRoman,
    Unknown,
}

impl Encoding {
    /// Determine the coding from the platform and encoding id.
    pub fn new(platform_id: PlatformId, encoding_id: u16) -> Encoding {
        match (platform_id, encoding_id) {
            (PlatformId::Unicode, _) => Encoding::Utf16Be,
            (PlatformId::Macintosh, 0) => Encoding::MacRoman,
            (PlatformId::Windows, 0 | 1 | 10) => Encoding::Utf16Be,
            _ => Encoding::Unknown,
        }
    }

    /// Decode `bytes`, or return `None` if the encoding is unknown.
    pub fn decode(self, bytes: &[u8]) -> Option<Result<String, DecodeFailure>> {
        match self {
            Encoding::Utf16Be => Some(decode_utf16_be(bytes)),
            Encoding::MacRoman => Some(Ok(bytes
                .iter()
                .map(|b| MacRomanMapping.decode(*b))
                .collect())),
            Encoding::Unknown => None,
        }
    }
}

fn decode_utf16_be(bytes: &[u8]) -> Result<String, DecodeFailure> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeFailure::OddLength(bytes.len()));
    }
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|c| c.map_err(|e| DecodeFailure::UnpairedSurrogate(e.unpaired_surrogate())))
        .collect()
}

/// A helper for decoding Mac OS Roman encoded strings.
pub struct MacRomanMapping;

impl MacRomanMapping {
    const START_REMAP: u8 = 128;

    /// Convert from a mac-roman encoded byte to a `char`
    pub fn decode(self, raw: u8) -> char {
        if raw < Self::START_REMAP {
            raw as char
        } else {
            let idx = raw - Self::START_REMAP;
            char::from_u32(MAC_ROMAN_DECODE[idx as usize] as u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        }
    }
}

/// a lookup table for the Mac Roman encoding. this matches the values 128..=255
/// to specific unicode values.
#[rustfmt::skip]
static MAC_ROMAN_DECODE: [u16; 128] = [
    196, 197, 199, 201, 209, 214, 220, 225, 224, 226, 228, 227, 229, 231, 233,
    232, 234, 235, 237, 236, 238, 239, 241, 243, 242, 244, 246, 245, 250, 249,
    251, 252, 8224, 176, 162, 163, 167, 8226, 182, 223, 174, 169, 8482, 180,
    168, 8800, 198, 216, 8734, 177, 8804, 8805, 165, 181, 8706, 8721, 8719,
    960, 8747, 170, 186, 937, 230, 248, 191, 161, 172, 8730, 402, 8776, 8710,
    171, 187, 8230, 160, 192, 195, 213, 338, 339, 8211, 8212, 8220, 8221, 8216,
    8217, 247, 9674, 255, 376, 8260, 8364, 8249, 8250, 64257, 64258, 8225, 183,
    8218, 8222, 8240, 194, 202, 193, 203, 200, 205, 206, 207, 204, 211, 212,
    63743, 210, 218, 219, 217, 305, 710, 732, 175, 728, 729, 730, 184, 733,
    731, 711,
];
