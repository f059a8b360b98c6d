//! Errors produced while reading font data

use std::fmt;

use types::{InvalidTag, NameId, PlatformId};

/// An error that occurs when reading font data
///
/// Every variant carries enough context (offsets are absolute, from the
/// start of the file) to locate the problem in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReadError {
    /// Fewer bytes were available than a declared structure requires.
    TruncatedInput {
        offset: usize,
        expected: usize,
        available: usize,
    },
    /// The four bytes at `offset` are not a valid tag.
    InvalidTag { offset: usize, error: InvalidTag },
    /// A version field had a value this crate cannot interpret.
    UnsupportedVersion { structure: &'static str, version: u32 },
    /// The table directory has no record for this tag.
    TableNotFound(types::Tag),
    /// The `name` table has no usable record for this id.
    NameRecordNotFound(NameId),
    /// The bytes of a string are malformed for the selected codec.
    StringDecodeError {
        origin: StringOrigin,
        offset: usize,
        reason: DecodeFailure,
    },
    /// No codec is known for this platform/encoding pair.
    UnsupportedEncoding {
        name_id: NameId,
        platform_id: PlatformId,
        encoding_id: u16,
    },
}

/// Which string in the `name` table failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringOrigin {
    /// A name record with this id.
    Name(NameId),
    /// The language-tag record at this index.
    LanguageTag(u16),
}

/// Why a string could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailure {
    /// UTF-16 data with an odd number of bytes.
    OddLength(usize),
    /// A UTF-16 surrogate code unit without its pair.
    UnpairedSurrogate(u16),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::TruncatedInput {
                offset,
                expected,
                available,
            } => write!(
                f,
                "Truncated input at offset {offset}: expected {expected} bytes, {available} available"
            ),
            ReadError::InvalidTag { offset, error } => {
                write!(f, "Invalid tag at offset {offset}: {error}")
            }
            ReadError::UnsupportedVersion { structure, version } => {
                write!(f, "Unsupported {structure} version 0x{version:08X}")
            }
            ReadError::TableNotFound(tag) => write!(f, "the '{tag}' table is missing"),
            ReadError::NameRecordNotFound(id) => write!(f, "no name record for {id}"),
            ReadError::StringDecodeError {
                origin,
                offset,
                reason,
            } => write!(f, "Failed to decode {origin} at offset {offset}: {reason}"),
            ReadError::UnsupportedEncoding {
                name_id,
                platform_id,
                encoding_id,
            } => write!(
                f,
                "Unsupported encoding {encoding_id} for platform {platform_id} (name id {name_id})"
            ),
        }
    }
}

impl fmt::Display for StringOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringOrigin::Name(id) => write!(f, "name {id}"),
            StringOrigin::LanguageTag(idx) => write!(f, "language tag {idx}"),
        }
    }
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeFailure::OddLength(len) => write!(f, "odd UTF-16 byte length {len}"),
            DecodeFailure::UnpairedSurrogate(unit) => {
                write!(f, "unpaired surrogate 0x{unit:04X}")
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::InvalidTag { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Tag;

    #[test]
    fn messages_carry_context() {
        let err = ReadError::TruncatedInput {
            offset: 12,
            expected: 32,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "Truncated input at offset 12: expected 32 bytes, 4 available"
        );
        assert_eq!(
            ReadError::TableNotFound(Tag::new(b"name")).to_string(),
            "the 'name' table is missing"
        );
        assert_eq!(
            ReadError::UnsupportedVersion {
                structure: "sfnt",
                version: 0x7474_6366
            }
            .to_string(),
            "Unsupported sfnt version 0x74746366"
        );
    }
}
