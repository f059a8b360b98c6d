//! Platform identifiers used by `name` (and `cmap`) records.

use std::fmt;

/// The platform a `name` record's string was encoded for.
///
/// The platform, together with a platform-specific encoding id, determines
/// how the bytes of a string are decoded. Values not assigned by the
/// OpenType spec are preserved in [`PlatformId::Unknown`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlatformId {
    /// Unicode; strings are UTF-16BE regardless of encoding id.
    Unicode,
    /// Macintosh; strings use legacy Mac script encodings.
    Macintosh,
    /// ISO (deprecated).
    Iso,
    /// Windows; strings are UTF-16BE for the Unicode encodings.
    Windows,
    /// Custom.
    Custom,
    /// Any value without an assigned meaning.
    Unknown(u16),
}

impl PlatformId {
    /// Create a platform id from its raw value.
    pub const fn new(raw: u16) -> Self {
        match raw {
            0 => Self::Unicode,
            1 => Self::Macintosh,
            2 => Self::Iso,
            3 => Self::Windows,
            4 => Self::Custom,
            other => Self::Unknown(other),
        }
    }

    /// The raw value, as stored in the font.
    pub const fn to_u16(self) -> u16 {
        match self {
            Self::Unicode => 0,
            Self::Macintosh => 1,
            Self::Iso => 2,
            Self::Windows => 3,
            Self::Custom => 4,
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<u16> for PlatformId {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl From<PlatformId> for u16 {
    fn from(value: PlatformId) -> Self {
        value.to_u16()
    }
}

impl fmt::Debug for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode => f.write_str("Unicode"),
            Self::Macintosh => f.write_str("Macintosh"),
            Self::Iso => f.write_str("Iso"),
            Self::Windows => f.write_str("Windows"),
            Self::Custom => f.write_str("Custom"),
            Self::Unknown(raw) => write!(f, "Unknown({raw})"),
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?} ({})", self.to_u16())
    }
}

impl crate::Scalar for PlatformId {
    type Raw = [u8; 2];

    fn to_raw(self) -> [u8; 2] {
        self.to_u16().to_be_bytes()
    }

    fn from_raw(raw: [u8; 2]) -> Self {
        Self::new(u16::from_be_bytes(raw))
    }
}
