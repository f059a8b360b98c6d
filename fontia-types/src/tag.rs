use std::{
    borrow::Borrow,
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

/// An OpenType tag.
///
/// [Per the spec][spec], a tag is a 4-byte array where each byte is in the
/// printable ASCII range `(0x20..=0x7E)`. Shorter identifiers are padded on
/// the right with spaces, so once a space appears every following byte must
/// also be a space.
///
/// Unlike raw byte arrays, a `Tag` is always valid: the only ways to build one
/// are [`Tag::new_checked`] (and the [`FromStr`]/[`TryFrom`] impls built on it),
/// or the const constructor [`Tag::new`], which refuses invalid literals.
///
/// [spec]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#data-types
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Construct a `Tag` from a literal.
    ///
    /// This is intended for constants; when evaluated in a const context an
    /// invalid tag is a compile error.
    ///
    /// # Panics
    ///
    /// Panics if the bytes do not form a valid tag. Use [`Tag::new_checked`]
    /// for input that has not been validated.
    pub const fn new(src: &[u8; 4]) -> Tag {
        match Tag::new_checked(src) {
            Ok(tag) => tag,
            Err(_) => panic!("invalid tag literal"),
        }
    }

    /// Attempt to create a `Tag` from raw bytes.
    ///
    /// The slice must contain exactly four bytes, each in the printable
    /// ascii range (`0x20..=0x7E`), and no non-space byte may follow a space.
    pub const fn new_checked(src: &[u8]) -> Result<Self, InvalidTag> {
        if src.len() != 4 {
            return Err(InvalidTag::InvalidLength(src.len()));
        }
        let mut raw = [0x20; 4];
        let mut i = 0;
        let mut seen_space = false;
        while i < src.len() {
            let byte = match src[i] {
                byte @ 0..=0x1F | byte @ 0x7f.. => {
                    return Err(InvalidTag::InvalidByte { pos: i, byte })
                }
                0x21..=0x7e if seen_space => return Err(InvalidTag::ByteAfterSpace { pos: i }),
                byte => byte,
            };

            seen_space |= byte == 0x20;

            raw[i] = byte;
            i += 1;
        }
        Ok(Tag(raw))
    }

    /// Return the memory representation of this tag.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }

    /// Return the tag as a big-endian `u32`, the form it takes on disk.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// The tag as a string slice, including any trailing padding.
    pub fn as_str(&self) -> &str {
        // every byte is printable ascii, which is always valid utf-8
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// An error representing an invalid tag.
///
/// This is returned as an error from [`Tag::new_checked`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidTag {
    /// The input was not exactly 4 bytes long.
    InvalidLength(usize),
    /// The tag contained an invalid byte, not within the printable
    /// ASCII range `(0x20..=0x7E)`.
    InvalidByte { pos: usize, byte: u8 },
    /// The tag contained a non-space character after a space.
    ByteAfterSpace { pos: usize },
}

impl FromStr for Tag {
    type Err = InvalidTag;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Tag::new_checked(src.as_bytes())
    }
}

impl TryFrom<&[u8]> for Tag {
    type Error = InvalidTag;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Tag::new_checked(src)
    }
}

impl std::error::Error for InvalidTag {}

impl Borrow<[u8; 4]> for Tag {
    fn borrow(&self) -> &[u8; 4] {
        &self.0
    }
}

impl PartialEq<[u8; 4]> for Tag {
    fn eq(&self, other: &[u8; 4]) -> bool {
        &self.0 == other
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for InvalidTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTag::InvalidByte { pos, byte } => {
                write!(f, "Invalid byte 0x{byte:02X} at index {pos}")
            }
            InvalidTag::InvalidLength(len) => write!(f, "Invalid length ({len}), expected 4"),
            InvalidTag::ByteAfterSpace { pos } => {
                write!(f, "Non-space character at index {pos} after a space")
            }
        }
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tag({})", self)
    }
}

// tags serialize as strings in human-readable formats, and as raw bytes
// otherwise. Deserializing always revalidates.
#[cfg(feature = "serde")]
impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serde::Serialize::serialize(self.as_str(), serializer)
        } else {
            serde::Serialize::serialize(&self.0, serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TagStrVisitor;
        impl serde::de::Visitor<'_> for TagStrVisitor {
            type Value = Tag;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "a four-byte ascii string")
            }
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(TagStrVisitor)
        } else {
            let raw = <[u8; 4]>::deserialize(deserializer)?;
            Tag::new_checked(&raw).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test() {
        Tag::new(b"head");
        assert!(Tag::new_checked(b"").is_err());
        assert!(Tag::new_checked(b"abc").is_err());
        assert!(Tag::new_checked(b"abcd").is_ok());
        assert!(Tag::new_checked(b"abcde").is_err());
        assert!(Tag::new_checked(b"cvt ").is_ok());
        assert!(Tag::new_checked(b"a   ").is_ok());
        assert!(Tag::new_checked(b"    ").is_ok());
        assert_eq!(
            Tag::new_checked(b" bcd"),
            Err(InvalidTag::ByteAfterSpace { pos: 1 })
        );
        assert_eq!(
            Tag::new_checked(b"b cd"),
            Err(InvalidTag::ByteAfterSpace { pos: 2 })
        );
        assert_eq!(Tag::new_checked(b"ab"), Err(InvalidTag::InvalidLength(2)));

        // ascii only:
        assert_eq!(
            Tag::new_checked(&[0x19, 0x33, 0x33, 0x33]),
            Err(InvalidTag::InvalidByte { pos: 0, byte: 0x19 })
        );
        assert!(Tag::new_checked(&[0x21, 0x33, 0x33, 0x33]).is_ok());
        assert!(Tag::new_checked(&[0x7E, 0x33, 0x33, 0x33]).is_ok());
        assert!(Tag::new_checked(&[0x33, 0x33, 0x33, 0x7F]).is_err());
        assert!(Tag::new_checked(&[0x33, 0x33, 0x33, 0xC3]).is_err());
    }

    #[test]
    fn every_valid_tag_round_trips() {
        // exhaustive over a representative alphabet: printable edges, space, letters
        let alphabet = [0x20u8, 0x21, b'0', b'A', b'z', 0x7E];
        for a in alphabet {
            for b in alphabet {
                for c in alphabet {
                    for d in alphabet {
                        let raw = [a, b, c, d];
                        let after_space = raw.windows(2).any(|w| w[0] == b' ' && w[1] != b' ');
                        match Tag::new_checked(&raw) {
                            Ok(tag) => {
                                assert!(!after_space, "{raw:?} should be rejected");
                                assert_eq!(tag.to_string().as_bytes(), &raw);
                                assert_eq!(tag.to_string().parse::<Tag>(), Ok(tag));
                            }
                            Err(err) => {
                                assert!(after_space, "{raw:?} rejected: {err}");
                                assert!(matches!(err, InvalidTag::ByteAfterSpace { .. }));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn bytewise_equality_and_ordering() {
        assert_eq!(Tag::new(b"name"), "name");
        assert_ne!(Tag::new(b"name"), Tag::new(b"Name"));
        assert!(Tag::new(b"OS/2") < Tag::new(b"cmap"));
        assert_eq!(Tag::new(b"name").to_u32(), 0x6E61_6D65);
    }

    #[test]
    fn display() {
        assert_eq!(Tag::new(b"cvt ").to_string(), "cvt ");
        assert_eq!(format!("{:?}", Tag::new(b"glyf")), "Tag(glyf)");
        let err = Tag::new_checked(&[b'a', 0x00, b'b', b'c']).unwrap_err();
        assert_eq!(err.to_string(), "Invalid byte 0x00 at index 1");
    }
}
