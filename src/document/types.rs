//! Typed records for maze documents.
//!
//! Rooms and links are deserialized straight from the input document.
//! Identifiers and tags are coerced the way a hand-written YAML file
//! tends to need: `number: "07"` and `number: 7` are the same room.

use std::fmt;

use serde::{de, Deserialize, Deserializer};

/// A room identifier.
///
/// Displays as plain decimal. Use [`RoomNumber::padded`] for the
/// two-digit form used in filenames, passage names and map ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomNumber(u32);

impl RoomNumber {
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero-padded to a minimum of two digits: 7 -> "07", 123 -> "123".
    pub fn padded(self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomNumber {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for RoomNumber {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawNumber::deserialize(deserializer)? {
            RawNumber::Int(n) => u32::try_from(n).map(RoomNumber).map_err(|_| {
                de::Error::custom(format!("room number {} is out of range", n))
            }),
            RawNumber::Text(s) => s.trim().parse::<u32>().map(RoomNumber).map_err(|_| {
                de::Error::custom(format!("'{}' is not a room number", s))
            }),
        }
    }
}

/// Any YAML/JSON scalar, kept as its textual form.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl RawScalar {
    fn into_string(self) -> String {
        match self {
            RawScalar::Text(s) => s,
            RawScalar::Int(n) => n.to_string(),
            RawScalar::Float(f) => f.to_string(),
            RawScalar::Bool(b) => b.to_string(),
        }
    }
}

/// An opaque room type label.
///
/// Only ever compared for equality: two linked rooms of the same type get
/// a plain passage link, rooms of different types get a transition link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag(String);

impl TypeTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawScalar::deserialize(deserializer).map(|raw| TypeTag(raw.into_string()))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A directed connection to another room.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    /// Destination room.
    pub dir: RoomNumber,
    /// Polygon coordinates for the clickable image-map area, passed through as-is.
    #[serde(deserialize_with = "scalar_string")]
    pub map: String,
}

impl Link {
    pub fn new(dir: u32, map: impl Into<String>) -> Self {
        Self {
            dir: RoomNumber(dir),
            map: map.into(),
        }
    }
}

/// One location in the maze.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    #[serde(rename = "type")]
    pub kind: TypeTag,
    pub intro: String,
    /// Description; paragraphs are separated by a blank line.
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<Link>,
}

impl Room {
    pub fn new(
        number: u32,
        kind: impl Into<String>,
        intro: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            number: RoomNumber(number),
            kind: TypeTag::new(kind),
            intro: intro.into(),
            text: text.into(),
            links: Vec::new(),
        }
    }

    /// Add an outgoing link (builder style).
    pub fn with_link(mut self, dir: u32, map: impl Into<String>) -> Self {
        self.links.push(Link::new(dir, map));
        self
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }
}

fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawScalar::deserialize(deserializer).map(RawScalar::into_string)
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Link>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Link>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
