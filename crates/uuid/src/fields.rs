//! The UUID value type and its six fields.
//!
//! A [`Uuid`] stores each RFC 4122 field as an opaque string. Values produced by the generators
//! are always lowercase hex of the correct width; values built by lenient parsing carry whatever
//! the caller supplied.

use crate::parse::UuidInput;
use crate::validate::is_hex;
use crate::{UuidError, UuidResult};
use std::hash::{Hash, Hasher};
use std::{fmt, str::FromStr};

/// One of the six fields of an RFC 4122 UUID, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    TimeLow,
    TimeMid,
    TimeHiVersion,
    ClockSeqHiVariant,
    ClockSeqLow,
    Node,
}

impl Field {
    /// All fields in the order they appear in the canonical string.
    pub const ALL: [Field; 6] = [
        Field::TimeLow,
        Field::TimeMid,
        Field::TimeHiVersion,
        Field::ClockSeqHiVariant,
        Field::ClockSeqLow,
        Field::Node,
    ];

    /// Returns the field's name as used in keyed collections.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::TimeLow => "time_low",
            Field::TimeMid => "time_mid",
            Field::TimeHiVersion => "time_hi_version",
            Field::ClockSeqHiVariant => "clock_seq_hi_variant",
            Field::ClockSeqLow => "clock_seq_low",
            Field::Node => "node",
        }
    }

    /// Returns the number of hex digits the field holds.
    pub fn width(self) -> usize {
        match self {
            Field::TimeLow => 8,
            Field::TimeMid | Field::TimeHiVersion => 4,
            Field::ClockSeqHiVariant | Field::ClockSeqLow => 2,
            Field::Node => 12,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UuidError::InvalidFieldName(s.to_owned()))
    }
}

/// Returns the six field names in canonical order.
pub fn list_fields() -> [&'static str; 6] {
    Field::ALL.map(Field::as_str)
}

/// A UUID version this crate knows how to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Version {
    /// Name-based, MD5.
    V3 = 3,
    /// Random.
    V4 = 4,
    /// Name-based, SHA-1.
    V5 = 5,
}

impl Version {
    /// Returns the version number, as stored in the top four bits of `time_hi_version`.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Version {
    type Error = UuidError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Version::V3),
            4 => Ok(Version::V4),
            5 => Ok(Version::V5),
            other => Err(UuidError::InvalidVersion(other)),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A UUID held as its six fields, plus optional provenance.
///
/// The version, namespace and name are informational. They are recorded by the generators or
/// supplied explicitly through [`Uuid::from_input`], and are never inferred from the field bits.
///
/// Equality and hashing consider the six fields only, so a parsed copy of a generated UUID
/// compares equal to the original even though it has no provenance.
///
/// There are no setters; a `Uuid` is immutable once constructed.
#[derive(Clone, Debug)]
pub struct Uuid {
    fields: [String; 6],
    version: Option<Version>,
    namespace: Option<String>,
    name: Option<Vec<u8>>,
}

impl Uuid {
    /// Builds a UUID directly from its six fields, in canonical order.
    ///
    /// The field strings are stored as given. No hex or width check is applied.
    pub fn from_fields(fields: [String; 6]) -> Self {
        Self {
            fields,
            version: None,
            namespace: None,
            name: None,
        }
    }

    /// Builds a UUID from its 16-byte binary form.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self::from_fields([
            hex::encode(&bytes[0..4]),
            hex::encode(&bytes[4..6]),
            hex::encode(&bytes[6..8]),
            hex::encode(&bytes[8..9]),
            hex::encode(&bytes[9..10]),
            hex::encode(&bytes[10..16]),
        ])
    }

    /// Parses `input` and records the supplied provenance.
    ///
    /// # Arguments
    ///
    /// * `input` - Any form accepted by [`crate::parse`].
    /// * `version` - The version the caller knows this UUID to have, if any.
    /// * `namespace` - The namespace the UUID was derived from, if known.
    /// * `name` - The name the UUID was derived from, if known.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Parse`] if `input` cannot be parsed, or
    /// [`UuidError::InvalidVersion`] if `version` is not 3, 4 or 5.
    pub fn from_input<'a>(
        input: impl Into<UuidInput<'a>>,
        version: Option<u8>,
        namespace: Option<&str>,
        name: Option<&[u8]>,
    ) -> UuidResult<Self> {
        let parsed = crate::parse(input)?;
        let version = version.map(Version::try_from).transpose()?;
        Ok(parsed.with_provenance(version, namespace.map(str::to_owned), name.map(<[u8]>::to_vec)))
    }

    pub(crate) fn with_provenance(
        mut self,
        version: Option<Version>,
        namespace: Option<String>,
        name: Option<Vec<u8>>,
    ) -> Self {
        self.version = version;
        self.namespace = namespace;
        self.name = name;
        self
    }

    /// Returns the value of `field`.
    pub fn field(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// Returns the value of the field called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidFieldName`] if `name` is not one of [`list_fields`].
    pub fn field_by_name(&self, name: &str) -> UuidResult<&str> {
        let field: Field = name.parse()?;
        Ok(self.field(field))
    }

    /// Returns the 32-bit `time_low` field.
    pub fn time_low(&self) -> &str {
        self.field(Field::TimeLow)
    }

    /// Returns the 16-bit `time_mid` field.
    pub fn time_mid(&self) -> &str {
        self.field(Field::TimeMid)
    }

    /// Returns the 16-bit `time_hi_version` field.
    pub fn time_hi_version(&self) -> &str {
        self.field(Field::TimeHiVersion)
    }

    /// Returns the 8-bit `clock_seq_hi_variant` field.
    pub fn clock_seq_hi_variant(&self) -> &str {
        self.field(Field::ClockSeqHiVariant)
    }

    /// Returns the 8-bit `clock_seq_low` field.
    pub fn clock_seq_low(&self) -> &str {
        self.field(Field::ClockSeqLow)
    }

    /// Returns the 48-bit `node` field.
    pub fn node(&self) -> &str {
        self.field(Field::Node)
    }

    /// Returns the recorded version, if known.
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// Returns the namespace this UUID was derived from, if known.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the name this UUID was derived from, if known.
    pub fn name(&self) -> Option<&[u8]> {
        self.name.as_deref()
    }

    /// Returns the canonical hyphenated form, e.g. `6ba7b810-9dad-11d1-80b4-00c04fd430c8`.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Returns the URN form, e.g. `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8`.
    pub fn to_urn(&self) -> String {
        format!("urn:uuid:{}", self)
    }

    /// Returns the canonical form wrapped in braces.
    pub fn to_braced_string(&self) -> String {
        format!("{{{}}}", self)
    }

    /// Returns the 16-byte binary form.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidField`] for the first field that is not hex digits of its
    /// fixed width. Only leniently parsed values can fail here.
    pub fn to_bytes(&self) -> UuidResult<[u8; 16]> {
        let mut bytes = [0u8; 16];
        let mut offset = 0;
        for field in Field::ALL {
            let value = self.field(field);
            let len = field.width() / 2;
            hex::decode_to_slice(value, &mut bytes[offset..offset + len]).map_err(|_| {
                UuidError::InvalidField {
                    field,
                    value: value.to_owned(),
                }
            })?;
            offset += len;
        }
        Ok(bytes)
    }

    /// Converts to a [`uuid::Uuid`].
    ///
    /// # Errors
    ///
    /// Fails as [`Uuid::to_bytes`] does.
    pub fn to_uuid(&self) -> UuidResult<::uuid::Uuid> {
        Ok(::uuid::Uuid::from_bytes(self.to_bytes()?))
    }
}

/// Returns `value` if it is hex digits of `field`'s width.
pub(crate) fn checked_field(field: Field, value: &str) -> UuidResult<&str> {
    if value.len() == field.width() && is_hex(value) {
        return Ok(value);
    }
    Err(UuidError::InvalidField {
        field,
        value: value.to_owned(),
    })
}

impl fmt::Display for Uuid {
    /// Formats the UUID in canonical form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}{}-{}",
            self.time_low(),
            self.time_mid(),
            self.time_hi_version(),
            self.clock_seq_hi_variant(),
            self.clock_seq_low(),
            self.node()
        )
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Parses a braced, URN or plain UUID string leniently.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl PartialEq for Uuid {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for Uuid {}

impl Hash for Uuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}

impl From<::uuid::Uuid> for Uuid {
    fn from(value: ::uuid::Uuid) -> Self {
        Uuid::from_bytes(value.into_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::parse(s.as_str()).map_err(serde::de::Error::custom)
    }
}
