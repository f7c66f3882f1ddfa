//! RFC 4122 UUID fields, parsing and name-based/random generation.
//!
//! A [`Uuid`] is held as its six RFC 4122 fields, each a fixed-width hexadecimal string:
//!
//! | field                  | hex digits | bits |
//! |------------------------|-----------:|-----:|
//! | `time_low`             | 8          | 32   |
//! | `time_mid`             | 4          | 16   |
//! | `time_hi_version`      | 4          | 16   |
//! | `clock_seq_hi_variant` | 2          | 8    |
//! | `clock_seq_low`        | 2          | 8    |
//! | `node`                 | 12         | 48   |
//!
//! The canonical string joins them as
//! `time_low-time_mid-time_hi_version-<clock_seq_hi_variant><clock_seq_low>-node`, for example
//! `6ba7b810-9dad-11d1-80b4-00c04fd430c8`.
//!
//! This crate provides:
//! - [`is_valid`] - a purely syntactic check (optional braces, optional hyphens, any case).
//! - [`parse`] - braced, URN and plain strings as well as positional/keyed field collections.
//! - [`new_v3`], [`new_v4`] and [`new_v5`] - RFC 4122 §4.3/§4.4 generators.
//! - [`to_binary`] - the 16-byte form of a UUID string, as hashed for name-based UUIDs.
//!
//! ## Lenient and strict parsing
//! By default parsed fields are stored exactly as supplied; nothing checks that they are hex.
//! Use [`ParseConfig`] with [`ParseMode::Strict`] to reject fields that are not hex digits of
//! their fixed width.
//!
//! ## Example
//! ```
//! use rfc_uuid::{new_v5, parse, NAMESPACE_DNS};
//!
//! let id = new_v5(NAMESPACE_DNS, b"python.org").unwrap();
//! assert_eq!(id.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! assert_eq!(parse(id.to_urn().as_str()).unwrap(), id);
//! ```

mod config;
mod fields;
mod generate;
mod parse;
mod validate;

// Re-export public types
pub use config::{parse_mode_from_env_value, ParseConfig, ParseMode};
pub use fields::{list_fields, Field, Uuid, Version};
pub use generate::{
    new_v3, new_v4, new_v4_with_rng, new_v5, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL,
    NAMESPACE_X500, NIL,
};
#[cfg(feature = "serde")]
pub use parse::parse_json;
pub use parse::{parse, UuidInput};
pub use validate::{is_valid, to_binary};

/// Why a parse attempt was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A string input did not split into the five hyphen-delimited groups.
    #[error("malformed string")]
    MalformedString,
    /// A field collection had the wrong size or was missing fields.
    #[error("malformed collection")]
    MalformedCollection,
    /// The input was neither a string nor a field collection.
    #[error("unsupported input type")]
    UnsupportedInput,
}

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// The input could not be parsed into UUID fields.
    #[error("could not parse UUID: {0}")]
    Parse(ParseErrorKind),

    /// A namespace argument is not a syntactically valid UUID.
    #[error("the UUID provided for the namespace is not valid: '{0}'")]
    InvalidNamespace(String),

    /// A field was requested by a name that is not one of the six UUID fields.
    #[error("invalid field name: '{0}'")]
    InvalidFieldName(String),

    /// A version outside {3, 4, 5} was supplied.
    #[error("invalid UUID version: {0} (expected 3, 4 or 5)")]
    InvalidVersion(u8),

    /// A field does not hold hex digits of its fixed width.
    #[error("field {field} must be {width} hex digits, got: '{value}'", width = field.width())]
    InvalidField { field: Field, value: String },

    /// A configuration value could not be understood.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<ParseErrorKind> for UuidError {
    fn from(kind: ParseErrorKind) -> Self {
        UuidError::Parse(kind)
    }
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
