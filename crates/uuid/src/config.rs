//! Parse configuration.
//!
//! Configuration is resolved once by the caller (for example from an environment variable at
//! process startup) and passed in. This crate never reads the process environment itself.

use crate::fields::{checked_field, Field, Uuid};
use crate::parse::{split_fields, UuidInput};
use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// How parsed field content is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Fields are stored exactly as supplied.
    #[default]
    Lenient,
    /// Each field must be hex digits of its fixed width. Fields are lowercased.
    Strict,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Lenient => f.write_str("lenient"),
            ParseMode::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ParseMode {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            _ => Err(UuidError::InvalidConfig(format!(
                "unknown parse mode '{}' (expected 'lenient' or 'strict')",
                s
            ))),
        }
    }
}

/// Parse the parse mode from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`ParseMode::default`].
pub fn parse_mode_from_env_value(value: Option<String>) -> UuidResult<ParseMode> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<ParseMode>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Parser configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseConfig {
    mode: ParseMode,
}

impl ParseConfig {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parses `input` according to this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Parse`] when the input shape is not recognised (see
    /// [`crate::parse`]). In [`ParseMode::Strict`], also returns [`UuidError::InvalidField`]
    /// for the first field that is not hex digits of its fixed width.
    pub fn parse<'a>(&self, input: impl Into<UuidInput<'a>>) -> UuidResult<Uuid> {
        let mut fields = split_fields(input.into())?;

        if self.mode == ParseMode::Strict {
            for (value, field) in fields.iter_mut().zip(Field::ALL) {
                checked_field(field, value).inspect_err(|e| {
                    tracing::debug!("rejected UUID input: {}", e);
                })?;
                value.make_ascii_lowercase();
            }
        }

        Ok(Uuid::from_fields(fields))
    }
}
