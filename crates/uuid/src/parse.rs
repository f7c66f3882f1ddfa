//! Parsing UUIDs from strings and field collections.
//!
//! Recognised inputs, in order of precedence:
//! 1. `{...}` - braces are stripped and the rest parsed as a plain string.
//! 2. `urn:uuid:...` - the prefix is stripped and the rest parsed as a plain string.
//! 3. A plain string of five hyphen-delimited groups. The fourth group holds
//!    `clock_seq_hi_variant` (its first two characters) followed by `clock_seq_low`.
//! 4. A positional collection of exactly six field strings with a non-empty first element.
//! 5. A keyed collection holding exactly the six field names.

use crate::config::ParseConfig;
use crate::fields::{Field, Uuid};
use crate::{ParseErrorKind, UuidResult};
use std::collections::{BTreeMap, HashMap};

/// Literal prefix of the URN form.
const URN_PREFIX: &str = "urn:uuid:";

/// Input accepted by [`parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UuidInput<'a> {
    /// A braced, URN or plain hyphenated string.
    Text(&'a str),
    /// Six field values in canonical order.
    Positional(Vec<String>),
    /// Field values keyed by field name (see [`crate::list_fields`]).
    Keyed(BTreeMap<String, String>),
}

impl<'a> From<&'a str> for UuidInput<'a> {
    fn from(value: &'a str) -> Self {
        UuidInput::Text(value)
    }
}

impl<'a> From<&'a String> for UuidInput<'a> {
    fn from(value: &'a String) -> Self {
        UuidInput::Text(value.as_str())
    }
}

impl From<Vec<String>> for UuidInput<'_> {
    fn from(value: Vec<String>) -> Self {
        UuidInput::Positional(value)
    }
}

impl From<Vec<&str>> for UuidInput<'_> {
    fn from(value: Vec<&str>) -> Self {
        UuidInput::Positional(value.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for UuidInput<'_> {
    fn from(value: [&str; N]) -> Self {
        UuidInput::Positional(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl From<BTreeMap<String, String>> for UuidInput<'_> {
    fn from(value: BTreeMap<String, String>) -> Self {
        UuidInput::Keyed(value)
    }
}

impl From<HashMap<String, String>> for UuidInput<'_> {
    fn from(value: HashMap<String, String>) -> Self {
        UuidInput::Keyed(value.into_iter().collect())
    }
}

/// Parses `input` into a [`Uuid`] using the default (lenient) configuration.
///
/// Field strings are stored as supplied. No hex check is applied; see [`ParseConfig`] for
/// strict parsing.
///
/// # Errors
///
/// Returns [`crate::UuidError::Parse`] with:
/// - [`ParseErrorKind::MalformedString`] if a string does not split into five groups, or its
///   fourth group is shorter than two characters.
/// - [`ParseErrorKind::MalformedCollection`] if a collection is not six fields, or a positional
///   collection has an empty first element, or a keyed collection is missing a field.
pub fn parse<'a>(input: impl Into<UuidInput<'a>>) -> UuidResult<Uuid> {
    ParseConfig::default().parse(input)
}

/// Parses a dynamically typed JSON value into a [`Uuid`].
///
/// Strings are parsed as text, arrays as positional collections and objects as keyed
/// collections. Collection elements must all be strings.
///
/// # Errors
///
/// As [`parse`], plus [`ParseErrorKind::UnsupportedInput`] for numbers, booleans and `null`.
#[cfg(feature = "serde")]
pub fn parse_json(value: &serde_json::Value) -> UuidResult<Uuid> {
    use serde_json::Value;

    fn as_string(value: &Value) -> UuidResult<String> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ParseErrorKind::MalformedCollection.into())
    }

    let input = match value {
        Value::String(s) => UuidInput::Text(s.as_str()),
        Value::Array(items) => {
            UuidInput::Positional(items.iter().map(as_string).collect::<UuidResult<_>>()?)
        }
        Value::Object(map) => UuidInput::Keyed(
            map.iter()
                .map(|(key, value)| as_string(value).map(|value| (key.clone(), value)))
                .collect::<UuidResult<_>>()?,
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            tracing::debug!("rejected UUID input: unsupported JSON type");
            return Err(ParseErrorKind::UnsupportedInput.into());
        }
    };

    parse(input)
}

/// Splits `input` into the six field strings, without checking their content.
pub(crate) fn split_fields(input: UuidInput<'_>) -> Result<[String; 6], ParseErrorKind> {
    let result = match input {
        UuidInput::Text(text) => split_text(text),
        UuidInput::Positional(values) => split_positional(values),
        UuidInput::Keyed(map) => split_keyed(map),
    };

    if let Err(kind) = &result {
        tracing::debug!("rejected UUID input: {}", kind);
    }
    result
}

fn split_text(text: &str) -> Result<[String; 6], ParseErrorKind> {
    if let Some(inner) = text
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        return split_plain(inner);
    }
    if let Some(inner) = text.strip_prefix(URN_PREFIX) {
        return split_plain(inner);
    }
    split_plain(text)
}

fn split_plain(text: &str) -> Result<[String; 6], ParseErrorKind> {
    let parts: Vec<&str> = text.split('-').collect();
    let [time_low, time_mid, time_hi_version, clock_seq, node] = parts.as_slice() else {
        return Err(ParseErrorKind::MalformedString);
    };

    let split = match clock_seq.char_indices().nth(2) {
        Some((at, _)) => at,
        None if clock_seq.chars().count() == 2 => clock_seq.len(),
        None => return Err(ParseErrorKind::MalformedString),
    };
    let (clock_seq_hi_variant, clock_seq_low) = clock_seq.split_at(split);

    Ok([
        (*time_low).to_owned(),
        (*time_mid).to_owned(),
        (*time_hi_version).to_owned(),
        clock_seq_hi_variant.to_owned(),
        clock_seq_low.to_owned(),
        (*node).to_owned(),
    ])
}

fn split_positional(values: Vec<String>) -> Result<[String; 6], ParseErrorKind> {
    let fields: [String; 6] = values
        .try_into()
        .map_err(|_| ParseErrorKind::MalformedCollection)?;

    if fields[0].is_empty() {
        return Err(ParseErrorKind::MalformedCollection);
    }
    Ok(fields)
}

fn split_keyed(mut map: BTreeMap<String, String>) -> Result<[String; 6], ParseErrorKind> {
    if map.len() != Field::ALL.len() {
        return Err(ParseErrorKind::MalformedCollection);
    }

    let mut fields: [String; 6] = Default::default();
    for (slot, field) in fields.iter_mut().zip(Field::ALL) {
        *slot = map
            .remove(field.as_str())
            .ok_or(ParseErrorKind::MalformedCollection)?;
    }

    if fields[0].is_empty() {
        return Err(ParseErrorKind::MalformedCollection);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UuidError;

    const CANONICAL: &str = "35e872b4-190a-5faa-a0f6-09da0d4f9c01";

    fn keyed() -> BTreeMap<String, String> {
        [
            ("time_low", "35e872b4"),
            ("time_mid", "190a"),
            ("time_hi_version", "5faa"),
            ("clock_seq_hi_variant", "a0"),
            ("clock_seq_low", "f6"),
            ("node", "09da0d4f9c01"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }

    fn expect_parse_error(result: UuidResult<Uuid>, expected: ParseErrorKind) {
        match result {
            Err(UuidError::Parse(kind)) => assert_eq!(kind, expected),
            other => panic!("Expected Parse({:?}) error, got {:?}", expected, other),
        }
    }

    #[test]
    fn test_parse_plain_string() {
        let uuid = parse(CANONICAL).unwrap();

        assert_eq!(uuid.time_low(), "35e872b4");
        assert_eq!(uuid.time_mid(), "190a");
        assert_eq!(uuid.time_hi_version(), "5faa");
        assert_eq!(uuid.clock_seq_hi_variant(), "a0");
        assert_eq!(uuid.clock_seq_low(), "f6");
        assert_eq!(uuid.node(), "09da0d4f9c01");
        assert_eq!(uuid.to_string(), CANONICAL);
    }

    #[test]
    fn test_parse_braced_string() {
        let uuid = parse("{886313e1-3b8a-5372-9b90-0c9aee199e5d}").unwrap();

        assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
    }

    #[test]
    fn test_parse_urn_string() {
        let uuid = parse("urn:uuid:35e872b4-190a-5faa-a0f6-09da0d4f9c01").unwrap();

        assert_eq!(uuid.to_string(), CANONICAL);
        assert_eq!(uuid.to_urn(), "urn:uuid:35e872b4-190a-5faa-a0f6-09da0d4f9c01");
    }

    #[test]
    fn test_wrapped_forms_match_plain_form() {
        let plain = parse(CANONICAL).unwrap();
        let braced = parse(format!("{{{}}}", CANONICAL).as_str()).unwrap();
        let urn = parse(format!("urn:uuid:{}", CANONICAL).as_str()).unwrap();

        assert_eq!(plain, braced);
        assert_eq!(plain, urn);
    }

    #[test]
    fn test_parse_rejects_six_segments() {
        expect_parse_error(
            parse("{35e872b4-190a-5faa-a0f6-09da0d4f9c01-453}"),
            ParseErrorKind::MalformedString,
        );
    }

    #[test]
    fn test_parse_rejects_too_few_segments() {
        expect_parse_error(parse("35e872b4190a5faaa0f609da0d4f9c01"), ParseErrorKind::MalformedString);
        expect_parse_error(parse(""), ParseErrorKind::MalformedString);
    }

    #[test]
    fn test_parse_rejects_short_clock_seq_segment() {
        expect_parse_error(
            parse("35e872b4-190a-5faa-a-09da0d4f9c01"),
            ParseErrorKind::MalformedString,
        );
    }

    #[test]
    fn test_parse_splits_clock_seq_by_character() {
        let uuid = parse("35e872b4-190a-5faa-aéb-09da0d4f9c01").unwrap();
        assert_eq!(uuid.clock_seq_hi_variant(), "aé");
        assert_eq!(uuid.clock_seq_low(), "b");

        let uuid = parse("35e872b4-190a-5faa-éé-09da0d4f9c01").unwrap();
        assert_eq!(uuid.clock_seq_hi_variant(), "éé");
        assert_eq!(uuid.clock_seq_low(), "");

        expect_parse_error(
            parse("35e872b4-190a-5faa-é-09da0d4f9c01"),
            ParseErrorKind::MalformedString,
        );
    }

    #[test]
    fn test_parse_does_not_check_hex() {
        let uuid = parse("not-hex-at-all-here").unwrap();

        assert_eq!(uuid.time_low(), "not");
        assert_eq!(uuid.clock_seq_hi_variant(), "al");
        assert_eq!(uuid.clock_seq_low(), "l");
        assert_eq!(uuid.node(), "here");
    }

    #[test]
    fn test_parse_keeps_case() {
        let uuid = parse("35E872B4-190A-5FAA-A0F6-09DA0D4F9C01").unwrap();

        assert_eq!(uuid.time_low(), "35E872B4");
    }

    #[test]
    fn test_parse_positional_collection() {
        let uuid = parse(["35e872b4", "190a", "5faa", "a0", "f6", "09da0d4f9c01"]).unwrap();

        assert_eq!(uuid.to_string(), CANONICAL);
    }

    #[test]
    fn test_parse_positional_rejects_wrong_size() {
        expect_parse_error(
            parse(["35e872b4", "190a", "5faa", "a0", "f6"]),
            ParseErrorKind::MalformedCollection,
        );
        expect_parse_error(
            parse(vec!["35e872b4", "190a", "5faa", "a0", "f6", "09da", "0d4f9c01"]),
            ParseErrorKind::MalformedCollection,
        );
    }

    #[test]
    fn test_parse_positional_rejects_empty_first_element() {
        expect_parse_error(
            parse(["", "190a", "5faa", "a0", "f6", "09da0d4f9c01"]),
            ParseErrorKind::MalformedCollection,
        );
    }

    #[test]
    fn test_parse_keyed_collection() {
        let uuid = parse(keyed()).unwrap();
        assert_eq!(uuid.to_string(), CANONICAL);

        let hashed: HashMap<String, String> = keyed().into_iter().collect();
        assert_eq!(parse(hashed).unwrap(), uuid);
    }

    #[test]
    fn test_parse_keyed_rejects_missing_field() {
        let mut map = keyed();
        map.remove("node");
        expect_parse_error(parse(map), ParseErrorKind::MalformedCollection);

        let mut map = keyed();
        map.remove("node");
        map.insert("nodes".into(), "09da0d4f9c01".into());
        expect_parse_error(parse(map), ParseErrorKind::MalformedCollection);
    }

    #[test]
    fn test_parse_keyed_rejects_empty_time_low() {
        let mut map = keyed();
        map.insert("time_low".into(), String::new());

        expect_parse_error(parse(map), ParseErrorKind::MalformedCollection);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_json_values() {
        let from_string = parse_json(&serde_json::json!(CANONICAL)).unwrap();
        let from_array =
            parse_json(&serde_json::json!(["35e872b4", "190a", "5faa", "a0", "f6", "09da0d4f9c01"]))
                .unwrap();
        let from_object = parse_json(&serde_json::json!({
            "time_low": "35e872b4",
            "time_mid": "190a",
            "time_hi_version": "5faa",
            "clock_seq_hi_variant": "a0",
            "clock_seq_low": "f6",
            "node": "09da0d4f9c01",
        }))
        .unwrap();

        assert_eq!(from_string, from_array);
        assert_eq!(from_string, from_object);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_json_rejects_unsupported_types() {
        for value in [serde_json::json!(42), serde_json::json!(true), serde_json::Value::Null] {
            expect_parse_error(parse_json(&value), ParseErrorKind::UnsupportedInput);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_json_rejects_non_string_elements() {
        expect_parse_error(
            parse_json(&serde_json::json!(["35e872b4", 190, "5faa", "a0", "f6", "09da0d4f9c01"])),
            ParseErrorKind::MalformedCollection,
        );
    }
}
