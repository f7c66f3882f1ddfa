//! Syntactic UUID validation and hex/binary conversion.

use crate::{UuidError, UuidResult};

/// Hex digits in each hyphen-delimited group of a UUID string.
const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Returns true if `candidate` looks like a UUID.
///
/// Accepted shape:
/// - 32 hex digits (either case) grouped 8-4-4-4-12
/// - a `-` between groups is optional, independently at each of the four positions
/// - the whole string may be wrapped in a matching `{` `}` pair
///
/// The version and variant bits are not checked.
///
/// # Arguments
///
/// * `candidate` - String to check.
///
/// # Returns
///
/// Returns `true` if `candidate` has a valid UUID shape, otherwise `false`.
pub fn is_valid(candidate: &str) -> bool {
    let inner = match candidate.strip_prefix('{') {
        Some(rest) => match rest.strip_suffix('}') {
            Some(inner) => inner,
            None => return false,
        },
        None if candidate.ends_with('}') => return false,
        None => candidate,
    };

    let mut rest = inner.as_bytes();
    for (i, len) in GROUPS.into_iter().enumerate() {
        if i > 0 {
            if let [b'-', tail @ ..] = rest {
                rest = tail;
            }
        }
        if rest.len() < len || !rest[..len].iter().all(u8::is_ascii_hexdigit) {
            return false;
        }
        rest = &rest[len..];
    }
    rest.is_empty()
}

/// Converts a UUID string into its 16-byte binary form.
///
/// Braces and hyphens are stripped and each pair of hex digits becomes one byte, in order.
///
/// # Errors
///
/// Returns [`UuidError::InvalidNamespace`] if `uuid` does not pass [`is_valid`].
pub fn to_binary(uuid: &str) -> UuidResult<[u8; 16]> {
    if !is_valid(uuid) {
        tracing::debug!("rejected namespace '{}': not a valid UUID", uuid);
        return Err(UuidError::InvalidNamespace(uuid.to_owned()));
    }

    let digits: String = uuid
        .chars()
        .filter(|c| !matches!(c, '-' | '{' | '}'))
        .collect();

    let mut bytes = [0u8; 16];
    hex::decode_to_slice(&digits, &mut bytes)
        .map_err(|_| UuidError::InvalidNamespace(uuid.to_owned()))?;
    Ok(bytes)
}

/// Returns true if `input` is non-empty and made only of hex digits.
pub(crate) fn is_hex(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_hexdigit())
}
