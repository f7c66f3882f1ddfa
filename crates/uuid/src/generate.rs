//! RFC 4122 generators for version 3, 4 and 5 UUIDs.
//!
//! Version 3 and 5 UUIDs are name-based: the 16-byte namespace is hashed together with a name
//! (MD5 for v3, SHA-1 for v5), so the same namespace and name always give the same UUID.
//! Version 4 UUIDs are random.
//!
//! Every generated UUID carries its version number in the top four bits of `time_hi_version`
//! and the RFC 4122 variant (`10` in binary) in the top two bits of `clock_seq_hi_variant`.

use crate::fields::{Uuid, Version};
use crate::validate::to_binary;
use crate::UuidResult;
use md5::Md5;
use rand::Rng;
use sha1::{Digest, Sha1};

/// DNS namespace from RFC 4122 appendix C.
pub const NAMESPACE_DNS: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

/// URL namespace from RFC 4122 appendix C.
pub const NAMESPACE_URL: &str = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";

/// ISO OID namespace from RFC 4122 appendix C.
pub const NAMESPACE_OID: &str = "6ba7b812-9dad-11d1-80b4-00c04fd430c8";

/// X.500 DN namespace from RFC 4122 appendix C.
pub const NAMESPACE_X500: &str = "6ba7b814-9dad-11d1-80b4-00c04fd430c8";

/// The nil UUID, all 128 bits zero.
pub const NIL: &str = "00000000-0000-0000-0000-000000000000";

/// Generates a version 3 (MD5, name-based) UUID.
///
/// # Arguments
///
/// * `namespace` - A UUID string in any form accepted by [`crate::is_valid`].
/// * `name` - The name to derive the UUID from.
///
/// # Errors
///
/// Returns [`crate::UuidError::InvalidNamespace`] if `namespace` is not a valid UUID.
pub fn new_v3(namespace: &str, name: impl AsRef<[u8]>) -> UuidResult<Uuid> {
    name_based::<Md5>(namespace, name.as_ref(), Version::V3)
}

/// Generates a version 5 (SHA-1, name-based) UUID.
///
/// Prefer this over [`new_v3`] for new namespaces.
///
/// # Errors
///
/// Returns [`crate::UuidError::InvalidNamespace`] if `namespace` is not a valid UUID.
pub fn new_v5(namespace: &str, name: impl AsRef<[u8]>) -> UuidResult<Uuid> {
    name_based::<Sha1>(namespace, name.as_ref(), Version::V5)
}

fn name_based<D: Digest>(namespace: &str, name: &[u8], version: Version) -> UuidResult<Uuid> {
    let namespace_bytes = to_binary(namespace)?;

    let mut hasher = D::new();
    hasher.update(namespace_bytes);
    hasher.update(name);
    let digest = hasher.finalize();

    // SHA-1 gives 20 bytes; only the first 16 are used.
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes[6] = (bytes[6] & 0x0f) | (version.as_u8() << 4);
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    tracing::trace!("derived v{} UUID in namespace {}", version, namespace);

    Ok(Uuid::from_bytes(bytes).with_provenance(
        Some(version),
        Some(namespace.to_owned()),
        Some(name.to_vec()),
    ))
}

/// Generates a version 4 (random) UUID using the thread-local random number generator.
pub fn new_v4() -> Uuid {
    new_v4_with_rng(&mut rand::thread_rng())
}

/// Generates a version 4 (random) UUID from the supplied random number generator.
///
/// Six 16-bit draws fill the UUID: two for `time_low`, one for `time_mid`, 12 bits for
/// `time_hi_version`, 14 bits for the clock sequence and three for `node`. The version and
/// variant bits are then forced.
///
/// Passing a seeded generator makes the output reproducible.
pub fn new_v4_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut draw = |max: u16| -> u16 { rng.gen_range(0..=max) };

    let time_low = [draw(0xffff), draw(0xffff)];
    let time_mid = draw(0xffff);
    let time_hi_version = draw(0x0fff) | 0x4000;
    let clock_seq = draw(0x3fff) | 0x8000;
    let node = [draw(0xffff), draw(0xffff), draw(0xffff)];

    let mut bytes = [0u8; 16];
    bytes[0..2].copy_from_slice(&time_low[0].to_be_bytes());
    bytes[2..4].copy_from_slice(&time_low[1].to_be_bytes());
    bytes[4..6].copy_from_slice(&time_mid.to_be_bytes());
    bytes[6..8].copy_from_slice(&time_hi_version.to_be_bytes());
    bytes[8..10].copy_from_slice(&clock_seq.to_be_bytes());
    for (chunk, value) in bytes[10..16].chunks_exact_mut(2).zip(node) {
        chunk.copy_from_slice(&value.to_be_bytes());
    }

    tracing::trace!("drew v4 UUID");

    Uuid::from_bytes(bytes).with_provenance(Some(Version::V4), None, None)
}
