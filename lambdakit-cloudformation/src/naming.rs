//! Deterministic logical resource naming
//!
//! Logical names cross-reference generated resources within a template, so
//! they must be unique per role and stable across repeated synthesis runs of
//! the same service. A content-seeded checksum suffix gives both without any
//! per-run randomness.

/// Build a logical resource name from a role (e.g. `"DNSRecord"`) and a
/// stable seed string.
///
/// Equal inputs always produce the same name, so re-deploying a service
/// addresses the same logical resources.
#[must_use]
pub fn resource_name(role: &str, seed: &str) -> String {
    format!("{}{:08x}", role, crc32fast::hash(seed.as_bytes()))
}
