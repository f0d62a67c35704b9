//! # BRFC Fingerprint Engine
//!
//! A BRFC identifier is derived, never assigned:
//!
//! ```text
//! digest = SHA256(SHA256(trim(title) || trim(author) || trim(version)))
//! id     = hex(reverse(digest)[..6])
//! ```
//!
//! The reversal puts the digest in Bitcoin display order, which is what the
//! published bsvalias vectors are written against. Any two implementations
//! that agree on the trimmed fields agree on the identifier.

use crate::{BrfcError, Result, SpecField};
use sha2::{Digest, Sha256};

/// Number of hex characters in a BRFC identifier.
pub const BRFC_ID_LEN: usize = 12;

/// Number of digest bytes kept in an identifier.
const ID_BYTES: usize = BRFC_ID_LEN / 2;

/// Trimmed (author, title, version), or the first field that is empty.
fn canonical_fields<'a>(
    author: &'a str,
    title: &'a str,
    version: &'a str,
) -> Result<(&'a str, &'a str, &'a str)> {
    let author = author.trim();
    if author.is_empty() {
        return Err(BrfcError::missing(SpecField::Author));
    }
    let title = title.trim();
    if title.is_empty() {
        return Err(BrfcError::missing(SpecField::Title));
    }
    let version = version.trim();
    if version.is_empty() {
        return Err(BrfcError::missing(SpecField::Version));
    }
    Ok((author, title, version))
}

/// Compute the BRFC identifier for a specification's descriptive fields.
///
/// Surrounding whitespace is ignored. Fails with
/// [`BrfcError::MissingField`] naming the first of author, title, version
/// that is empty after trimming.
///
/// # Example
///
/// ```
/// use paymail_brfc::fingerprint;
///
/// let id = fingerprint("MrZ", "New BRFC", "1").unwrap();
/// assert_eq!(id, "e898079d7d1a");
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace"))]
pub fn fingerprint(author: &str, title: &str, version: &str) -> Result<String> {
    let (author, title, version) = canonical_fields(author, title, version)?;

    let first = Sha256::new()
        .chain_update(title)
        .chain_update(author)
        .chain_update(version)
        .finalize();
    let digest = Sha256::digest(first);

    let display: Vec<u8> = digest.iter().rev().take(ID_BYTES).copied().collect();
    Ok(hex::encode(display))
}

/// True if `id` has the shape of a BRFC identifier: 12 lowercase hex digits.
pub fn is_well_formed_id(id: &str) -> bool {
    id.len() == BRFC_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
