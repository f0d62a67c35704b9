//! Specification entries.
//!
//! A [`BrfcSpec`] is both the in-registry value and the JSON record that
//! candidate batches are decoded from. String fields that are missing or
//! `null` in the JSON decode as empty, so that validation, not the decoder,
//! reports them.

use crate::fingerprint::fingerprint;
use crate::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Decode an absent or `null` string as empty.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A BRFC specification: descriptive metadata plus its derived identifier.
///
/// # Example
///
/// ```
/// use paymail_brfc::BrfcSpec;
///
/// let mut spec = BrfcSpec::new("MrZ", "New BRFC", "1");
/// spec.generate().unwrap();
/// assert_eq!(spec.id, "e898079d7d1a");
///
/// let check = spec.validate().unwrap();
/// assert!(check.valid);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BrfcSpec {
    /// Author(s) of the specification.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    /// 12 lowercase hex characters; empty until generated or supplied.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    /// Capability name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Human-readable documentation, no effect on the identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Usually a small integer as text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,
    /// Outcome of the last [`generate`](Self::generate) or
    /// [`validate`](Self::validate) call.
    #[serde(skip)]
    pub valid: bool,
}

/// Outcome of [`BrfcSpec::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdCheck {
    /// Whether the stored id matches the recomputed one.
    pub valid: bool,
    /// The correct identifier for the entry's current fields.
    pub computed_id: String,
}

impl BrfcSpec {
    /// Create a specification without an identifier.
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Set the stored identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the documentation URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Recompute the identifier from the current fields without touching the entry.
    pub fn computed_id(&self) -> Result<String> {
        fingerprint(&self.author, &self.title, &self.version)
    }

    /// Derive and store the identifier.
    ///
    /// On failure the stored id is cleared and the entry is marked invalid.
    pub fn generate(&mut self) -> Result<()> {
        match self.computed_id() {
            Ok(id) => {
                self.id = id;
                self.valid = true;
                Ok(())
            }
            Err(err) => {
                self.id.clear();
                self.valid = false;
                Err(err)
            }
        }
    }

    /// Check the stored identifier against the current fields.
    ///
    /// The stored id is never modified. A mismatch is not an error: the
    /// returned [`IdCheck`] carries the correct id so callers can repair
    /// the entry. Only a missing field fails, and marks the entry invalid.
    pub fn validate(&mut self) -> Result<IdCheck> {
        let computed_id = match self.computed_id() {
            Ok(id) => id,
            Err(err) => {
                self.valid = false;
                return Err(err);
            }
        };
        self.valid = computed_id == self.id;
        Ok(IdCheck {
            valid: self.valid,
            computed_id,
        })
    }

    /// True if the entry carries an identifier to check rather than generate.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Case-insensitive comparison of trimmed titles.
    pub fn same_title(&self, other: &str) -> bool {
        self.title.trim().to_lowercase() == other.trim().to_lowercase()
    }
}

// `valid` is cached state, not identity.
impl PartialEq for BrfcSpec {
    fn eq(&self, other: &Self) -> bool {
        self.author == other.author
            && self.id == other.id
            && self.title == other.title
            && self.url == other.url
            && self.version == other.version
    }
}

impl Eq for BrfcSpec {}

impl fmt::Display for BrfcSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} by {} [{}]",
            self.title.trim(),
            self.version.trim(),
            self.author.trim(),
            self.id
        )
    }
}
