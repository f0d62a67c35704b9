//! BRFC Specification Registry
//!
//! An ordered, deduplicated collection of [`BrfcSpec`]s owned by a single
//! [`Client`](crate::Client). It grows only through [`SpecRegistry::merge`]
//! and [`SpecRegistry::load_json`], which are all-or-nothing: a batch either
//! passes validation in full and is appended in order, or is rejected and
//! the registry is left exactly as it was.
//!
//! # Thread Safety
//!
//! Entries live behind an `RwLock`. Candidates are validated without the
//! lock, then the duplicate scan and the append happen under a single
//! write guard, so concurrent merges are serialized and readers never
//! observe a half-merged batch. A poisoned lock is recovered rather than
//! propagated: the guarded `Vec` is only ever pushed to, so it cannot be
//! left inconsistent.

use crate::fingerprint::is_well_formed_id;
use crate::known::known_specs;
use crate::{BrfcError, BrfcSpec, Result};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Which keys identify a candidate as already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Same id, or same title ignoring case.
    #[default]
    IdOrTitle,
    /// Same id only.
    IdOnly,
    /// Same title ignoring case only.
    TitleOnly,
}

impl DuplicatePolicy {
    /// True if `candidate` duplicates `existing` under this policy.
    pub fn matches(&self, existing: &BrfcSpec, candidate: &BrfcSpec) -> bool {
        let same_id = existing.id == candidate.id;
        let same_title = existing.same_title(&candidate.title);
        match self {
            Self::IdOrTitle => same_id || same_title,
            Self::IdOnly => same_id,
            Self::TitleOnly => same_title,
        }
    }
}

/// Outcome of a successful merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Ids appended, in order.
    pub added: Vec<String>,
    /// Ids skipped as duplicates, in order.
    pub skipped: Vec<String>,
}

impl MergeReport {
    /// True if the merge appended nothing.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty()
    }
}

/// Registry of known BRFC specifications.
///
/// # Example
///
/// ```
/// use paymail_brfc::SpecRegistry;
///
/// let registry = SpecRegistry::with_known_specs();
/// let before = registry.len();
///
/// let report = registry
///     .load_json(r#"[{"author":"MrZ","title":"New BRFC","version":"1"}]"#)
///     .unwrap();
/// assert_eq!(report.added, vec!["e898079d7d1a".to_string()]);
/// assert_eq!(registry.len(), before + 1);
/// ```
pub struct SpecRegistry {
    specs: RwLock<Vec<BrfcSpec>>,
    policy: DuplicatePolicy,
}

impl SpecRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            specs: RwLock::new(Vec::new()),
            policy: DuplicatePolicy::default(),
        }
    }

    /// Creates a registry seeded with the built-in catalog.
    pub fn with_known_specs() -> Self {
        Self {
            specs: RwLock::new(known_specs()),
            policy: DuplicatePolicy::default(),
        }
    }

    /// Creates a registry from caller-supplied specifications.
    ///
    /// The specifications go through the same validation as a merge.
    pub fn from_specs(specs: Vec<BrfcSpec>) -> Result<Self> {
        let registry = Self::new();
        registry.merge(specs)?;
        Ok(registry)
    }

    /// Sets the duplicate detection policy.
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The duplicate detection policy in effect.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Decodes a JSON array of specification records and merges it.
    ///
    /// Unknown fields are ignored. Fails with [`BrfcError::Parse`] if the
    /// text is not an array of records; otherwise behaves as
    /// [`merge`](Self::merge).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, json), fields(json_len = json.len())))]
    pub fn load_json(&self, json: &str) -> Result<MergeReport> {
        let candidates: Vec<BrfcSpec> = match serde_json::from_str(json) {
            Ok(candidates) => candidates,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%err, "rejected unparseable brfc batch");
                return Err(err.into());
            }
        };
        self.merge(candidates)
    }

    /// Validates every candidate, then appends the new ones in order.
    ///
    /// A candidate with no id gets one generated; a supplied id must match
    /// the fingerprint of the candidate's fields. Any failure rejects the
    /// whole batch. Candidates already present under the registry's
    /// [`DuplicatePolicy`] (including earlier ones in the same batch) are
    /// skipped, not rejected.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, candidates), fields(candidates = candidates.len())))]
    pub fn merge(&self, candidates: Vec<BrfcSpec>) -> Result<MergeReport> {
        let mut candidates = candidates;
        if let Err(err) = validate_candidates(&mut candidates) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%err, "rejected brfc batch");
            return Err(err);
        }

        let mut specs = self.specs.write().unwrap_or_else(|e| e.into_inner());
        let mut report = MergeReport::default();
        for candidate in candidates {
            if specs
                .iter()
                .any(|existing| self.policy.matches(existing, &candidate))
            {
                report.skipped.push(candidate.id);
                continue;
            }
            report.added.push(candidate.id.clone());
            specs.push(candidate);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            added = report.added.len(),
            skipped = report.skipped.len(),
            total = specs.len(),
            "merged brfc specifications"
        );

        Ok(report)
    }

    /// Returns the number of registered specifications.
    pub fn len(&self) -> usize {
        let specs = self.specs.read().unwrap_or_else(|e| e.into_inner());
        specs.len()
    }

    /// Returns true if no specifications are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets a specification by id.
    pub fn get(&self, id: &str) -> Option<BrfcSpec> {
        let specs = self.specs.read().unwrap_or_else(|e| e.into_inner());
        specs.iter().find(|spec| spec.id == id).cloned()
    }

    /// Gets a specification by title, ignoring case and surrounding whitespace.
    pub fn find_by_title(&self, title: &str) -> Option<BrfcSpec> {
        let specs = self.specs.read().unwrap_or_else(|e| e.into_inner());
        specs.iter().find(|spec| spec.same_title(title)).cloned()
    }

    /// Checks if an id is registered.
    pub fn contains_id(&self, id: &str) -> bool {
        let specs = self.specs.read().unwrap_or_else(|e| e.into_inner());
        specs.iter().any(|spec| spec.id == id)
    }

    /// Returns all registered ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        let specs = self.specs.read().unwrap_or_else(|e| e.into_inner());
        specs.iter().map(|spec| spec.id.clone()).collect()
    }

    /// Snapshot of all specifications in insertion order.
    pub fn specs(&self) -> Vec<BrfcSpec> {
        let specs = self.specs.read().unwrap_or_else(|e| e.into_inner());
        specs.clone()
    }

    /// Serializes the registry in the same shape [`load_json`](Self::load_json) accepts.
    pub fn to_json(&self) -> Result<String> {
        let specs = self.specs.read().unwrap_or_else(|e| e.into_inner());
        Ok(serde_json::to_string_pretty(&*specs)?)
    }
}

impl Default for SpecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SpecRegistry {
    fn clone(&self) -> Self {
        Self {
            specs: RwLock::new(self.specs()),
            policy: self.policy,
        }
    }
}

impl std::fmt::Debug for SpecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecRegistry")
            .field("len", &self.len())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Validates a batch in place, generating missing ids.
fn validate_candidates(candidates: &mut [BrfcSpec]) -> Result<()> {
    for (index, spec) in candidates.iter_mut().enumerate() {
        if spec.title.trim().is_empty() {
            return Err(BrfcError::validation(index, &spec.title, "title is required"));
        }

        if !spec.has_id() {
            spec.generate().map_err(|err| err.at_index(index))?;
            continue;
        }

        if !is_well_formed_id(&spec.id) {
            // Still surface a missing field before the shape problem.
            spec.validate().map_err(|err| err.at_index(index))?;
            return Err(BrfcError::validation(
                index,
                &spec.title,
                format!("malformed id {:?}", spec.id),
            ));
        }

        let check = spec.validate().map_err(|err| err.at_index(index))?;
        if !check.valid {
            return Err(BrfcError::validation(
                index,
                &spec.title,
                format!(
                    "id {} does not match computed id {}",
                    spec.id, check.computed_id
                ),
            ));
        }
    }
    Ok(())
}
