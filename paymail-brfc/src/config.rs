//! Client configuration and context.
//!
//! A [`Client`] owns exactly one [`SpecRegistry`]. Nothing is shared between
//! clients, so a process can hold several independent registries.

use crate::registry::{DuplicatePolicy, MergeReport, SpecRegistry};
use crate::{BrfcSpec, Result};
use serde::{Deserialize, Serialize};

/// Options for building a [`Client`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// How merges detect already-known specifications.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Seed the registry with the built-in catalog.
    #[serde(default = "default_load_known_specs")]
    pub load_known_specs: bool,

    /// JSON array of extra specifications merged after seeding.
    #[serde(default)]
    pub extra_specs: Option<String>,
}

fn default_load_known_specs() -> bool {
    true
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            load_known_specs: default_load_known_specs(),
            extra_specs: None,
        }
    }
}

impl ClientOptions {
    /// Set the duplicate policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Start from an empty registry instead of the built-in catalog.
    pub fn without_known_specs(mut self) -> Self {
        self.load_known_specs = false;
        self
    }

    /// Merge a JSON array of specifications at construction.
    pub fn with_extra_specs(mut self, json: impl Into<String>) -> Self {
        self.extra_specs = Some(json.into());
        self
    }
}

/// Configuration context holding the specification registry.
///
/// # Example
///
/// ```
/// use paymail_brfc::Client;
///
/// let client = Client::with_defaults();
/// client
///     .load_brfcs(r#"[{"author": "andy (nChain)","id": "57dd1f54fc67","title": "BRFC Specifications","version": "1"}]"#)
///     .unwrap();
/// assert_eq!(client.registry().len(), 19);
/// ```
#[derive(Debug)]
pub struct Client {
    options: ClientOptions,
    registry: SpecRegistry,
}

impl Client {
    /// Build a client, seeding and extending its registry per `options`.
    ///
    /// Fails if `extra_specs` is set and does not merge cleanly.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let registry = if options.load_known_specs {
            SpecRegistry::with_known_specs()
        } else {
            SpecRegistry::new()
        }
        .with_policy(options.duplicate_policy);

        if let Some(json) = &options.extra_specs {
            registry.load_json(json)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(specs = registry.len(), "brfc client ready");

        Ok(Self { options, registry })
    }

    /// Client with the built-in catalog and default policy.
    pub fn with_defaults() -> Self {
        Self {
            options: ClientOptions::default(),
            registry: SpecRegistry::with_known_specs(),
        }
    }

    /// The options this client was built from.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// The registry owned by this client.
    pub fn registry(&self) -> &SpecRegistry {
        &self.registry
    }

    /// Merge a JSON array of candidate specifications into this client's registry.
    pub fn load_brfcs(&self, json: &str) -> Result<MergeReport> {
        self.registry.load_json(json)
    }

    /// Snapshot of the registered specifications.
    pub fn brfc_specs(&self) -> Vec<BrfcSpec> {
        self.registry.specs()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::with_defaults()
    }
}
