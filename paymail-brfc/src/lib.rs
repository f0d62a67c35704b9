//! Paymail BRFC library.
//!
//! BRFC ("Bitcoin Request for Comments") identifiers name paymail
//! capability specifications by a short fingerprint of their author, title
//! and version, so independent implementations agree on capability ids
//! without a central registry.
//!
//! # Features
//!
//! - **Fingerprint Engine**: generate and verify 12-hex-character ids
//! - **Specification Registry**: ordered, deduplicated, all-or-nothing merges
//! - **Built-in Catalog**: the capabilities a paymail host advertises by default
//!
//! # Example
//!
//! ```
//! use paymail_brfc::{BrfcSpec, Client};
//!
//! let mut spec = BrfcSpec::new("andy (nChain)", "BRFC Specifications", "1");
//! spec.generate().unwrap();
//! assert_eq!(spec.id, "57dd1f54fc67");
//!
//! let client = Client::with_defaults();
//! let report = client
//!     .load_brfcs(r#"[{"author":"MrZ","title":"New BRFC","version":"1"}]"#)
//!     .unwrap();
//! assert_eq!(report.added, vec!["e898079d7d1a".to_string()]);
//! ```

pub mod config;
pub mod errors;
pub mod fingerprint;
pub mod known;
pub mod registry;
pub mod spec;

pub use config::{Client, ClientOptions};
pub use errors::{BrfcError, BrfcErrorCode, SpecField};
pub use fingerprint::{fingerprint, is_well_formed_id, BRFC_ID_LEN};
pub use registry::{DuplicatePolicy, MergeReport, SpecRegistry};
pub use spec::{BrfcSpec, IdCheck};

/// Common result alias for BRFC operations.
pub type Result<T> = std::result::Result<T, BrfcError>;
