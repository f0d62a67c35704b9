//! Error types for BRFC operations.
//!
//! Every failure here is a deterministic function of the input, so nothing
//! is ever worth retrying without first correcting the input.

use std::fmt;

/// The descriptive fields that feed a BRFC fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecField {
    Author,
    Title,
    Version,
}

impl SpecField {
    /// Field name as it appears in the JSON wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Title => "title",
            Self::Version => "version",
        }
    }
}

impl fmt::Display for SpecField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error codes for FFI and host integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BrfcErrorCode {
    /// A required field was empty after trimming
    MissingField = 5000,
    /// A candidate failed validation during a merge
    Validation = 5001,
    /// Candidate specifications could not be decoded
    Parse = 5002,
}

/// Comprehensive error type for BRFC operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrfcError {
    /// Author, title or version is empty after trimming.
    #[error("invalid brfc {field}, length: 0{}", batch_position(.index))]
    MissingField {
        /// The absent field
        field: SpecField,
        /// Position of the candidate when raised during a merge
        index: Option<usize>,
    },

    /// The merge input is not a JSON array of specification records.
    #[error("failed to parse brfc specifications: {0}")]
    Parse(String),

    /// A candidate was rejected; the whole batch was discarded.
    #[error("invalid brfc specification at index {index} ({title:?}): {reason}")]
    Validation {
        /// Position of the candidate in the submitted batch
        index: usize,
        /// Title of the candidate as submitted
        title: String,
        /// Why it was rejected
        reason: String,
    },
}

impl BrfcError {
    /// Get the error code for FFI integration.
    pub fn code(&self) -> BrfcErrorCode {
        match self {
            Self::MissingField { .. } => BrfcErrorCode::MissingField,
            Self::Parse(_) => BrfcErrorCode::Parse,
            Self::Validation { .. } => BrfcErrorCode::Validation,
        }
    }

    /// Always false: retrying the same input yields the same failure.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Create a missing field error.
    pub fn missing(field: SpecField) -> Self {
        Self::MissingField { field, index: None }
    }

    /// Attach the batch position of the offending candidate.
    ///
    /// Only [`MissingField`](Self::MissingField) is changed; the other
    /// variants already carry their context.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            Self::MissingField { field, .. } => Self::MissingField {
                field,
                index: Some(index),
            },
            other => other,
        }
    }

    /// Batch position of the offending candidate, if known.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::MissingField { index, .. } => *index,
            Self::Validation { index, .. } => Some(*index),
            Self::Parse(_) => None,
        }
    }

    /// Create a validation error for the candidate at `index`.
    pub fn validation(index: usize, title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            index,
            title: title.into(),
            reason: reason.into(),
        }
    }
}

fn batch_position(index: &Option<usize>) -> String {
    index
        .map(|index| format!(" (specification at index {index})"))
        .unwrap_or_default()
}

impl From<serde_json::Error> for BrfcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
