use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

/// The main error type for wmt15 operations.
#[derive(Debug, Error)]
pub enum Wmt15Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown dataset config '{name}' (run 'wmt15 list' for available configs)")]
    UnknownConfig { name: String },

    #[error("Unknown split '{0}' (expected train, validation or test)")]
    UnknownSplit(String),

    #[error("Unknown sub-corpus '{name}' referenced by split {split}")]
    UnknownSubCorpus { name: String, split: String },

    #[error("Descriptor '{family}' is inconsistent: {error_count} error(s) and {warning_count} warning(s)")]
    DescriptorInvalid {
        family: String,
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Failed to write manifest to {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
