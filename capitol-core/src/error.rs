//! Error types for capitol-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Congress;

/// Validation failures while mapping scraper output into the legacy tree.
///
/// All of these are fatal to the batch that hit them: a bad type code or a
/// congress mismatch means a naming assumption broke systemically, not a
/// transient per-file problem.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A bill-type code outside the configured lookup table.
    #[error("unrecognized bill type code '{code}'")]
    UnknownTypeCode { code: String },

    /// The congress number embedded in a source path does not match the
    /// congress the batch was asked to process.
    #[error("congress mismatch at {path}: expected {expected}, found {found}")]
    CongressMismatch {
        expected: Congress,
        found: Congress,
        path: PathBuf,
    },

    /// A required metadata field was empty or absent.
    #[error("metadata at {path} is missing required field '{field}'")]
    MissingMetadataField { field: &'static str, path: PathBuf },
}
