//! Error types for capitol-discover.

use std::path::PathBuf;

use thiserror::Error;

use capitol_core::ValidationError;

/// All errors that can arise while discovering and naming source artifacts.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// A glob pattern failed to compile (scraper root contained glob
    /// metacharacters, typically).
    #[error("bad listing pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A globbed directory entry could not be read.
    #[error("listing error: {0}")]
    Glob(#[from] glob::GlobError),

    /// A grammar regex failed to compile.
    #[error("path grammar regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A discovered path did not match the grammar it was listed under.
    #[error("path does not match the scraper output grammar: {path}")]
    PathGrammar { path: PathBuf },

    /// A type code or congress number failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
