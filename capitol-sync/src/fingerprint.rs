//! Content fingerprints with volatile-field masking.
//!
//! A fingerprint is a SHA-256 digest over a file's bytes, optionally taken
//! after replacing every match of a mask pattern with a fixed placeholder.
//! Fingerprints exist purely for equality testing — whether a destination
//! needs rewriting — never for content retrieval, so collision resistance
//! is a non-concern here.

use std::borrow::Cow;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use regex::bytes::Regex;
use sha2::{Digest, Sha256};

use crate::error::{io_err, SyncError};

/// Replacement written over every mask match before hashing.
const MASK_PLACEHOLDER: &[u8] = b"--";

/// The `updated="…"` attribute pattern every XML-bearing artifact carries.
const UPDATED_ATTRIBUTE_PATTERN: &str = r#"updated="[^"]+""#;

/// A compiled volatile-region mask.
///
/// Masks operate on bytes, not text: the same fingerprint path handles XML
/// records and binary photo content.
#[derive(Debug, Clone)]
pub struct Mask {
    pattern: Regex,
}

impl Mask {
    /// Compile a mask from a regular-expression pattern.
    pub fn new(pattern: &str) -> Result<Self, SyncError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The canonical mask for scraper XML: the `updated="…"` timestamp
    /// attribute, which changes on every scrape regardless of content.
    pub fn updated_attribute() -> Result<Self, SyncError> {
        Self::new(UPDATED_ATTRIBUTE_PATTERN)
    }

    fn apply<'a>(&self, data: &'a [u8]) -> Cow<'a, [u8]> {
        self.pattern.replace_all(data, MASK_PLACEHOLDER)
    }
}

/// A content digest, compared for equality only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(String);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprint the file at `path`, masking volatile regions first when a
/// mask is given.
///
/// The mask must be applied to BOTH files of any comparison — never one
/// side only — so callers pass the same `mask` for source and destination.
pub fn fingerprint(path: &Path, mask: Option<&Mask>) -> Result<Fingerprint, SyncError> {
    let data = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SyncError::NotFound {
            path: path.to_path_buf(),
        },
        _ => io_err(path, e),
    })?;

    let masked = match mask {
        Some(mask) => mask.apply(&data),
        None => Cow::Borrowed(data.as_slice()),
    };

    let mut hasher = Sha256::new();
    hasher.update(&masked);
    Ok(Fingerprint(hex::encode(hasher.finalize())))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
