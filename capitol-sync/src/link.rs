//! Link reconciler — hard-link maintenance for canonical immutable artifacts.
//!
//! Where the copy reconciler produces an independent legacy view that
//! tolerates field-level volatility, the link reconciler keeps a destination
//! byte-identical to its source by sharing the inode. Divergence is always
//! repaired and never masked: a linked artifact is an original, not a record
//! with a volatile timestamp field.

use std::fs::Metadata;
use std::io::ErrorKind;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use crate::error::{io_err, SyncError};
use crate::fingerprint::fingerprint;

/// Outcome of one link reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Destination did not exist; a fresh hard link was created.
    Linked,
    /// Destination already shares the source inode; zero mutations.
    AlreadyLinked,
    /// Destination was a distinct file with different content; prior
    /// content was discarded and the link repaired.
    Replaced,
    /// Destination was a distinct file with identical content (an
    /// accidental duplicate); squashed into a link.
    Squashed,
}

/// Running tally of link outcomes across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkTally {
    pub linked: usize,
    pub already_linked: usize,
    pub replaced: usize,
    pub squashed: usize,
}

impl LinkTally {
    pub fn record(&mut self, outcome: LinkOutcome) {
        match outcome {
            LinkOutcome::Linked => self.linked += 1,
            LinkOutcome::AlreadyLinked => self.already_linked += 1,
            LinkOutcome::Replaced => self.replaced += 1,
            LinkOutcome::Squashed => self.squashed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.linked + self.already_linked + self.replaced + self.squashed
    }
}

/// Maintain `dest` as a hard link to `source`.
///
/// Repair is unlink-then-link: the destination is never partially written,
/// and once non-identity is detected the repair is unconditional. Cross
/// device link failures surface as [`SyncError::Io`] — hard links cannot
/// span filesystems, and silently copying instead would break the
/// shared-inode contract.
pub fn reconcile_link(source: &Path, dest: &Path) -> Result<LinkOutcome, SyncError> {
    let source_meta = std::fs::metadata(source).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SyncError::NotFound {
            path: source.to_path_buf(),
        },
        _ => io_err(source, e),
    })?;

    let dest_meta = match std::fs::metadata(dest) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            std::fs::hard_link(source, dest).map_err(|e| io_err(dest, e))?;
            tracing::debug!("linked: {}", dest.display());
            return Ok(LinkOutcome::Linked);
        }
        Err(e) => return Err(io_err(dest, e)),
    };

    if same_inode(&source_meta, &dest_meta) {
        return Ok(LinkOutcome::AlreadyLinked);
    }

    // Distinct file at the destination. Unmasked comparison decides whether
    // real content is being discarded.
    let outcome = if fingerprint(source, None)? != fingerprint(dest, None)? {
        tracing::warn!(
            "replacing {} with link to {}",
            dest.display(),
            source.display()
        );
        LinkOutcome::Replaced
    } else {
        tracing::info!(
            "squashing duplicate {} into link to {}",
            dest.display(),
            source.display()
        );
        LinkOutcome::Squashed
    };

    std::fs::remove_file(dest).map_err(|e| io_err(dest, e))?;
    std::fs::hard_link(source, dest).map_err(|e| io_err(dest, e))?;
    Ok(outcome)
}

fn same_inode(a: &Metadata, b: &Metadata) -> bool {
    a.dev() == b.dev() && a.ino() == b.ino()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
