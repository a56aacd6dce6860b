//! Copy reconciler — fingerprint-gated overwrite of legacy-view files.

use std::path::Path;

use filetime::FileTime;

use crate::error::{io_err, SyncError};
use crate::fingerprint::{fingerprint, Mask};

/// Outcome of one copy reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Destination was written (missing, or real content differed).
    Copied,
    /// Masked fingerprints matched; zero writes performed.
    Unchanged,
}

impl CopyOutcome {
    /// Whether real content changed.
    pub fn changed(self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }
}

/// Make `dest` match `source`, writing only when real content differs.
///
/// Unchanged files are never touched: rewriting them would bump mtimes and
/// force rsync mirrors and hash-gated loaders downstream to reprocess data
/// that did not change. The mask is applied to both sides of the
/// comparison, so a difference confined to the masked region (the
/// `updated="…"` stamp, typically) counts as unchanged — but when any real
/// difference forces a copy, the destination receives the source bytes
/// verbatim, masked region included.
///
/// The destination directory must already exist; batch drivers create
/// category directories up front. Performs exactly zero or one write.
pub fn reconcile_copy(
    source: &Path,
    dest: &Path,
    mask: Option<&Mask>,
) -> Result<CopyOutcome, SyncError> {
    if dest.exists() && fingerprint(source, mask)? == fingerprint(dest, mask)? {
        tracing::debug!("unchanged: {}", dest.display());
        return Ok(CopyOutcome::Unchanged);
    }

    copy_preserving_mtime(source, dest)?;
    tracing::info!("wrote: {}", dest.display());
    Ok(CopyOutcome::Copied)
}

/// Copy `source` over `dest`, carrying the source's modification time so
/// the legacy tree reflects upstream publish times, not sync times.
fn copy_preserving_mtime(source: &Path, dest: &Path) -> Result<(), SyncError> {
    let meta = std::fs::metadata(source).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SyncError::NotFound {
            path: source.to_path_buf(),
        },
        _ => io_err(source, e),
    })?;

    std::fs::copy(source, dest).map_err(|e| io_err(dest, e))?;
    filetime::set_file_mtime(dest, FileTime::from_last_modification_time(&meta))
        .map_err(|e| io_err(dest, e))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const MASKED_V1: &str = r#"<bill updated="2013-01-02"><title>Act</title></bill>"#;
    const MASKED_V2: &str = r#"<bill updated="2013-06-07"><title>Act</title></bill>"#;
    const REAL_CHANGE: &str = r#"<bill updated="2013-06-07"><title>Act, amended</title></bill>"#;

    fn mask() -> Mask {
        Mask::updated_attribute().unwrap()
    }

    #[test]
    fn first_copy_creates_dest_and_reports_change() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.xml");
        let dest = tmp.path().join("dest.xml");
        std::fs::write(&src, MASKED_V1).unwrap();

        let outcome = reconcile_copy(&src, &dest, Some(&mask())).unwrap();
        assert_eq!(outcome, CopyOutcome::Copied);
        assert!(outcome.changed());
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), MASKED_V1);
    }

    #[test]
    fn second_run_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.xml");
        let dest = tmp.path().join("dest.xml");
        std::fs::write(&src, MASKED_V1).unwrap();

        reconcile_copy(&src, &dest, Some(&mask())).unwrap();
        let first_bytes = std::fs::read(&dest).unwrap();
        let outcome = reconcile_copy(&src, &dest, Some(&mask())).unwrap();

        assert_eq!(outcome, CopyOutcome::Unchanged);
        assert_eq!(std::fs::read(&dest).unwrap(), first_bytes);
    }

    #[test]
    fn masked_only_difference_leaves_dest_untouched() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.xml");
        let dest = tmp.path().join("dest.xml");
        std::fs::write(&dest, MASKED_V1).unwrap();
        std::fs::write(&src, MASKED_V2).unwrap();
        let dest_mtime = FileTime::from_last_modification_time(&std::fs::metadata(&dest).unwrap());

        let outcome = reconcile_copy(&src, &dest, Some(&mask())).unwrap();

        assert_eq!(outcome, CopyOutcome::Unchanged);
        // Old stamp survives: the file was not rewritten.
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), MASKED_V1);
        assert_eq!(
            FileTime::from_last_modification_time(&std::fs::metadata(&dest).unwrap()),
            dest_mtime
        );
    }

    #[test]
    fn real_difference_overwrites() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.xml");
        let dest = tmp.path().join("dest.xml");
        std::fs::write(&dest, MASKED_V1).unwrap();
        std::fs::write(&src, REAL_CHANGE).unwrap();

        let outcome = reconcile_copy(&src, &dest, Some(&mask())).unwrap();
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), REAL_CHANGE);
    }

    #[test]
    fn copy_preserves_source_mtime() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.xml");
        let dest = tmp.path().join("dest.xml");
        std::fs::write(&src, MASKED_V1).unwrap();
        let stamp = FileTime::from_unix_time(1_357_000_000, 0);
        filetime::set_file_mtime(&src, stamp).unwrap();

        reconcile_copy(&src, &dest, None).unwrap();
        let dest_mtime =
            FileTime::from_last_modification_time(&std::fs::metadata(&dest).unwrap());
        assert_eq!(dest_mtime, stamp);
    }

    #[test]
    fn missing_source_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = reconcile_copy(
            &tmp.path().join("absent.xml"),
            &tmp.path().join("dest.xml"),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, SyncError::NotFound { .. }));
    }

    #[test]
    fn missing_dest_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.xml");
        std::fs::write(&src, MASKED_V1).unwrap();

        let err = reconcile_copy(&src, &tmp.path().join("no_such_dir/dest.xml"), None)
            .unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
    }
}
