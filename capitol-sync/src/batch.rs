//! Batch drivers — dirty-propagation over discovered artifacts.
//!
//! Each driver walks one artifact kind for one congress in lexicographic
//! source order, reconciles every file into the legacy tree with the
//! `updated="…"` mask, and ORs the per-file change signals into a single
//! batch flag. The flag gates whether the downstream loader runs at all —
//! except where [`LoadPolicy::Always`] says a batch must reload regardless,
//! because records can need reprocessing for reasons outside their own
//! content (amendments can mark votes as missing data).

use std::path::Path;

use capitol_core::{IngestConfig, ValidationError};
use capitol_core::types::Congress;
use capitol_discover::{artifact, listing, PathGrammar};

use crate::copy::{reconcile_copy, CopyOutcome};
use crate::error::{io_err, SyncError};
use crate::fingerprint::Mask;

// ---------------------------------------------------------------------------
// Batch results
// ---------------------------------------------------------------------------

/// Aggregate result of one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files written (created or overwritten with real changes).
    pub copied: usize,
    /// Files left untouched — masked fingerprints matched.
    pub unchanged: usize,
}

impl BatchSummary {
    /// True iff at least one file in the batch really changed.
    pub fn changed(&self) -> bool {
        self.copied > 0
    }

    pub fn total(&self) -> usize {
        self.copied + self.unchanged
    }

    fn record(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Copied => self.copied += 1,
            CopyOutcome::Unchanged => self.unchanged += 1,
        }
    }
}

/// Per-call-site policy for gating the downstream loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Load only when the batch flag says real content changed.
    WhenChanged,
    /// Load unconditionally; the batch flag is informational only.
    Always,
}

impl LoadPolicy {
    pub fn should_load(self, summary: &BatchSummary) -> bool {
        match self {
            LoadPolicy::WhenChanged => summary.changed(),
            LoadPolicy::Always => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Drivers
// ---------------------------------------------------------------------------

/// Reconcile every bill record of `congress` into
/// `{data_root}/us/{congress}/bills/`.
pub fn sync_bills(
    cfg: &IngestConfig,
    scraper_root: &Path,
    data_root: &Path,
    congress: Congress,
) -> Result<BatchSummary, SyncError> {
    let grammar = PathGrammar::new()?;
    let mask = Mask::updated_attribute()?;
    let sources = listing::bill_data_files(scraper_root, congress)?;

    let dir = artifact::bills_dir(data_root, congress);
    std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;

    let mut summary = BatchSummary::default();
    for source in sources {
        let bill = grammar.parse_bill(&source, &cfg.type_codes)?;
        ensure_congress(bill.congress, congress, &source)?;
        let outcome = reconcile_copy(&source, &bill.legacy_path(data_root), Some(&mask))?;
        summary.record(outcome);
    }
    Ok(summary)
}

/// Reconcile every amendment record of `congress` into
/// `{data_root}/us/{congress}/bills.amdt/`.
pub fn sync_amendments(
    scraper_root: &Path,
    data_root: &Path,
    congress: Congress,
) -> Result<BatchSummary, SyncError> {
    let grammar = PathGrammar::new()?;
    let mask = Mask::updated_attribute()?;
    let sources = listing::amendment_data_files(scraper_root, congress)?;

    let dir = artifact::amendments_dir(data_root, congress);
    std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;

    let mut summary = BatchSummary::default();
    for source in sources {
        let amdt = grammar.parse_amendment(&source)?;
        ensure_congress(amdt.congress, congress, &source)?;
        let outcome = reconcile_copy(&source, &amdt.legacy_path(data_root), Some(&mask))?;
        summary.record(outcome);
    }
    Ok(summary)
}

/// Reconcile every roll-call vote of `congress` into
/// `{data_root}/us/{congress}/rolls/`.
pub fn sync_votes(
    scraper_root: &Path,
    data_root: &Path,
    congress: Congress,
) -> Result<BatchSummary, SyncError> {
    let grammar = PathGrammar::new()?;
    let mask = Mask::updated_attribute()?;
    let sources = listing::vote_data_files(scraper_root, congress)?;

    let dir = artifact::rolls_dir(data_root, congress);
    std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;

    let mut summary = BatchSummary::default();
    for source in sources {
        let vote = grammar.parse_vote(&source)?;
        ensure_congress(vote.congress, congress, &source)?;
        let outcome = reconcile_copy(&source, &vote.legacy_path(data_root), Some(&mask))?;
        summary.record(outcome);
    }
    Ok(summary)
}

fn ensure_congress(found: Congress, expected: Congress, path: &Path) -> Result<(), SyncError> {
    if found != expected {
        return Err(ValidationError::CongressMismatch {
            expected,
            found,
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn cfg() -> IngestConfig {
        IngestConfig::new(Congress(113))
    }

    fn write_source(scraper_root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = scraper_root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn first_sync_copies_everything_and_flags_change() {
        let scraper = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_source(scraper.path(), "data/113/bills/hr/hr42/data.xml", "<bill n='42'/>");
        write_source(scraper.path(), "data/113/bills/s/s7/data.xml", "<bill n='7'/>");

        let summary = sync_bills(&cfg(), scraper.path(), data.path(), Congress(113)).unwrap();

        assert_eq!(summary.copied, 2);
        assert_eq!(summary.unchanged, 0);
        assert!(summary.changed());
        assert!(data.path().join("us/113/bills/h42.xml").exists());
        assert!(data.path().join("us/113/bills/s7.xml").exists());
    }

    #[test]
    fn unchanged_batch_does_not_flag() {
        let scraper = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_source(scraper.path(), "data/113/bills/hr/hr42/data.xml", "<bill/>");

        sync_bills(&cfg(), scraper.path(), data.path(), Congress(113)).unwrap();
        let summary = sync_bills(&cfg(), scraper.path(), data.path(), Congress(113)).unwrap();

        assert_eq!(summary.copied, 0);
        assert_eq!(summary.unchanged, 1);
        assert!(!summary.changed());
    }

    #[test]
    fn one_real_change_among_many_flags_the_batch() {
        let scraper = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_source(scraper.path(), "data/113/bills/hr/hr1/data.xml", "<bill a/>");
        write_source(scraper.path(), "data/113/bills/hr/hr2/data.xml", "<bill b/>");
        write_source(scraper.path(), "data/113/bills/hr/hr3/data.xml", "<bill c/>");
        sync_bills(&cfg(), scraper.path(), data.path(), Congress(113)).unwrap();

        write_source(scraper.path(), "data/113/bills/hr/hr2/data.xml", "<bill b2/>");
        let summary = sync_bills(&cfg(), scraper.path(), data.path(), Congress(113)).unwrap();

        assert_eq!(summary.copied, 1);
        assert_eq!(summary.unchanged, 2);
        assert!(summary.changed());
    }

    #[test]
    fn updated_stamp_only_does_not_flag() {
        let scraper = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_source(
            scraper.path(),
            "data/113/bills/hr/hr42/data.xml",
            r#"<bill updated="2013-01-01"><title>Act</title></bill>"#,
        );
        sync_bills(&cfg(), scraper.path(), data.path(), Congress(113)).unwrap();

        write_source(
            scraper.path(),
            "data/113/bills/hr/hr42/data.xml",
            r#"<bill updated="2013-02-02"><title>Act</title></bill>"#,
        );
        let summary = sync_bills(&cfg(), scraper.path(), data.path(), Congress(113)).unwrap();

        assert!(!summary.changed());
        // The legacy file keeps its original stamp — it was never rewritten.
        let kept = fs::read_to_string(data.path().join("us/113/bills/h42.xml")).unwrap();
        assert!(kept.contains(r#"updated="2013-01-01""#));
    }

    #[test]
    fn unknown_type_code_aborts_without_writing() {
        let scraper = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_source(scraper.path(), "data/113/bills/hx/hx1/data.xml", "<bill/>");

        let err = sync_bills(&cfg(), scraper.path(), data.path(), Congress(113)).unwrap_err();

        assert!(matches!(
            err,
            SyncError::Discover(capitol_discover::DiscoverError::Validation(
                ValidationError::UnknownTypeCode { .. }
            ))
        ));
        let bills_dir = data.path().join("us/113/bills");
        assert!(fs::read_dir(bills_dir).unwrap().next().is_none());
    }

    #[test]
    fn congress_guard_rejects_mismatch() {
        let path = Path::new("data/112/bills/hr/hr1/data.xml");
        let err = ensure_congress(Congress(112), Congress(113), path).unwrap_err();
        assert!(matches!(
            err,
            SyncError::Validation(ValidationError::CongressMismatch { .. })
        ));
        assert!(ensure_congress(Congress(113), Congress(113), path).is_ok());
    }

    #[test]
    fn votes_map_to_roll_files() {
        let scraper = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_source(scraper.path(), "data/113/votes/2013/h7/data.xml", "<vote/>");
        write_source(scraper.path(), "data/113/votes/2013/s11/data.xml", "<vote/>");

        let summary = sync_votes(scraper.path(), data.path(), Congress(113)).unwrap();

        assert_eq!(summary.copied, 2);
        assert!(data.path().join("us/113/rolls/h2013-7.xml").exists());
        assert!(data.path().join("us/113/rolls/s2013-11.xml").exists());
    }

    #[test]
    fn amendments_map_to_amdt_files() {
        let scraper = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        write_source(
            scraper.path(),
            "data/113/amendments/samdt/samdt2013/data.xml",
            "<amendment/>",
        );

        let summary =
            sync_amendments(scraper.path(), data.path(), Congress(113)).unwrap();

        assert_eq!(summary.copied, 1);
        assert!(data.path().join("us/113/bills.amdt/s2013.xml").exists());
    }

    #[test]
    fn empty_batch_is_clean_and_creates_the_category_dir() {
        let scraper = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();

        let summary = sync_votes(scraper.path(), data.path(), Congress(113)).unwrap();

        assert_eq!(summary.total(), 0);
        assert!(!summary.changed());
        assert!(data.path().join("us/113/rolls").is_dir());
    }

    #[test]
    fn load_policy_gates_on_the_flag() {
        let changed = BatchSummary { copied: 1, unchanged: 4 };
        let clean = BatchSummary { copied: 0, unchanged: 5 };

        assert!(LoadPolicy::WhenChanged.should_load(&changed));
        assert!(!LoadPolicy::WhenChanged.should_load(&clean));
        assert!(LoadPolicy::Always.should_load(&changed));
        assert!(LoadPolicy::Always.should_load(&clean));
    }
}
