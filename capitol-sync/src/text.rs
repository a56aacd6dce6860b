//! Bill-text mirroring — hard links from the scraper's text-versions tree
//! into the legacy `bills.text` layout.
//!
//! Text renditions are canonical immutable artifacts, so they are linked
//! rather than copied: the legacy tree shares inodes with the scraper
//! mirror and re-runs cost nothing. Modern congresses (GPO FDSys era) carry
//! `mods.xml` metadata per version; the statute era carries plain
//! `document.txt` plus an unversioned symlink alias pointing at the most
//! recent version.

use std::ops::RangeInclusive;
use std::path::Path;

use capitol_core::types::{BillType, Congress};
use capitol_core::IngestConfig;
use capitol_discover::{artifact, listing, PathGrammar, TextVersionRef};

use crate::error::{io_err, SyncError};
use crate::link::{reconcile_link, LinkTally};

/// First congress with GPO FDSys bill text. Earlier congresses have only
/// statute-extracted plain text.
const FDSYS_ERA_START: u16 = 103;

/// Mirror every text version of every bill in `congresses` into
/// `{data_root}/us/bills.text/`.
///
/// Walks bill directories in lexicographic order, version directories
/// likewise. Per-type subdirectories are created up front so link calls
/// never race a missing parent.
pub fn link_bill_text(
    cfg: &IngestConfig,
    scraper_root: &Path,
    data_root: &Path,
    congresses: RangeInclusive<u16>,
) -> Result<LinkTally, SyncError> {
    let grammar = PathGrammar::new()?;
    let mut tally = LinkTally::default();

    for congress in congresses {
        let congress = Congress(congress);
        for bill_type in BillType::all() {
            let dir = artifact::bill_text_dir(data_root, congress, *bill_type);
            std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
        }

        for bill_dir in listing::bill_dirs(scraper_root, congress)? {
            let bill = grammar.parse_bill_dir(&bill_dir, &cfg.type_codes)?;
            for version_dir in listing::text_version_dirs(&bill_dir)? {
                let version = version_dir
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .ok_or_else(|| SyncError::NotFound {
                        path: version_dir.clone(),
                    })?;
                let ver = TextVersionRef { bill, version };

                if congress.0 >= FDSYS_ERA_START {
                    let outcome = reconcile_link(
                        &version_dir.join("mods.xml"),
                        &ver.mods_link_path(data_root),
                    )?;
                    tally.record(outcome);
                } else {
                    let outcome = reconcile_link(
                        &version_dir.join("document.txt"),
                        &ver.text_link_path(data_root),
                    )?;
                    tally.record(outcome);
                    refresh_latest_alias(&ver, data_root)?;
                }
            }
        }
    }

    Ok(tally)
}

/// Point the unversioned `{short}{number}.txt` alias at this version.
///
/// The statute era only ever has `enr` text, so the newest version seen is
/// the current status; the alias is replaced unconditionally. The symlink
/// target is relative (just the versioned file name) so the tree stays
/// relocatable.
fn refresh_latest_alias(ver: &TextVersionRef, data_root: &Path) -> Result<(), SyncError> {
    let alias = ver.latest_alias_path(data_root);
    match std::fs::remove_file(&alias) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(&alias, e)),
    }
    std::os::unix::fs::symlink(ver.text_file_name(), &alias).map_err(|e| io_err(&alias, e))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
