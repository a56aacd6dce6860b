//! Publishing of the congress-legislators files into the public data tree.
//!
//! The legislator YAML files and their alternate-format CSV renditions are
//! published verbatim, so they hard-link into `data/congress-legislators/`
//! like any other canonical artifact.

use std::path::Path;

use capitol_discover::listing;

use crate::error::{io_err, SyncError};
use crate::link::{reconcile_link, LinkTally};

/// Hard-link every `*.yaml` from the congress-legislators checkout and
/// every `*.csv` from its `alternate_formats/` directory into `dest_dir`.
///
/// Listings are sorted, so repeated runs link in the same order.
pub fn link_people_files(src_dir: &Path, dest_dir: &Path) -> Result<LinkTally, SyncError> {
    std::fs::create_dir_all(dest_dir).map_err(|e| io_err(dest_dir, e))?;

    let mut sources = listing::files_with_extension(src_dir, "yaml")?;
    sources.extend(listing::files_with_extension(
        &src_dir.join("alternate_formats"),
        "csv",
    )?);

    let mut tally = LinkTally::default();
    for source in sources {
        let name = source.file_name().ok_or_else(|| SyncError::NotFound {
            path: source.clone(),
        })?;
        let outcome = reconcile_link(&source, &dest_dir.join(name))?;
        tally.record(outcome);
    }
    Ok(tally)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
