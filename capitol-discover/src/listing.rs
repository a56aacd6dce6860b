//! Filesystem listings over the scraper output tree.
//!
//! All listings are collected and sorted lexicographically so repeated runs
//! reconcile in the same order and produce comparable logs.

use std::path::{Path, PathBuf};

use capitol_core::types::Congress;

use crate::error::DiscoverError;

/// `{scraper_root}/data/{congress}/bills/*/*/data.xml`
pub fn bill_data_files(
    scraper_root: &Path,
    congress: Congress,
) -> Result<Vec<PathBuf>, DiscoverError> {
    sorted_glob(&format!(
        "{}/data/{}/bills/*/*/data.xml",
        scraper_root.display(),
        congress
    ))
}

/// `{scraper_root}/data/{congress}/bills/*/*` — bill directories, for text
/// mirroring.
pub fn bill_dirs(scraper_root: &Path, congress: Congress) -> Result<Vec<PathBuf>, DiscoverError> {
    sorted_glob(&format!(
        "{}/data/{}/bills/*/*",
        scraper_root.display(),
        congress
    ))
}

/// `{bill_dir}/text-versions/*` — version directories of one bill.
pub fn text_version_dirs(bill_dir: &Path) -> Result<Vec<PathBuf>, DiscoverError> {
    sorted_glob(&format!("{}/text-versions/*", bill_dir.display()))
}

/// `{scraper_root}/data/{congress}/amendments/*/*/data.xml`
pub fn amendment_data_files(
    scraper_root: &Path,
    congress: Congress,
) -> Result<Vec<PathBuf>, DiscoverError> {
    sorted_glob(&format!(
        "{}/data/{}/amendments/*/*/data.xml",
        scraper_root.display(),
        congress
    ))
}

/// `{scraper_root}/data/{congress}/votes/*/*/data.xml`
pub fn vote_data_files(
    scraper_root: &Path,
    congress: Congress,
) -> Result<Vec<PathBuf>, DiscoverError> {
    sorted_glob(&format!(
        "{}/data/{}/votes/*/*/data.xml",
        scraper_root.display(),
        congress
    ))
}

/// `{dir}/*.{ext}` — flat extension listing (legislator YAML, alternate CSV,
/// photo JPEG directories).
pub fn files_with_extension(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    sorted_glob(&format!("{}/*.{}", dir.display(), ext))
}

fn sorted_glob(pattern: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, b"<x/>").expect("write");
    }

    #[test]
    fn bill_listing_is_sorted_and_scoped_to_congress() {
        let root = TempDir::new().expect("tempdir");
        let base = root.path();
        touch(&base.join("data/113/bills/s/s9/data.xml"));
        touch(&base.join("data/113/bills/hr/hr42/data.xml"));
        touch(&base.join("data/112/bills/hr/hr1/data.xml"));

        let files = bill_data_files(base, Congress(113)).expect("list");
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("data/113/bills/hr/hr42/data.xml"));
        assert!(files[1].ends_with("data/113/bills/s/s9/data.xml"));
    }

    #[test]
    fn missing_tree_lists_empty() {
        let root = TempDir::new().expect("tempdir");
        let files = vote_data_files(root.path(), Congress(113)).expect("list");
        assert!(files.is_empty());
    }

    #[test]
    fn text_versions_listed_per_bill() {
        let root = TempDir::new().expect("tempdir");
        let bill_dir = root.path().join("data/113/bills/hr/hr42");
        touch(&bill_dir.join("text-versions/enr/mods.xml"));
        touch(&bill_dir.join("text-versions/ih/mods.xml"));

        let versions = text_version_dirs(&bill_dir).expect("list");
        assert_eq!(versions.len(), 2);
        assert!(versions[0].ends_with("text-versions/enr"));
    }

    #[test]
    fn extension_listing_filters() {
        let root = TempDir::new().expect("tempdir");
        touch(&root.path().join("legislators-current.yaml"));
        touch(&root.path().join("legislators-current.csv"));
        let yaml = files_with_extension(root.path(), "yaml").expect("list");
        assert_eq!(yaml.len(), 1);
        assert!(yaml[0].ends_with("legislators-current.yaml"));
    }
}
