//! Legislator photo import from the unitedstates/images checkout.
//!
//! Photos are binary content, fingerprinted without masking. A photo whose
//! content changed is never overwritten in place: the existing image and
//! every derived sibling (`{id}-credit.txt`, `{id}-50px.jpeg`, …) are moved
//! into an `archive/` directory first, and the import refuses to run at all
//! if any archive slot is already occupied — old photos need review before
//! they are discarded twice.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use capitol_core::ValidationError;

use crate::copy::{reconcile_copy, CopyOutcome};
use crate::error::{io_err, SyncError};

/// Widths (px) of the derived renditions regenerated after a real change.
/// Heights are 1.2 × width, matching the site's portrait crop.
pub const RESIZE_WIDTHS: [u32; 3] = [50, 100, 200];

/// Height of a derived rendition for a given width.
pub fn resize_height(width: u32) -> u32 {
    (f64::from(width) * 1.2).round() as u32
}

/// One legislator to import, read from the id mapping file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoSubject {
    pub govtrack_id: u32,
    pub bioguide_id: String,
}

/// Required fields of the sidecar metadata next to each source photo.
#[derive(Debug, Deserialize)]
struct PhotoMetadata {
    #[serde(default)]
    name: String,
    #[serde(default)]
    link: String,
}

/// A photo whose content really changed this run. The caller regenerates
/// the resized renditions for each of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedPhoto {
    pub govtrack_id: u32,
    /// The destination `{govtrack_id}.jpeg`.
    pub path: PathBuf,
}

impl ImportedPhoto {
    /// `{dest_dir}/{govtrack_id}-{width}px.jpeg`
    pub fn resized_path(&self, width: u32) -> PathBuf {
        self.path
            .with_file_name(format!("{}-{width}px.jpeg", self.govtrack_id))
    }
}

/// Import every subject's photo from `src_dir` into `dest_dir`.
///
/// Per subject: the source `{bioguide}.jpg` must exist; the sidecar
/// `../metadata/{bioguide}.yaml` must carry non-empty `name` and `link`;
/// a content change archives the prior image and its derived siblings
/// before the copy; an unchanged photo is left alone entirely. Returns the
/// photos that really changed, in subject order.
pub fn import_photos(
    src_dir: &Path,
    dest_dir: &Path,
    subjects: &[PhotoSubject],
) -> Result<Vec<ImportedPhoto>, SyncError> {
    std::fs::create_dir_all(dest_dir).map_err(|e| io_err(dest_dir, e))?;

    let mut imported = Vec::new();
    for subject in subjects {
        let source = src_dir.join(format!("{}.jpg", subject.bioguide_id));
        if !source.exists() {
            return Err(SyncError::NotFound { path: source });
        }

        let metadata = read_metadata(src_dir, &subject.bioguide_id)?;
        let stem = subject.govtrack_id.to_string();
        let dest = dest_dir.join(format!("{stem}.jpeg"));

        if dest.exists()
            && crate::fingerprint(&source, None)? != crate::fingerprint(&dest, None)?
        {
            archive_existing(dest_dir, &stem)?;
        }

        if reconcile_copy(&source, &dest, None)? == CopyOutcome::Copied {
            tracing::info!("imported photo: {}", dest.display());
            write_credit(dest_dir, &stem, &metadata)?;
            imported.push(ImportedPhoto {
                govtrack_id: subject.govtrack_id,
                path: dest,
            });
        }
    }
    Ok(imported)
}

fn read_metadata(src_dir: &Path, bioguide_id: &str) -> Result<PhotoMetadata, SyncError> {
    let path = src_dir
        .parent()
        .ok_or_else(|| SyncError::NotFound {
            path: src_dir.to_path_buf(),
        })?
        .join("metadata")
        .join(format!("{bioguide_id}.yaml"));

    let raw = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SyncError::NotFound { path: path.clone() },
        _ => io_err(&path, e),
    })?;
    let metadata: PhotoMetadata = serde_yaml::from_str(&raw).map_err(|e| SyncError::Metadata {
        path: path.clone(),
        source: e,
    })?;

    if metadata.name.trim().is_empty() {
        return Err(ValidationError::MissingMetadataField { field: "name", path }.into());
    }
    if metadata.link.trim().is_empty() {
        return Err(ValidationError::MissingMetadataField { field: "link", path }.into());
    }
    Ok(metadata)
}

/// Move `{stem}.jpeg` and every `{stem}-*` sibling into `{dest_dir}/archive/`.
///
/// Every archive slot is checked for a collision before the first move, so
/// a refusal leaves the directory exactly as found.
fn archive_existing(dest_dir: &Path, stem: &str) -> Result<(), SyncError> {
    let mut names = vec![format!("{stem}.jpeg")];
    names.extend(derived_sibling_names(dest_dir, stem)?);

    let archive_dir = dest_dir.join("archive");
    for name in &names {
        if archive_dir.join(name).exists() {
            return Err(SyncError::ArchiveExists {
                path: archive_dir.join(name),
            });
        }
    }

    std::fs::create_dir_all(&archive_dir).map_err(|e| io_err(&archive_dir, e))?;
    for name in &names {
        let from = dest_dir.join(name);
        let to = archive_dir.join(name);
        tracing::warn!("archiving {} => {}", from.display(), to.display());
        std::fs::rename(&from, &to).map_err(|e| io_err(&from, e))?;
    }
    Ok(())
}

/// File names of `{stem}-*` entries next to the photo: credit text and
/// resized renditions.
fn derived_sibling_names(dest_dir: &Path, stem: &str) -> Result<Vec<String>, SyncError> {
    let prefix = format!("{stem}-");

    let mut names = Vec::new();
    let entries = std::fs::read_dir(dest_dir).map_err(|e| io_err(dest_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dest_dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(&prefix) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn write_credit(dest_dir: &Path, stem: &str, metadata: &PhotoMetadata) -> Result<(), SyncError> {
    let path = dest_dir.join(format!("{stem}-credit.txt"));
    let line = format!("{} {}\n", metadata.link.trim(), metadata.name.trim());
    std::fs::write(&path, line).map_err(|e| io_err(&path, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
