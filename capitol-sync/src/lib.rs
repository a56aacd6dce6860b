//! # capitol-sync
//!
//! The change-aware file synchronization engine behind the Capitol ingest
//! pipeline: content fingerprints with volatile-field masking, a copy
//! reconciler that writes only when real data changed, a hard-link
//! reconciler for immutable originals, and batch drivers that aggregate
//! per-file change signals into the dirty flag gating downstream loads.

pub mod batch;
pub mod copy;
pub mod error;
pub mod fingerprint;
pub mod link;
pub mod people;
pub mod photos;
pub mod text;

pub use batch::{BatchSummary, LoadPolicy};
pub use copy::{reconcile_copy, CopyOutcome};
pub use error::SyncError;
pub use fingerprint::{fingerprint, Fingerprint, Mask};
pub use link::{reconcile_link, LinkOutcome, LinkTally};
pub use people::link_people_files;
pub use photos::{import_photos, ImportedPhoto, PhotoSubject};
pub use text::link_bill_text;
