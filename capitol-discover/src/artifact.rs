//! Strongly-typed source-artifact references and the legacy naming transform.
//!
//! Each ref is the tuple a scraper path parses to, plus the deterministic
//! mapping onto the stable legacy tree downstream loaders and mirror
//! consumers depend on:
//!
//! ```text
//! data/us/{congress}/bills/{short_type}{number}.xml
//! data/us/{congress}/bills.amdt/{chamber}{number}.xml
//! data/us/{congress}/rolls/{chamber}{session}-{number}.xml
//! data/us/bills.text/{congress}/{short_type}/{short_type}{number}{version}.…
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use capitol_core::types::{BillType, Chamber, Congress, Session};

// ---------------------------------------------------------------------------
// Category directories
// ---------------------------------------------------------------------------

/// `{data_root}/us/{congress}/bills`
pub fn bills_dir(data_root: &Path, congress: Congress) -> PathBuf {
    data_root
        .join("us")
        .join(congress.to_string())
        .join("bills")
}

/// `{data_root}/us/{congress}/bills.amdt`
pub fn amendments_dir(data_root: &Path, congress: Congress) -> PathBuf {
    data_root
        .join("us")
        .join(congress.to_string())
        .join("bills.amdt")
}

/// `{data_root}/us/{congress}/rolls`
pub fn rolls_dir(data_root: &Path, congress: Congress) -> PathBuf {
    data_root
        .join("us")
        .join(congress.to_string())
        .join("rolls")
}

/// `{data_root}/us/bills.text/{congress}/{short_type}`
pub fn bill_text_dir(data_root: &Path, congress: Congress, bill_type: BillType) -> PathBuf {
    data_root
        .join("us")
        .join("bills.text")
        .join(congress.to_string())
        .join(bill_type.short_code())
}

// ---------------------------------------------------------------------------
// Artifact refs
// ---------------------------------------------------------------------------

/// One bill metadata record (`data.xml`) in the scraper tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillRef {
    pub congress: Congress,
    pub bill_type: BillType,
    pub number: u32,
}

impl BillRef {
    /// `{data_root}/us/{congress}/bills`
    pub fn legacy_dir(&self, data_root: &Path) -> PathBuf {
        bills_dir(data_root, self.congress)
    }

    /// `{data_root}/us/{congress}/bills/{short}{number}.xml`
    pub fn legacy_path(&self, data_root: &Path) -> PathBuf {
        self.legacy_dir(data_root)
            .join(format!("{}{}.xml", self.bill_type.short_code(), self.number))
    }
}

/// One amendment metadata record in the scraper tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmendmentRef {
    pub congress: Congress,
    pub chamber: Chamber,
    pub number: u32,
}

impl AmendmentRef {
    /// `{data_root}/us/{congress}/bills.amdt`
    pub fn legacy_dir(&self, data_root: &Path) -> PathBuf {
        amendments_dir(data_root, self.congress)
    }

    /// `{data_root}/us/{congress}/bills.amdt/{chamber}{number}.xml`
    pub fn legacy_path(&self, data_root: &Path) -> PathBuf {
        self.legacy_dir(data_root)
            .join(format!("{}{}.xml", self.chamber, self.number))
    }
}

/// One roll-call vote record in the scraper tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteRef {
    pub congress: Congress,
    pub session: Session,
    pub chamber: Chamber,
    pub number: u32,
}

impl VoteRef {
    /// `{data_root}/us/{congress}/rolls`
    pub fn legacy_dir(&self, data_root: &Path) -> PathBuf {
        rolls_dir(data_root, self.congress)
    }

    /// `{data_root}/us/{congress}/rolls/{chamber}{session}-{number}.xml`
    pub fn legacy_path(&self, data_root: &Path) -> PathBuf {
        self.legacy_dir(data_root).join(format!(
            "{}{}-{}.xml",
            self.chamber, self.session, self.number
        ))
    }
}

/// One `text-versions/{version}` directory of a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextVersionRef {
    pub bill: BillRef,
    /// Version code from the directory name (`ih`, `enr`, …).
    pub version: String,
}

impl TextVersionRef {
    /// `{data_root}/us/bills.text/{congress}/{short}`
    pub fn legacy_dir(&self, data_root: &Path) -> PathBuf {
        bill_text_dir(data_root, self.bill.congress, self.bill.bill_type)
    }

    /// File stem shared by every linked rendition: `{short}{number}{version}`.
    fn stem(&self) -> String {
        format!(
            "{}{}{}",
            self.bill.bill_type.short_code(),
            self.bill.number,
            self.version
        )
    }

    /// `…/{short}{number}{version}.mods.xml` — GPO FDSys metadata link.
    pub fn mods_link_path(&self, data_root: &Path) -> PathBuf {
        self.legacy_dir(data_root)
            .join(format!("{}.mods.xml", self.stem()))
    }

    /// `…/{short}{number}{version}.txt` — statute-era plain text link.
    pub fn text_link_path(&self, data_root: &Path) -> PathBuf {
        self.legacy_dir(data_root).join(format!("{}.txt", self.stem()))
    }

    /// File name of the versioned text, target of the latest-status alias.
    pub fn text_file_name(&self) -> String {
        format!("{}.txt", self.stem())
    }

    /// `…/{short}{number}.txt` — unversioned alias for the current status.
    pub fn latest_alias_path(&self, data_root: &Path) -> PathBuf {
        self.legacy_dir(data_root).join(format!(
            "{}{}.txt",
            self.bill.bill_type.short_code(),
            self.bill.number
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
