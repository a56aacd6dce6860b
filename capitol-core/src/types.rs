//! Domain types for the Capitol ingest pipeline.
//!
//! All of these appear inside scraper output paths and legacy destination
//! names, so each carries its exact on-disk spelling: `Congress` and
//! `Session` render as bare digits, `Chamber` as its one-letter code,
//! `BillType` as the long-form code (with [`BillType::short_code`] for the
//! legacy rendering).

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A Congress number (e.g. 113).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Congress(pub u16);

impl fmt::Display for Congress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u16> for Congress {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// A legislative session identifier as it appears in vote paths.
///
/// For modern data this is a calendar year (`2013`); the House and Senate
/// have also used ordinal sessions (`1`, `2`) historically, so no range is
/// enforced beyond "digits".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Session(pub u16);

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u16> for Session {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Chamber of Congress, spelled as the single-letter code used in both the
/// scraper tree (`hamdt`, `h55`) and the legacy tree (`rolls/h2013-7.xml`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// One-letter code: `h` or `s`.
    pub fn code(self) -> char {
        match self {
            Chamber::House => 'h',
            Chamber::Senate => 's',
        }
    }

    /// Parse the one-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "h" => Some(Chamber::House),
            "s" => Some(Chamber::Senate),
            _ => None,
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The eight bill types Congress produces.
///
/// Two renderings exist: the long-form code the upstream scraper uses in its
/// directory names (`hjres`) and the short code the legacy tree uses in file
/// names (`hj`). `Display` is the long form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillType {
    Hr,
    S,
    Hres,
    Sres,
    Hjres,
    Sjres,
    Hconres,
    Sconres,
}

impl BillType {
    /// Every bill type, in scraper directory order.
    pub fn all() -> &'static [BillType] {
        &[
            BillType::Hr,
            BillType::S,
            BillType::Hres,
            BillType::Sres,
            BillType::Hjres,
            BillType::Sjres,
            BillType::Hconres,
            BillType::Sconres,
        ]
    }

    /// Long-form code as used by the upstream scraper (`hconres`).
    pub fn long_code(self) -> &'static str {
        match self {
            BillType::Hr => "hr",
            BillType::S => "s",
            BillType::Hres => "hres",
            BillType::Sres => "sres",
            BillType::Hjres => "hjres",
            BillType::Sjres => "sjres",
            BillType::Hconres => "hconres",
            BillType::Sconres => "sconres",
        }
    }

    /// Short code as used by the legacy tree (`hc`).
    pub fn short_code(self) -> &'static str {
        match self {
            BillType::Hr => "h",
            BillType::S => "s",
            BillType::Hres => "hr",
            BillType::Sres => "sr",
            BillType::Hjres => "hj",
            BillType::Sjres => "sj",
            BillType::Hconres => "hc",
            BillType::Sconres => "sc",
        }
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_code())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn congress_and_session_display_as_digits() {
        assert_eq!(Congress(113).to_string(), "113");
        assert_eq!(Session(2013).to_string(), "2013");
    }

    #[test]
    fn chamber_codes_roundtrip() {
        assert_eq!(Chamber::from_code("h"), Some(Chamber::House));
        assert_eq!(Chamber::from_code("s"), Some(Chamber::Senate));
        assert_eq!(Chamber::from_code("x"), None);
        assert_eq!(Chamber::House.to_string(), "h");
    }

    #[rstest]
    #[case(BillType::Hr, "hr", "h")]
    #[case(BillType::S, "s", "s")]
    #[case(BillType::Hres, "hres", "hr")]
    #[case(BillType::Sres, "sres", "sr")]
    #[case(BillType::Hjres, "hjres", "hj")]
    #[case(BillType::Sjres, "sjres", "sj")]
    #[case(BillType::Hconres, "hconres", "hc")]
    #[case(BillType::Sconres, "sconres", "sc")]
    fn bill_type_code_table(#[case] bt: BillType, #[case] long: &str, #[case] short: &str) {
        assert_eq!(bt.long_code(), long);
        assert_eq!(bt.short_code(), short);
        assert_eq!(bt.to_string(), long);
    }

    #[test]
    fn all_covers_every_type_once() {
        let all = BillType::all();
        assert_eq!(all.len(), 8);
        let longs: std::collections::HashSet<_> = all.iter().map(|b| b.long_code()).collect();
        assert_eq!(longs.len(), 8);
    }
}
