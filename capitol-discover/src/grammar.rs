//! Path-grammar parser for scraper output paths.
//!
//! The grammar is a fixed contract with the upstream scraper; each parse
//! either yields a typed ref or fails loudly with the offending path.

use std::path::Path;

use regex::Regex;

use capitol_core::config::TypeCodeTable;
use capitol_core::types::{Chamber, Congress, Session};

use crate::artifact::{AmendmentRef, BillRef, VoteRef};
use crate::error::DiscoverError;

/// Compiled extraction patterns for every artifact kind.
pub struct PathGrammar {
    bill: Regex,
    bill_dir: Regex,
    amendment: Regex,
    vote: Regex,
}

impl PathGrammar {
    /// Compile the grammar.
    pub fn new() -> Result<Self, DiscoverError> {
        Ok(Self {
            bill: Regex::new(r"data/(\d+)/bills/([a-z]+)/(?:[a-z]+)(\d+)/data\.xml$")?,
            bill_dir: Regex::new(r"data/(\d+)/bills/([a-z]+)/(?:[a-z]+)(\d+)$")?,
            amendment: Regex::new(r"data/(\d+)/amendments/([hs])amdt/(?:[hs])amdt(\d+)/data\.xml$")?,
            vote: Regex::new(r"data/(\d+)/votes/(\d+)/([hs])(\d+)/data\.xml$")?,
        })
    }

    /// Parse a `bills/{type}/{type}{number}/data.xml` path.
    pub fn parse_bill(
        &self,
        path: &Path,
        type_codes: &TypeCodeTable,
    ) -> Result<BillRef, DiscoverError> {
        let text = path.to_string_lossy();
        let caps = self
            .bill
            .captures(&text)
            .ok_or_else(|| grammar_err(path))?;
        Ok(BillRef {
            congress: Congress(parse_num(&caps[1], path)?),
            bill_type: type_codes.resolve(&caps[2])?,
            number: parse_num(&caps[3], path)?,
        })
    }

    /// Parse a `bills/{type}/{type}{number}` directory path (text mirroring
    /// walks bill directories, not `data.xml` files).
    pub fn parse_bill_dir(
        &self,
        path: &Path,
        type_codes: &TypeCodeTable,
    ) -> Result<BillRef, DiscoverError> {
        let text = path.to_string_lossy();
        let caps = self
            .bill_dir
            .captures(&text)
            .ok_or_else(|| grammar_err(path))?;
        Ok(BillRef {
            congress: Congress(parse_num(&caps[1], path)?),
            bill_type: type_codes.resolve(&caps[2])?,
            number: parse_num(&caps[3], path)?,
        })
    }

    /// Parse an `amendments/{h|s}amdt/{h|s}amdt{number}/data.xml` path.
    pub fn parse_amendment(&self, path: &Path) -> Result<AmendmentRef, DiscoverError> {
        let text = path.to_string_lossy();
        let caps = self
            .amendment
            .captures(&text)
            .ok_or_else(|| grammar_err(path))?;
        let chamber = Chamber::from_code(&caps[2]).ok_or_else(|| grammar_err(path))?;
        Ok(AmendmentRef {
            congress: Congress(parse_num(&caps[1], path)?),
            chamber,
            number: parse_num(&caps[3], path)?,
        })
    }

    /// Parse a `votes/{session}/{chamber}{number}/data.xml` path.
    pub fn parse_vote(&self, path: &Path) -> Result<VoteRef, DiscoverError> {
        let text = path.to_string_lossy();
        let caps = self
            .vote
            .captures(&text)
            .ok_or_else(|| grammar_err(path))?;
        let chamber = Chamber::from_code(&caps[3]).ok_or_else(|| grammar_err(path))?;
        Ok(VoteRef {
            congress: Congress(parse_num(&caps[1], path)?),
            session: Session(parse_num(&caps[2], path)?),
            chamber,
            number: parse_num(&caps[4], path)?,
        })
    }
}

fn grammar_err(path: &Path) -> DiscoverError {
    DiscoverError::PathGrammar {
        path: path.to_path_buf(),
    }
}

// The regexes guarantee digits; only out-of-range values can still fail.
fn parse_num<T: std::str::FromStr>(digits: &str, path: &Path) -> Result<T, DiscoverError> {
    digits.parse().map_err(|_| grammar_err(path))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use capitol_core::types::BillType;
    use rstest::rstest;

    use super::*;

    fn grammar() -> PathGrammar {
        PathGrammar::new().expect("grammar compiles")
    }

    #[test]
    fn parses_bill_path() {
        let bill = grammar()
            .parse_bill(
                Path::new("/srv/congress/data/113/bills/hr/hr42/data.xml"),
                &TypeCodeTable::standard(),
            )
            .expect("parse");
        assert_eq!(
            bill,
            BillRef {
                congress: Congress(113),
                bill_type: BillType::Hr,
                number: 42,
            }
        );
    }

    #[test]
    fn parses_bill_dir() {
        let bill = grammar()
            .parse_bill_dir(
                Path::new("/srv/congress/data/90/bills/hjres/hjres3"),
                &TypeCodeTable::standard(),
            )
            .expect("parse");
        assert_eq!(bill.bill_type, BillType::Hjres);
        assert_eq!(bill.number, 3);
    }

    #[test]
    fn parses_amendment_path() {
        let amdt = grammar()
            .parse_amendment(Path::new(
                "/srv/congress/data/113/amendments/samdt/samdt2013/data.xml",
            ))
            .expect("parse");
        assert_eq!(
            amdt,
            AmendmentRef {
                congress: Congress(113),
                chamber: Chamber::Senate,
                number: 2013,
            }
        );
    }

    #[test]
    fn parses_vote_path() {
        let vote = grammar()
            .parse_vote(Path::new("/srv/congress/data/113/votes/2013/h7/data.xml"))
            .expect("parse");
        assert_eq!(
            vote,
            VoteRef {
                congress: Congress(113),
                session: Session(2013),
                chamber: Chamber::House,
                number: 7,
            }
        );
    }

    #[test]
    fn unknown_type_code_is_validation_error() {
        let err = grammar()
            .parse_bill(
                Path::new("/srv/congress/data/113/bills/hrx/hrx1/data.xml"),
                &TypeCodeTable::standard(),
            )
            .unwrap_err();
        assert!(matches!(err, DiscoverError::Validation(_)));
    }

    #[rstest]
    #[case("/srv/congress/data/113/bills/hr/hr42/data.json")]
    #[case("/srv/congress/data/113/bills/hr42/data.xml")]
    #[case("/srv/congress/votes/2013/h7/data.xml")]
    fn off_grammar_paths_are_rejected(#[case] path: &str) {
        let g = grammar();
        let table = TypeCodeTable::standard();
        assert!(g.parse_bill(Path::new(path), &table).is_err());
        assert!(g.parse_vote(Path::new(path)).is_err());
    }
}
