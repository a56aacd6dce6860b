//! Command builders for every collaborator in the ingest pipeline.
//!
//! Each builder renders one exact command line; nothing here runs anything.
//! Directories arrive as explicit arguments — the deployment layout is the
//! caller's concern.

use std::path::Path;

use capitol_core::types::{Congress, Session};
use capitol_core::IngestConfig;

use crate::command::{in_venv, CommandSpec};

fn fetch_flags(cfg: &IngestConfig) -> String {
    cfg.fetch_mode.flags().join(" ")
}

// ---------------------------------------------------------------------------
// Congress project scrapers
// ---------------------------------------------------------------------------

/// `./run bills --govtrack {fetch} --congress={c} --log={l}`
pub fn scrape_bills(scraper_dir: &Path, cfg: &IngestConfig) -> CommandSpec {
    in_venv(
        scraper_dir,
        &format!(
            "./run bills --govtrack {} --congress={} --log={}",
            fetch_flags(cfg),
            cfg.congress,
            cfg.log_level.flag()
        ),
    )
}

/// `./run amendments --govtrack {fetch} --congress={c} --log={l}`
pub fn scrape_amendments(scraper_dir: &Path, cfg: &IngestConfig) -> CommandSpec {
    in_venv(
        scraper_dir,
        &format!(
            "./run amendments --govtrack {} --congress={} --log={}",
            fetch_flags(cfg),
            cfg.congress,
            cfg.log_level.flag()
        ),
    )
}

/// `./run votes --govtrack {fetch} --congress={c} --session={s} --log={l}`
pub fn scrape_votes(scraper_dir: &Path, cfg: &IngestConfig, session: Session) -> CommandSpec {
    in_venv(
        scraper_dir,
        &format!(
            "./run votes --govtrack {} --congress={} --session={} --log={}",
            fetch_flags(cfg),
            cfg.congress,
            session,
            cfg.log_level.flag()
        ),
    )
}

/// `./run fdsys --collections=BILLS --store=mods,text,xml --log={l}` — the
/// GPO FDSys bill-text mirror.
pub fn scrape_bill_text(scraper_dir: &Path, cfg: &IngestConfig) -> CommandSpec {
    in_venv(
        scraper_dir,
        &format!(
            "./run fdsys --collections=BILLS --store=mods,text,xml --log={}",
            cfg.log_level.flag()
        ),
    )
}

/// `./run deepbills --log={l}` — Cato deepbills mirror.
pub fn scrape_deepbills(scraper_dir: &Path, cfg: &IngestConfig) -> CommandSpec {
    in_venv(
        scraper_dir,
        &format!("./run deepbills --log={}", cfg.log_level.flag()),
    )
}

/// `./run committee_meetings {fetch} --log={l}`
pub fn scrape_committee_meetings(scraper_dir: &Path, cfg: &IngestConfig) -> CommandSpec {
    in_venv(
        scraper_dir,
        &format!(
            "./run committee_meetings {} --log={}",
            fetch_flags(cfg),
            cfg.log_level.flag()
        ),
    )
}

/// `./run fdsys --collections=STATUTE --store=mods --log=warn`
///
/// Statute pulls always log at warn; they churn for hours and anything
/// louder drowns the cron mail.
pub fn scrape_statute_mods(scraper_dir: &Path) -> CommandSpec {
    in_venv(
        scraper_dir,
        "./run fdsys --collections=STATUTE --store=mods --log=warn",
    )
}

/// `./run statutes --volumes={volumes} [--textversions] --log=warn`
pub fn scrape_statutes(scraper_dir: &Path, volumes: &str, textversions: bool) -> CommandSpec {
    let tv = if textversions { " --textversions" } else { "" };
    in_venv(
        scraper_dir,
        &format!("./run statutes --volumes={volumes}{tv} --log=warn"),
    )
}

// ---------------------------------------------------------------------------
// Git checkouts
// ---------------------------------------------------------------------------

/// Fast-forward the congress-legislators checkout: `git fetch -pq` then
/// `git merge --ff-only -q origin/master`.
pub fn git_refresh(repo_dir: &Path) -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("git")
            .args(["fetch", "-pq"])
            .current_dir(repo_dir),
        CommandSpec::new("git")
            .args(["merge", "--ff-only", "-q", "origin/master"])
            .current_dir(repo_dir),
    ]
}

/// `git pull --rebase` — the congress-images checkout.
pub fn git_pull_rebase(repo_dir: &Path) -> CommandSpec {
    CommandSpec::new("git")
        .args(["pull", "--rebase"])
        .current_dir(repo_dir)
}

// ---------------------------------------------------------------------------
// Legacy converters and gatherers
// ---------------------------------------------------------------------------

/// `python {script} {legislators}/ {legacy_out} {out} {0|1}` — people YAML
/// into the legacy XML formats.
pub fn convert_people(
    script: &Path,
    legislators_dir: &Path,
    legacy_out: &Path,
    out: &Path,
    current_congress_only: bool,
) -> CommandSpec {
    CommandSpec::new("python")
        .arg(script.display().to_string())
        .arg(format!("{}/", legislators_dir.display()))
        .arg(legacy_out.display().to_string())
        .arg(out.display().to_string())
        .arg(if current_congress_only { "1" } else { "0" })
}

/// `cd {legislators}/scripts; . .env/bin/activate; python alternate_bulk_formats.py`
pub fn alternate_bulk_formats(legislators_dir: &Path) -> CommandSpec {
    in_venv(
        &legislators_dir.join("scripts"),
        "python alternate_bulk_formats.py",
    )
}

/// Committee YAML into the legacy XML format, under the legislators venv.
pub fn convert_committees(
    script: &Path,
    scraper_dir: &Path,
    legislators_dir: &Path,
    out: &Path,
) -> CommandSpec {
    CommandSpec::shell(format!(
        ". {}/scripts/.env/bin/activate; python {} {} {}/ {}",
        legislators_dir.display(),
        script.display(),
        scraper_dir.display(),
        legislators_dir.display(),
        out.display()
    ))
}

/// Which pass of the legacy Perl text gatherer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextGatherStage {
    FullText,
    Generate,
}

impl TextGatherStage {
    fn keyword(self) -> &'static str {
        match self {
            TextGatherStage::FullText => "FULLTEXT",
            TextGatherStage::Generate => "GENERATE",
        }
    }
}

/// `perl fetchbilltext.pl {FULLTEXT|GENERATE} {c}` in the gather checkout.
pub fn fetch_bill_text(
    gather_dir: &Path,
    stage: TextGatherStage,
    congress: Congress,
) -> CommandSpec {
    CommandSpec::new("perl")
        .arg("fetchbilltext.pl")
        .arg(stage.keyword())
        .arg(congress.to_string())
        .current_dir(gather_dir)
}

/// `perl parse_status.pl SUMMARIES {c}` in the gather checkout.
pub fn generate_summaries(gather_dir: &Path, congress: Congress) -> CommandSpec {
    CommandSpec::new("perl")
        .arg("parse_status.pl")
        .arg("SUMMARIES")
        .arg(congress.to_string())
        .current_dir(gather_dir)
}

// ---------------------------------------------------------------------------
// Database loads and indexing
// ---------------------------------------------------------------------------

/// `./parse.py --congress={c} -l {l} {kind}` — bills, amendments, votes.
pub fn load_congress_data(cfg: &IngestConfig, kind: &str) -> CommandSpec {
    CommandSpec::new("./parse.py")
        .arg(format!("--congress={}", cfg.congress))
        .args(["-l", cfg.log_level.flag()])
        .arg(kind)
}

/// `./parse.py --congress={c} bill` — statute-era backfill load.
pub fn load_statute_bills(congress: Congress) -> CommandSpec {
    CommandSpec::new("./parse.py")
        .arg(format!("--congress={congress}"))
        .arg("bill")
}

/// `./parse.py person` — people load straight from YAML.
pub fn load_people() -> CommandSpec {
    CommandSpec::new("./parse.py").arg("person")
}

/// `./parse.py -l ERROR committee`
pub fn load_committees() -> CommandSpec {
    CommandSpec::new("./parse.py").args(["-l", "ERROR", "committee"])
}

/// `./manage.py update_index -v 0 -u person person`
pub fn update_person_index() -> CommandSpec {
    CommandSpec::new("./manage.py").args(["update_index", "-v", "0", "-u", "person", "person"])
}

/// `./manage.py dumpdata --format json person > {out}`
pub fn dump_person_fixture(out: &Path) -> CommandSpec {
    CommandSpec::shell(format!(
        "./manage.py dumpdata --format json person > {}",
        out.display()
    ))
}

// ---------------------------------------------------------------------------
// Analysis and image processing
// ---------------------------------------------------------------------------

/// `analysis/sponsorship_analysis.py {c}`
pub fn sponsorship_analysis(congress: Congress) -> CommandSpec {
    CommandSpec::new("analysis/sponsorship_analysis.py").arg(congress.to_string())
}

/// `analysis/missed_votes.py {c}`
pub fn missed_votes(congress: Congress) -> CommandSpec {
    CommandSpec::new("analysis/missed_votes.py").arg(congress.to_string())
}

/// ImageMagick center-crop resize:
/// `convert {src} -resize {w}x{h}^ -gravity center -extent {w}x{h} {dest}`
pub fn resize_photo(src: &Path, dest: &Path, width: u32, height: u32) -> CommandSpec {
    CommandSpec::new("convert")
        .arg(src.display().to_string())
        .args(["-resize", &format!("{width}x{height}^")])
        .args(["-gravity", "center"])
        .args(["-extent", &format!("{width}x{height}")])
        .arg(dest.display().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
