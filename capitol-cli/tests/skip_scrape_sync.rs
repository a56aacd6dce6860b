use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_source(scraper_root: &Path, rel: &str, content: &str) {
    let path = scraper_root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
}

fn capitol() -> Command {
    let mut cmd = Command::cargo_bin("capitol").unwrap();
    cmd.env_remove("CONGRESS").env_remove("DEBUG");
    cmd
}

#[test]
fn bills_skip_scrape_reconciles_into_legacy_tree() {
    let scraper = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_source(
        scraper.path(),
        "data/113/bills/hr/hr42/data.xml",
        r#"<bill updated="2013-01-01"><title>Act</title></bill>"#,
    );

    capitol()
        .args(["bills", "--skip-scrape", "--congress", "113"])
        .arg("--scraper-root")
        .arg(scraper.path())
        .arg("--data-root")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 copied, 0 unchanged"));

    let dest = data.path().join("us/113/bills/h42.xml");
    assert!(dest.exists());
    assert!(fs::read_to_string(dest).unwrap().contains("<title>Act</title>"));
}

#[test]
fn updated_stamp_only_rerun_reports_unchanged_and_keeps_content() {
    let scraper = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_source(
        scraper.path(),
        "data/113/bills/hr/hr42/data.xml",
        r#"<bill updated="2013-01-01"><title>Act</title></bill>"#,
    );

    let run = |scraper: &Path, data: &Path| {
        capitol()
            .args(["bills", "--skip-scrape", "--congress", "113"])
            .arg("--scraper-root")
            .arg(scraper)
            .arg("--data-root")
            .arg(data)
            .assert()
            .success()
    };

    run(scraper.path(), data.path());
    write_source(
        scraper.path(),
        "data/113/bills/hr/hr42/data.xml",
        r#"<bill updated="2013-06-30"><title>Act</title></bill>"#,
    );
    run(scraper.path(), data.path()).stdout(predicate::str::contains("0 copied, 1 unchanged"));

    // The destination was never rewritten: it still carries the old stamp.
    let kept = fs::read_to_string(data.path().join("us/113/bills/h42.xml")).unwrap();
    assert!(kept.contains(r#"updated="2013-01-01""#));
}

#[test]
fn unknown_type_code_fails_the_batch() {
    let scraper = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_source(scraper.path(), "data/113/bills/hx/hx1/data.xml", "<bill/>");

    capitol()
        .args(["bills", "--skip-scrape", "--congress", "113"])
        .arg("--scraper-root")
        .arg(scraper.path())
        .arg("--data-root")
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized bill type code 'hx'"));

    assert!(fs::read_dir(data.path().join("us/113/bills"))
        .unwrap()
        .next()
        .is_none());
}

#[test]
fn text_skip_scrape_links_mods_files() {
    let scraper = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_source(
        scraper.path(),
        "data/113/bills/hr/hr42/text-versions/ih/mods.xml",
        "<mods/>",
    );

    capitol()
        .args(["text", "--skip-scrape", "--congress", "113"])
        .arg("--scraper-root")
        .arg(scraper.path())
        .arg("--data-root")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 linked"));

    assert!(data.path().join("us/bills.text/113/h/h42ih.mods.xml").exists());
}

#[test]
fn people_refuses_non_current_congress() {
    let scraper = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    capitol()
        .args(["people", "--skip-scrape", "--congress", "112"])
        .arg("--scraper-root")
        .arg(scraper.path())
        .arg("--data-root")
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("current congress"));
}
