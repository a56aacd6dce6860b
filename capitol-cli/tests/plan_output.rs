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
fn plan_reports_the_copy_plan_and_writes_nothing() {
    let scraper = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_source(scraper.path(), "data/113/bills/hr/hr42/data.xml", "<bill/>");
    write_source(scraper.path(), "data/113/bills/s/s7/data.xml", "<bill/>");

    capitol()
        .args(["plan", "bills", "--congress", "113"])
        .arg("--scraper-root")
        .arg(scraper.path())
        .arg("--data-root")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("h42.xml"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("2 of 2 files would be written"));

    // Read-only: the destination tree was never created.
    assert!(fs::read_dir(data.path()).unwrap().next().is_none());
}

#[test]
fn plan_distinguishes_unchanged_files() {
    let scraper = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_source(
        scraper.path(),
        "data/113/votes/2013/h7/data.xml",
        r#"<vote updated="2013-05-05"><total>417</total></vote>"#,
    );
    write_source(
        data.path(),
        "us/113/rolls/h2013-7.xml",
        r#"<vote updated="2013-01-01"><total>417</total></vote>"#,
    );

    capitol()
        .args(["plan", "votes", "--congress", "113"])
        .arg("--scraper-root")
        .arg(scraper.path())
        .arg("--data-root")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"))
        .stdout(predicate::str::contains("0 of 1 files would be written"));
}

#[test]
fn plan_json_is_machine_readable() {
    let scraper = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_source(
        scraper.path(),
        "data/113/amendments/samdt/samdt2013/data.xml",
        "<amendment/>",
    );

    let output = capitol()
        .args(["plan", "amendments", "--congress", "113", "--json"])
        .arg("--scraper-root")
        .arg(scraper.path())
        .arg("--data-root")
        .arg(data.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["action"], "create");
    assert!(rows[0]["destination"]
        .as_str()
        .unwrap()
        .ends_with("us/113/bills.amdt/s2013.xml"));
}

#[test]
fn empty_plan_says_so() {
    let scraper = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    capitol()
        .args(["plan", "bills", "--congress", "113"])
        .arg("--scraper-root")
        .arg(scraper.path())
        .arg("--data-root")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("the plan is empty"));
}
