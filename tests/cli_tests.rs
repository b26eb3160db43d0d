//! CLI integration tests driving the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CSV: &str = "\
map,name,rating,reviews,category,address,status,hours,extra,phone,image
https://maps.example/blue,Blue Cafe,4.6,(123),Cafe,12 Main St,Open,08:00-18:00,x,02-1234-5678,,wifi
https://maps.example/red,Red Diner,,,Diner,9 Side Ave,Closed,,x,,,parking
";

fn vitrine() -> Command {
    Command::cargo_bin("vitrine").unwrap()
}

fn project_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("listings.csv"), CSV).unwrap();
    dir
}

#[test]
fn help_lists_every_subcommand() {
    vitrine()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("filter"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn no_subcommand_prints_help() {
    vitrine()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_prints_the_crate_version() {
    vitrine()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_init_then_validate() {
    let dir = TempDir::new().unwrap();
    vitrine()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("vitrine.toml").exists());

    // A second init without --force refuses to overwrite
    vitrine()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    vitrine()
        .current_dir(dir.path())
        .args(["config", "validate"])
        .assert()
        .success();
}

#[test]
fn config_show_supports_toml_and_json() {
    let dir = TempDir::new().unwrap();
    vitrine()
        .current_dir(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[site]"));

    vitrine()
        .current_dir(dir.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"site\""));
}

#[test]
fn build_writes_the_site_tree() {
    let dir = project_dir();
    vitrine()
        .current_dir(dir.path())
        .args(["--quiet", "build"])
        .assert()
        .success();

    assert!(dir.path().join("docs/index.html").exists());
    assert!(dir.path().join("docs/assets/main.js").exists());
    assert!(dir.path().join("docs/listings/Blue-Cafe/index.html").exists());
}

#[test]
fn build_honors_csv_and_out_overrides() {
    let dir = project_dir();
    vitrine()
        .current_dir(dir.path())
        .args([
            "--quiet",
            "build",
            "--csv",
            "listings.csv",
            "--out",
            "public",
            "--sequential",
        ])
        .assert()
        .success();
    assert!(dir.path().join("public/index.html").exists());
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn build_json_format_reports_stats() {
    let dir = project_dir();
    vitrine()
        .current_dir(dir.path())
        .args(["--quiet", "build", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pages_written\": 3"))
        .stdout(predicate::str::contains("\"warnings\": []"));
}

#[test]
fn build_with_empty_catalog_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("listings.csv"),
        "map,name,rating,reviews,category,address,status,hours,extra,phone,image\n",
    )
    .unwrap();

    vitrine()
        .current_dir(dir.path())
        .args(["--quiet", "build"])
        .assert()
        .failure();
}

#[test]
fn build_with_missing_csv_fails_with_context() {
    let dir = TempDir::new().unwrap();
    vitrine()
        .current_dir(dir.path())
        .args(["--quiet", "build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("listings.csv"));
}

#[test]
fn filter_count_matches_the_catalog() {
    let dir = project_dir();
    vitrine()
        .current_dir(dir.path())
        .args(["--quiet", "filter", "--format", "count"])
        .assert()
        .success()
        .stdout("2\n");

    vitrine()
        .current_dir(dir.path())
        .args(["--quiet", "filter", "--query", "main", "--format", "count"])
        .assert()
        .success()
        .stdout("1\n");

    // Discrete filters are exact and case-sensitive
    vitrine()
        .current_dir(dir.path())
        .args(["--quiet", "filter", "--category", "caf", "--format", "count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn filter_text_lists_visible_listings() {
    let dir = project_dir();
    vitrine()
        .current_dir(dir.path())
        .args(["--quiet", "filter", "--status", "Closed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Diner"))
        .stdout(predicate::str::contains("1 of 2 visible"))
        .stdout(predicate::str::contains("Blue Cafe").not());
}

#[test]
fn filter_json_names_the_visible_slugs() {
    let dir = project_dir();
    vitrine()
        .current_dir(dir.path())
        .args(["--quiet", "filter", "--query", "wifi", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Blue-Cafe\""))
        .stdout(predicate::str::contains("\"count\": 1"));
}

#[test]
fn stats_reports_catalog_shape() {
    let dir = project_dir();
    vitrine()
        .current_dir(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog"))
        .stdout(predicate::str::contains("2"));
}

#[test]
fn directory_flag_changes_the_working_directory() {
    let dir = project_dir();
    vitrine()
        .args(["-C", dir.path().to_str().unwrap(), "--quiet", "build"])
        .assert()
        .success();
    assert!(dir.path().join("docs/index.html").exists());
}
