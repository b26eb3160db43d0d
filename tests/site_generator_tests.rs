//! End-to-end builds against a temporary directory.

use std::fs;
use tempfile::TempDir;

use vitrine::config::SiteConfig;
use vitrine::site::{BuildMode, SiteGenerator};

const CSV: &str = "\
map,name,rating,reviews,category,address,status,hours,extra,phone,image
https://maps.example/blue,Blue Cafe,4.6,(123),Cafe,12 Main St,Open,08:00-18:00,x,02-1234-5678,https://img.example/blue.jpg,wifi,outdoor seating
https://maps.example/red,Red Diner,3.9,(41),Diner,9 Side Ave,Closed,,x,,,parking
https://maps.example/bare,,,,Shop,1 Bare Rd,,,x,,
";

fn setup(csv: &str) -> (TempDir, SiteConfig) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("listings.csv"), csv).unwrap();

    let mut config = SiteConfig::default();
    config.data.csv = dir.path().join("listings.csv");
    config.output.directory = dir.path().join("site");
    (dir, config)
}

#[test]
fn build_produces_the_documented_tree() {
    let (_dir, config) = setup(CSV);
    let out = config.output.directory.clone();
    let report = SiteGenerator::new(config).build().unwrap();

    assert!(out.join("index.html").is_file());
    assert!(out.join("assets/style.css").is_file());
    assert!(out.join("assets/main.js").is_file());
    assert!(out.join("listings/Blue-Cafe/index.html").is_file());
    assert!(out.join("listings/Red-Diner/index.html").is_file());
    assert!(out.join("listings/Unnamed-listing-3/index.html").is_file());

    assert_eq!(report.stats.listings, 3);
    assert_eq!(report.stats.pages_written, 4);
    assert_eq!(report.stats.pages_failed, 0);
    assert_eq!(report.stats.assets_written, 2);
    assert!(report.warnings.is_empty());
}

#[test]
fn index_carries_the_card_data_contract() {
    let (_dir, config) = setup(CSV);
    let out = config.output.directory.clone();
    SiteGenerator::new(config).build().unwrap();

    let index = fs::read_to_string(out.join("index.html")).unwrap();

    // Card data attributes, in catalog order
    assert!(index.contains(r#"data-name="Blue Cafe""#));
    assert!(index.contains(r#"data-category="Cafe""#));
    assert!(index.contains(r#"data-address="12 Main St""#));
    assert!(index.contains(r#"data-features="wifi outdoor seating""#));
    assert!(index.contains(r#"data-status="Open""#));
    // Absent status degrades to an empty attribute, not a missing one
    assert!(index.contains(r#"data-status="""#));
    let blue = index.find("Blue Cafe").unwrap();
    let red = index.find("Red Diner").unwrap();
    assert!(blue < red);

    // Filter bar bindings the script queries
    assert!(index.contains(r#"id="search""#));
    assert!(index.contains(r#"id="status-filter""#));
    assert!(index.contains(r#"id="category-filter""#));

    // Select options are the distinct catalog values plus an "All" entry
    assert!(index.contains(r#"<option value="">All</option>"#));
    assert!(index.contains(r#"<option value="Cafe">Cafe</option>"#));
    assert!(index.contains(r#"<option value="Diner">Diner</option>"#));
    assert!(index.contains(r#"<option value="Open">Open</option>"#));
    assert!(index.contains(r#"<option value="Closed">Closed</option>"#));

    // Count seed: the default state shows all three cards
    assert!(index.contains(r#"<strong data-visible-count>3</strong>"#));
}

#[test]
fn detail_pages_link_back_and_escape_markup() {
    let csv = "\
map,name,rating,reviews,category,address,status,hours,extra,phone,image
,Fish & Chips <Quay>,,,Takeaway,3 Pier Rd,,,x,,
";
    let (_dir, config) = setup(csv);
    let out = config.output.directory.clone();
    SiteGenerator::new(config).build().unwrap();

    let page = fs::read_to_string(out.join("listings/Fish-Chips-Quay/index.html")).unwrap();
    assert!(page.contains("Fish &amp; Chips &lt;Quay&gt;"));
    assert!(page.contains(r#"href="../../index.html""#));
    assert!(page.contains(r#"href="../../assets/style.css""#));

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains(r#"data-name="Fish &amp; Chips &lt;Quay&gt;""#));
    assert!(!index.contains("<Quay>"));
}

#[test]
fn rebuild_is_reproducible() {
    let (_dir, config) = setup(CSV);
    let out = config.output.directory.clone();

    SiteGenerator::new(config.clone()).build().unwrap();
    let first = fs::read_to_string(out.join("index.html")).unwrap();

    SiteGenerator::new(config).build().unwrap();
    let second = fs::read_to_string(out.join("index.html")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_and_sequential_builds_agree() {
    let (_dir, mut config) = setup(CSV);
    let out = config.output.directory.clone();

    config.build.mode = BuildMode::Sequential;
    let sequential = SiteGenerator::new(config.clone()).build().unwrap();
    let page_seq = fs::read_to_string(out.join("listings/Blue-Cafe/index.html")).unwrap();

    config.build.mode = BuildMode::Parallel;
    let parallel = SiteGenerator::new(config).build().unwrap();
    let page_par = fs::read_to_string(out.join("listings/Blue-Cafe/index.html")).unwrap();

    assert_eq!(sequential.stats.pages_written, parallel.stats.pages_written);
    assert_eq!(sequential.stats.bytes_written, parallel.stats.bytes_written);
    assert_eq!(page_seq, page_par);
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let csv = "\
map,name,rating,reviews,category,address,status,hours,extra,phone,image
too,short
,Survivor,,,Shop,5 Left Ln,,,x,,
";
    let (_dir, config) = setup(csv);
    let report = SiteGenerator::new(config).build().unwrap();
    assert_eq!(report.stats.rows_read, 2);
    assert_eq!(report.stats.rows_skipped, 1);
    assert_eq!(report.stats.listings, 1);
}
