//! Build orchestration: catalog in, page tree out.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;

use super::assets;
use super::pages;
use super::stats::BuildStats;
use crate::catalog::{self, Listing};
use crate::config::SiteConfig;

/// How detail pages are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// One page at a time, in catalog order.
    Sequential,
    /// All pages through the rayon pool.
    Parallel,
    /// Parallel once the catalog is large enough to pay for it.
    #[default]
    Auto,
}

/// Everything a finished build reports back.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub stats: BuildStats,
    /// One entry per page that failed to render, prefixed with its slug.
    pub warnings: Vec<String>,
}

/// Runs one build against a merged configuration.
///
/// A build is a pure function of the CSV and the configuration: pages
/// embed no timestamps, so the same inputs produce the same tree.
pub struct SiteGenerator {
    config: SiteConfig,
    clean: bool,
}

impl SiteGenerator {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            clean: true,
        }
    }

    /// Leave whatever is already in the output directory in place instead
    /// of resetting it.
    pub fn keep_output(mut self) -> Self {
        self.clean = false;
        self
    }

    /// Import the catalog and write the whole site.
    ///
    /// A page that fails to render is recorded as a warning and skipped;
    /// only the import and the output-directory setup can abort a build.
    pub fn build(&self) -> Result<BuildReport> {
        let started = Instant::now();

        let catalog = catalog::import_csv(&self.config.data.csv, &self.config.data)?;

        let out_dir = &self.config.output.directory;
        if self.clean && out_dir.exists() {
            fs::remove_dir_all(out_dir)
                .with_context(|| format!("failed to reset {}", out_dir.display()))?;
        }
        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;

        let asset_bytes = assets::write_assets(&out_dir.join(&self.config.output.assets_dir))?;

        let index_html = pages::index::render_index(&catalog, &self.config);
        let index_path = out_dir.join("index.html");
        fs::write(&index_path, &index_html)
            .with_context(|| format!("failed to write {}", index_path.display()))?;

        let mut stats = BuildStats {
            rows_read: catalog.rows_read,
            rows_skipped: catalog.rows_skipped,
            listings: catalog.len(),
            distinct_categories: catalog.categories().len(),
            distinct_statuses: catalog.statuses().len(),
            pages_written: 1,
            assets_written: 2,
            bytes_written: asset_bytes + index_html.len() as u64,
            ..Default::default()
        };

        let listings_root = out_dir.join(&self.config.output.listings_dir);
        let render = |listing: &Listing| {
            self.write_detail(listing, &listings_root)
                .map_err(|err| format!("{}: {err:#}", listing.slug))
        };
        let results: Vec<Result<u64, String>> = if self.use_parallel(catalog.len()) {
            tracing::debug!(listings = catalog.len(), "rendering detail pages in parallel");
            catalog.listings.par_iter().map(render).collect()
        } else {
            catalog.listings.iter().map(render).collect()
        };

        let mut warnings = Vec::new();
        for result in results {
            match result {
                Ok(bytes) => {
                    stats.pages_written += 1;
                    stats.bytes_written += bytes;
                }
                Err(warning) => {
                    stats.pages_failed += 1;
                    tracing::warn!("{warning}");
                    warnings.push(warning);
                }
            }
        }

        stats.duration_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            pages = stats.pages_written,
            failed = stats.pages_failed,
            bytes = stats.bytes_written,
            "built site into {}",
            out_dir.display()
        );

        Ok(BuildReport { stats, warnings })
    }

    fn write_detail(&self, listing: &Listing, listings_root: &Path) -> Result<u64> {
        let page_dir = listings_root.join(&listing.slug);
        fs::create_dir_all(&page_dir)
            .with_context(|| format!("failed to create {}", page_dir.display()))?;

        let html = pages::detail::render_detail(listing, &self.config);
        let page_path = page_dir.join("index.html");
        fs::write(&page_path, &html)
            .with_context(|| format!("failed to write {}", page_path.display()))?;
        Ok(html.len() as u64)
    }

    fn use_parallel(&self, listing_count: usize) -> bool {
        match self.config.build.mode {
            BuildMode::Sequential => false,
            BuildMode::Parallel => true,
            BuildMode::Auto => listing_count >= self.config.build.min_listings_for_parallel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.data.csv = dir.path().join("listings.csv");
        config.output.directory = dir.path().join("docs");
        config
    }

    fn write_catalog(dir: &TempDir) {
        fs::write(
            dir.path().join("listings.csv"),
            "map,name,rating,reviews,category,address,status,hours,extra,phone,image\n\
             https://maps.example/a,Blue Cafe,4.6,(12),Cafe,12 Main St,Open,08-18,x,02-1234,,wifi\n\
             https://maps.example/b,Red Diner,,,Diner,9 Side Ave,Closed,,x,,,parking\n",
        )
        .unwrap();
    }

    #[test]
    fn build_writes_the_whole_tree() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir);
        let report = SiteGenerator::new(config_in(&dir)).build().unwrap();

        let out = dir.path().join("docs");
        assert!(out.join("index.html").exists());
        assert!(out.join("assets/style.css").exists());
        assert!(out.join("assets/main.js").exists());
        assert!(out.join("listings/Blue-Cafe/index.html").exists());
        assert!(out.join("listings/Red-Diner/index.html").exists());

        assert_eq!(report.stats.listings, 2);
        // Index plus one page per listing
        assert_eq!(report.stats.pages_written, 3);
        assert_eq!(report.stats.pages_failed, 0);
        assert!(report.warnings.is_empty());
        assert!(report.stats.bytes_written > 0);
    }

    #[test]
    fn clean_build_removes_stale_output() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir);
        let config = config_in(&dir);

        let stale = config.output.directory.join("stale.html");
        fs::create_dir_all(&config.output.directory).unwrap();
        fs::write(&stale, "old").unwrap();

        SiteGenerator::new(config).build().unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn keep_output_preserves_existing_files() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir);
        let config = config_in(&dir);

        let kept = config.output.directory.join("CNAME");
        fs::create_dir_all(&config.output.directory).unwrap();
        fs::write(&kept, "example.org").unwrap();

        SiteGenerator::new(config).keep_output().build().unwrap();
        assert!(kept.exists());
    }

    #[test]
    fn mode_decides_parallelism() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);

        config.build.mode = BuildMode::Sequential;
        assert!(!SiteGenerator::new(config.clone()).use_parallel(1000));

        config.build.mode = BuildMode::Parallel;
        assert!(SiteGenerator::new(config.clone()).use_parallel(1));

        config.build.mode = BuildMode::Auto;
        config.build.min_listings_for_parallel = 50;
        let generator = SiteGenerator::new(config);
        assert!(!generator.use_parallel(49));
        assert!(generator.use_parallel(50));
    }

    #[test]
    fn empty_catalog_still_builds_the_shell() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("listings.csv"),
            "map,name,rating,reviews,category,address,status,hours,extra,phone,image\n",
        )
        .unwrap();

        let report = SiteGenerator::new(config_in(&dir)).build().unwrap();
        assert_eq!(report.stats.listings, 0);
        assert_eq!(report.stats.pages_written, 1);
        assert!(dir.path().join("docs/index.html").exists());
    }
}
