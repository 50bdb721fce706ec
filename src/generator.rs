//! Build-time entry point: writes sitemap.xml and syncs robots.txt.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::Result;
use crate::catalog::Catalog;
use crate::config::SitemapConfig;
use crate::robots::{self, RobotsStatus};
use crate::routes;
use crate::sitemap;

/// Summary of one generation run
#[derive(Debug)]
pub struct GenerateReport {
    pub sitemap_path: PathBuf,
    pub url_count: usize,
    pub robots_path: PathBuf,
    pub robots_status: RobotsStatus,
}

/// Enumerate the site's pages and write both output files.
///
/// The sitemap is overwritten unconditionally; robots.txt is only written
/// when it is absent or lacks a sitemap reference. The lastmod date is
/// captured once here so every entry of a run carries the same value.
pub fn run(config: &SitemapConfig, catalog: &Catalog) -> Result<GenerateReport> {
    let pages = routes::enumerate(catalog);
    let lastmod = Utc::now().date_naive();
    let xml = sitemap::render(&pages, &config.site.base_url, lastmod)?;

    let output_dir = Path::new(&config.site.output_dir);
    fs::create_dir_all(output_dir)?;

    let sitemap_path = output_dir.join("sitemap.xml");
    fs::write(&sitemap_path, &xml)?;
    info!(
        "Sitemap generated at {} ({} urls)",
        sitemap_path.display(),
        pages.len()
    );

    let robots_path = output_dir.join("robots.txt");
    let robots_status = robots::sync_file(&robots_path, &config.site.base_url)?;
    match robots_status {
        RobotsStatus::Created => info!("Created robots.txt with sitemap reference"),
        RobotsStatus::SitemapAppended => info!("Updated robots.txt to include sitemap reference"),
        RobotsStatus::AlreadyReferenced => info!("robots.txt already references the sitemap"),
    }

    Ok(GenerateReport {
        sitemap_path,
        url_count: pages.len(),
        robots_path,
        robots_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(output_dir: &Path) -> SitemapConfig {
        let mut config = SitemapConfig::default();
        config.site.base_url = "https://example.com".to_string();
        config.site.output_dir = output_dir.to_string_lossy().into_owned();
        config
    }

    #[test]
    fn test_run_writes_both_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = test_config(dir.path());

        let report = run(&config, &Catalog::bundled()).expect("generation failed");
        assert_eq!(report.robots_status, RobotsStatus::Created);
        assert!(report.sitemap_path.exists());
        assert!(report.robots_path.exists());

        let xml = fs::read_to_string(&report.sitemap_path).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(xml.matches("<url>").count(), report.url_count);
    }

    #[test]
    fn test_rerun_never_duplicates_sitemap_directive() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = test_config(dir.path());
        let catalog = Catalog::bundled();

        run(&config, &catalog).expect("first run failed");
        let report = run(&config, &catalog).expect("second run failed");
        assert_eq!(report.robots_status, RobotsStatus::AlreadyReferenced);

        let robots = fs::read_to_string(&report.robots_path).unwrap();
        assert_eq!(robots.matches("Sitemap:").count(), 1);
    }

    #[test]
    fn test_existing_robots_content_is_preserved() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = test_config(dir.path());
        fs::write(dir.path().join("robots.txt"), "User-agent: *\nDisallow: /admin\n").unwrap();

        let report = run(&config, &Catalog::bundled()).expect("generation failed");
        assert_eq!(report.robots_status, RobotsStatus::SitemapAppended);

        let robots = fs::read_to_string(&report.robots_path).unwrap();
        assert!(robots.starts_with("User-agent: *\nDisallow: /admin\n"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
