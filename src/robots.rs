//! robots.txt synchronization

use std::fs;
use std::path::Path;

use crate::Result;

const SITEMAP_DIRECTIVE: &str = "Sitemap:";

/// What happened to robots.txt during a sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsStatus {
    /// No readable file existed; a default one was written
    Created,
    /// The file existed without a sitemap reference; one was appended
    SitemapAppended,
    /// The file already references a sitemap and was left untouched
    AlreadyReferenced,
}

/// Default robots.txt body pointing crawlers at the sitemap.
#[must_use]
pub fn default_body(sitemap_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\n# Sitemap location\nSitemap: {sitemap_url}")
}

/// Decide what the robots.txt content should become.
///
/// Returns `None` for the content when the existing file already carries a
/// `Sitemap:` directive and must stay byte-untouched. Running this over its
/// own output is a no-op, so repeated generator runs never stack directives.
#[must_use]
pub fn ensure_reference(existing: Option<&str>, sitemap_url: &str) -> (RobotsStatus, Option<String>) {
    match existing {
        None => (RobotsStatus::Created, Some(default_body(sitemap_url))),
        Some(content) if content.contains(SITEMAP_DIRECTIVE) => {
            (RobotsStatus::AlreadyReferenced, None)
        }
        Some(content) => (
            RobotsStatus::SitemapAppended,
            Some(format!(
                "{content}\n\n# Sitemap location\nSitemap: {sitemap_url}"
            )),
        ),
    }
}

/// Read-then-conditionally-write robots.txt next to the sitemap.
///
/// Any read failure is treated as an absent file and takes the creation
/// path; write failures propagate to the caller.
pub fn sync_file(path: &Path, base_url: &str) -> Result<RobotsStatus> {
    let sitemap_url = format!("{base_url}/sitemap.xml");
    let existing = fs::read_to_string(path).ok();
    let (status, new_content) = ensure_reference(existing.as_deref(), &sitemap_url);
    if let Some(content) = new_content {
        fs::write(path, content)?;
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITEMAP_URL: &str = "https://example.com/sitemap.xml";

    #[test]
    fn test_absent_file_takes_creation_path() {
        let (status, content) = ensure_reference(None, SITEMAP_URL);
        assert_eq!(status, RobotsStatus::Created);
        let content = content.expect("no content to write");
        assert!(content.starts_with("User-agent: *\nAllow: /"));
        assert!(content.ends_with("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_existing_file_gets_directive_appended() {
        let existing = "User-agent: *\nDisallow: /admin";
        let (status, content) = ensure_reference(Some(existing), SITEMAP_URL);
        assert_eq!(status, RobotsStatus::SitemapAppended);
        let content = content.expect("no content to write");
        assert!(content.starts_with(existing));
        assert!(content.contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_referenced_file_stays_untouched() {
        let existing = "User-agent: *\nAllow: /\n\nSitemap: https://other.example/map.xml";
        let (status, content) = ensure_reference(Some(existing), SITEMAP_URL);
        assert_eq!(status, RobotsStatus::AlreadyReferenced);
        assert!(content.is_none());
    }

    #[test]
    fn test_ensure_reference_is_idempotent() {
        let (_, first) = ensure_reference(None, SITEMAP_URL);
        let first = first.unwrap();
        let (status, second) = ensure_reference(Some(&first), SITEMAP_URL);
        assert_eq!(status, RobotsStatus::AlreadyReferenced);
        assert!(second.is_none());
        assert_eq!(first.matches(SITEMAP_DIRECTIVE).count(), 1);
    }

    #[test]
    fn test_sync_file_creates_and_then_leaves_alone() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("robots.txt");

        let status = sync_file(&path, "https://example.com").expect("sync failed");
        assert_eq!(status, RobotsStatus::Created);
        let written = std::fs::read_to_string(&path).unwrap();

        let status = sync_file(&path, "https://example.com").expect("sync failed");
        assert_eq!(status, RobotsStatus::AlreadyReferenced);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), written);
    }
}
