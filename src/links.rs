//! Categorized link sections for the human-readable site map page

use serde::Serialize;

use crate::routes::{PageDescriptor, RouteCategory};

/// One hyperlink on the site map page
#[derive(Debug, Clone, Serialize)]
pub struct SiteLink {
    pub path: String,
    pub label: String,
}

/// A titled group of links, e.g. "Tour Packages"
#[derive(Debug, Clone, Serialize)]
pub struct LinkSection {
    pub title: String,
    pub links: Vec<SiteLink>,
}

/// Section titles shown on the site map page, in display order.
const SECTIONS: [(RouteCategory, &str); 5] = [
    (RouteCategory::Main, "Main Pages"),
    (RouteCategory::Destination, "City Services"),
    (RouteCategory::TourPackage, "Tour Packages"),
    (RouteCategory::Vehicle, "Vehicle Details"),
    (RouteCategory::Intercity, "Intercity Routes"),
];

/// Group the enumerated pages into display sections.
///
/// The site map page itself is omitted from Main Pages so the page never
/// links to itself.
#[must_use]
pub fn sections(pages: &[PageDescriptor]) -> Vec<LinkSection> {
    SECTIONS
        .iter()
        .map(|(category, title)| LinkSection {
            title: (*title).to_string(),
            links: pages
                .iter()
                .filter(|page| page.category == *category && page.path != "/sitemap")
                .map(|page| SiteLink {
                    path: page.path.clone(),
                    label: page.label.clone(),
                })
                .collect(),
        })
        .collect()
}
