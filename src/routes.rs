//! Route enumeration for the site's pages.
//!
//! This module provides the single pure function that turns the static
//! catalog into the ordered page list every output format is rendered from.
//! Ordering is part of the contract: crawlers may treat it as a relevance
//! hint, so main pages come first, then destinations, tour packages,
//! vehicle pages, and finally intercity route pages.

use serde::Serialize;

use crate::catalog::{Catalog, Popularity};

/// Crawler hint for how often a page's content is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// Which table a page was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteCategory {
    Main,
    Destination,
    TourPackage,
    Vehicle,
    Intercity,
}

/// One page of the site, ready for XML or link-list rendering
#[derive(Debug, Clone, Serialize)]
pub struct PageDescriptor {
    /// Absolute path starting with "/", lowercase, spaces replaced by hyphens
    pub path: String,
    /// Relative importance in [0.0, 1.0]
    pub priority: f64,
    pub change_frequency: ChangeFrequency,
    pub category: RouteCategory,
    /// Human-readable caption for the site map page
    pub label: String,
}

/// Top-level pages with manually assigned weights, in display order.
const MAIN_ROUTES: [(&str, &str, f64, ChangeFrequency); 9] = [
    ("/", "Home", 1.0, ChangeFrequency::Weekly),
    ("/about", "About Us", 0.8, ChangeFrequency::Monthly),
    ("/services", "Services", 0.9, ChangeFrequency::Weekly),
    ("/contact", "Contact Us", 0.8, ChangeFrequency::Monthly),
    ("/destinations", "Destinations", 0.9, ChangeFrequency::Weekly),
    ("/car-rental", "Car Rental", 0.9, ChangeFrequency::Weekly),
    ("/tour-guide", "Tour Guide", 0.8, ChangeFrequency::Monthly),
    ("/tourist-spots", "Tourist Spots", 0.8, ChangeFrequency::Weekly),
    ("/sitemap", "Sitemap", 0.7, ChangeFrequency::Monthly),
];

/// Number of fixed main routes at the head of every enumeration
pub const MAIN_ROUTE_COUNT: usize = MAIN_ROUTES.len();

/// Make a name safe for use as a URL path segment: lowercase, spaces
/// replaced by hyphens. Already-hyphenated names pass through unchanged.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Enumerate every page of the site in stable order.
///
/// Pure and total: entries are emitted verbatim from the catalog, with no
/// deduplication and no validation of route pairs against the destinations
/// table. Identical catalogs always yield an identical page list.
#[must_use]
pub fn enumerate(catalog: &Catalog) -> Vec<PageDescriptor> {
    let mut pages: Vec<PageDescriptor> = MAIN_ROUTES
        .iter()
        .map(|(path, label, priority, change_frequency)| PageDescriptor {
            path: (*path).to_string(),
            priority: *priority,
            change_frequency: *change_frequency,
            category: RouteCategory::Main,
            label: (*label).to_string(),
        })
        .collect();

    for destination in &catalog.destinations {
        pages.push(PageDescriptor {
            path: format!("/{}", slugify(&destination.name)),
            priority: if destination.popularity == Popularity::High {
                0.8
            } else {
                0.7
            },
            change_frequency: ChangeFrequency::Weekly,
            category: RouteCategory::Destination,
            label: format!("{} Services", destination.name),
        });
    }

    for package in &catalog.tour_packages {
        pages.push(PageDescriptor {
            // Slugs are URL-safe already and used verbatim
            path: format!("/tour-package/{}", package.slug),
            priority: 0.8,
            change_frequency: ChangeFrequency::Weekly,
            category: RouteCategory::TourPackage,
            label: package.title.clone(),
        });
    }

    for category in &catalog.vehicle_categories {
        pages.push(PageDescriptor {
            path: format!("/vehicle-details/{}", slugify(category)),
            priority: 0.7,
            change_frequency: ChangeFrequency::Weekly,
            category: RouteCategory::Vehicle,
            label: format!("{category} Details"),
        });
    }

    for route in &catalog.city_routes {
        for destination in &route.destinations {
            pages.push(PageDescriptor {
                path: format!("/{}/to/{}", slugify(&route.origin), slugify(destination)),
                priority: 0.7,
                change_frequency: ChangeFrequency::Weekly,
                category: RouteCategory::Intercity,
                label: format!("{} to {}", route.origin, destination),
            });
        }
    }

    pages
}
