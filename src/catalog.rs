//! Static site tables: served destinations, tour packages, vehicle fleet,
//! and intercity route pairs.
//!
//! These tables are the single source the route enumerator consumes. The
//! bundled set mirrors the live site; a deployment can swap it out by
//! loading a JSON catalog file instead.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{Result, SitemapError};

/// Crawler-facing popularity tier of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Popularity {
    High,
    #[default]
    Medium,
}

/// A city the cab service operates in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub region: String,
    /// Service coverage shown on the city page, e.g. "City + 50km radius"
    pub coverage: String,
    #[serde(default)]
    pub popularity: Popularity,
}

/// A tour package page, addressed by its URL slug
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourPackage {
    pub slug: String,
    pub title: String,
}

/// Directed intercity routes offered from one origin city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRoute {
    pub origin: String,
    pub destinations: Vec<String>,
}

/// All static tables the site's pages are generated from.
///
/// Table order is preserved everywhere: the enumerated page list follows the
/// declared order of these vectors. Entries are taken as-is; repeated or
/// unknown city names are not filtered out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub destinations: Vec<Destination>,
    pub tour_packages: Vec<TourPackage>,
    pub vehicle_categories: Vec<String>,
    pub city_routes: Vec<CityRoute>,
}

const DESTINATIONS: [(&str, &str, &str, Popularity); 14] = [
    ("Delhi", "North India", "NCR Region", Popularity::High),
    ("Agra", "North India", "City + 50km radius", Popularity::High),
    ("Jaipur", "North India", "Pink City Area", Popularity::High),
    ("Haridwar", "North India", "Temple Circuit", Popularity::Medium),
    ("Chandigarh", "North India", "Tri-city Area", Popularity::Medium),
    ("Shimla", "North India", "Hill Station Tours", Popularity::High),
    ("Manali", "North India", "Adventure Routes", Popularity::High),
    ("Amritsar", "North India", "Golden Temple Area", Popularity::Medium),
    ("Dehradun", "North India", "Valley Region", Popularity::Medium),
    ("Rishikesh", "North India", "Spiritual Circuit", Popularity::High),
    ("Jodhpur", "North India", "Blue City Area", Popularity::Medium),
    ("Udaipur", "North India", "Lake City Region", Popularity::High),
    ("Ayodhya", "North India", "Temple City", Popularity::High),
    ("Ahmedabad", "West India", "City + Suburbs", Popularity::Medium),
];

const TOUR_PACKAGES: [(&str, &str); 6] = [
    ("manali-tour-from-mumbai", "Manali Tour from Mumbai"),
    ("chardham-yatra-package", "Chardham Yatra Package"),
    ("shimla-from-mumbai", "Shimla from Mumbai"),
    ("rajasthan-tour", "Rajasthan Tour"),
    ("kashmir-tour", "Kashmir Tour"),
    ("punjab-tour", "Punjab Tour"),
];

const VEHICLE_CATEGORIES: [&str; 5] = ["Sedan", "SUV", "Tempo-Traveller", "Luxury-Bus", "Bus"];

// Origins and their destinations are directed pairs; reverse routes are
// listed explicitly where offered (Mumbai has no reverse entries).
const CITY_ROUTES: [(&str, &[&str]); 9] = [
    (
        "Delhi",
        &[
            "Agra",
            "Haridwar",
            "Jaipur",
            "Chandigarh",
            "Shimla",
            "Manali",
            "Amritsar",
            "Dharamshala",
        ],
    ),
    ("Jaipur", &["Delhi", "Udaipur", "Jodhpur"]),
    ("Mumbai", &["Pune", "Lonavala", "Nashik"]),
    ("Chandigarh", &["Delhi", "Shimla", "Manali"]),
    ("Agra", &["Delhi", "Jaipur"]),
    ("Shimla", &["Delhi", "Chandigarh", "Manali"]),
    ("Manali", &["Delhi", "Chandigarh"]),
    ("Amritsar", &["Delhi", "Chandigarh"]),
    ("Haridwar", &["Delhi", "Rishikesh"]),
];

impl Catalog {
    /// The tables bundled with this crate, matching the live site's data.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            destinations: DESTINATIONS
                .iter()
                .map(|(name, region, coverage, popularity)| Destination {
                    name: (*name).to_string(),
                    region: (*region).to_string(),
                    coverage: (*coverage).to_string(),
                    popularity: *popularity,
                })
                .collect(),
            tour_packages: TOUR_PACKAGES
                .iter()
                .map(|(slug, title)| TourPackage {
                    slug: (*slug).to_string(),
                    title: (*title).to_string(),
                })
                .collect(),
            vehicle_categories: VEHICLE_CATEGORIES
                .iter()
                .map(|category| (*category).to_string())
                .collect(),
            city_routes: CITY_ROUTES
                .iter()
                .map(|(origin, destinations)| CityRoute {
                    origin: (*origin).to_string(),
                    destinations: destinations
                        .iter()
                        .map(|destination| (*destination).to_string())
                        .collect(),
                })
                .collect(),
        }
    }

    /// Load a catalog from a JSON file, replacing the bundled tables.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            SitemapError::validation(format!("Invalid catalog file {}: {e}", path.display()))
        })
    }
}
