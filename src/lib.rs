//! Sitemap and robots.txt tooling for the Triveni Cabs travel booking website.
//!
//! This library provides one pure route enumerator over the site's static
//! tables, plus thin adapters that render its output as sitemap XML,
//! categorized link sections, and the two static files written at build time.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod links;
pub mod robots;
pub mod routes;
pub mod sitemap;
pub mod web;

// Re-export core types for public API
pub use catalog::{Catalog, CityRoute, Destination, Popularity, TourPackage};
pub use config::SitemapConfig;
pub use error::SitemapError;
pub use links::{LinkSection, SiteLink};
pub use routes::{ChangeFrequency, PageDescriptor, RouteCategory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SitemapError>;
