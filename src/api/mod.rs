use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json},
    routing::get,
};
use chrono::Utc;

use crate::catalog::Catalog;
use crate::config::SitemapConfig;
use crate::links::{self, LinkSection};
use crate::routes;
use crate::sitemap;

pub fn router(config: SitemapConfig) -> Router {
    Router::new()
        .route("/sitemap.xml", get(download_sitemap))
        .route("/sitemap", get(sitemap_sections))
        .with_state(Arc::new(config))
}

/// The same XML the build step writes, offered as a file download.
async fn download_sitemap(
    State(config): State<Arc<SitemapConfig>>,
) -> Result<impl IntoResponse, StatusCode> {
    let pages = routes::enumerate(&Catalog::bundled());
    let xml = sitemap::render(&pages, &config.site.base_url, Utc::now().date_naive())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/xml"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sitemap.xml\"",
            ),
        ],
        xml,
    ))
}

/// The categorized link list backing the site map page.
async fn sitemap_sections() -> Json<Vec<LinkSection>> {
    let pages = routes::enumerate(&Catalog::bundled());
    Json(links::sections(&pages))
}
