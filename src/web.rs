use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::config::SitemapConfig;

pub async fn run(config: SitemapConfig) {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let port = config.server.port;
    let app = Router::new().nest("/api", api::router(config)).layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Sitemap server running at http://localhost:{}", port);
    axum::serve(listener, app).await.unwrap();
}
