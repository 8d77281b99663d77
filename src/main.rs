// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use portal_search::config::settings::Settings;
use portal_search::domain::search::adapter::SourceAdapter;
use portal_search::domain::services::search_service::{
    SearchServiceConfig, UniversalSearchService,
};
use portal_search::infrastructure::cache::cache_strategy::CacheStrategyFactory;
use portal_search::infrastructure::repositories::InMemoryCatalog;
use portal_search::infrastructure::search::{
    BulletinAdapter, JobAdapter, NewsAdapter, PropertyAdapter,
};
use portal_search::presentation::routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use portal_search::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting portal-search...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    if settings.metrics.enabled {
        portal_search::infrastructure::metrics::init_metrics(&settings.metrics.listen)?;
    }

    // 3. Load data providers
    let catalog = Arc::new(InMemoryCatalog::load(&settings.catalog.path).await?);

    // 4. Initialize adapters
    let adapters: Vec<Arc<dyn SourceAdapter>> = vec![
        Arc::new(NewsAdapter::new(catalog.clone())),
        Arc::new(BulletinAdapter::new(catalog.clone())),
        Arc::new(PropertyAdapter::new(catalog.clone())),
        Arc::new(JobAdapter::new(catalog)),
    ];

    // 5. Initialize result cache
    let cache = CacheStrategyFactory::create(&settings.cache).await?;

    // 6. Build search service
    let service = Arc::new(UniversalSearchService::new(
        adapters,
        cache,
        SearchServiceConfig::from(&settings.search),
    ));
    info!("Search service initialized");

    // 7. Start HTTP server
    let app = routes::routes(service).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
