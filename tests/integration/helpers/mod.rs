// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::body::Body;
use axum::http::{Request, Response};
use portal_search::domain::search::adapter::SourceAdapter;
use portal_search::domain::services::search_service::{
    SearchServiceConfig, UniversalSearchService,
};
use portal_search::infrastructure::cache::cache_strategy::MemoryResultCache;
use portal_search::infrastructure::repositories::InMemoryCatalog;
use portal_search::infrastructure::search::{
    BulletinAdapter, JobAdapter, NewsAdapter, PropertyAdapter,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const CATALOG_PATH: &str = "data/catalog.yaml";

/// Search service wired to the seed catalog, the way `main` wires it
pub async fn catalog_service(config: SearchServiceConfig) -> Arc<UniversalSearchService> {
    let catalog = Arc::new(
        InMemoryCatalog::load(CATALOG_PATH)
            .await
            .expect("seed catalog should load"),
    );

    let adapters: Vec<Arc<dyn SourceAdapter>> = vec![
        Arc::new(NewsAdapter::new(catalog.clone())),
        Arc::new(BulletinAdapter::new(catalog.clone())),
        Arc::new(PropertyAdapter::new(catalog.clone())),
        Arc::new(JobAdapter::new(catalog)),
    ];

    Arc::new(UniversalSearchService::new(
        adapters,
        Arc::new(MemoryResultCache::new(Duration::from_secs(300), 100)),
        config,
    ))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
