// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use portal_search::domain::services::search_service::SearchServiceConfig;
use portal_search::presentation::routes;
use tower::util::ServiceExt;

use crate::helpers::catalog_service;

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let app = routes::routes(catalog_service(SearchServiceConfig::default()).await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn version_reports_package_version() {
    let app = routes::routes(catalog_service(SearchServiceConfig::default()).await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], env!("CARGO_PKG_VERSION").as_bytes());
}
