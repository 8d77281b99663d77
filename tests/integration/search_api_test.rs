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
use serde_json::json;
use tower::util::ServiceExt;

use crate::helpers::{body_json, catalog_service, json_request};

/// 搜索接口测试
///
/// 限定招聘类型时只返回招聘结果，最相关的全栈职位排在首位并带有高亮摘要
#[tokio::test]
async fn search_returns_ranked_job_results() {
    let app = routes::routes(catalog_service(SearchServiceConfig::default()).await);

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/search",
            json!({ "query": "feina tecnologia", "types": ["job"] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "feina tecnologia");

    let results = body["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r["type"] == "job"));
    assert_eq!(results[0]["id"], "job:fullstack-0042");
    assert_eq!(results[0]["url"], "/feina/fullstack-0042");
    assert_eq!(results[0]["metadata"]["company"], "Andorra Telecom");
    assert!(results[0]["snippet"].as_str().unwrap().contains("<mark>"));
    assert!(results[0]["relevanceScore"].as_f64().unwrap() <= 100.0);
    assert!(body["stats"]["totalResults"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn short_query_is_rejected_with_400() {
    let app = routes::routes(catalog_service(SearchServiceConfig::default()).await);

    let response = app
        .oneshot(json_request("POST", "/v1/search", json!({ "query": " x " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_body_is_rejected_with_json_400() {
    let service = catalog_service(SearchServiceConfig::default()).await;

    let response = routes::routes(service.clone())
        .oneshot(json_request(
            "POST",
            "/v1/search",
            json!({ "query": "lloguer", "offset": -1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    let response = routes::routes(service)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/search")
                .header("content-type", "text/plain")
                .body(Body::from("query=lloguer"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn invalid_limit_and_type_are_rejected() {
    let service = catalog_service(SearchServiceConfig::default()).await;

    let response = routes::routes(service.clone())
        .oneshot(json_request(
            "POST",
            "/v1/search",
            json!({ "query": "andorra", "limit": 0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = routes::routes(service)
        .oneshot(json_request(
            "POST",
            "/v1/search",
            json!({ "query": "andorra", "types": ["weather"] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_query_is_rate_limited_with_429() {
    let service = catalog_service(SearchServiceConfig {
        rate_limit_per_minute: 1,
        ..SearchServiceConfig::default()
    })
    .await;
    let request = || json_request("POST", "/v1/search", json!({ "query": "pisos lloguer" }));

    let first = routes::routes(service.clone())
        .oneshot(request())
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = routes::routes(service).oneshot(request()).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_json(second).await["success"], false);
}

#[tokio::test]
async fn popular_searches_are_padded_to_eight() {
    let service = catalog_service(SearchServiceConfig::default()).await;

    routes::routes(service.clone())
        .oneshot(json_request(
            "POST",
            "/v1/search",
            json!({ "query": "Teletreball" }),
        ))
        .await
        .unwrap();

    let response = routes::routes(service)
        .oneshot(
            Request::builder()
                .uri("/v1/search/popular")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let searches = body["searches"].as_array().unwrap();
    assert_eq!(searches.len(), 8);
    assert_eq!(searches[0], "teletreball");
}

#[tokio::test]
async fn clear_cache_returns_204() {
    let app = routes::routes(catalog_service(SearchServiceConfig::default()).await);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/v1/search/cache")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
