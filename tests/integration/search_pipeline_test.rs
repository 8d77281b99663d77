// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{TimeZone, Utc};
use portal_search::application::dto::search_request::SearchRequestDto;
use portal_search::domain::models::search_query::{SortBy, SortOrder};
use portal_search::domain::models::search_result::SourceType;
use portal_search::domain::services::search_service::SearchServiceConfig;

use crate::helpers::catalog_service;

/// 跨领域检索
///
/// 同一查询命中新闻、公报和房产三个领域，分面计数与总数一致
#[tokio::test]
async fn query_spans_several_domains() {
    let service = catalog_service(SearchServiceConfig::default()).await;

    let response = service
        .search(SearchRequestDto::new("lloguer habitatge"))
        .await
        .unwrap();

    assert!(response.success);
    let total = response.stats.total_results;
    assert_eq!(total, 3);
    assert!(response.stats.failed_sources.is_empty());

    let types: Vec<SourceType> = response.results.iter().map(|r| r.source_type).collect();
    assert!(types.contains(&SourceType::News));
    assert!(types.contains(&SourceType::Bulletin));
    assert!(types.contains(&SourceType::Property));

    assert_eq!(
        response.facets.types.iter().map(|f| f.count).sum::<usize>(),
        total
    );
    assert!(response.facets.sources.iter().any(|f| f.key == "BOPA"));
    assert!(response
        .results
        .windows(2)
        .all(|w| w[0].relevance_score >= w[1].relevance_score));
}

#[tokio::test]
async fn sort_by_date_descending() {
    let service = catalog_service(SearchServiceConfig::default()).await;

    let mut dto = SearchRequestDto::new("lloguer habitatge");
    dto.sort_by = Some(SortBy::Date);
    dto.sort_order = Some(SortOrder::Desc);
    let response = service.search(dto).await.unwrap();

    let ids: Vec<&str> = response.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "news:2025-0313-habitatge",
            "bulletin:bopa-2025-031-001",
            "property:pis-escaldes-204",
        ]
    );
}

#[tokio::test]
async fn source_filter_keeps_only_matching_provider() {
    let service = catalog_service(SearchServiceConfig::default()).await;

    let mut dto = SearchRequestDto::new("lloguer habitatge");
    dto.sources = Some(vec!["bopa".to_string()]);
    let response = service.search(dto).await.unwrap();

    assert_eq!(response.stats.total_results, 1);
    assert_eq!(response.results[0].source, "BOPA");
    assert_eq!(response.results[0].metadata["type"], "llei");
}

#[tokio::test]
async fn date_window_outside_catalog_returns_empty_success() {
    let service = catalog_service(SearchServiceConfig::default()).await;

    let mut dto = SearchRequestDto::new("lloguer habitatge");
    dto.date_from = Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());
    let response = service.search(dto).await.unwrap();

    assert!(response.success);
    assert_eq!(response.stats.total_results, 0);
    assert!(response.results.is_empty());
    assert!(response.facets.types.is_empty());
}

#[tokio::test]
async fn pages_partition_the_result_set() {
    let service = catalog_service(SearchServiceConfig::default()).await;

    let full = service
        .search(SearchRequestDto::new("lloguer habitatge"))
        .await
        .unwrap();

    let mut paged = Vec::new();
    for offset in [0, 2] {
        let mut dto = SearchRequestDto::new("lloguer habitatge");
        dto.limit = Some(2);
        dto.offset = Some(offset);
        let page = service.search(dto).await.unwrap();
        assert_eq!(page.stats.total_results, full.stats.total_results);
        paged.extend(page.results.into_iter().map(|r| r.id));
    }

    let full_ids: Vec<String> = full.results.into_iter().map(|r| r.id).collect();
    assert_eq!(paged, full_ids);
}
