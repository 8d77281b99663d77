// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::domain::models::search_response::{FacetCount, SearchFacets};
use crate::domain::models::search_result::SearchResult;

const MAX_CATEGORIES: usize = 10;

/// Overlapping recency buckets, each counting results newer than `now - window`
fn date_buckets() -> [(&'static str, Duration); 4] {
    [
        ("last_hour", Duration::hours(1)),
        ("today", Duration::hours(24)),
        ("this_week", Duration::days(7)),
        ("this_month", Duration::days(30)),
    ]
}

/// 构建分面统计
///
/// 输入必须是分页前的完整结果集，保证分面始终描述整个查询的结果。
pub fn build_facets(results: &[SearchResult], now: DateTime<Utc>) -> SearchFacets {
    let mut categories = count_by(results, |r| r.category());
    categories.truncate(MAX_CATEGORIES);

    SearchFacets {
        types: count_by(results, |r| r.source_type.to_string()),
        sources: count_by(results, |r| r.source.clone()),
        dates: date_facet(results, now),
        categories,
    }
}

fn count_by<F>(results: &[SearchResult], key_of: F) -> Vec<FacetCount>
where
    F: Fn(&SearchResult) -> String,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for result in results {
        *counts.entry(key_of(result)).or_insert(0) += 1;
    }

    let mut facet: Vec<FacetCount> = counts
        .into_iter()
        .map(|(key, count)| FacetCount { key, count })
        .collect();
    sort_facet(&mut facet);
    facet
}

fn date_facet(results: &[SearchResult], now: DateTime<Utc>) -> Vec<FacetCount> {
    let mut facet: Vec<FacetCount> = date_buckets()
        .iter()
        .map(|(key, window)| {
            let cutoff = now - *window;
            FacetCount {
                key: key.to_string(),
                count: results.iter().filter(|r| r.date >= cutoff).count(),
            }
        })
        .filter(|bucket| bucket.count > 0)
        .collect();
    sort_facet(&mut facet);
    facet
}

/// Descending count, ties by key so identical inputs give identical facets
fn sort_facet(facet: &mut [FacetCount]) {
    facet.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
}
