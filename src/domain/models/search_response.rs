// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::SearchResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub key: String,
    pub count: usize,
}

/// 搜索分面统计
///
/// 基于分页前的完整结果集计算。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFacets {
    pub types: Vec<FacetCount>,
    pub sources: Vec<FacetCount>,
    pub dates: Vec<FacetCount>,
    pub categories: Vec<FacetCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Count after filtering, before pagination
    pub total_results: usize,
    /// Wall-clock milliseconds for the whole call
    pub search_time: u64,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_you_mean: Option<String>,
    /// Adapters that failed or timed out for this call
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub facets: SearchFacets,
    pub stats: SearchStats,
}

impl SearchResponse {
    /// Graceful response for an internal failure: no results, no facets.
    pub fn failure(query: String, search_time: u64) -> Self {
        Self {
            success: false,
            query,
            results: Vec::new(),
            facets: SearchFacets::default(),
            stats: SearchStats {
                search_time,
                ..SearchStats::default()
            },
        }
    }
}
