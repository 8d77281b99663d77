// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeSet;

use crate::domain::models::search_result::SourceType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Date,
    Source,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// 规范化后的搜索查询
///
/// 由查询规范化器生成，后续所有组件都只使用这一份查询。
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// 去除首尾空白后的查询文本
    pub query: String,
    /// 为空表示搜索所有领域
    pub types: BTreeSet<SourceType>,
    /// 来源名称过滤（小写），为空表示不过滤
    pub sources: BTreeSet<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub limit: u32,
    pub offset: u32,
}

impl SearchQuery {
    pub fn includes_type(&self, source_type: SourceType) -> bool {
        self.types.is_empty() || self.types.contains(&source_type)
    }

    pub fn matches_source(&self, source: &str) -> bool {
        self.sources.is_empty() || self.sources.contains(&source.trim().to_lowercase())
    }

    /// Inclusive on both bounds
    pub fn within_date_window(&self, date: &DateTime<Utc>) -> bool {
        self.date_from.map_or(true, |from| *date >= from)
            && self.date_to.map_or(true, |to| *date <= to)
    }

    /// Stable cache key. Sets are ordered, so request order never changes the key.
    pub fn cache_key(&self) -> String {
        json!({
            "query": self.query,
            "types": self.types,
            "sources": self.sources,
            "sortBy": self.sort_by,
            "sortOrder": self.sort_order,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn query() -> SearchQuery {
        SearchQuery {
            query: "pisos lloguer".to_string(),
            types: BTreeSet::new(),
            sources: BTreeSet::new(),
            date_from: None,
            date_to: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            limit: 20,
            offset: 0,
        }
    }

    #[test]
    fn test_cache_key_ignores_pagination_and_dates() {
        let a = query();
        let mut b = query();
        b.limit = 5;
        b.offset = 10;
        b.date_from = Some(Utc::now());
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_cache_key_depends_on_sort() {
        let a = query();
        let mut b = query();
        b.sort_by = SortBy::Date;
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_date_window_is_inclusive() {
        let now = Utc::now();
        let mut q = query();
        q.date_from = Some(now);
        q.date_to = Some(now);
        assert!(q.within_date_window(&now));
        assert!(!q.within_date_window(&(now + Duration::seconds(1))));
        assert!(!q.within_date_window(&(now - Duration::seconds(1))));
    }

    #[test]
    fn test_source_filter_is_case_insensitive() {
        let mut q = query();
        assert!(q.matches_source("Anything"));
        q.sources.insert("bopa".to_string());
        assert!(q.matches_source("BOPA"));
        assert!(!q.matches_source("Diari d'Andorra"));
    }
}
