// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeSet;
use validator::Validate;

use crate::application::dto::search_request::SearchRequestDto;
use crate::domain::models::search_query::SearchQuery;
use crate::domain::models::search_result::SourceType;
use crate::domain::services::search_service::SearchServiceError;

pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_MAX_LIMIT: u32 = 100;

/// 查询规范化器
///
/// 校验原始请求并补齐默认值，生成下游组件共用的 [`SearchQuery`]。
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    default_limit: u32,
    max_limit: u32,
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_MAX_LIMIT)
    }
}

impl QueryNormalizer {
    pub fn new(default_limit: u32, max_limit: u32) -> Self {
        let max_limit = max_limit.max(1);
        Self {
            default_limit: default_limit.clamp(1, max_limit),
            max_limit,
        }
    }

    pub fn normalize(&self, dto: SearchRequestDto) -> Result<SearchQuery, SearchServiceError> {
        dto.validate()
            .map_err(|e| SearchServiceError::InvalidQuery(e.to_string()))?;

        let limit = dto.limit.unwrap_or(self.default_limit);
        if limit > self.max_limit {
            return Err(SearchServiceError::InvalidQuery(format!(
                "limit must not exceed {}",
                self.max_limit
            )));
        }

        let types = dto
            .types
            .unwrap_or_default()
            .iter()
            .map(|t| t.parse::<SourceType>())
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(SearchServiceError::InvalidQuery)?;

        let sources = dto
            .sources
            .unwrap_or_default()
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if let (Some(from), Some(to)) = (dto.date_from, dto.date_to) {
            if from > to {
                return Err(SearchServiceError::InvalidQuery(
                    "dateFrom must not be after dateTo".to_string(),
                ));
            }
        }

        Ok(SearchQuery {
            query: dto.query.trim().to_string(),
            types,
            sources,
            date_from: dto.date_from,
            date_to: dto.date_to,
            sort_by: dto.sort_by.unwrap_or_default(),
            sort_order: dto.sort_order.unwrap_or_default(),
            limit,
            offset: dto.offset.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::search_query::{SortBy, SortOrder};
    use chrono::{Duration, Utc};

    #[test]
    fn test_applies_defaults_and_trims() {
        let query = QueryNormalizer::default()
            .normalize(SearchRequestDto::new("  feina tecnologia  "))
            .unwrap();

        assert_eq!(query.query, "feina tecnologia");
        assert!(query.types.is_empty());
        assert_eq!(query.sort_by, SortBy::Relevance);
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.offset, 0);
    }

    #[test]
    fn test_rejects_too_short_query() {
        let err = QueryNormalizer::default()
            .normalize(SearchRequestDto::new(" x "))
            .unwrap_err();
        assert!(matches!(err, SearchServiceError::InvalidQuery(_)));
    }

    #[test]
    fn test_rejects_unknown_type_and_excessive_limit() {
        let normalizer = QueryNormalizer::new(20, 50);

        let mut dto = SearchRequestDto::new("pisos");
        dto.types = Some(vec!["weather".to_string()]);
        assert!(normalizer.normalize(dto).is_err());

        let mut dto = SearchRequestDto::new("pisos");
        dto.limit = Some(51);
        assert!(normalizer.normalize(dto).is_err());
    }

    #[test]
    fn test_rejects_inverted_date_range() {
        let mut dto = SearchRequestDto::new("decret");
        dto.date_from = Some(Utc::now());
        dto.date_to = Some(Utc::now() - Duration::days(1));
        assert!(QueryNormalizer::default().normalize(dto).is_err());
    }

    #[test]
    fn test_request_order_does_not_change_cache_key() {
        let normalizer = QueryNormalizer::default();

        let mut a = SearchRequestDto::new("andorra");
        a.types = Some(vec!["job".to_string(), "news".to_string()]);
        a.sources = Some(vec!["Bondia".to_string(), "BOPA".to_string()]);

        let mut b = SearchRequestDto::new("andorra");
        b.types = Some(vec!["news".to_string(), "job".to_string(), "job".to_string()]);
        b.sources = Some(vec!["bopa".to_string(), "bondia".to_string()]);

        assert_eq!(
            normalizer.normalize(a).unwrap().cache_key(),
            normalizer.normalize(b).unwrap().cache_key()
        );
    }
}
