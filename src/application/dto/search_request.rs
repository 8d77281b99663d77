// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::domain::models::search_query::{SortBy, SortOrder};

/// Minimum number of characters in the trimmed query text
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestDto {
    #[serde(default)]
    #[validate(custom(function = "validate_query_text"))]
    pub query: String,
    /// Subset of "news" | "bulletin" | "property" | "job"
    pub types: Option<Vec<String>>,
    pub sources: Option<Vec<String>>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchRequestDto {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

fn validate_query_text(query: &str) -> Result<(), ValidationError> {
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        return Err(ValidationError::new("query_too_short").with_message(Cow::Borrowed(
            "query must contain at least 2 non-whitespace characters",
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_or_blank_queries() {
        assert!(SearchRequestDto::new("").validate().is_err());
        assert!(SearchRequestDto::new("   ").validate().is_err());
        assert!(SearchRequestDto::new(" a ").validate().is_err());
        assert!(SearchRequestDto::new(" ab ").validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_limit() {
        let mut dto = SearchRequestDto::new("feina");
        dto.limit = Some(0);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case_body() {
        let dto: SearchRequestDto = serde_json::from_str(
            r#"{"query":"pisos","types":["property"],"sortBy":"date","sortOrder":"asc","dateFrom":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(dto.sort_by, Some(SortBy::Date));
        assert_eq!(dto.sort_order, Some(SortOrder::Asc));
        assert!(dto.date_from.is_some());
    }

    #[test]
    fn test_missing_query_defaults_to_empty() {
        let dto: SearchRequestDto = serde_json::from_str(r#"{"limit":5}"#).unwrap();
        assert!(dto.query.is_empty());
        assert!(dto.validate().is_err());
    }
}
