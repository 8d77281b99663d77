// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// 结果来源的数据领域
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    News,
    Bulletin,
    Property,
    Job,
}

impl SourceType {
    pub const ALL: [SourceType; 4] = [
        SourceType::News,
        SourceType::Bulletin,
        SourceType::Property,
        SourceType::Job,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::News => "news",
            SourceType::Bulletin => "bulletin",
            SourceType::Property => "property",
            SourceType::Job => "job",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "news" => Ok(SourceType::News),
            "bulletin" | "bopa" => Ok(SourceType::Bulletin),
            "property" | "real-estate" => Ok(SourceType::Property),
            "job" => Ok(SourceType::Job),
            other => Err(format!("unknown source type: {}", other)),
        }
    }
}

/// Opaque per-domain fields (category, price, salary...)
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// 统一搜索结果
///
/// 所有数据领域的结果都会被映射为该结构，`relevance_score` 和 `snippet`
/// 由搜索服务统一计算，适配器提供的值不会被信任。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub source: String,
    pub date: DateTime<Utc>,
    pub relevance_score: f64,
    pub snippet: String,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SearchResult {
    pub fn new(
        source_type: SourceType,
        native_id: &str,
        title: String,
        description: String,
        url: String,
        source: String,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("{}:{}", source_type, native_id),
            title,
            description,
            url,
            source_type,
            source,
            date,
            relevance_score: 0.0,
            snippet: String::new(),
            metadata: Metadata::new(),
            image_url: None,
        }
    }

    /// Category used for faceting: `metadata.category`, then `metadata.type`, then "General"
    pub fn category(&self) -> String {
        ["category", "type"]
            .iter()
            .filter_map(|field| self.metadata.get(*field))
            .find_map(|value| match value {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                serde_json::Value::Null | serde_json::Value::String(_) => None,
                other => Some(other.to_string()),
            })
            .unwrap_or_else(|| "General".to_string())
    }
}
