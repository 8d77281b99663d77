// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 上游数据源的原始记录
//!
//! 这些结构由外部数据提供方返回，字段缺失时保持为 `None`，
//! 由各个适配器负责映射为统一的 [`SearchResult`](super::search_result::SearchResult)。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub url: String,
    pub source: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub language: Option<String>,
    pub sentiment: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Official bulletin (BOPA) entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletinDocument {
    pub id: String,
    pub number: Option<String>,
    pub title: String,
    pub content: String,
    pub section: Option<String>,
    /// llei, decret, resolucio, anunci...
    pub kind: Option<String>,
    pub url: String,
    pub keywords: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    /// pis, casa, local...
    pub kind: Option<String>,
    pub parish: Option<String>,
    pub surface: Option<f64>,
    pub bedrooms: Option<u32>,
    /// venda / lloguer
    pub operation: Option<String>,
    pub source: String,
    pub images: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub currency: String,
    pub period: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobOffer {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    pub description: String,
    /// full-time, part-time, contract...
    pub kind: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
    pub skills: Vec<String>,
    pub salary: Option<SalaryRange>,
    pub location: Option<String>,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
}
