// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::domain::models::records::{BulletinDocument, JobOffer, NewsArticle, PropertyListing};
use crate::domain::repositories::bulletin_repository::BulletinRepository;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::news_repository::NewsRepository;
use crate::domain::repositories::property_repository::PropertyRepository;
use crate::domain::repositories::RepositoryError;

/// 目录文件内容
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub news: Vec<NewsArticle>,
    pub bulletins: Vec<BulletinDocument>,
    pub properties: Vec<PropertyListing>,
    pub jobs: Vec<JobOffer>,
}

/// 内存数据目录
///
/// 从 YAML 文件加载四个数据领域的记录，并实现全部仓库接口。
/// 检索规则：查询中任一词（不区分大小写）作为子串出现在记录文本中即命中。
pub struct InMemoryCatalog {
    data: CatalogData,
}

impl InMemoryCatalog {
    pub fn new(data: CatalogData) -> Self {
        Self { data }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let data: CatalogData = serde_yaml::from_str(yaml).context("invalid catalog yaml")?;
        Ok(Self::new(data))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let catalog = Self::from_yaml_str(&yaml)?;

        info!(
            "Loaded catalog {}: {} news, {} bulletins, {} properties, {} jobs",
            path.display(),
            catalog.data.news.len(),
            catalog.data.bulletins.len(),
            catalog.data.properties.len(),
            catalog.data.jobs.len()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.data.news.len()
            + self.data.bulletins.len()
            + self.data.properties.len()
            + self.data.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn query_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

fn filter_records<T, F>(records: &[T], text: &str, limit: usize, haystack: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let words = query_words(text);
    if words.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| {
            let content = haystack(record).to_lowercase();
            words.iter().any(|word| content.contains(word.as_str()))
        })
        .take(limit)
        .cloned()
        .collect()
}

#[async_trait]
impl NewsRepository for InMemoryCatalog {
    async fn search_news(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<NewsArticle>, RepositoryError> {
        Ok(filter_records(&self.data.news, text, limit, |a| {
            format!(
                "{} {} {} {}",
                a.title,
                a.summary,
                a.content,
                a.tags.join(" ")
            )
        }))
    }
}

#[async_trait]
impl BulletinRepository for InMemoryCatalog {
    async fn search_bulletins(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<BulletinDocument>, RepositoryError> {
        Ok(filter_records(&self.data.bulletins, text, limit, |d| {
            format!("{} {} {}", d.title, d.content, d.keywords.join(" "))
        }))
    }
}

#[async_trait]
impl PropertyRepository for InMemoryCatalog {
    async fn search_properties(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<PropertyListing>, RepositoryError> {
        Ok(filter_records(&self.data.properties, text, limit, |p| {
            format!(
                "{} {} {} {}",
                p.title,
                p.description,
                p.parish.as_deref().unwrap_or_default(),
                p.operation.as_deref().unwrap_or_default()
            )
        }))
    }
}

#[async_trait]
impl JobRepository for InMemoryCatalog {
    async fn search_jobs(&self, text: &str, limit: usize) -> Result<Vec<JobOffer>, RepositoryError> {
        Ok(filter_records(&self.data.jobs, text, limit, |j| {
            format!(
                "{} {} {} {}",
                j.title,
                j.description,
                j.company.as_deref().unwrap_or_default(),
                j.skills.join(" ")
            )
        }))
    }
}
