// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::models::records::NewsArticle;
use crate::domain::models::search_query::SearchQuery;
use crate::domain::models::search_result::{SearchResult, SourceType};
use crate::domain::repositories::news_repository::NewsRepository;
use crate::domain::search::adapter::{AdapterError, RecordError, SourceAdapter};
use crate::infrastructure::search::mapping::{
    insert_list, insert_text, map_records, require_date, require_id,
};

/// 新闻适配器
pub struct NewsAdapter {
    repository: Arc<dyn NewsRepository>,
    limit: usize,
}

impl NewsAdapter {
    pub const DEFAULT_LIMIT: usize = 50;

    pub fn new(repository: Arc<dyn NewsRepository>) -> Self {
        Self {
            repository,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn map_article(article: NewsArticle) -> Result<SearchResult, RecordError> {
        require_id(&article.id)?;
        let date = require_date(&article.id, article.published_at)?;

        let description = if article.content.trim().is_empty() {
            article.summary
        } else {
            article.content
        };

        let mut result = SearchResult::new(
            SourceType::News,
            &article.id,
            article.title,
            description,
            article.url,
            article.source,
            date,
        );
        insert_text(&mut result.metadata, "category", article.category);
        insert_list(&mut result.metadata, "tags", article.tags);
        insert_text(&mut result.metadata, "language", article.language);
        insert_text(&mut result.metadata, "sentiment", article.sentiment);
        result.image_url = article.image_url.filter(|u| !u.is_empty());

        Ok(result)
    }
}

#[async_trait]
impl SourceAdapter for NewsAdapter {
    fn source_type(&self) -> SourceType {
        SourceType::News
    }

    fn name(&self) -> &'static str {
        "news"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AdapterError> {
        let articles = self.repository.search_news(&query.query, self.limit).await?;
        Ok(map_records(self.name(), articles, Self::map_article))
    }
}
