// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::models::records::BulletinDocument;
use crate::domain::models::search_query::SearchQuery;
use crate::domain::models::search_result::{SearchResult, SourceType};
use crate::domain::repositories::bulletin_repository::BulletinRepository;
use crate::domain::search::adapter::{AdapterError, RecordError, SourceAdapter};
use crate::infrastructure::search::mapping::{
    insert_list, insert_text, map_records, require_date, require_id,
};

/// Display name of the official bulletin provider
pub const BULLETIN_SOURCE: &str = "BOPA";

/// 官方公报（BOPA）适配器
pub struct BulletinAdapter {
    repository: Arc<dyn BulletinRepository>,
    limit: usize,
}

impl BulletinAdapter {
    pub const DEFAULT_LIMIT: usize = 30;

    pub fn new(repository: Arc<dyn BulletinRepository>) -> Self {
        Self {
            repository,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn map_document(document: BulletinDocument) -> Result<SearchResult, RecordError> {
        require_id(&document.id)?;
        let date = require_date(&document.id, document.published_at)?;

        let mut result = SearchResult::new(
            SourceType::Bulletin,
            &document.id,
            document.title,
            document.content,
            document.url,
            BULLETIN_SOURCE.to_string(),
            date,
        );
        insert_text(&mut result.metadata, "number", document.number);
        insert_text(&mut result.metadata, "section", document.section);
        insert_text(&mut result.metadata, "type", document.kind);
        insert_list(&mut result.metadata, "keywords", document.keywords);

        Ok(result)
    }
}

#[async_trait]
impl SourceAdapter for BulletinAdapter {
    fn source_type(&self) -> SourceType {
        SourceType::Bulletin
    }

    fn name(&self) -> &'static str {
        "bulletin"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AdapterError> {
        let documents = self
            .repository
            .search_bulletins(&query.query, self.limit)
            .await?;
        Ok(map_records(self.name(), documents, Self::map_document))
    }
}
