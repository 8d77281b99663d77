// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::models::records::JobOffer;
use crate::domain::models::search_query::SearchQuery;
use crate::domain::models::search_result::{SearchResult, SourceType};
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::search::adapter::{AdapterError, RecordError, SourceAdapter};
use crate::infrastructure::search::mapping::{
    insert_list, insert_text, insert_value, map_records, require_date, require_id,
};

/// 招聘信息适配器
pub struct JobAdapter {
    repository: Arc<dyn JobRepository>,
    limit: usize,
}

impl JobAdapter {
    pub const DEFAULT_LIMIT: usize = 30;

    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self {
            repository,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn map_offer(offer: JobOffer) -> Result<SearchResult, RecordError> {
        require_id(&offer.id)?;
        let date = require_date(&offer.id, offer.published_at)?;

        let mut result = SearchResult::new(
            SourceType::Job,
            &offer.id,
            offer.title,
            offer.description,
            format!("/feina/{}", offer.id),
            offer.source,
            date,
        );
        insert_text(&mut result.metadata, "company", offer.company);
        insert_text(&mut result.metadata, "type", offer.kind);
        insert_text(&mut result.metadata, "level", offer.level);
        insert_text(&mut result.metadata, "category", offer.category);
        insert_list(&mut result.metadata, "skills", offer.skills);
        insert_value(
            &mut result.metadata,
            "salary",
            offer.salary.and_then(|s| serde_json::to_value(s).ok()),
        );
        insert_text(&mut result.metadata, "location", offer.location);

        Ok(result)
    }
}

#[async_trait]
impl SourceAdapter for JobAdapter {
    fn source_type(&self) -> SourceType {
        SourceType::Job
    }

    fn name(&self) -> &'static str {
        "job"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AdapterError> {
        let offers = self.repository.search_jobs(&query.query, self.limit).await?;
        Ok(map_records(self.name(), offers, Self::map_offer))
    }
}
