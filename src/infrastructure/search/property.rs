// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::models::records::PropertyListing;
use crate::domain::models::search_query::SearchQuery;
use crate::domain::models::search_result::{SearchResult, SourceType};
use crate::domain::repositories::property_repository::PropertyRepository;
use crate::domain::search::adapter::{AdapterError, RecordError, SourceAdapter};
use crate::infrastructure::search::mapping::{
    insert_text, insert_value, map_records, require_date, require_id,
};

/// 房产信息适配器
pub struct PropertyAdapter {
    repository: Arc<dyn PropertyRepository>,
    limit: usize,
}

impl PropertyAdapter {
    pub const DEFAULT_LIMIT: usize = 30;

    pub fn new(repository: Arc<dyn PropertyRepository>) -> Self {
        Self {
            repository,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn map_listing(listing: PropertyListing) -> Result<SearchResult, RecordError> {
        require_id(&listing.id)?;
        let date = require_date(&listing.id, listing.published_at)?;

        let mut result = SearchResult::new(
            SourceType::Property,
            &listing.id,
            listing.title,
            listing.description,
            format!("/immobiliaria/{}", listing.id),
            listing.source,
            date,
        );
        insert_value(&mut result.metadata, "price", listing.price);
        insert_text(&mut result.metadata, "type", listing.kind);
        insert_text(&mut result.metadata, "parish", listing.parish);
        insert_value(&mut result.metadata, "surface", listing.surface);
        insert_value(&mut result.metadata, "bedrooms", listing.bedrooms);
        insert_text(&mut result.metadata, "operation", listing.operation);
        result.image_url = listing.images.into_iter().next();

        Ok(result)
    }
}

#[async_trait]
impl SourceAdapter for PropertyAdapter {
    fn source_type(&self) -> SourceType {
        SourceType::Property
    }

    fn name(&self) -> &'static str {
        "property"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AdapterError> {
        let listings = self
            .repository
            .search_properties(&query.query, self.limit)
            .await?;
        Ok(map_records(self.name(), listings, Self::map_listing))
    }
}
