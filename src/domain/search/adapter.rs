// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_query::SearchQuery;
use crate::domain::models::search_result::{SearchResult, SourceType};
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AdapterError {
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Timeout")]
    Timeout,
}

impl From<RepositoryError> for AdapterError {
    fn from(err: RepositoryError) -> Self {
        AdapterError::Upstream(err.to_string())
    }
}

/// A record the adapter could not map; logged and skipped by the adapter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("record has no id")]
    MissingId,
    #[error("record {0} has no publication date")]
    MissingDate(String),
}

#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Domain this adapter serves
    fn source_type(&self) -> SourceType;

    /// Get the name of the adapter
    fn name(&self) -> &'static str;

    /// Run the universal query against the underlying data source.
    ///
    /// Scores and snippets on the returned results are recomputed by the caller.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AdapterError>;
}
