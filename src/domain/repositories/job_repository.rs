// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::records::JobOffer;
use async_trait::async_trait;

/// 招聘信息仓库特质
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn search_jobs(&self, text: &str, limit: usize) -> Result<Vec<JobOffer>, RepositoryError>;
}
