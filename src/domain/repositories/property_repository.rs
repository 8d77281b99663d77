// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::records::PropertyListing;
use async_trait::async_trait;

/// 房产信息仓库特质
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn search_properties(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<PropertyListing>, RepositoryError>;
}
