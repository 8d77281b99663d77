// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::records::BulletinDocument;
use async_trait::async_trait;

/// 官方公报（BOPA）仓库特质
#[async_trait]
pub trait BulletinRepository: Send + Sync {
    /// 按自由文本检索公报，最多返回 `limit` 条
    async fn search_bulletins(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<BulletinDocument>, RepositoryError>;
}
