// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::records::NewsArticle;
use async_trait::async_trait;

/// 新闻仓库特质
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// 按自由文本检索新闻，最多返回 `limit` 条
    async fn search_news(&self, text: &str, limit: usize)
        -> Result<Vec<NewsArticle>, RepositoryError>;
}
