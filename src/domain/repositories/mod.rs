// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 数据源仓库接口模块
///
/// 四个数据领域各自的只读检索契约：`search(text, limit) -> records`。
/// 数据的采集、持久化和新鲜度由外部提供方负责，搜索核心只消费检索结果。
pub mod bulletin_repository;
pub mod job_repository;
pub mod news_repository;
pub mod property_repository;

/// 仓库错误类型
#[derive(Error, Debug, Clone)]
pub enum RepositoryError {
    /// 上游数据源不可用
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
    /// 上游返回了无法解析的数据
    #[error("Invalid upstream data: {0}")]
    InvalidData(String),
}
