// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含搜索核心的业务逻辑：
/// - 查询规范化（query_normalizer）：校验请求并补齐默认值
/// - 相关性评分（relevance_scorer）：基于查询词重叠计算 0-100 分
/// - 摘要提取（snippet_extractor）：选取并高亮最佳匹配句子
/// - 分面统计（facet_builder）：按类型、来源、日期、分类聚合
/// - 建议服务（suggestion_service）：搜索建议、拼写纠正和热门搜索
/// - 搜索服务（search_service）：编排整个搜索流程
pub mod facet_builder;
pub mod query_normalizer;
pub mod query_rate_limiter;
pub mod relevance_scorer;
pub mod search_service;
pub mod snippet_extractor;
pub mod suggestion_service;
