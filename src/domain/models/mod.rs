// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义查询、统一结果、响应以及上游原始记录
pub mod records;
pub mod search_query;
pub mod search_response;
pub mod search_result;
