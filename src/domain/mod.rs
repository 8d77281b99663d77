// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：查询、统一结果、响应和上游原始记录
/// - 仓库接口（repositories）：四个数据领域的只读检索抽象
/// - 搜索（search）：数据源适配器接口
/// - 服务（services）：评分、摘要、分面、建议和搜索编排
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
