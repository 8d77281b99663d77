// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试主模块
///
/// 基于种子数据目录组装完整的搜索服务，
/// 通过 HTTP 路由和服务接口验证端到端行为
mod health_check;
mod helpers;
mod search_api_test;
mod search_pipeline_test;
