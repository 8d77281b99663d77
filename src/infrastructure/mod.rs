// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，提供对具体技术的抽象和封装。
///
/// 包含的子模块：
/// - 缓存（cache）：结果缓存的内存与 Redis 实现
/// - 指标（metrics）：Prometheus 指标导出
/// - 仓库实现（repositories）：基于 YAML 数据目录的仓库实现
/// - 搜索（search）：四个数据领域的源适配器
///
/// 基础设施层依赖于领域层的抽象接口，
/// 确保领域层保持纯粹的业务逻辑，不受技术实现的影响。
pub mod cache;
pub mod metrics;
pub mod repositories;
pub mod search;
