// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供结果缓存的抽象与实现
/// 包括内存 LRU 缓存和 Redis 缓存
pub mod cache_strategy;
pub mod redis_client;
