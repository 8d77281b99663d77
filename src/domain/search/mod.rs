// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义数据源适配器接口：把统一查询翻译成各领域的原生检索，
/// 再把结果映射回统一的搜索结果结构
pub mod adapter;
