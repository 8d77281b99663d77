// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据源适配器模块
///
/// 为新闻、官方公报、房产、招聘四个数据领域提供统一的检索适配，
/// 负责把各领域的原始记录映射为统一的搜索结果
pub mod bulletin;
pub mod job;
mod mapping;
pub mod news;
pub mod property;

pub use bulletin::BulletinAdapter;
pub use job::JobAdapter;
pub use news::NewsAdapter;
pub use property::PropertyAdapter;
