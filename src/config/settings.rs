// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::services::search_service::SearchServiceConfig;
use crate::infrastructure::cache::cache_strategy::CacheType;

/// 应用程序配置设置
///
/// 包含服务器、搜索管线、结果缓存、数据目录和指标导出等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 搜索管线配置
    pub search: SearchSettings,
    /// 结果缓存配置
    pub cache: CacheSettings,
    /// 数据目录配置
    pub catalog: CatalogSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 搜索管线配置设置
#[derive(Debug, Deserialize)]
pub struct SearchSettings {
    /// 未指定 limit 时的默认分页大小
    pub default_limit: u32,
    /// 允许的最大分页大小
    pub max_limit: u32,
    /// 单个适配器调用的超时时间（毫秒）
    pub adapter_timeout_ms: u64,
    /// 同一查询每分钟允许的请求数
    pub rate_limit_per_minute: u32,
}

/// 结果缓存配置设置
#[derive(Debug, Deserialize)]
pub struct CacheSettings {
    /// 缓存后端 (memory, redis)
    pub backend: CacheType,
    /// 缓存有效期（秒）
    pub ttl_seconds: u64,
    /// 内存缓存的最大条目数
    pub max_entries: usize,
    /// Redis连接URL (当 backend=redis 时使用)
    pub redis_url: Option<String>,
}

/// 数据目录配置设置
#[derive(Debug, Deserialize)]
pub struct CatalogSettings {
    /// YAML 数据文件路径
    pub path: String,
}

/// 指标导出配置设置
#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen: String,
}

impl From<&SearchSettings> for SearchServiceConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            default_limit: settings.default_limit,
            max_limit: settings.max_limit,
            adapter_timeout: Duration::from_millis(settings.adapter_timeout_ms),
            rate_limit_per_minute: settings.rate_limit_per_minute,
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加：内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// 以 `PORTAL_SEARCH__` 为前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PORTAL_SEARCH").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Builder preloaded with the built-in defaults
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Search pipeline
            .set_default("search.default_limit", 20)?
            .set_default("search.max_limit", 100)?
            .set_default("search.adapter_timeout_ms", 5000)?
            .set_default("search.rate_limit_per_minute", 100)?
            // Result cache
            .set_default("cache.backend", "memory")?
            .set_default("cache.ttl_seconds", 300)?
            .set_default("cache.max_entries", 1000)?
            .set_default("catalog.path", "data/catalog.yaml")?
            .set_default("metrics.enabled", true)?
            .set_default("metrics.listen", "0.0.0.0:9000")
    }
}
