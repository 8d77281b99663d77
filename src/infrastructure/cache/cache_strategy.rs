// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::settings::CacheSettings;
use crate::domain::models::search_result::SearchResult;
use crate::infrastructure::cache::redis_client::RedisClient;

/// 缓存类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheType {
    /// 内存缓存
    #[default]
    Memory,
    /// Redis缓存
    Redis,
}

/// 缓存统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
    pub expirations: u64,
}

/// 结果缓存接口
///
/// 以规范化查询键缓存完整的（分页前）排序结果集。
/// 写入总是整体覆盖，读取时过期条目视为不存在。
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// 获取缓存值，过期或不存在时返回 `None`
    async fn get(&self, key: &str) -> Result<Option<Vec<SearchResult>>>;

    /// 设置缓存值，无条件覆盖
    async fn put(&self, key: &str, results: Vec<SearchResult>) -> Result<()>;

    /// 清空缓存
    async fn clear(&self) -> Result<()>;

    /// 获取缓存统计信息
    fn get_stats(&self) -> CacheStats;
}

struct CacheEntry {
    results: Vec<SearchResult>,
    created_at: Instant,
}

struct MemoryState {
    entries: LruCache<String, CacheEntry>,
    stats: CacheStats,
}

/// 内存缓存策略
///
/// TTL 在读取时惰性检查；容量由 LRU 限制。
pub struct MemoryResultCache {
    state: Mutex<MemoryState>,
    ttl: Duration,
}

impl MemoryResultCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            state: Mutex::new(MemoryState {
                entries: LruCache::new(capacity),
                stats: CacheStats::default(),
            }),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ResultCache for MemoryResultCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<SearchResult>>> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        match state.entries.get(key) {
            Some(entry) if entry.created_at.elapsed() <= self.ttl => {
                state.stats.hits += 1;
                Ok(Some(entry.results.clone()))
            }
            Some(_) => {
                state.entries.pop(key);
                state.stats.expirations += 1;
                state.stats.misses += 1;
                debug!("Evicted expired cache entry for key: {}", key);
                Ok(None)
            }
            None => {
                state.stats.misses += 1;
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, results: Vec<SearchResult>) -> Result<()> {
        let results_count = results.len();
        let mut state = self.state.lock();
        state.entries.put(
            key.to_string(),
            CacheEntry {
                results,
                created_at: Instant::now(),
            },
        );
        state.stats.stores += 1;

        debug!(
            "Stored {} results in memory cache for key: {}",
            results_count, key
        );
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.state.lock().entries.clear();
        info!("Cleared all memory cache entries");
        Ok(())
    }

    fn get_stats(&self) -> CacheStats {
        self.state.lock().stats.clone()
    }
}

/// Redis缓存策略
///
/// 结果集以 JSON 存储，过期交给 Redis 的 `SET EX` 处理。
pub struct RedisResultCache {
    redis_client: RedisClient,
    ttl: Duration,
    stats: Mutex<CacheStats>,
}

impl RedisResultCache {
    const KEY_PREFIX: &'static str = "search_cache:";

    pub fn new(redis_client: RedisClient, ttl: Duration) -> Self {
        Self {
            redis_client,
            ttl,
            stats: Mutex::new(CacheStats::default()),
        }
    }

    fn generate_cache_key(&self, key: &str) -> String {
        format!("{}{}", Self::KEY_PREFIX, key)
    }

    fn encode(results: &[SearchResult]) -> Result<String> {
        Ok(serde_json::to_string(results)?)
    }

    fn decode(snapshot: &str) -> Result<Vec<SearchResult>> {
        Ok(serde_json::from_str(snapshot)?)
    }
}

#[async_trait]
impl ResultCache for RedisResultCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<SearchResult>>> {
        let cache_key = self.generate_cache_key(key);

        match self.redis_client.get(&cache_key).await? {
            Some(json_str) => {
                let results = Self::decode(&json_str)?;
                self.stats.lock().hits += 1;
                debug!("Cache hit for key: {}", key);
                Ok(Some(results))
            }
            None => {
                self.stats.lock().misses += 1;
                debug!("Cache miss for key: {}", key);
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, results: Vec<SearchResult>) -> Result<()> {
        let cache_key = self.generate_cache_key(key);
        let json_str = Self::encode(&results)?;

        self.redis_client
            .set(&cache_key, &json_str, self.ttl.as_secs().max(1))
            .await?;
        self.stats.lock().stores += 1;

        debug!(
            "Stored {} results in Redis cache for key: {}",
            results.len(),
            key
        );
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let removed = self
            .redis_client
            .delete_matching(&format!("{}*", Self::KEY_PREFIX))
            .await?;
        info!("Cleared {} Redis cache entries", removed);
        Ok(())
    }

    fn get_stats(&self) -> CacheStats {
        self.stats.lock().clone()
    }
}

/// 缓存策略工厂
pub struct CacheStrategyFactory;

impl CacheStrategyFactory {
    /// 根据配置创建结果缓存
    pub async fn create(settings: &CacheSettings) -> Result<Arc<dyn ResultCache>> {
        let ttl = Duration::from_secs(settings.ttl_seconds);

        match settings.backend {
            CacheType::Memory => {
                info!(
                    "Using in-memory result cache (ttl {}s, {} entries)",
                    settings.ttl_seconds, settings.max_entries
                );
                Ok(Arc::new(MemoryResultCache::new(ttl, settings.max_entries)))
            }
            CacheType::Redis => {
                let url = settings
                    .redis_url
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("cache.redis_url is required for redis cache"))?;
                let client = RedisClient::new(url).await?;
                info!("Using Redis result cache (ttl {}s)", settings.ttl_seconds);
                Ok(Arc::new(RedisResultCache::new(client, ttl)))
            }
        }
    }
}
