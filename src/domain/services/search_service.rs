// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use futures::future::join_all;
use futures::FutureExt;
use metrics::{counter, histogram};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::application::dto::search_request::SearchRequestDto;
use crate::domain::models::search_query::{SearchQuery, SortBy, SortOrder};
use crate::domain::models::search_response::{SearchResponse, SearchStats};
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::adapter::{AdapterError, SourceAdapter};
use crate::domain::services::facet_builder::build_facets;
use crate::domain::services::query_normalizer::{
    QueryNormalizer, DEFAULT_LIMIT, DEFAULT_MAX_LIMIT,
};
use crate::domain::services::query_rate_limiter::QueryRateLimiter;
use crate::domain::services::relevance_scorer::RelevanceScorer;
use crate::domain::services::snippet_extractor::SnippetExtractor;
use crate::domain::services::suggestion_service::{did_you_mean, suggestions, PopularSearches};
use crate::infrastructure::cache::cache_strategy::ResultCache;
use crate::infrastructure::metrics::{
    SEARCH_ADAPTER_FAILURES_TOTAL, SEARCH_CACHE_HITS_TOTAL, SEARCH_CACHE_MISSES_TOTAL,
    SEARCH_DURATION_SECONDS, SEARCH_REQUESTS_TOTAL,
};

/// Number of entries returned by the popular searches endpoint
pub const POPULAR_SEARCHES_COUNT: usize = 8;

/// Errors surfaced to the caller. Anything else becomes a `success: false` response.
#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),
}

/// 搜索管线内部错误
///
/// 不会返回给调用方，只会被转换为失败响应。
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Highlight pattern error: {0}")]
    Highlight(#[from] regex::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone)]
pub struct SearchServiceConfig {
    pub default_limit: u32,
    pub max_limit: u32,
    /// Budget for a single adapter call
    pub adapter_timeout: Duration,
    /// Identical normalized queries allowed per minute
    pub rate_limit_per_minute: u32,
}

impl Default for SearchServiceConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            adapter_timeout: Duration::from_millis(5000),
            rate_limit_per_minute: 100,
        }
    }
}

/// 统一搜索服务
///
/// 编排一次搜索的完整流程：
/// 规范化 → 限流 → 查缓存 →（未命中时）并发调用适配器 → 过滤 → 评分 → 摘要 → 排序 → 写缓存
/// → 日期窗口 → 分面 → 分页 → 统计。
///
/// 只有查询非法和被限流会返回错误，规范化之后的任何内部错误或 panic
/// 都会被转换为 `success: false` 的响应。
pub struct UniversalSearchService {
    adapters: Vec<Arc<dyn SourceAdapter>>,
    cache: Arc<dyn ResultCache>,
    normalizer: QueryNormalizer,
    adapter_timeout: Duration,
    rate_limiter: QueryRateLimiter,
    popular: PopularSearches,
}

impl UniversalSearchService {
    pub fn new(
        adapters: Vec<Arc<dyn SourceAdapter>>,
        cache: Arc<dyn ResultCache>,
        config: SearchServiceConfig,
    ) -> Self {
        Self {
            adapters,
            cache,
            normalizer: QueryNormalizer::new(config.default_limit, config.max_limit),
            adapter_timeout: config.adapter_timeout,
            rate_limiter: QueryRateLimiter::new(config.rate_limit_per_minute),
            popular: PopularSearches::new(),
        }
    }

    pub async fn search(&self, dto: SearchRequestDto) -> Result<SearchResponse, SearchServiceError> {
        let started = Instant::now();
        counter!(SEARCH_REQUESTS_TOTAL).increment(1);

        let query = self.normalizer.normalize(dto)?;
        self.check_rate_limit(&query)?;
        self.popular.record(&query.query);

        let outcome = AssertUnwindSafe(self.execute(&query)).catch_unwind().await;

        let elapsed = started.elapsed();
        histogram!(SEARCH_DURATION_SECONDS).record(elapsed.as_secs_f64());
        let search_time = elapsed.as_millis() as u64;

        match outcome {
            Ok(Ok(mut response)) => {
                response.stats.search_time = search_time;
                info!(
                    "Search '{}' returned {} of {} results in {}ms",
                    query.query,
                    response.results.len(),
                    response.stats.total_results,
                    search_time
                );
                Ok(response)
            }
            Ok(Err(e)) => {
                error!("Search '{}' failed: {}", query.query, e);
                Ok(SearchResponse::failure(query.query, search_time))
            }
            Err(_) => {
                error!("Search '{}' panicked", query.query);
                Ok(SearchResponse::failure(query.query, search_time))
            }
        }
    }

    /// Most frequent normalized queries, padded with defaults
    pub fn popular_searches(&self) -> Vec<String> {
        self.popular.top(POPULAR_SEARCHES_COUNT)
    }

    pub async fn clear_cache(&self) -> anyhow::Result<()> {
        self.cache.clear().await
    }

    fn check_rate_limit(&self, query: &SearchQuery) -> Result<(), SearchServiceError> {
        let key = query.query.to_lowercase();
        if self.rate_limiter.check(&key) {
            return Ok(());
        }
        warn!("Rate limit exceeded for query '{}'", query.query);
        Err(SearchServiceError::RateLimited(format!(
            "too many searches for '{}', try again later",
            query.query
        )))
    }

    async fn execute(&self, query: &SearchQuery) -> Result<SearchResponse, EngineError> {
        let cache_key = query.cache_key();

        let (ranked, failed_sources) = match self.cached(&cache_key).await {
            Some(results) => (results, Vec::new()),
            None => {
                let (raw, failed_sources) = self.fan_out(query).await;
                let ranked = rank(query, raw)?;
                // a partial result set is not cached so recovered sources show up on retry
                if failed_sources.is_empty() {
                    self.store(&cache_key, &ranked).await;
                }
                (ranked, failed_sources)
            }
        };

        let filtered: Vec<SearchResult> = ranked
            .into_iter()
            .filter(|r| query.within_date_window(&r.date))
            .collect();

        let facets = build_facets(&filtered, Utc::now());
        let total_results = filtered.len();
        let results = filtered
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();

        Ok(SearchResponse {
            success: true,
            query: query.query.clone(),
            results,
            facets,
            stats: SearchStats {
                total_results,
                search_time: 0,
                suggestions: suggestions(&query.query),
                did_you_mean: did_you_mean(&query.query),
                failed_sources,
            },
        })
    }

    async fn cached(&self, key: &str) -> Option<Vec<SearchResult>> {
        match self.cache.get(key).await {
            Ok(Some(results)) => {
                counter!(SEARCH_CACHE_HITS_TOTAL).increment(1);
                debug!("Cache hit for key: {}", key);
                Some(results)
            }
            Ok(None) => {
                counter!(SEARCH_CACHE_MISSES_TOTAL).increment(1);
                None
            }
            Err(e) => {
                counter!(SEARCH_CACHE_MISSES_TOTAL).increment(1);
                warn!("Cache lookup failed, treating as miss: {}", e);
                None
            }
        }
    }

    async fn store(&self, key: &str, results: &[SearchResult]) {
        if let Err(e) = self.cache.put(key, results.to_vec()).await {
            warn!("Cache write failed for key {}: {}", key, e);
        }
    }

    /// Settle-all fan-out. Returns merged results and the names of adapters that failed.
    async fn fan_out(&self, query: &SearchQuery) -> (Vec<SearchResult>, Vec<String>) {
        let calls = self
            .adapters
            .iter()
            .filter(|adapter| query.includes_type(adapter.source_type()))
            .map(|adapter| async move {
                let call = AssertUnwindSafe(adapter.search(query)).catch_unwind();
                let outcome = match tokio::time::timeout(self.adapter_timeout, call).await {
                    Ok(Ok(result)) => result,
                    Ok(Err(_)) => Err(AdapterError::Upstream("adapter panicked".to_string())),
                    Err(_) => Err(AdapterError::Timeout),
                };
                (adapter.name(), outcome)
            });

        let mut merged = Vec::new();
        let mut failed_sources = Vec::new();
        for (name, outcome) in join_all(calls).await {
            match outcome {
                Ok(results) => {
                    debug!("Adapter {} returned {} results", name, results.len());
                    merged.extend(results);
                }
                Err(e) => {
                    warn!("Adapter {} failed: {}", name, e);
                    counter!(SEARCH_ADAPTER_FAILURES_TOTAL, "adapter" => name).increment(1);
                    failed_sources.push(name.to_string());
                }
            }
        }
        (merged, failed_sources)
    }
}

/// Drop invalid records, apply the source filter, recompute score and snippet, then sort.
fn rank(query: &SearchQuery, raw: Vec<SearchResult>) -> Result<Vec<SearchResult>, EngineError> {
    let scorer = RelevanceScorer::new(&query.query);
    let snippets = SnippetExtractor::new(&query.query)?;

    let mut results: Vec<SearchResult> = raw
        .into_iter()
        .filter(|r| !r.title.trim().is_empty() && !r.url.trim().is_empty())
        .filter(|r| query.includes_type(r.source_type) && query.matches_source(&r.source))
        .map(|mut r| {
            r.relevance_score = scorer.score(&r);
            r.snippet = snippets.extract(&r.description);
            r
        })
        .collect();

    sort_results(&mut results, query.sort_by, query.sort_order);
    Ok(results)
}

fn sort_results(results: &mut [SearchResult], sort_by: SortBy, sort_order: SortOrder) {
    results.sort_by(|a, b| {
        let ordering = match sort_by {
            SortBy::Relevance => a.relevance_score.total_cmp(&b.relevance_score),
            SortBy::Date => a.date.cmp(&b.date),
            SortBy::Source => a.source.to_lowercase().cmp(&b.source.to_lowercase()),
        };
        let ordering = match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        };
        // ties keep a stable, input-independent order
        ordering.then_with(|| a.id.cmp(&b.id))
    });
}
