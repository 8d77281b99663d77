// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use tracing::debug;

/// Tracked keys above which stale limiter state is swept
pub const DEFAULT_SWEEP_THRESHOLD: usize = 1024;

/// 按查询文本限流
///
/// 每个不同的查询占用一个 governor 状态单元；当单元数超过阈值时，
/// 清理已恢复到初始状态的键，防止内存随查询种类无限增长。
pub struct QueryRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    sweep_threshold: usize,
}

impl QueryRateLimiter {
    pub fn new(per_minute: u32) -> Self {
        Self::with_sweep_threshold(per_minute, DEFAULT_SWEEP_THRESHOLD)
    }

    pub fn with_sweep_threshold(per_minute: u32, sweep_threshold: usize) -> Self {
        let per_minute = NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(per_minute)),
            sweep_threshold,
        }
    }

    /// Returns `false` when the key has exhausted its quota
    pub fn check(&self, key: &str) -> bool {
        let allowed = self.limiter.check_key(&key.to_string()).is_ok();

        if self.limiter.len() > self.sweep_threshold {
            self.limiter.retain_recent();
            self.limiter.shrink_to_fit();
            debug!(
                "Swept rate limiter state, {} keys remain",
                self.limiter.len()
            );
        }
        allowed
    }

    pub fn tracked_keys(&self) -> usize {
        self.limiter.len()
    }
}
