// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const SEARCH_REQUESTS_TOTAL: &str = "search_requests_total";
pub const SEARCH_CACHE_HITS_TOTAL: &str = "search_cache_hits_total";
pub const SEARCH_CACHE_MISSES_TOTAL: &str = "search_cache_misses_total";
pub const SEARCH_ADAPTER_FAILURES_TOTAL: &str = "search_adapter_failures_total";
pub const SEARCH_DURATION_SECONDS: &str = "search_duration_seconds";

/// 初始化指标系统
///
/// 安装 Prometheus 导出器并注册搜索相关指标。
/// 监听地址被占用时只记录警告，服务照常启动。
pub fn init_metrics(listen: &str) -> Result<()> {
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid metrics listen address: {}", listen))?;

    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return Ok(());
    }

    describe_metrics();
    info!("Metrics exporter listening on {}", addr);
    Ok(())
}

fn describe_metrics() {
    describe_counter!(SEARCH_REQUESTS_TOTAL, "Total number of search requests received");
    describe_counter!(
        SEARCH_CACHE_HITS_TOTAL,
        "Searches answered from the result cache"
    );
    describe_counter!(
        SEARCH_CACHE_MISSES_TOTAL,
        "Searches that had to fan out to the source adapters"
    );
    describe_counter!(
        SEARCH_ADAPTER_FAILURES_TOTAL,
        "Source adapter calls that failed or timed out, by adapter"
    );
    describe_histogram!(
        SEARCH_DURATION_SECONDS,
        "End-to-end duration of a search call in seconds"
    );
}
