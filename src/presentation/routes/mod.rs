// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::search_service::UniversalSearchService;
use crate::presentation::handlers::search_handler;
use axum::{
    routing::{delete, get, post},
    Extension, Router,
};
use std::sync::Arc;

/// 创建应用路由
///
/// # 参数
///
/// * `service` - 统一搜索服务实例，在启动时创建一次并注入所有处理器
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(service: Arc<UniversalSearchService>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let search_routes = Router::new()
        .route("/v1/search", post(search_handler::search))
        .route("/v1/search/popular", get(search_handler::popular_searches))
        .route("/v1/search/cache", delete(search_handler::clear_cache))
        .layer(Extension(service));

    Router::new().merge(public_routes).merge(search_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
