// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

use crate::{
    application::dto::search_request::SearchRequestDto,
    domain::services::search_service::{SearchServiceError, UniversalSearchService},
};

/// 处理搜索请求
///
/// # 参数
///
/// * `service` - 统一搜索服务实例
/// * `payload` - 搜索请求数据
///
/// # 返回值
///
/// 返回实现了 `IntoResponse` 的响应，包含搜索结果或错误信息。
/// 内部错误不会映射为 5xx，而是返回 `success: false` 的 200 响应。
///
/// # 错误
///
/// - 请求体无法解析或查询参数非法时返回 400
/// - 同一查询请求过于频繁时返回 429
pub async fn search(
    Extension(service): Extension<Arc<UniversalSearchService>>,
    payload: Result<Json<SearchRequestDto>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected search body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    match service.search(payload).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "success": false, "error": msg }))).into_response()
        }
    }
}

/// 热门搜索
pub async fn popular_searches(
    Extension(service): Extension<Arc<UniversalSearchService>>,
) -> impl IntoResponse {
    Json(json!({ "searches": service.popular_searches() }))
}

/// 清空结果缓存
pub async fn clear_cache(
    Extension(service): Extension<Arc<UniversalSearchService>>,
) -> impl IntoResponse {
    match service.clear_cache().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to clear result cache: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

impl From<SearchServiceError> for (StatusCode, String) {
    fn from(err: SearchServiceError) -> Self {
        match err {
            SearchServiceError::InvalidQuery(details) => (StatusCode::BAD_REQUEST, details),
            SearchServiceError::RateLimited(details) => (StatusCode::TOO_MANY_REQUESTS, details),
        }
    }
}
