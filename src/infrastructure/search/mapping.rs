// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::domain::models::search_result::{Metadata, SearchResult};
use crate::domain::search::adapter::RecordError;

/// Map upstream records one by one; a malformed record is logged and skipped.
pub(crate) fn map_records<T, F>(adapter: &str, records: Vec<T>, map: F) -> Vec<SearchResult>
where
    F: Fn(T) -> Result<SearchResult, RecordError>,
{
    let total = records.len();
    let mapped: Vec<SearchResult> = records
        .into_iter()
        .filter_map(|record| match map(record) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("Adapter {} skipped malformed record: {}", adapter, e);
                None
            }
        })
        .collect();

    if mapped.len() < total {
        warn!(
            "Adapter {} mapped {} of {} upstream records",
            adapter,
            mapped.len(),
            total
        );
    }
    mapped
}

pub(crate) fn require_id(id: &str) -> Result<(), RecordError> {
    if id.trim().is_empty() {
        return Err(RecordError::MissingId);
    }
    Ok(())
}

pub(crate) fn require_date(
    id: &str,
    date: Option<DateTime<Utc>>,
) -> Result<DateTime<Utc>, RecordError> {
    date.ok_or_else(|| RecordError::MissingDate(id.to_string()))
}

pub(crate) fn insert_value<V: Into<Value>>(metadata: &mut Metadata, key: &str, value: Option<V>) {
    if let Some(value) = value {
        metadata.insert(key.to_string(), value.into());
    }
}

pub(crate) fn insert_text(metadata: &mut Metadata, key: &str, value: Option<String>) {
    insert_value(metadata, key, value.filter(|v| !v.trim().is_empty()));
}

pub(crate) fn insert_list(metadata: &mut Metadata, key: &str, values: Vec<String>) {
    if !values.is_empty() {
        metadata.insert(key.to_string(), Value::from(values));
    }
}
