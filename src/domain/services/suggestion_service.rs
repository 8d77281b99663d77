// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use strsim::jaro_winkler;

const MAX_SUGGESTIONS: usize = 3;
const FUZZY_THRESHOLD: f64 = 0.9;
const MIN_FUZZY_WORD_CHARS: usize = 4;
/// Distinct queries tracked before the least frequent half is dropped
pub const MAX_TRACKED_QUERIES: usize = 1000;

static SEED_SUGGESTIONS: &[&str] = &[
    "notícies andorra",
    "feina tecnologia",
    "pisos lloguer",
    "lleis BOPA",
    "restaurants escaldes",
    "turisme andorra",
];

static SEED_POPULAR: &[&str] = &[
    "feina tecnologia",
    "pisos andorra la vella",
    "notícies economia",
    "restaurants escaldes",
    "lleis fiscals",
    "teletreball andorra",
    "cursos formació",
    "turisme activitats",
];

/// Spanish / misspelled forms mapped to the portal's Catalan vocabulary
static CORRECTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("noticias", "notícies"),
        ("noticies", "notícies"),
        ("trabajo", "feina"),
        ("alquiler", "lloguer"),
        ("piso", "pis"),
        ("ley", "llei"),
        ("leyes", "lleis"),
    ])
});

static VOCABULARY: &[&str] = &[
    "andorra",
    "contracte",
    "decret",
    "economia",
    "escaldes",
    "feina",
    "formació",
    "habitatge",
    "immobiliària",
    "lleis",
    "lloguer",
    "notícies",
    "pisos",
    "restaurants",
    "tecnologia",
    "teletreball",
    "treball",
    "turisme",
];

/// Up to three alternate queries that do not already contain the query text
pub fn suggestions(query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();
    SEED_SUGGESTIONS
        .iter()
        .filter(|s| !s.to_lowercase().contains(&query_lower))
        .take(MAX_SUGGESTIONS)
        .map(|s| s.to_string())
        .collect()
}

/// 拼写纠正
///
/// 先查固定纠正表，再用 Jaro-Winkler 相似度匹配门户常用词汇。
/// 只有至少一个词被修改时才返回结果。
pub fn did_you_mean(query: &str) -> Option<String> {
    let mut changed = false;
    let corrected: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(|word| match correct_word(word) {
            Some(fixed) if fixed != word => {
                changed = true;
                fixed
            }
            _ => word.to_string(),
        })
        .collect();

    changed.then(|| corrected.join(" "))
}

fn correct_word(word: &str) -> Option<String> {
    if let Some(fixed) = CORRECTIONS.get(word) {
        return Some(fixed.to_string());
    }
    if word.chars().count() < MIN_FUZZY_WORD_CHARS || VOCABULARY.contains(&word) {
        return None;
    }

    VOCABULARY
        .iter()
        .map(|candidate| (candidate, jaro_winkler(word, candidate)))
        .filter(|(_, similarity)| *similarity >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(candidate, _)| candidate.to_string())
}

/// 热门搜索统计
///
/// 记录成功规范化的查询次数，不足时用默认热门词补齐。
/// 统计的不同查询数超过上限时，只保留次数最多的一半。
pub struct PopularSearches {
    counts: DashMap<String, u64>,
    capacity: usize,
}

impl Default for PopularSearches {
    fn default() -> Self {
        Self::with_capacity(MAX_TRACKED_QUERIES)
    }
}

impl PopularSearches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&self, query: &str) {
        *self.counts.entry(query.to_lowercase()).or_insert(0) += 1;

        if self.counts.len() > self.capacity {
            self.trim();
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn trim(&self) {
        let mut ranked: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let keep = (self.capacity / 2).max(1);
        for (query, _) in ranked.into_iter().skip(keep) {
            self.counts.remove(&query);
        }
    }

    pub fn top(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut top: Vec<String> = ranked.into_iter().take(n).map(|(q, _)| q).collect();
        for seed in SEED_POPULAR {
            if top.len() >= n {
                break;
            }
            if !top.iter().any(|q| q == seed) {
                top.push(seed.to_string());
            }
        }
        top
    }
}
