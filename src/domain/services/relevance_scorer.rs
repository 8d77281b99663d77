// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::{SearchResult, SourceType};

/// Terms shorter than this are ignored for scoring
pub const MIN_TERM_CHARS: usize = 3;
/// Multiplier applied when the query signals intent for the result's domain
pub const TYPE_BOOST: f64 = 1.3;
pub const MAX_SCORE: f64 = 100.0;

const EXACT_MATCH_POINTS: f64 = 10.0;
const LEAD_MATCH_POINTS: f64 = 5.0;
const PARTIAL_MATCH_POINTS: f64 = 3.0;
/// Characters treated as "title / lead" for the position bonus
const LEAD_WINDOW_CHARS: usize = 100;

/// Domain-indicative keywords, matched as substrings of the lowercase query
fn intent_keywords(source_type: SourceType) -> &'static [&'static str] {
    match source_type {
        SourceType::News => &["notícia", "noticia", "actualitat"],
        SourceType::Bulletin => &["llei", "decret", "bopa"],
        SourceType::Property => &["casa", "pis", "lloguer"],
        SourceType::Job => &["feina", "treball", "contracte"],
    }
}

/// 相关性评分器
///
/// 基于查询词与 `title + " " + description` 的重叠程度计算 0-100 的分数：
/// - 完整包含查询词 +10
/// - 出现在前 100 个字符内 +5
/// - 每个与查询词互为子串的内容词 +3
///
/// 归一化上限按查询的全部词数计算，包括不参与评分的短词。
///
/// 随后按查询意图对结果类型施加 1.3 倍加权，并重新截断到 100。
pub struct RelevanceScorer {
    query_lower: String,
    query_terms: Vec<String>,
    /// Every whitespace-split query term, short ones included
    term_count: usize,
}

impl RelevanceScorer {
    pub fn new(query: &str) -> Self {
        let query_lower = query.to_lowercase();
        let term_count = query_lower.split_whitespace().count();
        let query_terms = query_lower
            .split_whitespace()
            .filter(|term| term.chars().count() >= MIN_TERM_CHARS)
            .map(|s| s.to_string())
            .collect();

        Self {
            query_lower,
            query_terms,
            term_count,
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.query_terms
    }

    /// Normalized base score in `[0, 100]`, before the type boost
    pub fn calculate_score(&self, title: &str, description: &str) -> f64 {
        if self.query_terms.is_empty() {
            return 0.0;
        }

        let content = format!("{} {}", title, description).to_lowercase();
        let lead: String = content.chars().take(LEAD_WINDOW_CHARS).collect();
        let words: Vec<&str> = content.split_whitespace().collect();

        let mut raw = 0.0;
        for term in &self.query_terms {
            if content.contains(term.as_str()) {
                raw += EXACT_MATCH_POINTS;
            }
            if lead.contains(term.as_str()) {
                raw += LEAD_MATCH_POINTS;
            }

            let partial_hits = words
                .iter()
                .filter(|word| word.contains(term.as_str()) || term.contains(*word))
                .count();
            raw += partial_hits as f64 * PARTIAL_MATCH_POINTS;
        }

        // short terms do not score but still count toward the ceiling
        let term_count = self.term_count as f64;
        let ceiling = term_count * EXACT_MATCH_POINTS + term_count * LEAD_MATCH_POINTS;
        (raw / ceiling * 100.0).min(MAX_SCORE)
    }

    pub fn type_boost(&self, source_type: SourceType) -> f64 {
        let signalled = intent_keywords(source_type)
            .iter()
            .any(|keyword| self.query_lower.contains(keyword));
        if signalled {
            TYPE_BOOST
        } else {
            1.0
        }
    }

    /// Final score for a result: base score times type boost, clamped to 100
    pub fn score(&self, result: &SearchResult) -> f64 {
        let base = self.calculate_score(&result.title, &result.description);
        (base * self.type_boost(result.source_type)).min(MAX_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(title: &str, description: &str) -> SearchResult {
        SearchResult::new(
            SourceType::Job,
            "1",
            title.to_string(),
            description.to_string(),
            "/feina/1".to_string(),
            "InfoJobs Andorra".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_exact_lead_and_partial_points() {
        let scorer = RelevanceScorer::new("rust tokio");
        // rust: 10 exact + 5 lead + 3 partial = 18, ceiling = 2 * 15
        let score = scorer.calculate_score("Rust", "");
        assert!((score - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_terms_are_ignored() {
        let scorer = RelevanceScorer::new("el pa");
        assert!(scorer.terms().is_empty());
        assert_eq!(scorer.calculate_score("el pa de pagès", "pa"), 0.0);
    }

    #[test]
    fn test_short_terms_count_toward_ceiling() {
        let scorer = RelevanceScorer::new("pis a escaldes");
        assert_eq!(scorer.terms().len(), 2);
        // pis: 10 + 5 + 3 = 18, escaldes: 10 + 5 + 3 + 3 ("a") = 21, ceiling = 3 * 15
        let score = scorer.calculate_score("Pis a Escaldes", "");
        assert!((score - 39.0 / 45.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_deterministic() {
        let scorer = RelevanceScorer::new("desenvolupador react");
        let result = job(
            "Desenvolupador React",
            "Busquem desenvolupador amb experiència en React i TypeScript.",
        );
        let first = scorer.score(&result);
        let second = RelevanceScorer::new("desenvolupador react").score(&result);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_strong_match_beats_weak_partial_match() {
        let scorer = RelevanceScorer::new("feina tecnologia");

        let strong = job(
            "Desenvolupador Full Stack",
            "Empresa de tecnologia busca desenvolupador. Feina estable a Andorra.",
        );
        let weak = job("Cambrer", "Restaurant busca personal tecno per la temporada.");

        let strong_score = scorer.score(&strong);
        let weak_score = scorer.score(&weak);
        assert!(strong_score > weak_score);
        assert!(weak_score > 0.0);
    }

    #[test]
    fn test_type_boost_follows_query_intent() {
        let scorer = RelevanceScorer::new("pisos de lloguer");
        assert_eq!(scorer.type_boost(SourceType::Property), TYPE_BOOST);
        assert_eq!(scorer.type_boost(SourceType::Job), 1.0);

        let scorer = RelevanceScorer::new("nova llei tributària");
        assert_eq!(scorer.type_boost(SourceType::Bulletin), TYPE_BOOST);
        assert_eq!(scorer.type_boost(SourceType::News), 1.0);
    }

    #[test]
    fn test_boosted_score_is_clamped() {
        let scorer = RelevanceScorer::new("feina");
        let result = job("Feina", "feina feina feina");
        assert_eq!(scorer.score(&result), MAX_SCORE);
    }

    #[test]
    fn test_boost_is_multiplicative() {
        let scorer = RelevanceScorer::new("feina hostaleria");
        let result = job("Cambrer", "Temporada d'hivern hostaleria Soldeu");
        let base = scorer.calculate_score(&result.title, &result.description);
        assert!(base > 0.0 && base * TYPE_BOOST < MAX_SCORE);
        assert_eq!(scorer.score(&result), base * TYPE_BOOST);
    }
}
