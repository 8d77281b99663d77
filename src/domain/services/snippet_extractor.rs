// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use regex::{Regex, RegexBuilder};

pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

const MIN_TERM_CHARS: usize = 3;
const MIN_SENTENCE_CHARS: usize = 50;
const MAX_SNIPPET_CHARS: usize = 200;
const FALLBACK_CHARS: usize = 150;
const ELLIPSIS: &str = "...";

/// 摘要提取器
///
/// 从结果的描述文本中挑选包含最多不同查询词的句子，并高亮所有匹配。
/// 长度不少于 50 个字符的句子优先；没有长句匹配时退回到最佳短句；
/// 完全没有匹配时取文本前 150 个字符。
pub struct SnippetExtractor {
    terms: Vec<String>,
    highlighter: Option<Regex>,
}

impl SnippetExtractor {
    pub fn new(query: &str) -> Result<Self, regex::Error> {
        let mut terms: Vec<String> = Vec::new();
        for term in query.to_lowercase().split_whitespace() {
            if term.chars().count() >= MIN_TERM_CHARS && !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
            }
        }

        let highlighter = if terms.is_empty() {
            None
        } else {
            // Longest first so overlapping terms mark the widest span
            let mut alternatives: Vec<&String> = terms.iter().collect();
            alternatives.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
            let pattern = alternatives
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&format!("({})", pattern))
                    .case_insensitive(true)
                    .build()?,
            )
        };

        Ok(Self { terms, highlighter })
    }

    pub fn extract(&self, text: &str) -> String {
        match self.best_sentence(text) {
            Some(sentence) => self.highlight(&truncate_chars(sentence, MAX_SNIPPET_CHARS)),
            None => self.highlight(&truncate_chars(text.trim(), FALLBACK_CHARS)),
        }
    }

    fn best_sentence<'a>(&self, text: &'a str) -> Option<&'a str> {
        let mut best_long: Option<(usize, &str)> = None;
        let mut best_short: Option<(usize, &str)> = None;

        for sentence in text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let lower = sentence.to_lowercase();
            let matches = self
                .terms
                .iter()
                .filter(|term| lower.contains(term.as_str()))
                .count();
            if matches == 0 {
                continue;
            }

            let slot = if sentence.chars().count() >= MIN_SENTENCE_CHARS {
                &mut best_long
            } else {
                &mut best_short
            };
            // Strictly greater: ties keep the first occurrence
            if slot.map_or(true, |(best, _)| matches > best) {
                *slot = Some((matches, sentence));
            }
        }

        best_long.or(best_short).map(|(_, sentence)| sentence)
    }

    fn highlight(&self, text: &str) -> String {
        match &self.highlighter {
            Some(re) => re
                .replace_all(text, format!("{}${{1}}{}", HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE).as_str())
                .into_owned(),
            None => text.to_string(),
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
