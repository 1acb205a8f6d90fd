// Named Entity Recognition using a pattern-based approach.
// Each entity type has a regex; rules run in priority order and a span is only
// reported if it does not overlap a span claimed by an earlier rule.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{EntityRecognizer, InferenceError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub word: String,
    pub label: String,
    pub score: f32,
    /// Byte offset of the first character of the span.
    pub start: usize,
    /// Byte offset one past the last character of the span.
    pub end: usize,
}

pub(crate) const CORPORATE_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Corp", "Corporation", "Ltd", "Limited", "Company", "Co", "Group", "Institute",
    "University", "College",
];

// Capitalized words that start sentences but are not part of a name
const LEADING_NOISE: &[&str] = &[
    "The", "A", "An", "And", "But", "Then", "Meanwhile", "However", "Yesterday", "Today",
    "Tomorrow", "Last", "This", "In", "On", "At", "After", "Before", "When", "While", "Since",
];

struct Rule {
    label: &'static str,
    score: f32,
    pattern: Regex,
}

impl Rule {
    fn new(label: &'static str, score: f32, pattern: &str) -> Self {
        Self {
            label,
            score,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

// Order matters: the more specific patterns claim text before the broad PERSON rule.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            "EMAIL",
            0.95,
            r"\b([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})\b",
        ),
        Rule::new(
            "DATE",
            0.90,
            r"\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}[/-]\d{1,2}[/-]\d{1,2}|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4})\b",
        ),
        Rule::new(
            "MONEY",
            0.90,
            r"\$\s*\d+(?:,\d{3})*(?:\.\d{2})?|\d+(?:,\d{3})*(?:\.\d{2})?\s*(?:USD|EUR|GBP|dollars?|euros?|pounds?)",
        ),
        Rule::new(
            "LOCATION",
            0.85,
            r"\b((?:United States|USA|UK|United Kingdom|New York|California|Texas|London|Paris|Tokyo|Beijing|Washington|Chicago|Los Angeles|San Francisco|Boston|Seattle|Miami|Austin|Denver|Portland|Atlanta|Hawaii))\b",
        ),
        Rule::new(
            "ORGANIZATION",
            0.80,
            r"\b((?:[A-Z][a-z]+\s+)+(?:Inc|LLC|Corp|Corporation|Ltd|Limited|Company|Co|Group|Institute|University|College)\b\.?)",
        ),
        Rule::new("PERSON", 0.75, r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)\b"),
    ]
});

/// Default entity recognizer backed by the regex rules above.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRecognizer;

impl PatternRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, InferenceError> {
        Ok(extract_entities_from_text(text))
    }
}

pub fn extract_entities_from_text(text: &str) -> Vec<EntitySpan> {
    let mut entities: Vec<EntitySpan> = Vec::new();
    // Each surface form is reported once, under the first rule that claims it
    let mut seen: HashSet<String> = HashSet::new();

    for rule in RULES.iter() {
        for cap in rule.pattern.captures_iter(text) {
            let Some(m) = cap.get(1).or_else(|| cap.get(0)) else {
                continue;
            };
            let skip = match rule.label {
                "PERSON" | "ORGANIZATION" => leading_noise_len(m.as_str(), 2),
                _ => 0,
            };
            let start = m.start() + skip;
            let end = m.end();
            let word = &text[start..end];

            if rule.label == "PERSON" && has_corporate_suffix(word) {
                continue;
            }
            if seen.contains(word) || overlaps_existing(&entities, start, end) {
                continue;
            }

            seen.insert(word.to_string());
            entities.push(EntitySpan {
                word: word.to_string(),
                label: rule.label.to_string(),
                score: rule.score,
                start,
                end,
            });
        }
    }

    entities.sort_by_key(|e| e.start);
    entities
}

/// Byte length of the leading noise words in `name`, never leaving fewer than
/// `min_words` words.
fn leading_noise_len(name: &str, min_words: usize) -> usize {
    let mut rest = name;
    while rest.split_whitespace().count() > min_words {
        match rest.split_whitespace().next() {
            Some(first) if LEADING_NOISE.contains(&first) => {
                rest = rest[first.len()..].trim_start();
            }
            _ => break,
        }
    }
    name.len() - rest.len()
}

fn has_corporate_suffix(word: &str) -> bool {
    word.split_whitespace()
        .any(|w| CORPORATE_SUFFIXES.contains(&w.trim_end_matches('.')))
}

fn overlaps_existing(entities: &[EntitySpan], start: usize, end: usize) -> bool {
    entities.iter().any(|e| start < e.end && e.start < end)
}
