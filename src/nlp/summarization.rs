// Text Summarization using an extractive approach.
// Sentences are scored by the normalized frequency of their content words and the
// best ones are reassembled in document order, bounded by a token budget.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::ner::CORPORATE_SUFFIXES;
use super::{InferenceError, Summarizer};

// A trailing fragment without terminal punctuation still counts as a sentence
static SENTENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^.!?。！？]+(?:[.!?。！？]+|$)").unwrap()
});

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}']+").unwrap()
});

// Abbreviations whose period does not end a sentence, besides corporate suffixes
const TITLES: &[&str] = &["Mr", "Mrs", "Ms", "Dr", "Prof", "St", "Jr", "Sr", "vs"];

// Common stop words to filter out when scoring sentences
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from",
        "has", "he", "in", "is", "it", "its", "of", "on", "that", "the",
        "to", "was", "will", "with", "this", "but", "they", "have",
        "had", "what", "when", "where", "who", "which", "why", "how"
    ].iter().copied().collect()
});

pub const DEFAULT_MAX_LENGTH: usize = 150;
pub const DEFAULT_MIN_LENGTH: usize = 30;

/// Length bounds for a summary, counted in word tokens.
///
/// Decoding is always deterministic: the same text and parameters give the
/// same summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryParams {
    pub max_length: usize,
    pub min_length: usize,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Default summarizer backed by sentence scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractiveSummarizer;

impl ExtractiveSummarizer {
    pub fn new() -> Self {
        Self
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, InferenceError> {
        summarize_text_content(text, params)
    }
}

/// Number of word tokens in `text`, the unit `SummaryParams` is measured in.
pub fn word_count(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

pub fn summarize_text_content(text: &str, params: &SummaryParams) -> Result<String, InferenceError> {
    let total_tokens = word_count(text);
    if total_tokens == 0 {
        return Err(InferenceError::EmptyInput);
    }

    // Short enough already
    if total_tokens <= params.min_length {
        return Ok(truncate_tokens(text.trim(), params.max_length));
    }

    let sentences = split_sentences(text);

    let sentence_words: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| {
            WORD_PATTERN
                .find_iter(s)
                .map(|w| w.as_str().to_lowercase())
                .collect()
        })
        .collect();

    // Word frequencies, excluding stop words
    let mut word_freq: HashMap<&str, usize> = HashMap::new();
    for words in &sentence_words {
        for word in words {
            if !STOP_WORDS.contains(word.as_str()) && word.chars().count() > 2 {
                *word_freq.entry(word.as_str()).or_insert(0) += 1;
            }
        }
    }

    let max_freq = word_freq.values().max().copied().unwrap_or(1);
    for freq in word_freq.values_mut() {
        *freq = (*freq * 100) / max_freq;
    }

    let mut ranked: Vec<(usize, usize)> = sentence_words
        .iter()
        .enumerate()
        .map(|(idx, words)| {
            let mut score: usize = words
                .iter()
                .filter_map(|w| word_freq.get(w.as_str()))
                .sum();

            // Normalize by sentence length to avoid bias toward long sentences
            if !words.is_empty() {
                score /= words.len();
            }

            // The opening sentence often carries the key information
            if idx == 0 {
                score = score * 3 / 2;
            }

            (idx, score)
        })
        .collect();

    // Highest score first, earlier sentence wins ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    // Top 30% of sentences (minimum 2, maximum 5), extended until min_length is met
    let target = (sentences.len() * 30 / 100).clamp(2, 5);
    let mut selected: Vec<usize> = Vec::new();
    let mut tokens = 0;

    for &(idx, _) in &ranked {
        if selected.len() >= target && tokens >= params.min_length {
            break;
        }
        let len = sentence_words[idx].len();
        if !selected.is_empty() && tokens + len > params.max_length {
            continue;
        }
        selected.push(idx);
        tokens += len;
    }

    selected.sort_unstable();

    let summary = selected
        .iter()
        .map(|&idx| sentences[idx])
        .collect::<Vec<_>>()
        .join(" ");

    Ok(truncate_tokens(&summary, params.max_length))
}

/// Split into trimmed sentences that contain at least one word. A period after
/// an abbreviation such as "Inc." or "Dr." does not end the sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut end = 0;

    for m in SENTENCE_PATTERN.find_iter(text) {
        end = m.end();
        if ends_with_abbreviation(m.as_str()) {
            continue;
        }
        push_sentence(&mut sentences, &text[start..end]);
        start = end;
    }
    if start < end {
        push_sentence(&mut sentences, &text[start..end]);
    }

    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if WORD_PATTERN.is_match(fragment) {
        sentences.push(fragment);
    }
}

fn ends_with_abbreviation(fragment: &str) -> bool {
    let Some(body) = fragment.trim_end().strip_suffix('.') else {
        return false;
    };
    let last = body
        .rsplit(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or("");
    CORPORATE_SUFFIXES.contains(&last) || TITLES.contains(&last)
}

/// Cut `text` after its `max_tokens`-th word, keeping everything before that point.
fn truncate_tokens(text: &str, max_tokens: usize) -> String {
    match WORD_PATTERN.find_iter(text).nth(max_tokens) {
        Some(_) => {
            let end = WORD_PATTERN
                .find_iter(text)
                .take(max_tokens)
                .last()
                .map(|m| m.end())
                .unwrap_or(0);
            text[..end].to_string()
        }
        None => text.to_string(),
    }
}
