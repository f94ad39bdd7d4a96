//! Word-list claim extraction.

use chrono::{DateTime, NaiveDate};

use groundzero_contracts::claim::{StructuredClaim, EVENT_PRICE_MOVEMENT, EVENT_TECH_RELEASE};
use groundzero_core::traits::ClaimExtractor;

/// Companies recognised by name, in reporting order.
pub const KNOWN_COMPANIES: &[&str] = &["NVIDIA", "Apple", "Meta", "Tesla", "Google", "OpenAI"];

/// Upper-case words that are never tickers.
const NOT_TICKERS: &[&str] = &[
    "I", "A", "IT", "US", "UK", "AI", "ML", "API", "CEO", "CTO", "CFO", "ETF", "SEC", "IPO",
];

pub(crate) const RISING_VERBS: &[&str] = &[
    "rise", "rises", "rose", "risen", "pumped", "surged", "jumped", "gained", "climbed", "rallied",
    "soared", "spiked",
];

pub(crate) const FALLING_VERBS: &[&str] = &[
    "fell", "fall", "falls", "plunged", "dumped", "dropped", "sank", "tumbled", "slid", "declined",
    "crashed", "lost",
];

pub(crate) const RELEASE_VERBS: &[&str] = &["announced", "released", "launched", "introduced"];

/// Date phrases, tried in this order.
const DATE_PHRASES: &[&str] = &[
    "today",
    "yesterday",
    "this morning",
    "this afternoon",
    "this evening",
    "last week",
    "last month",
    "last year",
    "this week",
    "this month",
    "this year",
];

/// Extracts claim fields by scanning words against fixed vocabularies.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClaimExtractor;

impl HeuristicClaimExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ClaimExtractor for HeuristicClaimExtractor {
    fn extract(&self, text: &str) -> StructuredClaim {
        let words = lower_words(text);
        StructuredClaim {
            raw: text.to_string(),
            tickers: tickers(text),
            companies: companies(&words),
            percentages: percentages(text),
            date_hint: date_hint(text, &words),
            event_type: event_type(&words).map(str::to_string),
        }
    }
}

/// Lower-cased alphanumeric words.
pub(crate) fn lower_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Upper-case tokens of 2 to 5 letters, `$` prefix allowed, deduplicated.
pub fn tickers(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for token in text.split_whitespace() {
        let token = token.trim_matches(|c: char| !c.is_alphanumeric() && c != '$' && c != '\'');
        let token = token
            .strip_suffix("'s")
            .unwrap_or(token)
            .trim_end_matches('\'')
            .trim_start_matches('$');

        let is_ticker = (2..=5).contains(&token.len())
            && token.chars().all(|c| c.is_ascii_uppercase())
            && !NOT_TICKERS.contains(&token);
        if is_ticker && !found.iter().any(|t| t == token) {
            found.push(token.to_string());
        }
    }
    found
}

fn companies(words: &[String]) -> Vec<String> {
    KNOWN_COMPANIES
        .iter()
        .filter(|name| {
            let lower = name.to_lowercase();
            words.iter().any(|w| *w == lower)
        })
        .map(|name| name.to_string())
        .collect()
}

/// Every `<number>%` in the text, negative when the move is downward.
///
/// Direction comes from, in order: a sign right before the number, the word
/// `down` or `up` right before it, then the nearest preceding movement verb.
pub fn percentages(text: &str) -> Vec<f64> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();

    for (pct_at, _) in text.match_indices('%') {
        let mut end = pct_at;
        while end > 0 && bytes[end - 1] == b' ' {
            end -= 1;
        }
        let mut start = end;
        while start > 0 && (bytes[start - 1].is_ascii_digit() || bytes[start - 1] == b'.') {
            start -= 1;
        }
        let Ok(value) = text[start..end].parse::<f64>() else {
            continue;
        };
        let signed = if is_downward(&text[..start]) { -value } else { value };
        found.push(signed);
    }
    found
}

fn is_downward(before: &str) -> bool {
    let before = before.trim_end();
    if before.ends_with('-') || before.ends_with('\u{2212}') {
        return true;
    }
    if before.ends_with('+') {
        return false;
    }

    let words = lower_words(before);
    match words.last().map(String::as_str) {
        Some("down") => return true,
        Some("up") => return false,
        _ => {}
    }
    words
        .iter()
        .rev()
        .find_map(|w| {
            if FALLING_VERBS.contains(&w.as_str()) {
                Some(true)
            } else if RISING_VERBS.contains(&w.as_str()) {
                Some(false)
            } else {
                None
            }
        })
        .unwrap_or(false)
}

/// An RFC 3339 instant or ISO date in the text, else the first date phrase.
fn date_hint(text: &str, words: &[String]) -> Option<String> {
    let absolute = text
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| matches!(c, ',' | ';' | '(' | ')' | '"')).trim_end_matches('.'))
        .find(|t| {
            DateTime::parse_from_rfc3339(t).is_ok() || NaiveDate::parse_from_str(t, "%Y-%m-%d").is_ok()
        });
    if let Some(token) = absolute {
        return Some(token.to_string());
    }

    DATE_PHRASES
        .iter()
        .find(|phrase| contains_phrase(words, phrase))
        .map(|phrase| phrase.to_string())
}

fn contains_phrase(words: &[String], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split(' ').collect();
    words
        .windows(parts.len())
        .any(|window| window.iter().zip(&parts).all(|(w, p)| w == p))
}

fn event_type(words: &[String]) -> Option<&'static str> {
    let has = |vocab: &[&str]| words.iter().any(|w| vocab.contains(&w.as_str()));
    if has(RISING_VERBS) || has(FALLING_VERBS) {
        Some(EVENT_PRICE_MOVEMENT)
    } else if has(RELEASE_VERBS) {
        Some(EVENT_TECH_RELEASE)
    } else {
        None
    }
}
