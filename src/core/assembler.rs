//! Output assembler: merges upstream results into an `Insight`

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;

use crate::core::composer::Composition;
use crate::core::resolver::Resolution;
use crate::types::{Insight, Reflection};
use crate::{FALLBACK_SUMMARY_MAX_CHARS, FALLBACK_SUMMARY_SENTENCES};

/// Summary used when there is nothing to summarize
pub const EMPTY_SUMMARY: &str = "Nothing to reflect on yet.";

lazy_static! {
    /// Sentence punctuation followed by whitespace
    static ref RE_BOUNDARY: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Split text into trimmed sentences that contain at least one word character.
///
/// A boundary is `.`, `!` or `?` followed by whitespace, so decimals, URLs and
/// dotted abbreviations stay inside their sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for m in RE_BOUNDARY.find_iter(text) {
        // keep the punctuation (always one ASCII byte) with its sentence
        out.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    out.push(&text[start..]);

    out.into_iter()
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

/// First sentences of the reflection, or a character-capped prefix
pub fn fallback_summary(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let sents = sentences(text);
    if sents.is_empty() {
        return text.chars().take(FALLBACK_SUMMARY_MAX_CHARS).collect();
    }
    sents
        .into_iter()
        .take(FALLBACK_SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OutputAssembler;

impl OutputAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Build the insight; `summary` is `None` when summarization was unavailable
    pub fn assemble(
        &self,
        reflection: &Reflection<'_>,
        resolution: Resolution,
        composition: Composition,
        summary: Option<String>,
        balance: u8,
    ) -> Insight {
        let summary = match summary {
            Some(s) if !s.trim().is_empty() => s,
            _ => fallback_summary(reflection.text()),
        };

        Insight {
            summary,
            mood: resolution.mood,
            tier: resolution.mood.tier(),
            balance,
            prompts: composition.prompts,
            actions: composition.actions,
            suggestions: composition.suggestions,
            source: resolution.source,
            scores: resolution.scores,
            reflection_id: reflection.fingerprint(),
            analyzed_at: Utc::now(),
        }
    }
}
