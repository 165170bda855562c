//! Lexicon scorer: keyword counts per mood, normalized by total matches
//!
//! score(mood) = hits(mood) / total_hits, all zero when nothing matches.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::types::{EmotionScore, Mood};
use crate::{BALANCE_NEUTRAL, BALANCE_STEP};

lazy_static! {
    static ref RE_WORD: Regex = Regex::new(r"\w+").unwrap();

    /// word → mood, built once from the keyword tables
    static ref KEYWORD_INDEX: HashMap<&'static str, Mood> = {
        let mut index = HashMap::new();
        for mood in Mood::ALL {
            for word in keywords(mood) {
                index.insert(*word, mood);
            }
        }
        index
    };
}

/// Keyword set for a mood. Each word belongs to exactly one mood.
pub fn keywords(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Anxious => &[
            "anxious", "anxiety", "worried", "worry", "worrying", "nervous", "panic",
            "panicking", "scared", "afraid", "fear", "stressed", "stress", "overwhelmed",
            "tense", "uneasy", "restless",
        ],
        Mood::Sad => &[
            "sad", "down", "depressed", "lonely", "unhappy", "miserable", "hopeless",
            "cry", "crying", "tired", "exhausted", "grief", "heartbroken", "empty",
            "upset", "hurt",
        ],
        Mood::Angry => &[
            "angry", "anger", "mad", "furious", "annoyed", "irritated", "frustrated",
            "frustrating", "rage", "resentful", "hate", "livid", "fury",
        ],
        Mood::Confused => &[
            "confused", "confusing", "uncertain", "unsure", "lost", "unclear", "torn",
            "puzzled", "undecided", "conflicted",
        ],
        Mood::Motivated => &[
            "motivated", "determined", "driven", "focused", "productive", "energized",
            "inspired", "ambitious", "progress", "goal", "goals", "momentum",
        ],
        Mood::Optimistic => &[
            "happy", "glad", "joy", "joyful", "great", "good", "proud", "hopeful", "hope",
            "optimistic", "grateful", "thankful", "excited", "better", "relieved",
            "wonderful", "delighted",
        ],
        Mood::Calm => &[
            "calm", "peaceful", "relaxed", "serene", "content", "rested", "settled",
            "quiet", "grounded", "balanced", "still",
        ],
        Mood::Neutral => &[
            "fine", "okay", "ok", "alright", "normal", "usual", "ordinary", "meh",
            "average",
        ],
    }
}

/// Words that push the balance score up
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "happy", "proud", "ok", "well", "better", "calm", "relieved", "optimistic",
];

/// Words that push the balance score down
const NEGATIVE_WORDS: &[&str] = &[
    "sad", "depressed", "angry", "stressed", "anxious", "worried", "scared", "upset", "tired",
    "down",
];

/// Raw keyword hits, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconHits {
    pub counts: HashMap<Mood, usize>,
    pub total: usize,
}

/// Keyword-count scorer; needs no external model
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconScorer;

impl LexiconScorer {
    /// Create new scorer
    pub fn new() -> Self {
        Self
    }

    /// Count keyword hits per mood
    pub fn hits(&self, text: &str) -> LexiconHits {
        let text = text.trim();
        let mut hits = LexiconHits::default();
        if text.is_empty() {
            return hits;
        }

        for token in tokens(text) {
            if let Some(mood) = KEYWORD_INDEX.get(token.as_str()) {
                *hits.counts.entry(*mood).or_insert(0) += 1;
                hits.total += 1;
            }
        }
        hits
    }

    /// Score text. Every mood is present in the result.
    pub fn score(&self, text: &str) -> EmotionScore {
        let hits = self.hits(text);
        let mut score = EmotionScore::zero();
        if hits.total == 0 {
            return score;
        }

        let total = hits.total as f64;
        for (mood, count) in &hits.counts {
            score.set(*mood, *count as f64 / total);
        }
        score
    }

    /// Positive/negative balance, 0-100 with 50 as even
    pub fn balance(&self, text: &str) -> u8 {
        let words = tokens(text);
        if words.is_empty() {
            return BALANCE_NEUTRAL;
        }

        let pos = words.iter().filter(|w| POSITIVE_WORDS.contains(&w.as_str())).count();
        let neg = words.iter().filter(|w| NEGATIVE_WORDS.contains(&w.as_str())).count();
        balance_from_counts(pos, neg)
    }
}

/// 50 + step × (pos − neg), clamped to 0-100
fn balance_from_counts(pos: usize, neg: usize) -> u8 {
    let pos = i64::try_from(pos).unwrap_or(i64::MAX);
    let neg = i64::try_from(neg).unwrap_or(i64::MAX);
    let raw = pos
        .saturating_sub(neg)
        .saturating_mul(BALANCE_STEP)
        .saturating_add(i64::from(BALANCE_NEUTRAL));
    raw.clamp(0, 100) as u8
}

/// Lowercased word tokens
fn tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    RE_WORD
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
