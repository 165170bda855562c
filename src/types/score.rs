//! Emotion scores and the resolved mood

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Mood;
use crate::{TIER_HIGH_ABOVE, TIER_MEDIUM_MIN};

/// Per-mood scores in [0,1] produced by exactly one scorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionScore {
    scores: BTreeMap<Mood, f64>,
}

impl EmotionScore {
    /// Create an empty score map
    pub fn new() -> Self {
        Self::default()
    }

    /// Every mood present with score 0
    pub fn zero() -> Self {
        let mut score = Self::new();
        for mood in Mood::ALL {
            score.set(mood, 0.0);
        }
        score
    }

    /// Set a score, clamped to [0,1]; non-finite values become 0
    pub fn set(&mut self, mood: Mood, score: f64) {
        let score = if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 };
        self.scores.insert(mood, score);
    }

    /// Add to a score (clamped)
    pub fn add(&mut self, mood: Mood, delta: f64) {
        let current = self.get(mood);
        self.set(mood, current + delta);
    }

    /// Score for a mood, 0 if absent
    pub fn get(&self, mood: Mood) -> f64 {
        self.scores.get(&mood).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Mood, f64)> + '_ {
        self.scores.iter().map(|(m, s)| (*m, *s))
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Winning mood and its score.
    ///
    /// Ties go to the mood earlier in `Mood::ALL`. Returns `None` when no
    /// mood scores above zero.
    pub fn top(&self) -> Option<MoodResult> {
        let mut best: Option<MoodResult> = None;
        for mood in Mood::ALL {
            let score = self.get(mood);
            if score <= 0.0 {
                continue;
            }
            match best {
                Some(ref b) if b.confidence >= score => {}
                _ => best = Some(MoodResult::new(mood, score)),
            }
        }
        best
    }
}

/// The resolved mood: one label and its normalized confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    pub label: Mood,
    /// 0.0-1.0
    pub confidence: f64,
}

impl MoodResult {
    pub fn new(label: Mood, confidence: f64) -> Self {
        let confidence = if confidence.is_finite() { confidence.clamp(0.0, 1.0) } else { 0.0 };
        Self { label, confidence }
    }

    /// Neutral with zero confidence (empty input, no signal)
    pub fn neutral() -> Self {
        Self::new(Mood::Neutral, 0.0)
    }

    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }

    /// Confidence as a percentage with one decimal
    pub fn percent(&self) -> f64 {
        (self.confidence * 1000.0).round() / 10.0
    }
}

/// Confidence bucket used to pick prompt intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// confidence < 0.5
    Low,
    /// 0.5 <= confidence <= 0.8
    Medium,
    /// confidence > 0.8
    High,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > TIER_HIGH_ABOVE {
            ConfidenceTier::High
        } else if confidence >= TIER_MEDIUM_MIN {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    /// 0 for LOW, 1 for MEDIUM, 2 for HIGH
    pub fn index(&self) -> usize {
        match self {
            ConfidenceTier::Low => 0,
            ConfidenceTier::Medium => 1,
            ConfidenceTier::High => 2,
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConfidenceTier::Low => "low",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::High => "high",
        };
        write!(f, "{}", name)
    }
}

/// Which strategy produced the mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodSource {
    /// Fine-tuned emotion classifier
    FineTuned,
    /// Zero-shot entailment classifier
    ZeroShot,
    /// Keyword lexicon
    Lexicon,
    /// Input was empty, nothing was scored
    Empty,
}

impl std::fmt::Display for MoodSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MoodSource::FineTuned => "fine-tuned classifier",
            MoodSource::ZeroShot => "zero-shot classifier",
            MoodSource::Lexicon => "lexicon",
            MoodSource::Empty => "empty input",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_are_clamped() {
        let mut score = EmotionScore::new();
        score.set(Mood::Sad, 1.7);
        score.set(Mood::Calm, -0.2);
        score.set(Mood::Angry, f64::NAN);
        assert_eq!(score.get(Mood::Sad), 1.0);
        assert_eq!(score.get(Mood::Calm), 0.0);
        assert_eq!(score.get(Mood::Angry), 0.0);
    }

    #[test]
    fn test_top_picks_highest() {
        let mut score = EmotionScore::zero();
        score.set(Mood::Calm, 0.7);
        score.set(Mood::Sad, 0.2);
        assert_eq!(score.top(), Some(MoodResult::new(Mood::Calm, 0.7)));
    }

    #[test]
    fn test_top_tie_uses_precedence() {
        let mut score = EmotionScore::zero();
        score.set(Mood::Optimistic, 0.5);
        score.set(Mood::Anxious, 0.5);
        assert_eq!(score.top().unwrap().label, Mood::Anxious);

        let mut score = EmotionScore::zero();
        score.set(Mood::Neutral, 0.5);
        score.set(Mood::Calm, 0.5);
        assert_eq!(score.top().unwrap().label, Mood::Calm);
    }

    #[test]
    fn test_top_none_when_all_zero() {
        assert!(EmotionScore::zero().top().is_none());
        assert!(EmotionScore::new().top().is_none());
    }

    #[test]
    fn test_add_accumulates() {
        let mut score = EmotionScore::new();
        score.add(Mood::Optimistic, 0.3);
        score.add(Mood::Optimistic, 0.4);
        assert!((score.get(Mood::Optimistic) - 0.7).abs() < 1e-10);
        score.add(Mood::Optimistic, 0.9);
        assert_eq!(score.get(Mood::Optimistic), 1.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ConfidenceTier::from_confidence(0.0), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(0.49), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(0.5), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.8), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.81), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(1.0), ConfidenceTier::High);
    }

    #[test]
    fn test_percent() {
        assert_eq!(MoodResult::new(Mood::Sad, 0.8765).percent(), 87.7);
        assert_eq!(MoodResult::neutral().percent(), 0.0);
    }

    #[test]
    fn test_score_serializes_as_label_map() {
        let mut score = EmotionScore::new();
        score.set(Mood::Anxious, 0.5);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["anxious"], 0.5);
    }
}
