//! Insight: the response handed to the presentation layer

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{ConfidenceTier, EmotionScore, MoodResult, MoodSource};

/// Everything the UI renders for one reflection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Model summary, or the first sentences of the reflection
    pub summary: String,
    /// Winning mood and confidence
    pub mood: MoodResult,
    /// Confidence bucket that picked the prompts
    pub tier: ConfidenceTier,
    /// Positive/negative word balance, 0-100 (50 = even)
    pub balance: u8,
    /// Reflection prompts (1-3)
    pub prompts: Vec<String>,
    /// Micro-actions (1-3)
    pub actions: Vec<String>,
    /// Practical, mood-independent suggestions
    pub suggestions: Vec<String>,
    /// Strategy that produced the mood
    pub source: MoodSource,
    /// Full score breakdown from that strategy
    pub scores: EmotionScore,
    /// Short fingerprint of the reflection text
    pub reflection_id: String,
    /// When this was computed
    pub analyzed_at: DateTime<Utc>,
}

impl Insight {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let mood = self.mood.label;
        let mut out = String::new();

        out.push_str(&format!("{}\n", "Summary".bold()));
        out.push_str(&format!("  {}\n\n", self.summary));
        out.push_str(&format!(
            "{} {}  {}  {}\n",
            mood.emoji(),
            format!("Mood: {}", title_case(mood.label())).color(mood.color()).bold(),
            format!("Confidence: {:.1}%", self.mood.percent()).dimmed(),
            format!("Balance: {}/100", self.balance),
        ));

        out.push_str(&format!("\n{}\n", "Reflection prompts".bold()));
        for prompt in &self.prompts {
            out.push_str(&format!("  - {}\n", prompt));
        }
        out.push_str(&format!("\n{}\n", "Micro-actions".bold()));
        for action in &self.actions {
            out.push_str(&format!("  - {}\n", action.green()));
        }
        if !self.suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", "Practical suggestions".bold()));
            for suggestion in &self.suggestions {
                out.push_str(&format!("  - {}\n", suggestion.dimmed()));
            }
        }
        out
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "mood={} | confidence={:.3} | tier={} | balance={} | source={:?} | prompts={} | actions={}",
            self.mood.label,
            self.mood.confidence,
            self.tier,
            self.balance,
            self.source,
            self.prompts.len(),
            self.actions.len(),
        )
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
