//! Mood labels

use colored::Color;
use serde::{Deserialize, Serialize};

/// The closed set of moods MindLens can report.
///
/// Declaration order is the tie-break precedence: when two moods score the
/// same, the one declared first wins. Distress moods come first so a mixed
/// reflection gets the more supportive prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Anxious,
    Sad,
    Angry,
    Confused,
    Motivated,
    Optimistic,
    Calm,
    Neutral,
}

impl Mood {
    /// Every mood, in precedence order
    pub const ALL: [Mood; 8] = [
        Mood::Anxious,
        Mood::Sad,
        Mood::Angry,
        Mood::Confused,
        Mood::Motivated,
        Mood::Optimistic,
        Mood::Calm,
        Mood::Neutral,
    ];

    /// Lowercase label used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Confused => "confused",
            Mood::Motivated => "motivated",
            Mood::Optimistic => "optimistic",
            Mood::Calm => "calm",
            Mood::Neutral => "neutral",
        }
    }

    /// Map a model's output label onto our mood set.
    ///
    /// Emotion models use their own taxonomies (`joy`, `sadness`, `fear`,
    /// `LABEL_3`, ...). Unrecognised labels map to `None`.
    pub fn from_model_label(label: &str) -> Option<Mood> {
        let l = label.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| l.contains(n));

        if has(&["joy", "happy", "positive", "optimis", "love"]) {
            Some(Mood::Optimistic)
        } else if has(&["sad", "depress", "grief"]) {
            Some(Mood::Sad)
        } else if has(&["anger", "angry", "annoy", "disgust"]) {
            Some(Mood::Angry)
        } else if has(&["anx", "fear", "nervous", "worry"]) {
            Some(Mood::Anxious)
        } else if has(&["confus"]) {
            Some(Mood::Confused)
        } else if has(&["motivat"]) {
            Some(Mood::Motivated)
        } else if has(&["calm", "relief"]) {
            Some(Mood::Calm)
        } else if has(&["neutral"]) {
            Some(Mood::Neutral)
        } else {
            None
        }
    }

    /// Terminal color for this mood
    pub fn color(&self) -> Color {
        match self {
            Mood::Anxious => Color::Yellow,
            Mood::Sad => Color::Blue,
            Mood::Angry => Color::Red,
            Mood::Confused => Color::Magenta,
            Mood::Motivated => Color::Cyan,
            Mood::Optimistic => Color::Green,
            Mood::Calm => Color::BrightCyan,
            Mood::Neutral => Color::White,
        }
    }

    /// Get emoji for mood
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Anxious => "😟",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Confused => "😕",
            Mood::Motivated => "💪",
            Mood::Optimistic => "🌤",
            Mood::Calm => "🍃",
            Mood::Neutral => "😐",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
