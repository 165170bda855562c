//! Core types for MindLens

mod insight;
mod mood;
mod reflection;
mod score;

pub use insight::Insight;
pub use mood::Mood;
pub use reflection::Reflection;
pub use score::{ConfidenceTier, EmotionScore, MoodResult, MoodSource};
