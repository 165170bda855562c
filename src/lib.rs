//! MindLens: mood inference for short journal reflections
//!
//! text → MoodResolver (model providers, then lexicon) → ReflectionComposer
//! → OutputAssembler → Insight

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::InsightError;

// =============================================================================
// CONFIDENCE TIERS
// =============================================================================

/// Below this confidence the tier is LOW
pub const TIER_MEDIUM_MIN: f64 = 0.5;

/// Above this confidence the tier is HIGH (inclusive upper bound of MEDIUM)
pub const TIER_HIGH_ABOVE: f64 = 0.8;

// =============================================================================
// MODEL STRATEGY
// =============================================================================

/// Zero-shot results with a top score below this are discarded
pub const ZERO_SHOT_MIN_CONFIDENCE: f64 = 0.45;

/// Default per-request timeout for inference calls (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Summarizer length bounds (tokens)
pub const SUMMARY_MAX_LENGTH: u32 = 120;
pub const SUMMARY_MIN_LENGTH: u32 = 30;

// =============================================================================
// OUTPUT SHAPE
// =============================================================================

/// Prompts and micro-actions returned per insight
pub const PROMPTS_PER_INSIGHT: usize = 2;
pub const ACTIONS_PER_INSIGHT: usize = 2;

/// Sentences kept by the fallback summary
pub const FALLBACK_SUMMARY_SENTENCES: usize = 2;

/// Character cap for the fallback summary when no sentence is found
pub const FALLBACK_SUMMARY_MAX_CHARS: usize = 300;

/// Neutral midpoint of the 0-100 balance score
pub const BALANCE_NEUTRAL: u8 = 50;

/// Balance points per net positive word
pub const BALANCE_STEP: i64 = 10;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
