//! Mood resolver: strict fallback chain
//!
//! fine-tuned classifier → zero-shot classifier → lexicon.
//! Each step runs at most once per request; the first step that yields a
//! score with a non-zero winner decides.

use tracing::debug;

use crate::core::lexicon::LexiconScorer;
use crate::core::provider::MoodProvider;
use crate::types::{EmotionScore, MoodResult, MoodSource, Reflection};

/// Outcome of resolving one reflection
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub mood: MoodResult,
    pub source: MoodSource,
    pub scores: EmotionScore,
}

impl Resolution {
    /// Neutral/0, nothing scored
    pub fn empty() -> Self {
        Self {
            mood: MoodResult::neutral(),
            source: MoodSource::Empty,
            scores: EmotionScore::zero(),
        }
    }
}

/// Ordered model providers with the lexicon as the final step
pub struct MoodResolver {
    providers: Vec<Box<dyn MoodProvider>>,
    lexicon: LexiconScorer,
}

impl Default for MoodResolver {
    fn default() -> Self {
        Self::lexicon_only()
    }
}

impl MoodResolver {
    /// Providers are tried in the given order
    pub fn new(providers: Vec<Box<dyn MoodProvider>>) -> Self {
        Self {
            providers,
            lexicon: LexiconScorer::new(),
        }
    }

    pub fn lexicon_only() -> Self {
        Self::new(Vec::new())
    }

    /// Number of model providers ahead of the lexicon
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Resolve a reflection to exactly one mood
    pub async fn resolve(&self, reflection: &Reflection<'_>) -> Resolution {
        if reflection.is_empty() {
            return Resolution::empty();
        }
        let text = reflection.text();

        for provider in &self.providers {
            let Some(scores) = provider.try_classify(text).await else {
                continue;
            };
            match scores.top() {
                Some(mood) => {
                    return Resolution {
                        mood,
                        source: provider.source(),
                        scores,
                    };
                }
                None => {
                    debug!(provider = provider.name(), "Provider returned no winning mood, falling back");
                }
            }
        }

        self.resolve_lexicon(text)
    }

    /// Lexicon step on its own
    pub fn resolve_lexicon(&self, text: &str) -> Resolution {
        let scores = self.lexicon.score(text);
        let mood = scores.top().unwrap_or_else(MoodResult::neutral);
        Resolution {
            mood,
            source: MoodSource::Lexicon,
            scores,
        }
    }
}
