//! Reflection composer: (mood, confidence tier) → prompts + micro-actions
//!
//! Deterministic: the tier selects a fixed window of the mood's catalog
//! (LOW → entries 0-1, MEDIUM → 2-3, HIGH → 4-5).

use serde::{Deserialize, Serialize};

use crate::core::catalog;
use crate::types::{MoodResult, MoodSource};
use crate::{ACTIONS_PER_INSIGHT, PROMPTS_PER_INSIGHT};

/// Prompts and actions for one insight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub prompts: Vec<String>,
    pub actions: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ReflectionComposer;

impl ReflectionComposer {
    pub fn new() -> Self {
        Self
    }

    /// Compose content for a resolved mood
    pub fn compose(&self, mood: &MoodResult) -> Composition {
        let tier = mood.tier().index();
        Composition {
            prompts: window(catalog::prompts(mood.label), tier, PROMPTS_PER_INSIGHT),
            actions: window(catalog::actions(mood.label), tier, ACTIONS_PER_INSIGHT),
            suggestions: catalog::SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Generic fallback when there is nothing to reflect on
    pub fn compose_empty(&self) -> Composition {
        Composition {
            prompts: vec![catalog::EMPTY_PROMPT.to_string()],
            actions: vec![catalog::EMPTY_ACTION.to_string()],
            suggestions: Vec::new(),
        }
    }

    /// Compose for a resolution, honouring the empty case
    pub fn compose_for(&self, mood: &MoodResult, source: MoodSource) -> Composition {
        match source {
            MoodSource::Empty => self.compose_empty(),
            _ => self.compose(mood),
        }
    }
}

/// `count` entries starting at `tier * count`, wrapping if the list is short
fn window(list: &[&str], tier: usize, count: usize) -> Vec<String> {
    if list.is_empty() {
        return Vec::new();
    }
    let start = tier * count;
    (0..count.min(list.len()))
        .map(|i| list[(start + i) % list.len()].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mood;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_for_every_mood_and_tier() {
        let composer = ReflectionComposer::new();
        for mood in Mood::ALL {
            for confidence in [0.0, 0.3, 0.5, 0.8, 0.9, 1.0] {
                let c = composer.compose(&MoodResult::new(mood, confidence));
                assert!((1..=3).contains(&c.prompts.len()));
                assert!((1..=3).contains(&c.actions.len()));
            }
        }
    }

    #[test]
    fn test_tier_selects_window() {
        let composer = ReflectionComposer::new();
        let low = composer.compose(&MoodResult::new(Mood::Sad, 0.2));
        let medium = composer.compose(&MoodResult::new(Mood::Sad, 0.6));
        let high = composer.compose(&MoodResult::new(Mood::Sad, 0.95));

        let all = catalog::prompts(Mood::Sad);
        assert_eq!(low.prompts, vec![all[0].to_string(), all[1].to_string()]);
        assert_eq!(medium.prompts, vec![all[2].to_string(), all[3].to_string()]);
        assert_eq!(high.prompts, vec![all[4].to_string(), all[5].to_string()]);
    }

    #[test]
    fn test_stable_across_calls() {
        let composer = ReflectionComposer::new();
        let mood = MoodResult::new(Mood::Motivated, 0.7);
        assert_eq!(composer.compose(&mood), composer.compose(&mood));
        // same label and tier, different confidence: same content
        assert_eq!(
            composer.compose(&MoodResult::new(Mood::Motivated, 0.55)),
            composer.compose(&mood)
        );
    }

    #[test]
    fn test_empty_fallback() {
        let composer = ReflectionComposer::new();
        let c = composer.compose_for(&MoodResult::neutral(), MoodSource::Empty);
        assert_eq!(c.prompts, vec![catalog::EMPTY_PROMPT.to_string()]);
        assert_eq!(c.actions, vec![catalog::EMPTY_ACTION.to_string()]);
        assert!(c.suggestions.is_empty());
    }

    #[test]
    fn test_window_wraps_short_lists() {
        assert_eq!(window(&["a", "b", "c"], 2, 2), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(window(&["a"], 1, 2), vec!["a".to_string()]);
        assert!(window(&[], 0, 2).is_empty());
    }
}
