//! Capability traits for the model strategy chain

use async_trait::async_trait;

use crate::types::{EmotionScore, MoodSource};

/// One step of the mood fallback chain.
///
/// Implementations swallow their own failures: `None` means "unavailable for
/// this request", and the resolver moves on to the next step.
#[async_trait]
pub trait MoodProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Strategy reported when this provider wins
    fn source(&self) -> MoodSource;

    /// Score the text, or `None` if the capability is unavailable
    async fn try_classify(&self, text: &str) -> Option<EmotionScore>;
}

/// Optional summarization capability
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Summarize the text, or `None` if the capability is unavailable
    async fn try_summarize(&self, text: &str) -> Option<String>;
}
