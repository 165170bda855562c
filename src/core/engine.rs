//! Insight engine: the single `analyze` entry point
//!
//! Built once per process and shared read-only; nothing is kept between calls.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::{Config, ModelPath, ENV_TOKEN};
use crate::core::assembler::OutputAssembler;
use crate::core::composer::ReflectionComposer;
use crate::core::inference::{FineTunedClassifier, InferenceClient, Summarizer, ZeroShotClassifier};
use crate::core::lexicon::LexiconScorer;
use crate::core::provider::{MoodProvider, SummaryProvider};
use crate::core::resolver::{MoodResolver, Resolution};
use crate::error::InsightError;
use crate::types::{Insight, Reflection};
use crate::BALANCE_NEUTRAL;

pub struct InsightEngine {
    resolver: MoodResolver,
    summarizer: Option<Box<dyn SummaryProvider>>,
    composer: ReflectionComposer,
    assembler: OutputAssembler,
    lexicon: LexiconScorer,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::lexicon_only()
    }
}

impl InsightEngine {
    pub fn new(resolver: MoodResolver, summarizer: Option<Box<dyn SummaryProvider>>) -> Self {
        Self {
            resolver,
            summarizer,
            composer: ReflectionComposer::new(),
            assembler: OutputAssembler::new(),
            lexicon: LexiconScorer::new(),
        }
    }

    /// No model path at all
    pub fn lexicon_only() -> Self {
        Self::new(MoodResolver::lexicon_only(), None)
    }

    /// Wire providers from configuration.
    ///
    /// A missing credential disables the model path for the lifetime of the
    /// engine and is reported here, once. Offline mode is silent.
    pub fn from_config(config: &Config) -> Self {
        match config.model_path() {
            ModelPath::Offline => {
                debug!("Offline mode, using the lexicon scorer only");
                return Self::lexicon_only();
            }
            ModelPath::NoCredential => {
                warn!(
                    "No inference token configured ({}); model path disabled, using the lexicon scorer only",
                    ENV_TOKEN
                );
                return Self::lexicon_only();
            }
            ModelPath::Enabled => {}
        }

        let client = InferenceClient::from_config(config);
        let mut providers: Vec<Box<dyn MoodProvider>> = Vec::new();
        if let Some(model) = &config.classifier_model {
            providers.push(Box::new(FineTunedClassifier::new(client.clone(), model.clone())));
        }
        for model in &config.zero_shot_models {
            providers.push(Box::new(ZeroShotClassifier::new(client.clone(), model.clone())));
        }
        let summarizer = config
            .summarizer_model
            .as_ref()
            .map(|model| Box::new(Summarizer::new(client.clone(), model.clone())) as Box<dyn SummaryProvider>);

        info!(
            classifier = config.classifier_model.as_deref().unwrap_or("-"),
            zero_shot = %config.zero_shot_models.join(","),
            summarizer = config.summarizer_model.as_deref().unwrap_or("-"),
            timeout_secs = config.timeout.as_secs(),
            "Model strategy enabled"
        );
        Self::new(MoodResolver::new(providers), summarizer)
    }

    /// Is any model capability wired in?
    pub fn model_enabled(&self) -> bool {
        self.resolver.provider_count() > 0 || self.summarizer.is_some()
    }

    /// Analyze one reflection. Never fails: unavailable capabilities fall
    /// back, empty input yields the neutral placeholder insight.
    pub async fn analyze(&self, text: &str) -> Insight {
        let reflection = Reflection::new(text);

        if reflection.is_empty() {
            debug!("Empty reflection, returning placeholder insight");
            let composition = self.composer.compose_empty();
            return self.assembler.assemble(
                &reflection,
                Resolution::empty(),
                composition,
                None,
                BALANCE_NEUTRAL,
            );
        }

        let resolution = self.resolver.resolve(&reflection).await;

        let summary = match &self.summarizer {
            Some(summarizer) => summarizer.try_summarize(reflection.text()).await,
            None => None,
        };

        let balance = self.lexicon.balance(reflection.text());
        let composition = self.composer.compose_for(&resolution.mood, resolution.source);

        info!(
            reflection = %reflection.fingerprint(),
            mood = %resolution.mood.label,
            confidence = resolution.mood.confidence,
            source = ?resolution.source,
            "Reflection analyzed"
        );

        self.assembler
            .assemble(&reflection, resolution, composition, summary, balance)
    }

    /// `analyze` behind a task boundary: anything unexpected becomes
    /// `InsightError::AnalysisFailed` instead of taking the caller down.
    pub async fn analyze_guarded(self: Arc<Self>, text: String) -> Result<Insight, InsightError> {
        tokio::spawn(async move { self.analyze(&text).await })
            .await
            .map_err(|e| {
                error!(error = %e, "Analysis task failed");
                InsightError::AnalysisFailed
            })
    }
}
