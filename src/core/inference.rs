//! Hugging Face Inference API adapter
//!
//! Three capabilities over `POST {base_url}/{model}`:
//! - fine-tuned text classification
//! - zero-shot classification over our mood candidates
//! - summarization
//!
//! Every failure is local to the request: no retries, no circuit breaker.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::core::provider::{MoodProvider, SummaryProvider};
use crate::error::InsightError;
use crate::types::{EmotionScore, Mood, MoodSource};
use crate::{SUMMARY_MAX_LENGTH, SUMMARY_MIN_LENGTH, ZERO_SHOT_MIN_CONFIDENCE};

/// Candidate labels offered to the zero-shot model
pub const ZERO_SHOT_CANDIDATES: [&str; 10] = [
    "joy",
    "sadness",
    "anger",
    "fear",
    "neutral",
    "confusion",
    "motivation",
    "calm",
    "anxiety",
    "optimism",
];

/// Process-wide HTTP client, built on first use
static HTTP_CLIENT: OnceLock<Option<Client>> = OnceLock::new();

fn http_client() -> Option<&'static Client> {
    HTTP_CLIENT
        .get_or_init(|| {
            debug!("Initializing inference HTTP client");
            match Client::builder()
                .user_agent(concat!("mindlens/", env!("CARGO_PKG_VERSION")))
                .build()
            {
                Ok(client) => Some(client),
                Err(e) => {
                    error!(error = %e, "Failed to build inference HTTP client");
                    None
                }
            }
        })
        .as_ref()
}

// =============================================================================
// WIRE FORMATS
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// text-classification answers `[[{label,score}..]]` or `[{label,score}..]`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    fn into_pairs(self) -> Vec<LabelScore> {
        match self {
            Self::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            Self::Flat(pairs) => pairs,
        }
    }
}

/// zero-shot answers `{labels, scores}` or `[{label,score}..]`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZeroShotResponse {
    Columns { labels: Vec<String>, scores: Vec<f64> },
    Pairs(Vec<LabelScore>),
}

impl ZeroShotResponse {
    fn into_pairs(self) -> Result<Vec<LabelScore>, InsightError> {
        match self {
            Self::Columns { labels, scores } => {
                if labels.len() != scores.len() {
                    return Err(InsightError::Malformed(format!(
                        "{} labels but {} scores",
                        labels.len(),
                        scores.len()
                    )));
                }
                Ok(labels
                    .into_iter()
                    .zip(scores)
                    .map(|(label, score)| LabelScore { label, score })
                    .collect())
            }
            Self::Pairs(pairs) => Ok(pairs),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SummaryText {
    summary_text: String,
}

/// Fold model labels onto moods, summing labels that share a mood.
///
/// The model's top label must map to a mood; otherwise the answer is about
/// something outside our label set and the step counts as unavailable.
fn scores_from_pairs(pairs: &[LabelScore]) -> Result<EmotionScore, InsightError> {
    let top = pairs
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| InsightError::Malformed("empty label list".to_string()))?;
    if Mood::from_model_label(&top.label).is_none() {
        return Err(InsightError::Malformed(format!(
            "top label '{}' is not a known mood",
            top.label
        )));
    }

    let mut score = EmotionScore::new();
    for pair in pairs {
        match Mood::from_model_label(&pair.label) {
            Some(mood) => score.add(mood, pair.score),
            None => debug!(label = %pair.label, "Ignoring unmapped model label"),
        }
    }
    if score.is_empty() {
        return Err(InsightError::Malformed(
            "no recognised emotion labels in response".to_string(),
        ));
    }
    Ok(score)
}

/// Expected outages are warnings; anything else points at a bug
fn log_unavailable(provider: &str, model: &str, err: &InsightError) {
    if err.is_capability_unavailable() {
        warn!(provider, model, error = %err, "Capability unavailable for this request");
    } else {
        error!(provider, model, error = %err, "Capability failed");
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Authenticated JSON client for one inference endpoint
#[derive(Debug, Clone)]
pub struct InferenceClient {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl InferenceClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            token,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.inference_url.clone(),
            config.inference_token.clone(),
            config.timeout,
        )
    }

    fn model_url(&self, model: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            model.trim_start_matches('/')
        )
    }

    /// POST a JSON body to a model and decode the answer
    pub async fn post<T: DeserializeOwned>(&self, model: &str, body: &Value) -> Result<T, InsightError> {
        let token = self.token.as_deref().ok_or(InsightError::MissingCredential)?;
        let client = http_client().ok_or_else(|| {
            InsightError::ClientUnavailable("HTTP client failed to initialize".to_string())
        })?;

        let response = client
            .post(self.model_url(model))
            .bearer_auth(token)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn transport_error(&self, err: reqwest::Error) -> InsightError {
        if err.is_timeout() {
            InsightError::Timeout(self.timeout)
        } else {
            InsightError::Http(err)
        }
    }
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// Emotion classifier fine-tuned on an emotion taxonomy
#[derive(Debug, Clone)]
pub struct FineTunedClassifier {
    client: InferenceClient,
    model: String,
}

impl FineTunedClassifier {
    pub fn new(client: InferenceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub async fn classify(&self, text: &str) -> Result<EmotionScore, InsightError> {
        let body = json!({ "inputs": text });
        let response: ClassificationResponse = self.client.post(&self.model, &body).await?;
        scores_from_pairs(&response.into_pairs())
    }
}

#[async_trait]
impl MoodProvider for FineTunedClassifier {
    fn name(&self) -> &str {
        "fine_tuned"
    }

    fn source(&self) -> MoodSource {
        MoodSource::FineTuned
    }

    async fn try_classify(&self, text: &str) -> Option<EmotionScore> {
        match self.classify(text).await {
            Ok(score) => Some(score),
            Err(e) => {
                log_unavailable(self.name(), &self.model, &e);
                None
            }
        }
    }
}

/// General-purpose entailment classifier given our labels as candidates
#[derive(Debug, Clone)]
pub struct ZeroShotClassifier {
    client: InferenceClient,
    model: String,
    min_confidence: f64,
}

impl ZeroShotClassifier {
    pub fn new(client: InferenceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            min_confidence: ZERO_SHOT_MIN_CONFIDENCE,
        }
    }

    pub async fn classify(&self, text: &str) -> Result<EmotionScore, InsightError> {
        let body = json!({
            "inputs": text,
            "parameters": {
                "candidate_labels": ZERO_SHOT_CANDIDATES,
                "multi_label": false,
            },
        });
        let response: ZeroShotResponse = self.client.post(&self.model, &body).await?;
        let pairs = response.into_pairs()?;

        let top = pairs.iter().map(|p| p.score).fold(0.0_f64, f64::max);
        if top < self.min_confidence {
            return Err(InsightError::LowConfidence(top));
        }
        scores_from_pairs(&pairs)
    }
}

#[async_trait]
impl MoodProvider for ZeroShotClassifier {
    fn name(&self) -> &str {
        "zero_shot"
    }

    fn source(&self) -> MoodSource {
        MoodSource::ZeroShot
    }

    async fn try_classify(&self, text: &str) -> Option<EmotionScore> {
        match self.classify(text).await {
            Ok(score) => Some(score),
            Err(e) => {
                log_unavailable(self.name(), &self.model, &e);
                None
            }
        }
    }
}

/// Abstractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: InferenceClient,
    model: String,
}

impl Summarizer {
    pub fn new(client: InferenceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub async fn summarize(&self, text: &str) -> Result<String, InsightError> {
        let body = json!({
            "inputs": text,
            "parameters": {
                "max_length": SUMMARY_MAX_LENGTH,
                "min_length": SUMMARY_MIN_LENGTH,
                "do_sample": false,
            },
        });
        let response: Vec<SummaryText> = self.client.post(&self.model, &body).await?;
        response
            .into_iter()
            .next()
            .map(|s| s.summary_text.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| InsightError::Malformed("empty summary".to_string()))
    }
}

#[async_trait]
impl SummaryProvider for Summarizer {
    fn name(&self) -> &str {
        "summarizer"
    }

    async fn try_summarize(&self, text: &str) -> Option<String> {
        match self.summarize(text).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                log_unavailable(self.name(), &self.model, &e);
                None
            }
        }
    }
}
