//! Process configuration loaded from the environment
//!
//! `main` loads `.env` (if present) before calling `Config::from_env`.

use std::env;
use std::time::Duration;

use crate::error::InsightError;
use crate::DEFAULT_TIMEOUT_SECS;

pub const ENV_TOKEN: &str = "HF_TOKEN";
pub const ENV_TOKEN_LEGACY: &str = "HUGGINGFACEHUB_API_TOKEN";
pub const ENV_INFERENCE_URL: &str = "MINDLENS_INFERENCE_URL";
pub const ENV_CLASSIFIER_MODEL: &str = "MINDLENS_CLASSIFIER_MODEL";
pub const ENV_ZERO_SHOT_MODEL: &str = "MINDLENS_ZERO_SHOT_MODEL";
pub const ENV_SUMMARIZER_MODEL: &str = "MINDLENS_SUMMARIZER_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "MINDLENS_TIMEOUT_SECS";

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "Agritmishra/emotion-tiny-distilbert";
/// Tried in order; the second answers when the first is unavailable
pub const DEFAULT_ZERO_SHOT_MODELS: [&str; 2] = [
    "typeform/distilbert-base-uncased-mnli",
    "valhalla/distilbart-mnli-12-1",
];

/// Whether, and why not, the model path is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelPath {
    /// Switched off on request (`--offline`)
    Offline,
    /// No inference token configured
    NoCredential,
    Enabled,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Inference credential; `None` disables every model provider
    pub inference_token: Option<String>,
    /// Base URL, model ids are appended as path segments
    pub inference_url: String,
    pub classifier_model: Option<String>,
    /// Zero-shot models, each one step of the chain
    pub zero_shot_models: Vec<String>,
    pub summarizer_model: Option<String>,
    /// Per-request timeout for inference calls
    pub timeout: Duration,
    /// Model path switched off by the caller
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inference_token: None,
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            classifier_model: Some(DEFAULT_CLASSIFIER_MODEL.to_string()),
            zero_shot_models: DEFAULT_ZERO_SHOT_MODELS.iter().map(|m| m.to_string()).collect(),
            summarizer_model: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            offline: false,
        }
    }
}

impl Config {
    /// Configuration with the model path switched off
    pub fn offline() -> Self {
        Self {
            classifier_model: None,
            zero_shot_models: Vec::new(),
            offline: true,
            ..Self::default()
        }
    }

    /// Read configuration from environment variables.
    ///
    /// A missing token is not an error; only malformed values are.
    pub fn from_env() -> Result<Self, InsightError> {
        let defaults = Self::default();

        let inference_token = non_blank(ENV_TOKEN).or_else(|| non_blank(ENV_TOKEN_LEGACY));

        let inference_url = non_blank(ENV_INFERENCE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.inference_url);

        let timeout = match non_blank(ENV_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(&raw)?,
            None => defaults.timeout,
        };

        Ok(Self {
            inference_token,
            inference_url,
            classifier_model: model_var(ENV_CLASSIFIER_MODEL, defaults.classifier_model),
            zero_shot_models: model_list_var(ENV_ZERO_SHOT_MODEL, defaults.zero_shot_models),
            summarizer_model: model_var(ENV_SUMMARIZER_MODEL, defaults.summarizer_model),
            timeout,
            offline: false,
        })
    }

    pub fn model_path(&self) -> ModelPath {
        if self.offline {
            ModelPath::Offline
        } else if self.inference_token.is_none() {
            ModelPath::NoCredential
        } else {
            ModelPath::Enabled
        }
    }

    /// Is the model path usable at all?
    pub fn model_enabled(&self) -> bool {
        self.model_path() == ModelPath::Enabled
    }
}

/// Unset falls back to the default; set-but-blank disables the model
fn model_var(key: &str, default: Option<String>) -> Option<String> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => None,
        Ok(value) => Some(value.trim().to_string()),
        Err(_) => default,
    }
}

/// Comma-separated, order kept; unset falls back to the default, blank disables
fn model_list_var(key: &str, default: Vec<String>) -> Vec<String> {
    match env::var(key) {
        Ok(value) => value
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => default,
    }
}

fn non_blank(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration, InsightError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(InsightError::Config(format!(
            "{} must be a positive integer, got '{}'",
            ENV_TIMEOUT_SECS, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [&str; 7] = [
        ENV_TOKEN,
        ENV_TOKEN_LEGACY,
        ENV_INFERENCE_URL,
        ENV_CLASSIFIER_MODEL,
        ENV_ZERO_SHOT_MODEL,
        ENV_SUMMARIZER_MODEL,
        ENV_TIMEOUT_SECS,
    ];

    fn with_env<F: FnOnce()>(set: &[(&str, &str)], f: F) {
        let vars: Vec<(&str, Option<&str>)> = ALL_KEYS
            .iter()
            .map(|k| (*k, set.iter().find(|(sk, _)| sk == k).map(|(_, v)| *v)))
            .collect();
        temp_env::with_vars(vars, f);
    }

    #[test]
    fn test_defaults_without_token() {
        with_env(&[], || {
            let config = Config::from_env().unwrap();
            assert!(config.inference_token.is_none());
            assert!(!config.model_enabled());
            assert_eq!(config.inference_url, DEFAULT_INFERENCE_URL);
            assert_eq!(config.classifier_model.as_deref(), Some(DEFAULT_CLASSIFIER_MODEL));
            assert_eq!(
                config.zero_shot_models,
                vec![
                    "typeform/distilbert-base-uncased-mnli".to_string(),
                    "valhalla/distilbart-mnli-12-1".to_string(),
                ]
            );
            assert!(config.summarizer_model.is_none());
            assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        });
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        with_env(&[(ENV_TOKEN, "   ")], || {
            let config = Config::from_env().unwrap();
            assert!(!config.model_enabled());
        });
    }

    #[test]
    fn test_legacy_token_name() {
        with_env(&[(ENV_TOKEN_LEGACY, "hf_legacy")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.inference_token.as_deref(), Some("hf_legacy"));
        });
    }

    #[test]
    fn test_overrides() {
        with_env(
            &[
                (ENV_TOKEN, "hf_abc"),
                (ENV_INFERENCE_URL, "http://localhost:9000/"),
                (ENV_CLASSIFIER_MODEL, ""),
                (ENV_SUMMARIZER_MODEL, "sshleifer/distilbart-cnn-12-6"),
                (ENV_TIMEOUT_SECS, "3"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.inference_token.as_deref(), Some("hf_abc"));
                assert_eq!(config.inference_url, "http://localhost:9000");
                assert!(config.classifier_model.is_none());
                assert_eq!(
                    config.summarizer_model.as_deref(),
                    Some("sshleifer/distilbart-cnn-12-6")
                );
                assert_eq!(config.timeout, Duration::from_secs(3));
            },
        );
    }

    #[test]
    fn test_zero_shot_model_list() {
        with_env(&[(ENV_ZERO_SHOT_MODEL, " org/a , ,org/b,")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.zero_shot_models, vec!["org/a".to_string(), "org/b".to_string()]);
        });
        with_env(&[(ENV_ZERO_SHOT_MODEL, "  ")], || {
            assert!(Config::from_env().unwrap().zero_shot_models.is_empty());
        });
    }

    #[test]
    fn test_invalid_timeout() {
        with_env(&[(ENV_TIMEOUT_SECS, "soon")], || {
            assert!(matches!(Config::from_env(), Err(InsightError::Config(_))));
        });
        with_env(&[(ENV_TIMEOUT_SECS, "0")], || {
            assert!(matches!(Config::from_env(), Err(InsightError::Config(_))));
        });
    }

    #[test]
    fn test_model_path() {
        assert_eq!(Config::default().model_path(), ModelPath::NoCredential);
        assert_eq!(Config::offline().model_path(), ModelPath::Offline);

        let with_token = Config {
            inference_token: Some("hf_x".to_string()),
            ..Config::default()
        };
        assert_eq!(with_token.model_path(), ModelPath::Enabled);

        // offline wins over a configured token
        let offline_with_token = Config {
            inference_token: Some("hf_x".to_string()),
            ..Config::offline()
        };
        assert_eq!(offline_with_token.model_path(), ModelPath::Offline);
        assert!(!offline_with_token.model_enabled());
    }

    #[test]
    fn test_offline_has_no_models() {
        let config = Config::offline();
        assert!(config.offline);
        assert!(config.classifier_model.is_none());
        assert!(config.zero_shot_models.is_empty());
    }
}
