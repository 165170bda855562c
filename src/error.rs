use std::time::Duration;
use thiserror::Error;

/// Errors raised while producing an insight.
///
/// Everything except `Config` and `AnalysisFailed` means an inference
/// capability is unavailable for the current request; those are swallowed at
/// the provider boundary and the resolver falls back to the next step.
#[derive(Debug, Error)]
pub enum InsightError {
    /// No inference token configured.
    #[error("no inference credential configured")]
    MissingCredential,

    /// The inference service did not answer within the request timeout.
    #[error("inference request timed out after {0:?}")]
    Timeout(Duration),

    /// The inference service answered with a non-success status.
    #[error("inference service returned HTTP {0}")]
    Status(u16),

    /// Transport-level failure talking to the inference service.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The inference service answered with a body we cannot use.
    #[error("malformed model response: {0}")]
    Malformed(String),

    /// The model answered, but not confidently enough to use.
    #[error("model confidence {0:.2} below threshold")]
    LowConfidence(f64),

    /// The shared HTTP client could not be built.
    #[error("inference client unavailable: {0}")]
    ClientUnavailable(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catch-all at the presentation boundary.
    #[error("analysis failed, please try again")]
    AnalysisFailed,
}

impl InsightError {
    /// True for the errors that only disable a capability for one request
    pub fn is_capability_unavailable(&self) -> bool {
        !matches!(self, InsightError::Config(_) | InsightError::AnalysisFailed)
    }
}

impl From<serde_json::Error> for InsightError {
    fn from(err: serde_json::Error) -> Self {
        InsightError::Malformed(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_classification() {
        assert!(InsightError::MissingCredential.is_capability_unavailable());
        assert!(InsightError::Timeout(Duration::from_secs(1)).is_capability_unavailable());
        assert!(InsightError::Status(503).is_capability_unavailable());
        assert!(InsightError::Malformed("x".into()).is_capability_unavailable());
        assert!(!InsightError::Config("x".into()).is_capability_unavailable());
        assert!(!InsightError::AnalysisFailed.is_capability_unavailable());
    }

    #[test]
    fn test_user_visible_message() {
        assert_eq!(
            InsightError::AnalysisFailed.to_string(),
            "analysis failed, please try again"
        );
    }

    #[test]
    fn test_json_error_is_malformed() {
        let err: InsightError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, InsightError::Malformed(_)));
    }
}
