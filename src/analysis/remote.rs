//! Remote content-analysis endpoint client.
//!
//! Sends `{"content": ..., "contentType": ...}` as JSON and expects
//! `{"scores": {...}, "recommendations": [...]}` back. Scores are clamped and
//! the final score recomputed on deserialization; recommendations are padded
//! or truncated to exactly three with the local engine.

use super::{AnalysisResult, ContentAnalyzer};
use crate::error::{AeoError, AnalysisErrorKind, Result};
use crate::model::ContentType;
use crate::scoring::normalize;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;

/// Remote analyzer configuration.
#[derive(Debug, Clone)]
pub struct RemoteAnalyzerConfig {
    /// Endpoint URL receiving the POST
    pub endpoint: String,
    /// Bearer token, if the endpoint requires one
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retries for failed requests
    pub max_retries: u8,
}

impl Default for RemoteAnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    content: &'a str,
    content_type: ContentType,
}

/// HTTP client for a remote analyzer.
pub struct RemoteAnalyzer {
    client: Client,
    config: RemoteAnalyzerConfig,
}

/// Helper to convert reqwest errors to analysis errors
fn network_error(msg: &str, err: reqwest::Error) -> AeoError {
    AeoError::analysis(msg, AnalysisErrorKind::NetworkError(err.to_string()))
}

/// Helper to create API errors
fn api_error(msg: impl Into<String>) -> AeoError {
    AeoError::analysis("API request", AnalysisErrorKind::ApiError(msg.into()))
}

impl RemoteAnalyzer {
    /// Create a new remote analyzer.
    pub fn new(config: RemoteAnalyzerConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(AeoError::analysis(
                "creating remote analyzer",
                AnalysisErrorKind::NotConfigured("no endpoint set".to_string()),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Send the request, retrying with exponential backoff.
    fn analyze_with_retries(&self, request: &AnalyzeRequest<'_>) -> Result<AnalysisResult> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(1 << (attempt - 1));
                std::thread::sleep(delay);
                tracing::debug!("Retry attempt {} after {:?}", attempt, delay);
            }

            match self.send_request(request) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::debug!("Analysis request attempt {} failed: {}", attempt + 1, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| api_error("Unknown error")))
    }

    fn send_request(&self, request: &AnalyzeRequest<'_>) -> Result<AnalysisResult> {
        let mut builder = self.client.post(&self.config.endpoint).json(request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }
        let response = builder
            .send()
            .map_err(|e| network_error("Failed to send analysis request", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(api_error(format!(
                "Analyzer returned error status {}: {}",
                status.as_u16(),
                body
            )));
        }

        response.json().map_err(|e| {
            AeoError::analysis(
                "parsing response",
                AnalysisErrorKind::InvalidResponse(e.to_string()),
            )
        })
    }
}

impl ContentAnalyzer for RemoteAnalyzer {
    fn analyze(&self, content: &str, content_type: ContentType) -> Result<AnalysisResult> {
        tracing::info!("Requesting remote analysis from {}", self.config.endpoint);
        let request = AnalyzeRequest {
            content,
            content_type,
        };
        let mut result = self.analyze_with_retries(&request)?;

        let received = result.recommendations.len();
        result.recommendations = normalize(result.recommendations, &result.scores, content_type);
        if received != result.recommendations.len() {
            tracing::debug!(
                "Normalized {} remote recommendation(s) to {}",
                received,
                result.recommendations.len()
            );
        }
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RemoteAnalyzerConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_requires_endpoint() {
        let result = RemoteAnalyzer::new(RemoteAnalyzerConfig::default());
        assert!(matches!(
            result,
            Err(AeoError::Analysis {
                source: AnalysisErrorKind::NotConfigured(_),
                ..
            })
        ));
    }

    #[test]
    fn test_request_wire_format() {
        let request = AnalyzeRequest {
            content: "hello",
            content_type: ContentType::Product,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["content"], "hello");
        assert_eq!(json["contentType"], "product");
    }

    #[test]
    fn test_response_accepts_string_recommendations() {
        let body = r#"{
            "scores": {"keywordRelevance": 70, "readability": 80, "snippetOptimization": 65, "structuredData": 50, "finalScore": 99},
            "recommendations": ["Add FAQ schema", "Shorten sentences"]
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.scores.final_score(), 67);
        assert_eq!(result.recommendations[0].title, "Add FAQ schema");
        let normalized = normalize(result.recommendations, &result.scores, ContentType::Blog);
        assert_eq!(normalized.len(), 3);
    }
}
