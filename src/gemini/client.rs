use super::types::*;
use crate::{Error, Result, config::GeminiConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait GeminiClient: Send + Sync {
    async fn generate_content(&self, request: GenerateRequest) -> Result<String>;
}

/// Client for the Gemini `generateContent` REST endpoint. Holds the
/// already-loaded credential; issues exactly one call per invocation with no
/// retry or caching.
pub struct HttpGeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpGeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GeminiClient for HttpGeminiClient {
    async fn generate_content(&self, request: GenerateRequest) -> Result<String> {
        let url = self.endpoint(&request.model);
        let body = request.to_body();

        debug!("Sending generateContent request to model {}", request.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::inference(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::inference(format!("{status}: {message}")));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::inference(e.to_string()))?;

        debug!(
            "Received generateContent response with {} candidates",
            parsed.candidates.len()
        );

        parsed
            .text()
            .ok_or_else(|| Error::inference("Response contained no text candidate"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> GeminiConfig {
        GeminiConfig {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: "test-api-key".to_string(),
            default_model: "gemini-2.5-pro".to_string(),
        }
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = HttpGeminiClient::new(create_test_config());

        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let mut config = create_test_config();
        config.base_url = "http://localhost:9090/".to_string();

        let client = HttpGeminiClient::new(config);
        assert_eq!(
            client.endpoint("gemini-2.5-pro"),
            "http://localhost:9090/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }
}
