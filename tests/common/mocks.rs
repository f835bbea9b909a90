use async_trait::async_trait;
use invoice_qa::{
    Error, Result,
    gemini::{GeminiClient, GenerateRequest},
};
use std::sync::{Arc, Mutex};

/// Mock Gemini client for testing. Records every request it receives so
/// tests can assert call counts and request contents.
#[derive(Debug)]
pub struct MockGeminiClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
    pub error: Option<String>,
}

impl MockGeminiClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<String>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    #[allow(dead_code)]
    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeminiClient for MockGeminiClient {
    async fn generate_content(&self, request: GenerateRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::inference("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockGeminiClient {
    fn default() -> Self {
        Self::new()
    }
}
