use crate::{
    config::Config,
    constants::{CHAT_PATH, HEALTH_PATH, SUGGESTIONS_PATH},
    errors::{CvChatError, CvChatResult},
    logging::log_api_call,
    models::{ApiCallLog, ChatRequest, ChatResponse, HealthResponse, SuggestionsResponse},
};
use chrono::Utc;
use log::debug;
use reqwest::{Client, Response};
use std::time::Instant;

/// HTTP client for the CV chat backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    include_thinking: bool,
}

impl ApiClient {
    pub fn new(config: &Config) -> CvChatResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CvChatError::config_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            include_thinking: config.include_thinking,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the suggested questions.
    pub async fn fetch_suggestions(&self) -> CvChatResult<Vec<String>> {
        let started = Instant::now();
        let result = self.client.get(self.url(SUGGESTIONS_PATH)).send().await;
        record_call(SUGGESTIONS_PATH, "load suggestions", &result, started);

        let response = result
            .map_err(|e| CvChatError::suggestion_load(format!("Request failed: {}", e)))?;
        let response = ensure_success(response).map_err(CvChatError::suggestion_load)?;

        let body: SuggestionsResponse = response
            .json()
            .await
            .map_err(|e| CvChatError::suggestion_load(format!("Failed to parse response: {}", e)))?;

        if body.questions.is_empty() {
            return Err(CvChatError::suggestion_load("Backend returned no questions"));
        }

        debug!("Loaded {} suggestions", body.questions.len());
        Ok(body.questions)
    }

    /// Submits one question and returns the backend's answer.
    pub async fn ask(&self, question: &str) -> CvChatResult<ChatResponse> {
        let payload = ChatRequest {
            question,
            include_thinking: self.include_thinking,
        };

        let started = Instant::now();
        let result = self
            .client
            .post(self.url(CHAT_PATH))
            .json(&payload)
            .send()
            .await;
        let summary = format!("question ({} chars)", question.chars().count());
        record_call(CHAT_PATH, &summary, &result, started);

        let response =
            result.map_err(|e| CvChatError::chat_request(format!("Request failed: {}", e)))?;
        let response = ensure_success(response).map_err(CvChatError::chat_request)?;

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| CvChatError::chat_request(format!("Failed to parse response: {}", e)))
    }

    /// Probes `/health`. Returns the reported status string.
    pub async fn health(&self) -> CvChatResult<String> {
        let started = Instant::now();
        let result = self.client.get(self.url(HEALTH_PATH)).send().await;
        record_call(HEALTH_PATH, "health check", &result, started);

        let response = result.map_err(|e| CvChatError::chat_request(format!("Request failed: {}", e)))?;
        let response = ensure_success(response).map_err(CvChatError::chat_request)?;
        let body: HealthResponse = response
            .json()
            .await
            .map_err(|e| CvChatError::chat_request(format!("Failed to parse response: {}", e)))?;
        Ok(body.status)
    }
}

fn ensure_success(response: Response) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(format!("Backend returned error status: {}", status))
    }
}

fn record_call(
    endpoint: &str,
    summary: &str,
    result: &Result<Response, reqwest::Error>,
    started: Instant,
) {
    log_api_call(&ApiCallLog {
        timestamp: Utc::now(),
        endpoint: endpoint.to_string(),
        request_summary: summary.to_string(),
        response_status: result.as_ref().ok().map(|r| r.status().as_u16()),
        response_time_ms: started.elapsed().as_millis(),
    });
}
