//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue, RETRY_AFTER};
use serde::Serialize;
use serde_json::json;
use url::Url;

use crate::adapters::analysis_prompt::render_analysis_prompt;
use crate::domain::{AnalysisApiConfig, AppError, IssueAnalysis};
use crate::ports::IssueAnalyzer;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// Environment variable holding the Gemini API key.
pub const AUTH_ENV_VAR: &str = "GEMINI_API_KEY";

/// HTTP transport for the Gemini `generateContent` endpoint.
///
/// This client performs a single request per call. Retry behavior is
/// implemented by a dedicated retry wrapper adapter.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &AnalysisApiConfig) -> Result<Self, AppError> {
        let endpoint = build_endpoint(config)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::AnalysisApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, endpoint, client })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env_with_config(config: &AnalysisApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(AUTH_ENV_VAR)
            .map_err(|_| AppError::EnvironmentVariableMissing(AUTH_ENV_VAR.into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest) -> Result<IssueAnalysis, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::AnalysisApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let retry_after_ms = response.headers().get(RETRY_AFTER).and_then(parse_retry_after_ms);
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return parse_analysis(&body_text, status.as_u16());
        }

        let mut message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        if let Some(value) = retry_after_ms {
            message.push_str(&format!(" (retry_after_ms={})", value));
        }

        Err(AppError::AnalysisApi { message, status: Some(status.as_u16()) })
    }
}

impl IssueAnalyzer for HttpGeminiClient {
    fn analyze_issue(&self, issue_content: &str) -> Result<IssueAnalysis, AppError> {
        let prompt = render_analysis_prompt(issue_content)?;
        self.send_request(&ApiRequest::for_prompt(prompt))
    }
}

fn build_endpoint(config: &AnalysisApiConfig) -> Result<Url, AppError> {
    let mut endpoint = config.api_url.clone();
    endpoint
        .path_segments_mut()
        .map_err(|_| AppError::InvalidConfig("api_url cannot be a base".to_string()))?
        .pop_if_empty()
        .push("models")
        .push(&format!("{}:generateContent", config.model));
    Ok(endpoint)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<RequestContent>,
    generation_config: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl ApiRequest {
    /// Request the structured suggestion as JSON constrained by a response schema.
    fn for_prompt(prompt: String) -> Self {
        Self {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
            generation_config: json!({
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "summary": { "type": "STRING" },
                        "suggestedPrice": { "type": "INTEGER" },
                        "difficulty": {
                            "type": "STRING",
                            "enum": ["Easy", "Medium", "Hard", "Expert"]
                        },
                        "tags": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["title", "summary", "suggestedPrice", "difficulty", "tags"]
                }
            }),
        }
    }
}

fn parse_analysis(body: &str, status: u16) -> Result<IssueAnalysis, AppError> {
    let envelope: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AppError::AnalysisApi {
            message: format!("Failed to parse response: {}", e),
            status: Some(status),
        })?;

    let text = envelope
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|t| t.as_str())
        .ok_or_else(|| AppError::AnalysisApi {
            message: "No response text".to_string(),
            status: Some(status),
        })?;

    serde_json::from_str(text).map_err(|e| AppError::AnalysisApi {
        message: format!("Failed to parse suggestion: {}", e),
        status: Some(status),
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn parse_retry_after_ms(value: &HeaderValue) -> Option<u64> {
    let raw = value.to_str().ok()?.trim();
    let seconds = raw.parse::<u64>().ok()?;
    Some(seconds.saturating_mul(1000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    fn config_for(server: &mockito::Server) -> AnalysisApiConfig {
        AnalysisApiConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 1,
            max_retries: 3,
            retry_delay_ms: 1,
        }
    }

    fn suggestion_body(inner: &str) -> String {
        serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": inner } ] } }
            ]
        })
        .to_string()
    }

    #[test]
    fn endpoint_includes_model_and_action() {
        let config = AnalysisApiConfig::default();
        let endpoint = build_endpoint(&config).unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn analyze_issue_parses_structured_suggestion() {
        let mut server = mockito::Server::new();
        let inner = r#"{"title":"Fix login","summary":"Repair the auth flow.","suggestedPrice":300,"difficulty":"Medium","tags":["auth","bug"]}"#;
        let _m = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_header(X_GOOG_API_KEY, "fake-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(suggestion_body(inner))
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let analysis = client.analyze_issue("login broken").unwrap();
        assert_eq!(analysis.title, "Fix login");
        assert_eq!(analysis.suggested_price, 300);
        assert_eq!(analysis.difficulty, Difficulty::Medium);
    }

    #[test]
    fn missing_candidates_is_an_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_body(r#"{"candidates": []}"#)
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.analyze_issue("content").unwrap_err();
        match err {
            AppError::AnalysisApi { message, .. } => assert_eq!(message, "No response text"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_suggestion_is_an_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_body(suggestion_body("not json at all"))
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.analyze_issue("content").unwrap_err();
        match err {
            AppError::AnalysisApi { message, .. } => {
                assert!(message.starts_with("Failed to parse suggestion"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn server_error_carries_status_and_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(503)
            .with_body(r#"{"error": {"message": "Model overloaded"}}"#)
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.analyze_issue("content").unwrap_err();
        match err {
            AppError::AnalysisApi { message, status } => {
                assert_eq!(message, "Model overloaded");
                assert_eq!(status, Some(503));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rate_limit_appends_retry_after_hint() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(429)
            .with_header("retry-after", "2")
            .create();

        let client = HttpGeminiClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.analyze_issue("content").unwrap_err();
        match err {
            AppError::AnalysisApi { message, status } => {
                assert_eq!(message, "Rate limited (retry_after_ms=2000)");
                assert_eq!(status, Some(429));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_env_without_key_reports_missing_variable() {
        unsafe { std::env::remove_var(AUTH_ENV_VAR) };
        let err = HttpGeminiClient::from_env_with_config(&AnalysisApiConfig::default())
            .map(|_| ())
            .unwrap_err();
        match err {
            AppError::EnvironmentVariableMissing(name) => assert_eq!(name, AUTH_ENV_VAR),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
