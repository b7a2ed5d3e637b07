use crate::core::prompt::build_prompt;
use crate::domain::model::{Consultation, DossierContent, DossierSource};
use crate::domain::ports::{ConfigProvider, Stylist};
use crate::utils::error::ServiceError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

const MAX_LOGGED_BODY: usize = 500;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined.
    fn into_text(self) -> Result<String, ServiceError> {
        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if !text.trim().is_empty() {
            return Ok(text);
        }

        match self.prompt_feedback.and_then(|feedback| feedback.block_reason) {
            Some(reason) => Err(ServiceError::Blocked { reason }),
            None => Err(ServiceError::EmptyResponse),
        }
    }
}

/// Stylist backed by the Gemini `generateContent` endpoint.
pub struct GeminiStylist<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> GeminiStylist<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.service_endpoint().trim_end_matches('/'),
            self.config.model()
        )
    }

    /// Send one prompt and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let api_key = self
            .config
            .api_key()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ServiceError::MissingCredentials)?;

        let url = self.generate_url();
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!("Sending prompt ({} chars) to: {}", prompt.len(), url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Style service response status: {}", status);

        match status {
            StatusCode::TOO_MANY_REQUESTS => return Err(ServiceError::QuotaExceeded),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ServiceError::CredentialsRejected)
            }
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(ServiceError::UnexpectedStatus {
                    status: s.as_u16(),
                    body: body.chars().take(MAX_LOGGED_BODY).collect(),
                });
            }
            _ => {}
        }

        let payload: GenerateContentResponse = response.json().await?;
        payload.into_text()
    }
}

#[async_trait]
impl<C: ConfigProvider> Stylist for GeminiStylist<C> {
    fn source(&self) -> DossierSource {
        DossierSource::Remote
    }

    async fn style(&self, consultation: &Consultation) -> Result<DossierContent, ServiceError> {
        let prompt = build_prompt(consultation);
        let text = self.generate(&prompt).await?;
        tracing::info!("Received {} chars from {}", text.len(), self.config.model());
        Ok(DossierContent::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{StyleRequest, TimeOfDay};
    use httpmock::prelude::*;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    struct MockConfig {
        endpoint: String,
        api_key: Option<String>,
    }

    impl MockConfig {
        fn new(endpoint: String) -> Self {
            Self {
                endpoint,
                api_key: Some("test-key".to_string()),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn service_endpoint(&self) -> &str {
            &self.endpoint
        }

        fn model(&self) -> &str {
            DEFAULT_MODEL
        }

        fn api_key(&self) -> Option<&str> {
            self.api_key.as_deref()
        }

        fn timeout_seconds(&self) -> u64 {
            5
        }
    }

    fn consultation() -> Consultation {
        Consultation::new(StyleRequest::new(
            "Trench Coat",
            "Travel",
            "Minimalist",
            TimeOfDay::Day,
        ))
    }

    #[tokio::test]
    async fn test_style_returns_generated_text() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .header("x-goog-api-key", "test-key")
                .body_contains("HERO: Trench Coat");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [{
                        "content": {
                            "role": "model",
                            "parts": [{"text": "THE LOOK: "}, {"text": "Runway Transit"}]
                        },
                        "finishReason": "STOP"
                    }]
                }));
        });

        let stylist = GeminiStylist::new(MockConfig::new(server.url("")));
        let content = stylist.style(&consultation()).await.unwrap();

        api_mock.assert();
        assert_eq!(stylist.source(), DossierSource::Remote);
        assert_eq!(
            content,
            DossierContent::Text("THE LOOK: Runway Transit".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_makes_no_request() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200);
        });

        let mut config = MockConfig::new(server.url(""));
        config.api_key = Some("   ".to_string());
        let stylist = GeminiStylist::new(config);

        let result = stylist.style(&consultation()).await;

        assert!(matches!(result, Err(ServiceError::MissingCredentials)));
        api_mock.assert_hits(0);
    }

    #[tokio::test]
    async fn test_quota_exceeded() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(429);
        });

        let stylist = GeminiStylist::new(MockConfig::new(server.url("")));
        let result = stylist.generate("prompt").await;

        api_mock.assert();
        assert!(matches!(result, Err(ServiceError::QuotaExceeded)));
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(403);
        });

        let stylist = GeminiStylist::new(MockConfig::new(server.url("")));
        let result = stylist.generate("prompt").await;

        assert!(matches!(result, Err(ServiceError::CredentialsRejected)));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(500).body("backend exploded");
        });

        let stylist = GeminiStylist::new(MockConfig::new(server.url("")));

        match stylist.generate("prompt").await {
            Err(ServiceError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "backend exploded");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blocked_prompt() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "promptFeedback": {"blockReason": "SAFETY"}
                }));
        });

        let stylist = GeminiStylist::new(MockConfig::new(server.url("")));

        match stylist.generate("prompt").await {
            Err(ServiceError::Blocked { reason }) => assert_eq!(reason, "SAFETY"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"candidates": []}));
        });

        let stylist = GeminiStylist::new(MockConfig::new(server.url("")));
        let result = stylist.generate("prompt").await;

        assert!(matches!(result, Err(ServiceError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_network_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).body("not json");
        });

        let stylist = GeminiStylist::new(MockConfig::new(server.url("")));
        let result = stylist.generate("prompt").await;

        assert!(matches!(result, Err(ServiceError::Network(_))));
    }

    #[test]
    fn test_generate_url_trims_trailing_slash() {
        let stylist = GeminiStylist::new(MockConfig::new("https://example.com/".to_string()));
        assert_eq!(
            stylist.generate_url(),
            "https://example.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
