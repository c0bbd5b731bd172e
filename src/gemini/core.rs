//! Google Gemini `generateContent` client.
//!
//! Gemini has no system role for chat turns, so the system prompt is
//! sent as an ordinary user turn at the start of the conversation.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ai::chat::{Message, Role};
use crate::ai::gateway::ModelGateway;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl From<&Message> for Content {
    fn from(msg: &Message) -> Self {
        let role = match msg.role {
            Role::System | Role::User => "user",
            Role::Model => "model",
        };
        Self {
            role: role.to_string(),
            parts: vec![Part {
                text: msg.content.clone(),
            }],
        }
    }
}

#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate with all of its parts joined
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>(),
        )
    }
}

pub struct GeminiGateway {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
}

impl GeminiGateway {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_hostname.trim_end_matches('/'),
            self.model
        );
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn complete(&self, history: &[Message]) -> Result<String> {
        let request = GenerateContentRequest {
            contents: history.iter().map(Content::from).collect(),
        };
        let response = self.generate_content(&request).await?;

        response.text().ok_or_else(|| {
            let reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            anyhow!("No content received from Gemini: {}", reason)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    const PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    #[tokio::test]
    async fn test_complete_maps_roles() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::Json(json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "You are a bot" }] },
                    { "role": "model", "parts": [{ "text": "Understood" }] },
                    { "role": "user", "parts": [{ "text": "Hi" }] }
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [{
                        "content": {
                            "role": "model",
                            "parts": [{ "text": "Woof! " }, { "text": "How can I help?" }]
                        },
                        "finishReason": "STOP"
                    }]
                }"#,
            )
            .create_async()
            .await;

        let gateway = GeminiGateway::new(&server.url(), "test-key", "gemini-1.5-flash");
        let history = vec![
            Message::new(Role::System, "You are a bot"),
            Message::new(Role::Model, "Understood"),
            Message::new(Role::User, "Hi"),
        ];
        let reply = gateway.complete(&history).await.unwrap();

        assert_eq!(reply, "Woof! How can I help?");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_blocked_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#)
            .create_async()
            .await;

        let gateway = GeminiGateway::new(&server.url(), "test-key", "gemini-1.5-flash");
        let err = gateway
            .complete(&[Message::new(Role::User, "Hi")])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("SAFETY"));
    }

    #[tokio::test]
    async fn test_complete_auth_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(403)
            .with_body(r#"{"error": {"message": "API key not valid"}}"#)
            .create_async()
            .await;

        let gateway = GeminiGateway::new(&server.url(), "bad-key", "gemini-1.5-flash");
        assert!(gateway.complete(&[Message::new(Role::User, "Hi")]).await.is_err());
    }
}
