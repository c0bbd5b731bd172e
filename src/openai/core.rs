use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::ai::chat::{Message, Role};
use crate::ai::gateway::ModelGateway;

/// Client for any OpenAI compatible chat completions API
pub struct OpenAiGateway {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
}

impl OpenAiGateway {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Model => "assistant",
    }
}

async fn completion(
    client: &reqwest::Client,
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value> {
    let messages: Vec<Value> = messages
        .iter()
        .map(|m| json!({ "role": role_name(m.role), "content": m.content }))
        .collect();
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response)
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    async fn complete(&self, history: &[Message]) -> Result<String> {
        let resp = completion(
            &self.client,
            history,
            &self.api_hostname,
            &self.api_key,
            &self.model,
        )
        .await?;

        resp["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("No message received. Resp:\n\n {}", resp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_complete_basic_response() {
        let mut server = mockito::Server::new_async().await;

        let response_body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1694268190,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "Hello! How can I help you today?"
                },
                "finish_reason": "stop"
            }]
        }"#;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4",
                "messages": [
                    { "role": "system", "content": "Be nice" },
                    { "role": "user", "content": "Hi" },
                    { "role": "assistant", "content": "Hello" },
                    { "role": "user", "content": "Bye" }
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create_async()
            .await;

        let url = server.url();
        let gateway = OpenAiGateway::new(&url, "test-key", "gpt-4");
        let history = vec![
            Message::new(Role::System, "Be nice"),
            Message::new(Role::User, "Hi"),
            Message::new(Role::Model, "Hello"),
            Message::new(Role::User, "Bye"),
        ];

        let reply = gateway.complete(&history).await.unwrap();

        assert_eq!(reply, "Hello! How can I help you today?");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body(r#"{"error": {"message": "Rate limit reached"}}"#)
            .create_async()
            .await;

        let gateway = OpenAiGateway::new(&server.url(), "test-key", "gpt-4");
        let result = gateway.complete(&[Message::new(Role::User, "Hi")]).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_complete_missing_content() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#)
            .create_async()
            .await;

        let gateway = OpenAiGateway::new(&server.url(), "test-key", "gpt-4");
        let err = gateway
            .complete(&[Message::new(Role::User, "Hi")])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("No message received"));
    }
}
