//! The boundary between the chatbot and whichever hosted model
//! produces replies.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::ai::chat::Message;
use crate::core::{AppConfig, LlmProvider};
use crate::gemini::GeminiGateway;
use crate::openai::OpenAiGateway;

/// A conversational completion service. Implementations are stateless
/// per call: the full transcript is sent every time and the next
/// model turn is returned.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(&self, history: &[Message]) -> Result<String>;
}

pub type SharedGateway = Arc<dyn ModelGateway>;

pub fn gateway_from_config(config: &AppConfig) -> SharedGateway {
    match config.llm_provider {
        LlmProvider::Gemini => Arc::new(GeminiGateway::new(
            &config.llm_api_hostname,
            &config.llm_api_key,
            &config.llm_model,
        )),
        LlmProvider::OpenAi => Arc::new(OpenAiGateway::new(
            &config.llm_api_hostname,
            &config.llm_api_key,
            &config.llm_model,
        )),
    }
}
