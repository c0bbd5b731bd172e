//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use async_trait::async_trait;
use axum::{Router, body::Body};

use bizbot::ai::chat::{Message, Role};
use bizbot::ai::gateway::ModelGateway;
use bizbot::api::AppState;
use bizbot::api::app;
use bizbot::core::{AppConfig, BusinessCatalog};

/// Stands in for the hosted model. Replies with a numbered message
/// and records every transcript it receives.
#[derive(Default)]
pub struct FakeGateway {
    calls: Mutex<Vec<Vec<Message>>>,
}

impl FakeGateway {
    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Calls that carried only the system prompt
    pub fn priming_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|history| history.len() == 1 && history[0].role == Role::System)
            .count()
    }
}

#[async_trait]
impl ModelGateway for FakeGateway {
    async fn complete(&self, history: &[Message]) -> Result<String> {
        let n = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(history.to_vec());
            calls.len()
        };
        // Lets tests simulate an upstream outage
        if history
            .last()
            .is_some_and(|m| m.content.contains("trigger-upstream-failure"))
        {
            bail!("upstream returned 503 with internal detail xyz");
        }
        Ok(format!("Woof! Reply number {}", n))
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "BIZBOT_LLM_API_KEY" => Some("test-api-key".to_string()),
        "BIZBOT_STATIC_PATH" => Some(env!("CARGO_MANIFEST_DIR").to_string() + "/tests/static"),
        _ => None,
    })
    .expect("Failed to build test config")
}

/// Creates a test application router backed by a `FakeGateway`
/// which is returned so tests can inspect the calls it received.
pub fn test_app() -> (Router, Arc<FakeGateway>) {
    let gateway = Arc::new(FakeGateway::default());
    let app_state = AppState::new(test_config(), BusinessCatalog::default(), gateway.clone())
        .expect("Failed to build app state");
    (app(Arc::new(app_state)), gateway)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body is not JSON")
}
