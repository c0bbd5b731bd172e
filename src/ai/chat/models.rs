//! The core models for managing a stateful chat with an LLM. These
//! are provider neutral; each gateway maps them onto its own wire
//! format.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Model,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    /// A copy of the transcript with `msg` appended, leaving `self`
    /// untouched until the exchange is known to have succeeded.
    pub fn with_pending(&self, msg: Message) -> Vec<Message> {
        let mut messages = self.0.clone();
        messages.push(msg);
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = Message::new(Role::Model, "hi");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "model");
        assert_eq!(value["content"], "hi");
    }

    #[test]
    fn test_with_pending_does_not_mutate() {
        let mut transcript = Transcript::new();
        transcript.push(Message::new(Role::System, "be nice"));
        let pending = transcript.with_pending(Message::new(Role::User, "hello"));

        assert_eq!(pending.len(), 2);
        assert_eq!(pending[1].role, Role::User);
        assert_eq!(transcript.messages().len(), 1);
    }
}
