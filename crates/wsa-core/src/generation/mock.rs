//! Scripted providers for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::TextProvider;
use crate::error::{WsaError, WsaResult};

enum Reply {
    Text(String),
    Echo,
    Fail,
}

/// Provider that replays a fixed outcome and records every prompt.
pub struct ScriptedProvider {
    name: String,
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    /// A provider that always answers with `reply`.
    pub fn answering(name: &str, reply: &str) -> Self {
        Self::build(name, Reply::Text(reply.to_string()))
    }

    /// A provider that always fails.
    pub fn failing(name: &str) -> Self {
        Self::build(name, Reply::Fail)
    }

    /// A provider that answers with the prompt it was given.
    pub fn echo(name: &str) -> Self {
        Self::build(name, Reply::Echo)
    }

    fn build(name: &str, reply: Reply) -> Self {
        Self {
            name: name.to_string(),
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for ScriptedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, prompt: &str) -> WsaResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Echo => Ok(prompt.to_string()),
            Reply::Fail => Err(WsaError::generation(format!("{} is unavailable", self.name))),
        }
    }
}
