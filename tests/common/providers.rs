//! Provider test utilities
//!
//! A [`CompletionProvider`] that answers from a script instead of a model,
//! recording what it was asked.

use apeer_rerank::{CompletionProvider, GatewayError, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Completion provider with a fixed reply
#[derive(Debug)]
pub struct ScriptedProvider {
    reply: std::result::Result<String, String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedProvider {
    /// Always answer with `reply`
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_result(Ok(reply.into()))
    }

    /// Always fail with a completion error carrying `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_result(Err(message.into()))
    }

    fn with_result(reply: std::result::Result<String, String>) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Sleep before answering
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of completed or attempted calls
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(model, prompt)` pairs in call order
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.reply.clone().map_err(GatewayError::completion)
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
