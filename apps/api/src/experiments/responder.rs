//! Responder — the pluggable response source for the experiment pipeline.
//!
//! Carried in `AppState` as `Arc<dyn Responder>` and chosen once at startup:
//! `GeminiResponder` when a key is configured, `MockResponder` otherwise.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};

/// How much of the prompt is echoed back in the fallback marker.
const FALLBACK_PREVIEW_CHARS: usize = 200;

/// The deterministic marker substituted whenever no usable response exists:
/// responder errors, empty output, or the mock path.
pub fn fallback_reply(prompt: &str) -> String {
    let preview: String = prompt.chars().take(FALLBACK_PREVIEW_CHARS).collect();
    format!("Mocked reply for: \"{preview}\"")
}

/// A source of responses for variant prompts. Implementations may fail;
/// the pipeline recovers by substituting [`fallback_reply`].
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Local mock responder used when no API key is configured or the LLM is
/// disabled. Keeps replies short and readable for the history view.
pub struct MockResponder;

#[async_trait]
impl Responder for MockResponder {
    async fn respond(&self, prompt: &str) -> Result<String, LlmError> {
        Ok(fallback_reply(prompt))
    }
}

/// Responder backed by the Gemini client.
pub struct GeminiResponder {
    llm: LlmClient,
}

impl GeminiResponder {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Responder for GeminiResponder {
    async fn respond(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.llm.generate(prompt).await?;
        response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}
