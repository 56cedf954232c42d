//! Experiment pipeline — expand, respond, score, assemble.

use tracing::warn;

use crate::errors::AppError;
use crate::experiments::expand::expand_variants;
use crate::experiments::responder::{fallback_reply, Responder};
use crate::experiments::scoring::score_response;
use crate::models::experiment::{PromptVariant, VariableSet};

/// Runs one experiment: expands the base prompt, then for each variant
/// prompt in emission order obtains a response and scores it.
///
/// Responder calls are strictly sequential — one completes before the next
/// begins — and variant ids ("v1", "v2", ...) match the expander's emission
/// order. History consumers rely on that ordering.
///
/// Responder failures never propagate: any error or empty output is
/// replaced by the fallback marker and scored like any other response. The
/// only error this returns is validation of the base prompt.
pub async fn run_experiment(
    base_prompt: &str,
    variables: &VariableSet,
    responder: &dyn Responder,
) -> Result<Vec<PromptVariant>, AppError> {
    if base_prompt.trim().is_empty() {
        return Err(AppError::Validation("base_prompt is required".to_string()));
    }

    let prompts = expand_variants(base_prompt, variables);
    let mut variants = Vec::with_capacity(prompts.len());

    for (index, prompt) in prompts.into_iter().enumerate() {
        let id = format!("v{}", index + 1);

        let response = match responder.respond(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("responder returned empty output for {id}, using fallback");
                fallback_reply(&prompt)
            }
            Err(e) => {
                warn!("responder failed for {id}, using fallback: {e}");
                fallback_reply(&prompt)
            }
        };

        let metrics = score_response(&response);

        variants.push(PromptVariant {
            id,
            prompt,
            response,
            metrics,
        });
    }

    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiments::responder::MockResponder;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct EchoResponder {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Responder for EchoResponder {
        async fn respond(&self, prompt: &str) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(prompt.to_string());
            Ok(format!("echo: {prompt}"))
        }
    }

    struct FailingResponder;

    #[async_trait]
    impl Responder for FailingResponder {
        async fn respond(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    struct BlankResponder;

    #[async_trait]
    impl Responder for BlankResponder {
        async fn respond(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok("   ".to_string())
        }
    }

    fn tone_variables() -> VariableSet {
        let mut vars = VariableSet::new();
        vars.insert(
            "tone".to_string(),
            vec!["formal".to_string(), "casual".to_string()],
        );
        vars
    }

    #[tokio::test]
    async fn test_empty_base_prompt_rejected() {
        let result = run_experiment("  ", &VariableSet::new(), &MockResponder).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_ids_and_prompts_follow_expansion_order() {
        let responder = EchoResponder {
            seen: Mutex::new(Vec::new()),
        };
        let variants = run_experiment("Improve my essay", &tone_variables(), &responder)
            .await
            .unwrap();

        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].id, "v1");
        assert_eq!(variants[1].id, "v2");
        assert_eq!(variants[0].prompt, "tone: formal. Improve my essay");
        assert_eq!(variants[1].prompt, "tone: casual. Improve my essay");

        // The responder saw the prompts in emission order.
        let seen = responder.seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                "tone: formal. Improve my essay".to_string(),
                "tone: casual. Improve my essay".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_metrics_computed_from_responses() {
        let responder = EchoResponder {
            seen: Mutex::new(Vec::new()),
        };
        let variants = run_experiment("Base", &VariableSet::new(), &responder)
            .await
            .unwrap();

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].response, "echo: Base");
        assert_eq!(variants[0].metrics.word_count, 2);
    }

    #[tokio::test]
    async fn test_responder_failure_falls_back_and_is_scored() {
        let variants = run_experiment("Base", &tone_variables(), &FailingResponder)
            .await
            .unwrap();

        assert_eq!(variants.len(), 2);
        assert_eq!(
            variants[0].response,
            "Mocked reply for: \"tone: formal. Base\""
        );
        // Fallback responses are scored like any other text.
        assert_eq!(variants[0].metrics.word_count, 6);
    }

    #[tokio::test]
    async fn test_blank_response_treated_as_failure() {
        let variants = run_experiment("Base", &VariableSet::new(), &BlankResponder)
            .await
            .unwrap();

        assert_eq!(variants[0].response, "Mocked reply for: \"Base\"");
    }
}
