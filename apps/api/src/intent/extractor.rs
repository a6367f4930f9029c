//! Intent Extractor — pluggable, trait-based bridge to the language service.
//!
//! Default: `LlmIntentExtractor` (Gemini via `llm_client`).
//! `AppState` holds an `Arc<dyn IntentExtractor>` so handlers and tests can
//! swap the backend without touching the pipeline.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::intent::prompts::build_intent_prompt;
use crate::llm_client::LlmClient;

/// Returns the service's raw reply for a user query. Reply shape is NOT
/// validated here; that is `intent::parser`'s job.
#[async_trait]
pub trait IntentExtractor: Send + Sync {
    async fn extract(&self, raw_text: &str) -> Result<String, AppError>;
}

/// Sends the fixed extraction prompt to the LLM. One call, no retries.
pub struct LlmIntentExtractor(pub LlmClient);

#[async_trait]
impl IntentExtractor for LlmIntentExtractor {
    async fn extract(&self, raw_text: &str) -> Result<String, AppError> {
        let prompt = build_intent_prompt(raw_text);
        let reply = self
            .0
            .generate_text(&prompt)
            .await
            .map_err(|e| AppError::ExtractionService(format!("Intent extraction failed: {e}")))?;

        info!("Intent extracted ({} chars)", reply.len());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

    #[tokio::test]
    async fn test_extract_returns_reply_unmodified() {
        let mock_server = MockServer::start().await;
        let reply = "job_role: Data Analyst\nrequired_skills: Excel\npreferred_difficulty: Low\nmax_duration: unknown\n";

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_string_contains("Looking for a junior data analyst"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": reply}]}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let extractor =
            LlmIntentExtractor(LlmClient::new("test-key".to_string(), mock_server.uri()));
        let extracted = extractor
            .extract("Looking for a junior data analyst")
            .await
            .unwrap();
        assert_eq!(extracted, reply);
    }

    #[tokio::test]
    async fn test_service_failure_is_extraction_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
            })))
            .mount(&mock_server)
            .await;

        let extractor =
            LlmIntentExtractor(LlmClient::new("test-key".to_string(), mock_server.uri()));
        match extractor.extract("anything").await {
            Err(AppError::ExtractionService(msg)) => {
                assert!(msg.contains("429"));
                assert!(msg.contains("Resource has been exhausted"));
            }
            other => panic!("Expected AppError::ExtractionService, got {other:?}"),
        }
    }
}
