//! Request pipeline: extract → parse → recommend.
//!
//! Stages run strictly in order. A failure at any stage ends the request;
//! the recommender only runs on a successfully parsed intent.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::intent::extractor::IntentExtractor;
use crate::intent::parser::{parse_intent_reply, ExtractedIntent};
use crate::models::assessment::RankedResult;
use crate::recommend::{Recommender, DEFAULT_TOP_N};

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationOutcome {
    /// The extractor's reply, unmodified.
    pub raw_intent: String,
    pub intent: ExtractedIntent,
    pub results: Vec<RankedResult>,
}

pub async fn run_pipeline(
    extractor: &dyn IntentExtractor,
    recommender: &Recommender,
    raw_text: &str,
) -> Result<RecommendationOutcome, AppError> {
    if raw_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a job description.".to_string(),
        ));
    }

    let raw_intent = extractor.extract(raw_text).await?;

    let intent = parse_intent_reply(&raw_intent).map_err(|e| {
        warn!("Could not parse extractor reply: {e}");
        debug!("Unparseable reply: {raw_intent:?}");
        AppError::IntentParse {
            source: e,
            raw_reply: raw_intent.clone(),
        }
    })?;
    info!(
        "Intent parsed: role={:?}, difficulty={:?}, max_minutes={:?}",
        intent.job_role,
        intent.preferred_difficulty,
        intent.max_duration_minutes()
    );

    let results = recommender.recommend(
        &intent.job_role,
        &intent.required_skills,
        &intent.preferred_difficulty,
        DEFAULT_TOP_N,
    );
    info!("Recommended {} assessments", results.len());

    Ok(RecommendationOutcome {
        raw_intent,
        intent,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::catalog::Catalog;
    use crate::intent::parser::IntentParseError;
    use crate::models::assessment::{AssessmentRecord, CatalogRow};

    struct StubExtractor {
        reply: Result<String, String>,
        calls: AtomicUsize,
    }

    impl StubExtractor {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl IntentExtractor for StubExtractor {
        async fn extract(&self, _raw_text: &str) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(AppError::ExtractionService)
        }
    }

    fn recommender() -> Recommender {
        let record = AssessmentRecord::from(CatalogRow {
            product_name: "Python SQL Test".to_string(),
            product_url: "https://example.test/python-sql".to_string(),
            job_roles: "Software Engineer".to_string(),
            skills_assessed: "Python, SQL".to_string(),
            difficulty: "Medium".to_string(),
            duration: "30".to_string(),
            test_type: "Knowledge".to_string(),
            remote_testing: "Yes".to_string(),
            irt_supported: "No".to_string(),
        });
        Recommender::new(Arc::new(Catalog::from_records(vec![record])))
    }

    #[tokio::test]
    async fn test_full_pipeline() {
        let reply = "job_role: Software Engineer\nrequired_skills: Python\npreferred_difficulty: medium\nmax_duration: 40";
        let extractor = StubExtractor::replying(reply);

        let outcome = run_pipeline(&extractor, &recommender(), "Hiring a Python engineer")
            .await
            .unwrap();

        assert_eq!(outcome.raw_intent, reply);
        assert_eq!(outcome.intent.job_role, "Software Engineer");
        assert_eq!(outcome.results.len(), 1);
        assert!(outcome.results[0].similarity > 0.0);
    }

    #[tokio::test]
    async fn test_short_reply_halts_before_recommending() {
        let extractor = StubExtractor::replying("job_role: Engineer\nrequired_skills: Python");

        let err = run_pipeline(&extractor, &recommender(), "Hiring")
            .await
            .unwrap_err();
        match err {
            AppError::IntentParse { source, raw_reply } => {
                assert_eq!(source, IntentParseError::TooFewLines { found: 2 });
                assert_eq!(raw_reply, "job_role: Engineer\nrequired_skills: Python");
            }
            other => panic!("Expected AppError::IntentParse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_query_skips_extractor() {
        let extractor = StubExtractor::replying("unused");

        let err = run_pipeline(&extractor, &recommender(), "  \n ")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_extractor_failure_propagates() {
        let extractor = StubExtractor {
            reply: Err("quota exceeded".to_string()),
            calls: AtomicUsize::new(0),
        };

        let err = run_pipeline(&extractor, &recommender(), "Hiring")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExtractionService(_)));
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 1);
    }
}
