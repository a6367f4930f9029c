use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::assessment::AssessmentRecord;
use crate::pipeline::{run_pipeline, RecommendationOutcome};
use crate::render::{render_error, render_form, render_outcome};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecommendationRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub records: Vec<AssessmentRecord>,
}

/// GET /
pub async fn handle_form() -> Html<String> {
    Html(render_form(""))
}

/// POST /
/// Errors render as a message on the same page, never alongside results.
/// A reply that failed to parse stays visible above the message.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(req): Form<RecommendationRequest>,
) -> Response {
    match run_pipeline(state.extractor.as_ref(), &state.recommender, &req.query).await {
        Ok(outcome) => Html(render_outcome(&req.query, &outcome)).into_response(),
        Err(err) => {
            err.log();
            let (status, _) = err.status_and_code();
            let html = render_error(&req.query, err.raw_reply(), &err.user_message());
            (status, Html(html)).into_response()
        }
    }
}

/// POST /api/v1/recommendations
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendationRequest>,
) -> Result<Json<RecommendationOutcome>, AppError> {
    let outcome = run_pipeline(state.extractor.as_ref(), &state.recommender, &req.query).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/catalog
pub async fn handle_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        count: state.catalog.len(),
        records: state.catalog.records().to_vec(),
    })
}
