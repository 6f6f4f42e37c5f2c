use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::batch::BatchClassifier;
use super::link::{canonicalize_link, is_job_view_link};
use crate::workflows::intake::JobIntake;

/// Router builder exposing batch analysis and link canonicalization.
pub fn ghost_job_router(classifier: Arc<BatchClassifier>) -> Router {
    Router::new()
        .route("/api/v1/jobs/analyze", post(analyze_handler))
        .route("/api/v1/jobs/canonical-link", post(canonical_link_handler))
        .with_state(classifier)
}

pub(crate) async fn analyze_handler(
    State(classifier): State<Arc<BatchClassifier>>,
    body: Bytes,
) -> Response {
    match JobIntake::from_reader(body.as_ref()) {
        Ok(intake) => {
            let outcome = classifier.classify(intake.jobs);
            let payload = json!({
                "summary": outcome.summary,
                "jobs": outcome.jobs,
                "skipped": intake.skipped,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CanonicalLinkRequest {
    pub link: String,
}

#[derive(Debug, Serialize)]
pub struct CanonicalLinkResponse {
    pub link: String,
    pub canonical: String,
    pub valid: bool,
}

pub(crate) async fn canonical_link_handler(
    request: Result<axum::Json<CanonicalLinkRequest>, JsonRejection>,
) -> Response {
    match request {
        Ok(axum::Json(request)) => {
            let canonical = canonicalize_link(&request.link);
            let valid = is_job_view_link(&canonical);
            let view = CanonicalLinkResponse {
                link: request.link,
                canonical,
                valid,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(rejection) => {
            let payload = json!({
                "error": rejection.body_text(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
