use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::ghost_jobs::batch::BatchClassifier;
use crate::workflows::ghost_jobs::router::ghost_job_router;

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

#[tokio::test]
async fn analyze_route_scores_posted_jobs() {
    let router = ghost_job_router(Arc::new(BatchClassifier::default()));
    let payload = json!([clean_job(), stale_reposted_job(), "not a job"]);

    let response = router
        .oneshot(post_json(
            "/api/v1/jobs/analyze",
            serde_json::to_vec(&payload).expect("encode payload"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["summary"]["total"], json!(2));
    assert_eq!(body["summary"]["flagged"], json!(1));
    assert_eq!(body["skipped"], json!([2]));

    let jobs = body["jobs"].as_array().expect("jobs array");
    assert_eq!(jobs[1]["categories"], json!(["ghost_job"]));
    assert_eq!(jobs[1]["analysis"]["is_ghost"], Value::Bool(true));
    assert_eq!(
        jobs[1]["analysis"]["indicators"][0],
        json!("old posting + reposted")
    );
}

#[tokio::test]
async fn analyze_route_accepts_wrapped_documents() {
    let router = ghost_job_router(Arc::new(BatchClassifier::default()));
    let payload = json!({ "jobs": [{ "title": "Cloud Engineer", "applicants": 40 }] });

    let response = router
        .oneshot(post_json(
            "/api/v1/jobs/analyze",
            serde_json::to_vec(&payload).expect("encode payload"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["jobs"][0]["job"]["applicants"], json!("40"));
}

#[tokio::test]
async fn analyze_route_rejects_invalid_json() {
    let router = ghost_job_router(Arc::new(BatchClassifier::default()));

    let response = router
        .oneshot(post_json("/api/v1/jobs/analyze", "{not json"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body.get("error").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn canonical_link_route_normalizes_ids() {
    let router = ghost_job_router(Arc::new(BatchClassifier::default()));

    let response = router
        .oneshot(post_json(
            "/api/v1/jobs/canonical-link",
            r#"{"link": "https://www.linkedin.com/jobs/search/?currentJobId=1234567"}"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["canonical"],
        json!("https://www.linkedin.com/jobs/view/1234567/")
    );
    assert_eq!(body["valid"], json!(true));
}

#[tokio::test]
async fn canonical_link_route_reports_bad_payloads() {
    let router = ghost_job_router(Arc::new(BatchClassifier::default()));

    let response = router
        .oneshot(post_json("/api/v1/jobs/canonical-link", r#"{"url": 5}"#))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body.get("error").is_some());
}
