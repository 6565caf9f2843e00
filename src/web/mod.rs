// src/web/mod.rs
//! Form-based front end over the drafting and analysis core, plus a small
//! JSON API carrying the same operations.

pub mod page;

use axum::{
    extract::Form,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crate::analysis::{self, Analysis};
use crate::drafting;
use crate::extractors::Findings;
use crate::utils::error::ServeError;
use page::PageContext;

#[derive(Debug, Deserialize)]
pub struct DraftForm {
    pub doc_type: String,
    pub details: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub document: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub report: String,
    pub word_count: usize,
    pub findings: Findings,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/draft", post(draft_handler))
        .route("/analyze", post(analyze_handler))
        .route("/api/draft", post(api_draft_handler))
        .route("/api/analyze", post(api_analyze_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(addr: SocketAddr) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!("Starting HTTP server on http://{}", addr);

    axum::serve(listener, router())
        .await
        .map_err(ServeError::Server)
}

fn current_year() -> i32 {
    Local::now().year()
}

pub async fn home_handler() -> Html<String> {
    Html(page::render(&PageContext { current_year: current_year(), ..Default::default() }))
}

pub async fn draft_handler(Form(form): Form<DraftForm>) -> Html<String> {
    let document = drafting::generate(&form.doc_type, &form.details);
    Html(page::render(&PageContext {
        draft_result: Some(document.as_str()),
        current_year: current_year(),
        ..Default::default()
    }))
}

pub async fn analyze_handler(Form(form): Form<AnalyzeForm>) -> Html<String> {
    let report = analysis::analyze(&form.text);
    Html(page::render(&PageContext {
        analysis_result: Some(report.as_str()),
        current_year: current_year(),
        ..Default::default()
    }))
}

pub async fn api_draft_handler(Json(form): Json<DraftForm>) -> Json<DraftResponse> {
    Json(DraftResponse { document: drafting::generate(&form.doc_type, &form.details) })
}

pub async fn api_analyze_handler(Json(form): Json<AnalyzeForm>) -> Json<AnalyzeResponse> {
    let result = Analysis::of(&form.text);
    let report = analysis::report::render(&result, Local::now().naive_local());
    Json(AnalyzeResponse {
        report,
        word_count: result.word_count,
        findings: result.findings,
    })
}

pub async fn health_handler() -> impl IntoResponse {
    "ok"
}
