// src/api/handlers/analyzer.rs

use actix_web::{web, HttpResponse, Responder};
use log::debug;

use crate::analyzer;
use crate::api::types::{AnalysisResponse, AnalyzeRequest};

const EMPTY_PASSWORD: &str = "Password must not be empty";

fn respond(password: &str) -> HttpResponse {
    if password.is_empty() {
        return HttpResponse::BadRequest().json(AnalysisResponse::failure(EMPTY_PASSWORD));
    }

    let analysis = analyzer::analyze(password);
    debug!("Password analyzed: {} ({}/16)", analysis.strength, analysis.score);
    HttpResponse::Ok().json(AnalysisResponse::ok(analysis))
}

/// Analyze password strength
///
/// Scores the password in the request body and returns feedback.
#[utoipa::path(
    post,
    path = "/analyzer/password",
    tag = "Analyzer",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Password analysis result", body = AnalysisResponse),
        (status = 400, description = "Empty password", body = AnalysisResponse)
    )
)]
pub async fn analyze_password(req: web::Json<AnalyzeRequest>) -> impl Responder {
    respond(&req.password)
}

/// Analyze password strength from the path
///
/// The path segment is URL-decoded before scoring.
#[utoipa::path(
    get,
    path = "/analyzer/analysis/{pwd}",
    tag = "Analyzer",
    params(
        ("pwd" = String, Path, description = "Password to analyze")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = AnalysisResponse),
        (status = 400, description = "Empty password", body = AnalysisResponse)
    )
)]
pub async fn analyze_path(path: web::Path<String>) -> impl Responder {
    let password = path.into_inner();

    // URL decode the password if needed
    let decoded = match urlencoding::decode(&password) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => password,
    };

    respond(&decoded)
}
