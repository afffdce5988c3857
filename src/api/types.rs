// src/api/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::analyzer::PasswordAnalysis;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Candidate password to score
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength assessment (only present on success)
    pub analysis: Option<PasswordAnalysis>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn ok(analysis: PasswordAnalysis) -> Self {
        Self { success: true, analysis: Some(analysis), error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, analysis: None, error: Some(error.into()) }
    }
}

// Password generation; every field falls back to the server default
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    pub length: Option<usize>,
    pub include_uppercase: Option<bool>,
    pub include_lowercase: Option<bool>,
    pub include_numbers: Option<bool>,
    pub include_symbols: Option<bool>,
    pub exclude_similar: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (only present on success)
    pub password: Option<String>,
    /// Strength assessment of the generated password
    pub analysis: Option<PasswordAnalysis>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: i64,
}
