// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::warn;

use crate::api::types::{PasswordGenerationRequest, PasswordGenerationResponse};
use crate::api::AppState;
use crate::generators::{GeneratorOptions, PasswordGenerator};

/// Generate a secure password
///
/// Generates a password from the provided options and returns it with its analysis.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let defaults = GeneratorOptions::default();
    let options = GeneratorOptions {
        length: generation_req.length.unwrap_or(state.config.default_password_length),
        include_uppercase: generation_req.include_uppercase.unwrap_or(defaults.include_uppercase),
        include_lowercase: generation_req.include_lowercase.unwrap_or(defaults.include_lowercase),
        include_numbers: generation_req.include_numbers.unwrap_or(defaults.include_numbers),
        include_symbols: generation_req.include_symbols.unwrap_or(defaults.include_symbols),
        exclude_similar: generation_req.exclude_similar.unwrap_or(defaults.exclude_similar),
    };

    match PasswordGenerator::new().generate_and_analyze(&options) {
        Ok(generated) => HttpResponse::Ok().json(PasswordGenerationResponse {
            success: true,
            password: Some(generated.password),
            analysis: Some(generated.analysis),
            error: None,
        }),
        Err(e) => {
            warn!("Rejected generator options: {}", e);
            HttpResponse::BadRequest().json(PasswordGenerationResponse {
                success: false,
                password: None,
                analysis: None,
                error: Some(e.to_string()),
            })
        }
    }
}
