// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use chrono::{DateTime, Utc};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::Config;

pub mod handlers;
pub mod routes;
pub mod types;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config, started_at: Utc::now() }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::analyzer::analyze_password,
        crate::api::handlers::analyzer::analyze_path,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::AnalyzeRequest,
            crate::api::types::AnalysisResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::HealthResponse,
            crate::analyzer::PasswordAnalysis,
            crate::analyzer::Requirements,
            crate::analyzer::Strength
        )
    ),
    tags(
        (name = "Analyzer", description = "Password strength analysis"),
        (name = "Generator", description = "Password generation"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "pwcheck API",
        version = "0.1.0",
        description = "Rule-based password strength analysis",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Mount state, docs and routes; shared by the server and integration tests.
pub fn configure_app(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(state)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes);
    }
}

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let bind = config.bind_address();
    log::info!("Starting pwcheck API server on {}:{}", bind.0, bind.1);

    let state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .configure(configure_app(state.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
