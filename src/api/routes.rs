// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Strength analysis
    cfg.service(
        web::scope("/analyzer")
            .route("/password", web::post().to(handlers::analyzer::analyze_password))
            .route("/analysis/{pwd}", web::get().to(handlers::analyzer::analyze_path))
    );

    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
    );

    cfg.service(
        web::scope("/system")
            .route("/health", web::get().to(handlers::system::health))
    );
}
