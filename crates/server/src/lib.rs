//! Settlement Server
//!
//! Serves the HTML entry form and the JSON settlement endpoints
//! from a single actix-web application.
//!
//! ## Routes
//!
//! - `GET /` — Entry form for start/end blinds, names, and big blind size
//! - `POST /calculate` — Form-encoded settlement, as posted by the entry form
//! - `POST /api/settle` — JSON settlement for programmatic clients
//! - `GET /health` — Liveness check
pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use chip_core::DEFAULT_BIND_ADDR;
use chip_core::DEFAULT_WORKERS;
use chip_dto::ApiError;

/// Registers every route along with extractor configs that report
/// malformed payloads in the same JSON shape as settlement failures.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|e, _| rejection(e)))
        .app_data(web::JsonConfig::default().error_handler(|e, _| rejection(e)))
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health))
        .route("/calculate", web::post().to(handlers::calculate))
        .service(web::scope("/api").route("/settle", web::post().to(handlers::settle)));
}

fn rejection<E>(e: E) -> actix_web::Error
where
    E: std::fmt::Display,
{
    let message = e.to_string();
    log::warn!("rejected payload: {}", message);
    let response = HttpResponse::BadRequest().json(ApiError::from(message.clone()));
    actix_web::error::InternalError::from_response(message, response).into()
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let bind = chip_core::env("BIND_ADDR", String::from(DEFAULT_BIND_ADDR));
    let workers = chip_core::env("SERVER_WORKERS", DEFAULT_WORKERS);
    log::info!("starting settlement server on {} with {} workers", bind, workers);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .configure(routes)
    })
    .workers(workers)
    .bind(bind)?
    .run()
    .await
}
