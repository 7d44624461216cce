use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

use crate::domain::fallback::FallbackOrchestrator;
use crate::domain::solve;
use crate::error::ApiError;
use crate::models::{ErrorBody, HealthResponse};

// ---------- Route handlers ----------

/// POST /optimize
pub async fn optimize(
    payload: web::Json<Value>,
    orchestrator: web::Data<FallbackOrchestrator>,
) -> Result<HttpResponse, ApiError> {
    let response = solve::optimize(&payload, orchestrator.get_ref()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Any method other than POST on the optimize paths.
pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /docs
pub async fn docs() -> impl Responder {
    let docs_html = include_str!("../static/docs.html");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(docs_html)
}

/// GET / - Redirect to docs
pub async fn root_redirect() -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/docs"))
        .finish()
}

// ---------- Wiring ----------

/// JSON extractor config: size limit, and malformed bodies answered with 400.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| {
            let err_string = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorBody { error: err_string }),
            )
            .into()
        })
}

/// Registers every route. Expects a `web::Data<FallbackOrchestrator>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect))
        .service(optimize_resource("/optimize"))
        .service(optimize_resource("/api/optimize"))
        .route("/health", web::get().to(health_check))
        .route("/docs", web::get().to(docs));
}

fn optimize_resource(path: &str) -> actix_web::Resource {
    web::resource(path)
        .route(web::post().to(optimize))
        .default_service(web::to(method_not_allowed))
}
