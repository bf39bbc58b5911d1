use crate::errors::ApiError;
use crate::models::HealthResponse;
use actix_web::{web, HttpResponse};
use fraud_engine::{TransactionProcessor, TransactionRecord};
use std::sync::Arc;

// ===== Health Check =====
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "fraud-detection-engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ===== Analyze Single Transaction =====
pub async fn analyze(
    req: web::Json<TransactionRecord>,
    processor: web::Data<Arc<TransactionProcessor>>,
) -> Result<HttpResponse, ApiError> {
    let assessment = processor.process(req.into_inner())?;

    Ok(HttpResponse::Ok().json(assessment))
}

// ===== Analyze Batch =====
pub async fn analyze_batch(
    req: web::Json<Vec<TransactionRecord>>,
    processor: web::Data<Arc<TransactionProcessor>>,
) -> Result<HttpResponse, ApiError> {
    let records = req.into_inner();

    if records.is_empty() {
        return Err(ApiError::BadRequest("no transaction data provided".to_string()));
    }

    let report = processor.process_batch(records);

    Ok(HttpResponse::Ok().json(report))
}

// ===== Configure Routes =====
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fraud")
            .route("/analyze", web::post().to(analyze))
            .route("/analyze-batch", web::post().to(analyze_batch)),
    )
    .route("/health", web::get().to(health_check));
}
