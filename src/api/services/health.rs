use actix_web::{web, HttpResponse, Responder};
use tracing::trace;

use crate::api::models::HealthResponse;

/// Health Service
///
/// 纯存活探针：索引在服务启动前就已构建完成，进程能应答即视为健康，
/// 不需要再探测后端数据源。
pub struct HealthService;

impl HealthService {
    pub async fn healthz() -> impl Responder {
        trace!("Received health check request");

        HttpResponse::Ok().json(HealthResponse {
            status: "ok".to_string(),
        })
    }
}

pub fn health_routes() -> actix_web::Scope {
    web::scope("/healthz")
        .route("", web::get().to(HealthService::healthz))
        .route("", web::head().to(HealthService::healthz))
}
