use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use tracing::{debug, trace};

use crate::api::models::{
    ErrorResponse, FindCountryQuery, LocationResponse, SuggestQuery, SuggestResponse,
};
use crate::datastore::IpLocator;
use crate::utils::{is_valid_ipv4, is_valid_prefix};

/// suggest 不带 limit 参数时的默认条数
const DEFAULT_SUGGEST_LIMIT: i64 = 10;

/// Lookup Service
///
/// 请求语法校验在这里完成，Locator 拿到的 ip/prefix 都是已经
/// 通过校验的原始字符串。
pub struct LookupService;

impl LookupService {
    /// GET /v1/find-country?ip=<IPv4>
    pub async fn find_country(
        query: web::Query<FindCountryQuery>,
        locator: web::Data<Arc<dyn IpLocator>>,
    ) -> impl Responder {
        let ip = query.ip.as_str();

        if !is_valid_ipv4(ip) {
            trace!("Rejected find-country request with invalid IP: {:?}", ip);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid IP".to_string(),
            });
        }

        match locator.lookup(ip) {
            Some(location) => HttpResponse::Ok().json(LocationResponse {
                country: location.country,
                city: location.city,
            }),
            None => {
                debug!("No location entry for {}", ip);
                HttpResponse::NotFound().json(ErrorResponse {
                    error: "not found".to_string(),
                })
            }
        }
    }

    /// GET /v1/suggest?prefix=<[0-9.]{1,15}>&limit=<1..50>
    pub async fn suggest(
        query: web::Query<SuggestQuery>,
        locator: web::Data<Arc<dyn IpLocator>>,
    ) -> impl Responder {
        if !is_valid_prefix(&query.prefix) {
            trace!(
                "Rejected suggest request with invalid prefix: {:?}",
                query.prefix
            );
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid prefix".to_string(),
            });
        }

        // 越界的 limit 交给 Locator 钳制，不作为请求错误
        let limit = query.limit.unwrap_or(DEFAULT_SUGGEST_LIMIT);
        let suggestions = locator.suggest(&query.prefix, limit);

        HttpResponse::Ok().json(SuggestResponse { suggestions })
    }
}

pub fn lookup_routes() -> actix_web::Scope {
    web::scope("/v1")
        .route("/find-country", web::get().to(LookupService::find_country))
        .route("/suggest", web::get().to(LookupService::suggest))
}
