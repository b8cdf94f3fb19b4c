//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_cors::Cors;
use actix_web::{middleware::Compress, web, App, HttpServer};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::services::{health_routes, lookup_routes};
use crate::config::Settings;
use crate::datastore::{build_locator, IpLocator};

/// Build CORS middleware from the computed origin list
///
/// Only GET is ever served, credentials are never allowed. An empty
/// origin list falls back to the browser's same-origin policy.
fn build_cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

/// Run the HTTP server
///
/// The locator is fully built before the listener is bound: requests
/// can only ever observe a complete, immutable index.
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(settings: Settings) -> Result<()> {
    let locator: Arc<dyn IpLocator> =
        build_locator(&settings.datastore_provider, &settings.data_file_path).map_err(|e| {
            tracing::error!("Server startup failed: {}", e);
            anyhow::Error::new(e)
        })?;

    let allowed_origins = settings.computed_allowed_origins();
    if allowed_origins.is_empty() {
        warn!(
            "CORS allowed_origins is empty. No cross-origin requests will be allowed. \
            Set ALLOWED_ORIGINS, FRONTEND_BASE_URL or DEV_INCLUDE_LOCALHOST."
        );
    }
    info!("CORS allow_origins={:?}", allowed_origins);
    info!("Data file path: {}", settings.data_file_path);

    let bind_addr = (settings.server_host.clone(), settings.server_port);
    info!(
        "Starting server at http://{}:{}/",
        settings.server_host, settings.server_port
    );

    let locator_data = web::Data::new(locator);

    HttpServer::new(move || {
        let cors = build_cors_middleware(&allowed_origins);

        App::new()
            .wrap(Compress::default())
            .wrap(cors)
            .app_data(locator_data.clone())
            .service(health_routes())
            .service(lookup_routes())
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
