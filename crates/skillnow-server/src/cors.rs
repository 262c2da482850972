//! CORS layer for the separately hosted frontend.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use skillnow_config::{ConfigError, CorsConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the layer from config: listed origins only, the four CRUD verbs plus
/// preflight, and the `Content-Type`/`Authorization` headers.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if an origin is not a valid header value.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                field: "cors.allowed_origins".into(),
                reason: format!("'{origin}': {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(config.allow_credentials)
        .max_age(Duration::from_secs(config.max_age_secs)))
}
