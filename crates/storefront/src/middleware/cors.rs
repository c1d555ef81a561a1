//! CORS for the browser client.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::request_id::REQUEST_ID_HEADER;

/// Build a CORS layer allowing `origins`.
///
/// Returns `None` when no usable origin is configured, in which case the
/// API is same-origin only. Unparseable origins are logged and skipped.
#[must_use]
pub fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_origins_no_layer() {
        assert!(cors_layer(&[]).is_none());
    }

    #[test]
    fn test_invalid_origins_skipped() {
        assert!(cors_layer(&["bad\norigin".to_string()]).is_none());
        assert!(
            cors_layer(&[
                "bad\norigin".to_string(),
                "http://localhost:5173".to_string()
            ])
            .is_some()
        );
    }
}
