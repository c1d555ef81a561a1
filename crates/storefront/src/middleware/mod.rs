//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. CORS (when origins are configured)
//! 3. `TraceLayer` (`http_request` span per request)
//! 4. Request ID (recorded on the span, echoed in the response)
//! 5. Security headers

pub mod cors;
pub mod request_id;
pub mod security_headers;

pub use cors::cors_layer;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
