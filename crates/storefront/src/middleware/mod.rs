//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame and referrer policy)
//! 5. Placeholder gate (swap pages covered by an active placeholder)

pub mod placeholder;
pub mod request_id;
pub mod security_headers;

pub use placeholder::placeholder_gate;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
