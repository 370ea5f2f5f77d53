//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors), added in `main`
//! 2. `TraceLayer` (request tracing), added in `main`
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (stricter CSP for admin)
//!
//! The back-office has no login: it is bound to an internal address and
//! must not be exposed publicly.

pub mod request_id;
pub mod security_headers;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
