//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Trailing-slash trim (before routing)
//! 2. Sentry layers (capture errors)
//! 3. `TraceLayer` (request tracing)
//! 4. Request ID (add unique ID to each request)
//! 5. Security headers (CSP, framing, sniffing)
//! 6. Session layer (tower-sessions with in-memory store)
//! 7. Admin guard (redirect unauthenticated `/admin/*` requests)
//! 8. Rate limiting (governor, enquiry endpoints only)

pub mod guard;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use guard::admin_guard_middleware;
pub use rate_limit::enquiry_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
