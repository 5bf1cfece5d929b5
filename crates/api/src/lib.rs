//! HTTP API for linkup.
//!
//! Endpoint routers, the authentication middleware and the request
//! extractors that feed the authenticated user and profile into handlers.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
pub use middleware::AppState;
