//! HTTP surface.
//!
//! Routes are nested under `/api/`. `api_router()` returns a
//! composable `Router` that can be mounted on any axum server.
//! There is no authentication layer: the service is a public
//! information endpoint.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use types::ApiContext;
