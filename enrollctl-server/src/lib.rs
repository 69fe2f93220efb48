//! enrollctl-server: HTTP wrapper around one enrollment registry
//!
//! Each request maps to exactly one registry operation. `NotFound` becomes
//! 404 and `AlreadyExists` becomes 409.

pub mod http;
pub mod models;
pub mod state;

pub use http::{build_router, run_server, serve_listener, ApiError, ServerConfig, ServerError};
pub use state::AppState;
