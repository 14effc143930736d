//! Web server module
//!
//! Provides the HTTP API for Loadboard-RS.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
