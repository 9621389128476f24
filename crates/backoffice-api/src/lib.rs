//! # Back-office API
//! 
//! HTTP handlers, response envelope, error mapping, and router for the menu catalog.

pub mod handlers;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
