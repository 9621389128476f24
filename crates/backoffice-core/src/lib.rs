//! # Back-office Core
//! 
//! Menu catalog domain, repository port, services, and the headless menu page view-model.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod viewmodel;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
