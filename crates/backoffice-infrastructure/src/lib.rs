//! # Back-office Infrastructure
//! 
//! Storage implementations (adapters) for the core repository ports.

pub mod database;

pub use database::{create_menu_repository, InMemoryMenuRepository};
