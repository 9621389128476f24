//! Domain services (business logic)

pub mod event_bus;
pub mod menu_catalog_service;

pub use event_bus::{CatalogChange, CatalogEvent, MenuEventBus};
pub use menu_catalog_service::MenuCatalogService;
