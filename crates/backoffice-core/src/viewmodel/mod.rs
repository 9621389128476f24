//! ViewModel Module
//!
//! Headless state of the menu management page: filters, modals, and feedback messages.

pub mod menu_catalog_vm;
pub mod modal;

pub use menu_catalog_vm::MenuCatalogViewModel;
pub use modal::{ModalKind, ModalState};
