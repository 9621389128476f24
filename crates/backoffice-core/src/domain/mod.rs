//! # Back-office Core - Domain Module
//! 
//! Domain entities for the menu catalog.

pub mod menu_item;
pub mod menu_query;

// Re-export all entities and enums
pub use menu_item::{Category, DefaultImages, MenuItem, MenuItemDraft, MenuItemId};
pub use menu_query::{category_counts, filter_items, CategoryCounts, CategoryFilter, MenuQuery};
