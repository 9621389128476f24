//! Database module (in-memory adapters)

pub mod memory;
pub mod seed;

pub use memory::InMemoryMenuRepository;

use backoffice_shared::config::CatalogSettings;
use tracing::info;

/// Build the menu store, optionally pre-filled with the demo catalog.
pub fn create_menu_repository(settings: &CatalogSettings) -> InMemoryMenuRepository {
    if settings.seed_demo_data {
        let items = seed::demo_menu_items(&settings.default_food_image, &settings.default_beverage_image);
        info!("Seeding menu store with {} demo item(s)", items.len());
        InMemoryMenuRepository::with_items(items)
    } else {
        InMemoryMenuRepository::new()
    }
}
