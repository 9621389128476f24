//! Demo catalog used when `catalog.seed_demo_data` is enabled

use backoffice_core::domain::{Category, DefaultImages, MenuItem, MenuItemDraft};

const DEMO_MENU: &[(&str, Category, u64, &str, bool)] = &[
    ("Nasi Goreng Spesial", Category::Food, 25000, "Nasi goreng dengan telur mata sapi, ayam suwir, dan kerupuk", true),
    ("Mie Ayam Bakso", Category::Food, 20000, "Mie ayam kecap dengan bakso sapi dan pangsit goreng", true),
    ("Sate Ayam Madura", Category::Food, 30000, "Sepuluh tusuk sate ayam dengan bumbu kacang dan lontong", true),
    ("Es Teh Manis", Category::Beverage, 5000, "Teh melati dingin dengan gula tebu", true),
    ("Jus Alpukat", Category::Beverage, 15000, "Alpukat segar diblender dengan susu cokelat", false),
    ("Kopi Susu Gula Aren", Category::Beverage, 18000, "Espresso, susu segar, dan gula aren", true),
];

/// Demo items with ids "1".."n", in list order.
pub fn demo_menu_items(food_image: &str, beverage_image: &str) -> Vec<MenuItem> {
    let images = DefaultImages::new(food_image, beverage_image);

    DEMO_MENU
        .iter()
        .enumerate()
        .map(|(idx, (name, category, price, description, available))| {
            let draft = MenuItemDraft::new(name, *category, *price, description).with_available(*available);
            MenuItem::from_draft((idx + 1).to_string(), draft, &images)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_shared::constants::{DEFAULT_BEVERAGE_IMAGE, DEFAULT_FOOD_IMAGE};

    #[test]
    fn test_demo_items_are_valid_drafts() {
        let items = demo_menu_items(DEFAULT_FOOD_IMAGE, DEFAULT_BEVERAGE_IMAGE);
        assert_eq!(items.len(), DEMO_MENU.len());

        for item in &items {
            let draft = MenuItemDraft::new(&item.name, item.category, item.price, &item.description)
                .with_image(&item.image);
            assert!(draft.validated().is_ok(), "demo item {} must pass validation", item.name);
        }
        assert_eq!(items[0].id, "1");
        assert_eq!(items[3].image, DEFAULT_BEVERAGE_IMAGE);
    }
}
