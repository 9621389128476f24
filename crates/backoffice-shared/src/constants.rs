//! Application-wide constants

pub const API_PREFIX: &str = "/api/v1";
pub const DEFAULT_FOOD_IMAGE: &str = "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg";
pub const DEFAULT_BEVERAGE_IMAGE: &str = "https://images.pexels.com/photos/1251175/pexels-photo-1251175.jpeg";
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 500;
pub const DEFAULT_EVENT_CAPACITY: usize = 64;
pub const MAX_MENU_NAME_LENGTH: u64 = 100;
pub const MAX_MENU_DESCRIPTION_LENGTH: u64 = 1000;
pub const MAX_IMAGE_URL_LENGTH: u64 = 2048;
