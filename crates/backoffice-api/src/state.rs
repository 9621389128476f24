use std::sync::Arc;

use backoffice_core::repositories::MenuRepository;
use backoffice_core::services::MenuCatalogService;
use backoffice_shared::config::AppConfig;

/// Catalog service behind a type-erased repository
pub type SharedCatalog = Arc<MenuCatalogService<dyn MenuRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(menu_repo: Arc<dyn MenuRepository>, config: AppConfig) -> Self {
        let catalog = Arc::new(MenuCatalogService::from_settings(menu_repo, &config.catalog));
        Self { catalog, config }
    }
}
