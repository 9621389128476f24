// ============================================================================
// Back-office Core - Menu Catalog Service
// File: crates/backoffice-core/src/services/menu_catalog_service.rs
// ============================================================================
//! Owner of the canonical menu list: filtering, CRUD, and change notification

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

use backoffice_shared::config::CatalogSettings;

use crate::domain::{
    category_counts, filter_items, CategoryCounts, DefaultImages, MenuItem, MenuItemDraft, MenuQuery,
};
use crate::error::DomainError;
use crate::repositories::MenuRepository;
use crate::services::event_bus::{CatalogChange, CatalogEvent, MenuEventBus};

/// Menu catalog service. Every mutation publishes the full list to subscribers.
pub struct MenuCatalogService<R: MenuRepository + ?Sized> {
    menu_repo: Arc<R>,
    default_images: DefaultImages,
    simulated_latency: Duration,
    event_bus: MenuEventBus,
    /// Serialises mutations and numbers the published revisions
    revision: Mutex<u64>,
}

impl<R: MenuRepository + ?Sized> MenuCatalogService<R> {
    pub fn new(
        menu_repo: Arc<R>,
        default_images: DefaultImages,
        simulated_latency: Duration,
        event_capacity: usize,
    ) -> Self {
        Self {
            menu_repo,
            default_images,
            simulated_latency,
            event_bus: MenuEventBus::new(event_capacity),
            revision: Mutex::new(0),
        }
    }

    pub fn from_settings(menu_repo: Arc<R>, settings: &CatalogSettings) -> Self {
        Self::new(
            menu_repo,
            DefaultImages::new(&settings.default_food_image, &settings.default_beverage_image),
            settings.simulated_latency(),
            settings.event_capacity,
        )
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.event_bus.subscribe()
    }

    pub async fn all(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.menu_repo.list().await
    }

    /// Filtered view of the list; never mutates.
    pub async fn list(&self, query: &MenuQuery) -> Result<Vec<MenuItem>, DomainError> {
        let items = self.menu_repo.list().await?;
        let filtered = filter_items(&items, query);
        debug!(
            "Menu list: search={:?}, category={:?}, {} of {} item(s)",
            query.search,
            query.category,
            filtered.len(),
            items.len()
        );
        Ok(filtered)
    }

    pub async fn counts(&self) -> Result<CategoryCounts, DomainError> {
        let items = self.menu_repo.list().await?;
        Ok(category_counts(&items))
    }

    /// View a single item
    pub async fn get(&self, id: &str) -> Result<MenuItem, DomainError> {
        self.menu_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::MenuItemNotFound(id.to_string()))
    }

    /// Add a new item at the front of the list
    pub async fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        let draft = draft.validated().map_err(|e| {
            warn!("Create menu rejected: {}", e);
            e
        })?;
        info!("Creating menu item: {}", draft.name);

        self.simulate_latency().await;

        let mut revision = self.revision.lock().await;

        let id = self.menu_repo.next_id().await?;
        let item = MenuItem::from_draft(id, draft, &self.default_images);
        let created = self.menu_repo.insert_front(&item).await.map_err(|e| {
            error!("Failed to create menu item {}: {}", item.name, e);
            e
        })?;

        self.publish(&mut revision, CatalogChange::Created(created.id.clone())).await;

        info!("Menu item created: {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Replace every field of an existing item, keeping its id and position
    pub async fn update(&self, id: &str, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        let draft = draft.validated().map_err(|e| {
            warn!("Update menu {} rejected: {}", id, e);
            e
        })?;
        info!("Updating menu item: {}", id);

        self.simulate_latency().await;

        let mut revision = self.revision.lock().await;

        let mut item = self.get(id).await.map_err(|e| {
            warn!("Update failed: {}", e);
            e
        })?;
        item.apply_draft(draft, &self.default_images);
        let updated = self.menu_repo.update(&item).await.map_err(|e| {
            error!("Failed to update menu item {}: {}", id, e);
            e
        })?;

        self.publish(&mut revision, CatalogChange::Updated(updated.id.clone())).await;

        info!("Menu item updated: {}", updated.id);
        Ok(updated)
    }

    /// Remove an item. Callers are expected to have confirmed first.
    pub async fn delete(&self, id: &str) -> Result<MenuItem, DomainError> {
        info!("Deleting menu item: {}", id);

        self.simulate_latency().await;

        let mut revision = self.revision.lock().await;

        let removed = self.menu_repo.delete(id).await.map_err(|e| {
            warn!("Delete failed for {}: {}", id, e);
            e
        })?;

        self.publish(&mut revision, CatalogChange::Deleted(removed.id.clone())).await;

        info!("Menu item deleted: {} ({})", removed.name, removed.id);
        Ok(removed)
    }

    async fn simulate_latency(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }

    async fn publish(&self, revision: &mut u64, change: CatalogChange) {
        let items = match self.menu_repo.list().await {
            Ok(items) => items,
            Err(e) => {
                // The mutation is already committed; subscribers catch up on the next event
                error!("Failed to read menu list for change event: {}", e);
                return;
            }
        };

        *revision += 1;
        self.event_bus.publish(CatalogEvent {
            revision: *revision,
            change,
            items,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategoryFilter};
    use crate::repositories::MockMenuRepository;
    use backoffice_shared::constants::DEFAULT_BEVERAGE_IMAGE;

    fn service(repo: MockMenuRepository) -> MenuCatalogService<MockMenuRepository> {
        MenuCatalogService::new(Arc::new(repo), DefaultImages::default(), Duration::ZERO, 8)
    }

    fn stored(id: &str, name: &str, category: Category) -> MenuItem {
        MenuItem::from_draft(
            id.into(),
            MenuItemDraft::new(name, category, 10000, "Enak"),
            &DefaultImages::default(),
        )
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_publishes() {
        let mut repo = MockMenuRepository::new();
        repo.expect_next_id().times(1).returning(|| Ok("4".to_string()));
        repo.expect_insert_front()
            .times(1)
            .returning(|item| Ok(item.clone()));
        repo.expect_list()
            .returning(|| Ok(vec![stored("4", "Es Teh", Category::Beverage)]));

        let service = service(repo);
        let mut rx = service.subscribe();

        let created = service
            .create(MenuItemDraft::new("Es Teh", Category::Beverage, 5000, "Teh dingin").with_image(""))
            .await
            .unwrap();

        assert_eq!(created.id, "4");
        assert_eq!(created.image, DEFAULT_BEVERAGE_IMAGE);
        assert!(created.available);

        let event = rx.recv().await.unwrap();
        assert_eq!(event.revision, 1);
        assert_eq!(event.change, CatalogChange::Created("4".into()));
        assert_eq!(event.items.len(), 1);
    }

    #[tokio::test]
    async fn test_create_validation_never_touches_repository() {
        let repo = MockMenuRepository::new();
        let service = service(repo);

        let result = service
            .create(MenuItemDraft::new("", Category::Food, 0, ""))
            .await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_repository_failure_publishes_nothing() {
        let mut repo = MockMenuRepository::new();
        repo.expect_next_id().returning(|| Ok("1".to_string()));
        repo.expect_insert_front()
            .returning(|_| Err(DomainError::OperationFailed("storage offline".into())));
        repo.expect_list().never();

        let service = service(repo);
        let mut rx = service.subscribe();

        let result = service
            .create(MenuItemDraft::new("Mie Ayam", Category::Food, 15000, "Pangsit"))
            .await;
        assert!(matches!(result, Err(DomainError::OperationFailed(_))));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let service = service(repo);
        let result = service
            .update("99", MenuItemDraft::new("Mie Ayam", Category::Food, 15000, "Pangsit"))
            .await;
        assert_eq!(result, Err(DomainError::MenuItemNotFound("99".into())));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let mut repo = MockMenuRepository::new();
        repo.expect_delete()
            .returning(|id| Err(DomainError::MenuItemNotFound(id.to_string())));
        repo.expect_list().never();

        let service = service(repo);
        let result = service.delete("42").await;
        assert_eq!(result, Err(DomainError::MenuItemNotFound("42".into())));
    }

    #[tokio::test]
    async fn test_list_filters_repository_snapshot() {
        let mut repo = MockMenuRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                stored("2", "Nasi Goreng", Category::Food),
                stored("1", "Es Jeruk", Category::Beverage),
            ])
        });

        let service = service(repo);
        let drinks = service
            .list(&MenuQuery::new("", CategoryFilter::Only(Category::Beverage)))
            .await
            .unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].id, "1");

        let counts = service.counts().await.unwrap();
        assert_eq!(counts.all, 2);
        assert_eq!(counts.food, 1);
    }
}
