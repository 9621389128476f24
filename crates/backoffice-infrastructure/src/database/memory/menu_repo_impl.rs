// ============================================================================
// Back-office Infrastructure - In-Memory Menu Repository
// File: crates/backoffice-infrastructure/src/database/memory/menu_repo_impl.rs
// ============================================================================

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info};

use backoffice_core::domain::{MenuItem, MenuItemId};
use backoffice_core::error::DomainError;
use backoffice_core::repositories::MenuRepository;

/// Process-local menu list. Resets on restart.
pub struct InMemoryMenuRepository {
    items: RwLock<Vec<MenuItem>>,
    next_id: AtomicU64,
}

impl Default for InMemoryMenuRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Start from an existing list. The id counter continues after the largest numeric id.
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let max_id = items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            items: RwLock::new(items),
            next_id: AtomicU64::new(max_id.saturating_add(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self.items.read().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, DomainError> {
        Ok(self.items.read().iter().find(|item| item.id == id).cloned())
    }

    async fn next_id(&self) -> Result<MenuItemId, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(id.to_string())
    }

    async fn insert_front(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut items = self.items.write();
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(DomainError::OperationFailed(format!("duplicate menu id {}", item.id)));
        }
        items.insert(0, item.clone());
        info!("Menu item stored: {} (total {})", item.id, items.len());
        Ok(item.clone())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut items = self.items.write();
        let slot = items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| DomainError::MenuItemNotFound(item.id.clone()))?;
        *slot = item.clone();
        debug!("Menu item replaced in place: {}", item.id);
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> Result<MenuItem, DomainError> {
        let mut items = self.items.write();
        let idx = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| DomainError::MenuItemNotFound(id.to_string()))?;
        let removed = items.remove(idx);
        info!("Menu item removed: {} (total {})", id, items.len());
        Ok(removed)
    }
}
