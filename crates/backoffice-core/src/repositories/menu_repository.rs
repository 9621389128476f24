//! Menu repository trait (port)

use async_trait::async_trait;

use crate::domain::{MenuItem, MenuItemId};
use crate::error::DomainError;

/// Ordered storage of menu items. Newest items sit at the front.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<MenuItem>, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>, DomainError>;
    /// Hand out the next identifier. Never reuses a value, even after deletes.
    async fn next_id(&self) -> Result<MenuItemId, DomainError>;
    async fn insert_front(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    /// Replace in place. `MenuItemNotFound` when the id is unknown.
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    /// Remove and return the item. `MenuItemNotFound` when the id is unknown.
    async fn delete(&self, id: &str) -> Result<MenuItem, DomainError>;
}
