use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::{MenuItem, MenuItemId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "id")]
#[serde(rename_all = "snake_case")]
pub enum CatalogChange {
    Created(MenuItemId),
    Updated(MenuItemId),
    Deleted(MenuItemId),
}

/// "List changed" notification carrying the full post-mutation list
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEvent {
    pub revision: u64,
    pub change: CatalogChange,
    pub items: Vec<MenuItem>,
}

pub struct MenuEventBus {
    tx: broadcast::Sender<CatalogEvent>,
}

impl MenuEventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn publish(&self, event: CatalogEvent) {
        let revision = event.revision;
        match self.tx.send(event) {
            Ok(receivers) => debug!("Published catalog revision {} to {} subscriber(s)", revision, receivers),
            // Only fails when nobody is listening
            Err(_) => debug!("No subscribers for catalog revision {}", revision),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
