//! In-memory store: the demo variant.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use clearout_core::{DomainError, ItemId};
use clearout_items::{Category, Disposition, Item, ItemDraft};

use crate::error::StoreError;
use crate::snapshot::{SnapshotPublisher, Subscription};
use crate::store::ItemStore;

/// Plain in-process item list.
///
/// Items live in a `Mutex<Vec<_>>` ordered newest-first (creates prepend);
/// every mutation publishes a fresh snapshot to subscribers. State is lost
/// when the store is dropped, which is the point of the demo variant.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: Mutex<Vec<Item>>,
    publisher: SnapshotPublisher<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a couple of example items, for demo sessions.
    pub fn with_demo_items() -> Self {
        let store = Self::new();
        let now = Utc::now();
        let seeds = [
            ItemDraft::new("Extra blender", Category::KitchenItems, "Box 1"),
            ItemDraft::new("Desk lamp (brass)", Category::LampsLighting, "Box 2"),
        ];

        {
            let mut items = store.lock_items();
            for draft in &seeds {
                // Seed drafts are known-valid.
                if let Ok(item) = draft.build(ItemId::new(), now) {
                    items.insert(0, item);
                }
            }
        }
        store
    }

    fn lock_items(&self) -> std::sync::MutexGuard<'_, Vec<Item>> {
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self) {
        self.publisher.publish(self.snapshot());
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn create(&self, draft: &ItemDraft) -> Result<ItemId, StoreError> {
        let item = draft.build(ItemId::new(), Utc::now())?;
        let id = item.id;
        debug!(item_id = %id, name = %item.name, "creating item");

        self.lock_items().insert(0, item);
        self.publish();
        Ok(id)
    }

    async fn set_status(&self, id: ItemId, status: Disposition) -> Result<(), StoreError> {
        {
            let mut items = self.lock_items();
            let item = items
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or(DomainError::NotFound)?;
            debug!(item_id = %id, status = %status, "updating status");

            // Sticky destination: status transitions never touch the note.
            item.status = status;
            item.updated_at = Utc::now();
        }
        self.publish();
        Ok(())
    }

    async fn set_destination(&self, id: ItemId, destination: &str) -> Result<(), StoreError> {
        {
            let mut items = self.lock_items();
            let item = items
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or(DomainError::NotFound)?;
            debug!(item_id = %id, "updating destination");

            item.destination = destination.to_string();
            item.updated_at = Utc::now();
        }
        self.publish();
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let removed = {
            let mut items = self.lock_items();
            let before = items.len();
            items.retain(|i| i.id != id);
            items.len() != before
        };

        if removed {
            debug!(item_id = %id, "deleted item");
            self.publish();
        }
        Ok(())
    }

    fn snapshot(&self) -> Vec<Item> {
        self.lock_items().clone()
    }

    fn subscribe(&self) -> Subscription<Vec<Item>> {
        self.publisher.subscribe()
    }
}
