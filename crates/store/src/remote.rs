//! Remote-backed store: the synced variant.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use clearout_core::{ItemId, UserId};
use clearout_items::{Disposition, Item, ItemDraft};

use crate::document::{DocumentCollection, ItemFields, ItemPatch};
use crate::error::StoreError;
use crate::snapshot::Subscription;
use crate::store::ItemStore;

/// Item store backed by a hosted per-user document collection.
///
/// Every mutation is a remote call; nothing is written locally ahead of
/// confirmation, so a failed call leaves the visible state exactly as it
/// was. The authoritative state is whatever the next subscription push
/// delivers; two rapid writes to the same record resolve to whichever
/// lands last at the collection.
#[derive(Debug)]
pub struct RemoteItemStore<C> {
    user: UserId,
    collection: C,
}

impl<C: DocumentCollection> RemoteItemStore<C> {
    /// Bind the signed-in user's collection. `user` is the partition key
    /// under which the collaborator scopes the records.
    pub fn new(user: UserId, collection: C) -> Self {
        Self { user, collection }
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }
}

#[async_trait]
impl<C: DocumentCollection> ItemStore for RemoteItemStore<C> {
    async fn create(&self, draft: &ItemDraft) -> Result<ItemId, StoreError> {
        // Validate locally first so a blank name never reaches the network.
        let fields = ItemFields::from_draft(draft, Utc::now())?;

        match self.collection.insert(fields).await {
            Ok(id) => {
                debug!(user = %self.user, item_id = %id, "remote create confirmed");
                Ok(id)
            }
            Err(err) => {
                warn!(user = %self.user, error = %err, "remote create failed");
                Err(err)
            }
        }
    }

    async fn set_status(&self, id: ItemId, status: Disposition) -> Result<(), StoreError> {
        let patch = ItemPatch::status(status, Utc::now());
        self.collection.update(id, patch).await.inspect_err(|err| {
            warn!(user = %self.user, item_id = %id, error = %err, "remote status update failed");
        })
    }

    async fn set_destination(&self, id: ItemId, destination: &str) -> Result<(), StoreError> {
        let patch = ItemPatch::destination(destination, Utc::now());
        self.collection.update(id, patch).await.inspect_err(|err| {
            warn!(user = %self.user, item_id = %id, error = %err, "remote destination update failed");
        })
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        self.collection.delete(id).await.inspect_err(|err| {
            warn!(user = %self.user, item_id = %id, error = %err, "remote delete failed");
        })
    }

    fn snapshot(&self) -> Vec<Item> {
        self.collection.snapshot()
    }

    fn subscribe(&self) -> Subscription<Vec<Item>> {
        self.collection.subscribe_ordered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearout_items::Category;

    use crate::memory_collection::InMemoryCollection;

    fn remote_store() -> RemoteItemStore<InMemoryCollection> {
        RemoteItemStore::new(UserId::new(), InMemoryCollection::new())
    }

    fn draft(name: &str) -> ItemDraft {
        ItemDraft::new(name, Category::default(), "")
    }

    #[tokio::test]
    async fn confirmed_create_appears_in_the_next_push() {
        let store = remote_store();
        let sub = store.subscribe();

        let id = store.create(&draft("Tent")).await.unwrap();

        let push = sub.try_recv().unwrap();
        assert_eq!(push.len(), 1);
        assert_eq!(push[0].id, id);
    }

    #[tokio::test]
    async fn failed_create_leaves_the_record_set_unchanged() {
        let store = remote_store();
        store.collection.fail_next("permission denied");

        let err = store.create(&draft("Tent")).await.unwrap_err();
        assert_eq!(err, StoreError::remote("permission denied"));
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_any_remote_call() {
        let store = remote_store();
        // A remote call would consume this injected failure.
        store.collection.fail_next("unreachable");

        let err = store.create(&draft("  ")).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn status_and_destination_round_trip_through_patches() {
        let store = remote_store();
        let id = store.create(&draft("Ski boots")).await.unwrap();

        store.set_status(id, Disposition::Keep).await.unwrap();
        store.set_destination(id, "basement shelf").await.unwrap();
        store.set_status(id, Disposition::Keep).await.unwrap();

        let item = &store.snapshot()[0];
        assert_eq!(item.status, Disposition::Keep);
        assert_eq!(item.destination, "basement shelf");
    }

    #[tokio::test]
    async fn failed_update_is_reported_and_state_kept() {
        let store = remote_store();
        let id = store.create(&draft("Chair")).await.unwrap();

        store.collection.fail_next("offline");
        let err = store.set_status(id, Disposition::Dump).await.unwrap_err();

        assert_eq!(err, StoreError::remote("offline"));
        assert_eq!(store.snapshot()[0].status, Disposition::ToSort);
    }
}
