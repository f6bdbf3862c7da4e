//! Deterministic in-memory [`DocumentCollection`] for dev/tests.

use std::sync::Mutex;

use async_trait::async_trait;

use clearout_core::{DomainError, ItemId};
use clearout_items::Item;

use crate::document::{DocumentCollection, ItemFields, ItemPatch};
use crate::error::StoreError;
use crate::snapshot::{SnapshotPublisher, Subscription};

#[derive(Debug, Clone)]
struct Doc {
    // Monotonic insert sequence: the tiebreak that keeps
    // creation-time-descending order stable when timestamps collide.
    seq: u64,
    item: Item,
}

#[derive(Debug, Default)]
struct State {
    docs: Vec<Doc>,
    next_seq: u64,
    fail_next: Option<String>,
}

/// In-process stand-in for the hosted collection.
///
/// - Assigns record ids on insert
/// - Orders pushes by creation time descending (insert sequence as tiebreak)
/// - Applies updates in call order: last write wins, nothing merges
/// - `fail_next` rejects the next mutation, for error-path tests
#[derive(Debug, Default)]
pub struct InMemoryCollection {
    state: Mutex<State>,
    publisher: SnapshotPublisher<Vec<Item>>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next insert/update/delete with `message`.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.lock_state().fail_next = Some(message.into());
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn take_failure(state: &mut State) -> Result<(), StoreError> {
        match state.fail_next.take() {
            Some(message) => Err(StoreError::Remote(message)),
            None => Ok(()),
        }
    }

    fn ordered(docs: &mut Vec<Doc>) -> Vec<Item> {
        docs.sort_by(|a, b| {
            b.item
                .created_at
                .cmp(&a.item.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        docs.iter().map(|d| d.item.clone()).collect()
    }

    fn publish(&self, state: &mut State) {
        let snapshot = Self::ordered(&mut state.docs);
        self.publisher.publish(snapshot);
    }
}

#[async_trait]
impl DocumentCollection for InMemoryCollection {
    async fn insert(&self, fields: ItemFields) -> Result<ItemId, StoreError> {
        let mut state = self.lock_state();
        Self::take_failure(&mut state)?;

        let id = ItemId::new();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.docs.push(Doc {
            seq,
            item: fields.into_item(id),
        });

        self.publish(&mut state);
        Ok(id)
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<(), StoreError> {
        let mut state = self.lock_state();
        Self::take_failure(&mut state)?;

        let doc = state
            .docs
            .iter_mut()
            .find(|d| d.item.id == id)
            .ok_or(DomainError::NotFound)?;

        if let Some(status) = patch.status {
            doc.item.status = status;
        }
        if let Some(destination) = patch.destination {
            doc.item.destination = destination;
        }
        doc.item.updated_at = patch.updated_at;

        self.publish(&mut state);
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let mut state = self.lock_state();
        Self::take_failure(&mut state)?;

        let before = state.docs.len();
        state.docs.retain(|d| d.item.id != id);

        if state.docs.len() != before {
            self.publish(&mut state);
        }
        Ok(())
    }

    fn snapshot(&self) -> Vec<Item> {
        let mut state = self.lock_state();
        Self::ordered(&mut state.docs)
    }

    fn subscribe_ordered(&self) -> Subscription<Vec<Item>> {
        self.publisher.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use clearout_items::{Category, Disposition, ItemDraft};

    fn fields(name: &str) -> ItemFields {
        let draft = ItemDraft::new(name, Category::default(), "");
        ItemFields::from_draft(&draft, Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn pushes_are_creation_time_descending() {
        let collection = InMemoryCollection::new();
        collection.insert(fields("A")).await.unwrap();
        collection.insert(fields("B")).await.unwrap();

        let names: Vec<_> = collection.snapshot().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[tokio::test]
    async fn identical_timestamps_keep_a_stable_order() {
        let collection = InMemoryCollection::new();
        let now = Utc::now();
        for name in ["A", "B", "C"] {
            let draft = ItemDraft::new(name, Category::default(), "");
            let fields = ItemFields::from_draft(&draft, now).unwrap();
            collection.insert(fields).await.unwrap();
        }

        let names: Vec<_> = collection.snapshot().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[tokio::test]
    async fn a_partial_patch_touches_only_its_fields() {
        let collection = InMemoryCollection::new();
        let id = collection.insert(fields("Ski boots")).await.unwrap();

        let now = Utc::now();
        collection
            .update(id, ItemPatch::destination("garage wall", now))
            .await
            .unwrap();
        collection
            .update(id, ItemPatch::status(Disposition::Sell, now))
            .await
            .unwrap();

        let item = &collection.snapshot()[0];
        assert_eq!(item.status, Disposition::Sell);
        assert_eq!(item.destination, "garage wall");
    }

    #[tokio::test]
    async fn update_of_a_missing_record_is_not_found() {
        let collection = InMemoryCollection::new();
        let err = collection
            .update(ItemId::new(), ItemPatch::status(Disposition::Keep, Utc::now()))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Domain(DomainError::NotFound));
    }

    #[tokio::test]
    async fn two_subscribers_converge_on_the_same_state() {
        let collection = InMemoryCollection::new();
        let tab_a = collection.subscribe_ordered();
        let tab_b = collection.subscribe_ordered();

        collection.insert(fields("Lamp")).await.unwrap();

        assert_eq!(tab_a.try_recv().unwrap(), tab_b.try_recv().unwrap());
    }
}
