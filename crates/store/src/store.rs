use async_trait::async_trait;

use clearout_core::ItemId;
use clearout_items::{Disposition, Item, ItemDraft};

use crate::error::StoreError;
use crate::snapshot::Subscription;

/// The Item Store: current set of tracked items plus a live ordered read.
///
/// Mutations are async because the synced variant performs a network call
/// per operation; the in-memory variant completes immediately. Reads are
/// local and synchronous in both variants.
///
/// ## Ordering
///
/// `snapshot` and every subscription push deliver items
/// newest-created-first.
///
/// ## Failure semantics
///
/// A failed mutation leaves the visible state unchanged: no local copy is
/// mutated ahead of confirmation, and there is no automatic retry. The
/// error is returned for the caller to surface.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Add a new item from a form draft.
    ///
    /// A name that is blank after trimming is a validation error; callers
    /// treat that as a silent no-op. On success the item is first in all
    /// subsequent reads, with `status = To Sort` and an empty destination.
    async fn create(&self, draft: &ItemDraft) -> Result<ItemId, StoreError>;

    /// Change an item's disposition. Free transitions; the destination note
    /// is retained across status changes (sticky).
    async fn set_status(&self, id: ItemId, status: Disposition) -> Result<(), StoreError>;

    /// Store destination text verbatim, no validation.
    async fn set_destination(&self, id: ItemId, destination: &str) -> Result<(), StoreError>;

    /// Permanently remove an item. Deleting a nonexistent id is a no-op.
    async fn delete(&self, id: ItemId) -> Result<(), StoreError>;

    /// Current ordered state.
    fn snapshot(&self) -> Vec<Item>;

    /// Live read: the full current ordered list is re-delivered on every
    /// change.
    fn subscribe(&self) -> Subscription<Vec<Item>>;
}
