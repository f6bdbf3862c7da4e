//! Remote document-collection boundary.
//!
//! The synced variant stores each user's items in a hosted, per-user
//! ordered collection. Only the four operation shapes the core needs are
//! modeled; replication and transport are the collaborator's concern.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clearout_core::{DomainResult, ItemId};
use clearout_items::{Category, Disposition, Item, ItemDraft};

use crate::error::StoreError;
use crate::snapshot::Subscription;

/// Field payload for inserting a record; the collection assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub category: Category,
    pub location: String,
    pub status: Disposition,
    pub destination: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemFields {
    /// Validate a form draft into an insert payload.
    ///
    /// Same rules as the local build: trimmed non-blank name, defaulted
    /// location, `To Sort` start, empty destination.
    pub fn from_draft(draft: &ItemDraft, now: DateTime<Utc>) -> DomainResult<Self> {
        // Scratch id only; the fields serialize without it and the
        // collection assigns the real one.
        let item = draft.build(ItemId::new(), now)?;
        Ok(Self {
            name: item.name,
            category: item.category,
            location: item.location,
            status: item.status,
            destination: item.destination,
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }

    /// Materialize the record under its collection-assigned id.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            location: self.location,
            status: self.status,
            destination: self.destination,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial update for a record. Unset fields are left untouched, which is
/// what keeps the destination note sticky across status changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Disposition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ItemPatch {
    pub fn status(status: Disposition, now: DateTime<Utc>) -> Self {
        Self {
            status: Some(status),
            destination: None,
            updated_at: now,
        }
    }

    pub fn destination(text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            status: None,
            destination: Some(text.into()),
            updated_at: now,
        }
    }
}

/// A per-user ordered collection of item records.
///
/// Mutations are network calls and may fail; a failure means the record set
/// is unchanged. `snapshot` is a local read of the last pushed record set,
/// and `subscribe_ordered` delivers the full current set
/// (creation-time-descending) on every remote change, from this client or
/// any other session under the same account.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    async fn insert(&self, fields: ItemFields) -> Result<ItemId, StoreError>;

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<(), StoreError>;

    async fn delete(&self, id: ItemId) -> Result<(), StoreError>;

    fn snapshot(&self) -> Vec<Item>;

    fn subscribe_ordered(&self) -> Subscription<Vec<Item>>;
}

// A shared handle is a collection too (two tabs, one account).
#[async_trait]
impl<C> DocumentCollection for std::sync::Arc<C>
where
    C: DocumentCollection + ?Sized,
{
    async fn insert(&self, fields: ItemFields) -> Result<ItemId, StoreError> {
        (**self).insert(fields).await
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<(), StoreError> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }

    fn snapshot(&self) -> Vec<Item> {
        (**self).snapshot()
    }

    fn subscribe_ordered(&self) -> Subscription<Vec<Item>> {
        (**self).subscribe_ordered()
    }
}
