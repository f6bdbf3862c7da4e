use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clearout_core::{DomainError, DomainResult, ItemId};

use crate::{Category, Disposition};

/// Location assigned to an item whose form field was left blank.
pub const UNASSIGNED_LOCATION: &str = "Unassigned";

/// A single tracked possession.
///
/// # Invariants
/// - `id` is unique within a store for the item's lifetime and never changes.
/// - `name` is non-empty and carries no surrounding whitespace.
/// - `destination` is meaningful only while `status == Keep`, but is sticky:
///   a status transition never clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub location: String,
    pub status: Disposition,
    pub destination: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form draft for a new item.
///
/// `category` and `location` survive a successful submit so a user can batch
/// several entries for the same box; only the name resets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub location: String,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            location: location.into(),
        }
    }

    /// Validate the draft and build the item it describes.
    ///
    /// A name that is blank after trimming is a validation error (callers
    /// treat it as a silent no-op). A blank location defaults to
    /// [`UNASSIGNED_LOCATION`]. The item starts at `To Sort` with an empty
    /// destination.
    pub fn build(&self, id: ItemId, now: DateTime<Utc>) -> DomainResult<Item> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be blank"));
        }

        let location = self.location.trim();
        let location = if location.is_empty() {
            UNASSIGNED_LOCATION.to_string()
        } else {
            location.to_string()
        };

        Ok(Item {
            id,
            name: name.to_string(),
            category: self.category,
            location,
            status: Disposition::ToSort,
            destination: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reset for the next batch entry: clear the name, keep category and
    /// location.
    pub fn clear_name(&mut self) {
        self.name.clear();
    }
}
