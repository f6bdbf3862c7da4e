//! Item Store: the current set of tracked items behind one trait.
//!
//! Two variants implement [`ItemStore`]:
//!
//! - [`InMemoryItemStore`], the demo variant: a plain in-process list.
//! - [`RemoteItemStore`], the synced variant: every mutation is a call
//!   against a per-user [`DocumentCollection`], and no local state is
//!   mutated ahead of confirmation.
//!
//! Both expose a live read as a push-based subscription: the full current
//! ordered list (newest-created-first) is re-delivered on every change.

pub mod document;
pub mod error;
pub mod memory;
pub mod memory_collection;
pub mod remote;
pub mod snapshot;
pub mod store;

pub use document::{DocumentCollection, ItemFields, ItemPatch};
pub use error::StoreError;
pub use memory::InMemoryItemStore;
pub use memory_collection::InMemoryCollection;
pub use remote::RemoteItemStore;
pub use snapshot::{SnapshotPublisher, Subscription};
pub use store::ItemStore;
