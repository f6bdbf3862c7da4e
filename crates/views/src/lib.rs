//! View/Filter layer.
//!
//! Derived, read-only views over the store's current snapshot (filtering,
//! filter-chip counts, the progress bar) plus the per-session transient
//! state a UI binds to: active filters, the form draft, the
//! destination-edit marker, and the signed-in-user gate.

pub mod filter;
pub mod progress;
pub mod session;

pub use filter::{Filter, category_count, disposition_count, visible};
pub use progress::{Segment, decided_fraction, segments};
pub use session::{Session, SessionError, ViewState};
