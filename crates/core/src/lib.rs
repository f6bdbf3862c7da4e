//! `clearout-core`: shared foundation for the clear-out tracker.
//!
//! Typed identifiers and the domain error model. No IO, no storage.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{ItemId, UserId};
