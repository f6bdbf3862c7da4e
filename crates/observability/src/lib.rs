//! Logging setup for hosts embedding the tracker.

pub mod tracing;

pub use tracing::init;
