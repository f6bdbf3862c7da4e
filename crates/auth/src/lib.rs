//! Identity-provider boundary.
//!
//! The core only needs two things from the hosted identity service: a stable
//! per-user identifier (the partition key for that user's items) and whether
//! a user is currently signed in. The handshake itself is out of scope and
//! stays behind the [`IdentityProvider`] trait.

pub mod identity;
pub mod static_provider;

pub use identity::{AuthError, IdentityProvider, SignedInUser};
pub use static_provider::StaticIdentityProvider;
