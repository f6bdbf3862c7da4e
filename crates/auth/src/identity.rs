use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use clearout_core::UserId;

/// The currently authenticated user, as the identity service reports it.
///
/// Opaque identifier plus display fields; the core only ever uses `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedInUser {
    pub id: UserId,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identity service rejected or failed the operation.
    #[error("identity provider error: {0}")]
    Provider(String),
}

impl AuthError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}

/// Boundary to the hosted identity service.
///
/// Sign-in and sign-out are network calls and may fail; the contract is
/// "report to the user, leave state unchanged, no automatic retry".
/// `current_user` is a local read of the established session.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self) -> Result<SignedInUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    fn current_user(&self) -> Option<SignedInUser>;
}
