//! Deterministic identity provider for dev/tests.

use std::sync::Mutex;

use async_trait::async_trait;

use clearout_core::UserId;

use crate::identity::{AuthError, IdentityProvider, SignedInUser};

/// In-process provider with one fixed account.
///
/// - No IO / no async runtime required
/// - `fail_next` forces the next sign-in or sign-out to fail, for
///   error-path tests
#[derive(Debug)]
pub struct StaticIdentityProvider {
    account: SignedInUser,
    signed_in: Mutex<bool>,
    fail_next: Mutex<Option<String>>,
}

impl StaticIdentityProvider {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            account: SignedInUser {
                id: UserId::new(),
                display_name: display_name.into(),
                avatar_url: None,
            },
            signed_in: Mutex::new(false),
            fail_next: Mutex::new(None),
        }
    }

    /// Start with the account already signed in.
    pub fn signed_in(display_name: impl Into<String>) -> Self {
        let provider = Self::new(display_name);
        *provider.signed_in.lock().unwrap_or_else(|e| e.into_inner()) = true;
        provider
    }

    /// Force the next operation to fail with `message`.
    pub fn fail_next(&self, message: impl Into<String>) {
        *self.fail_next.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.into());
    }

    fn take_failure(&self) -> Option<AuthError> {
        self.fail_next
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .map(AuthError::Provider)
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn sign_in(&self) -> Result<SignedInUser, AuthError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        *self.signed_in.lock().unwrap_or_else(|e| e.into_inner()) = true;
        Ok(self.account.clone())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        *self.signed_in.lock().unwrap_or_else(|e| e.into_inner()) = false;
        Ok(())
    }

    fn current_user(&self) -> Option<SignedInUser> {
        let signed_in = *self.signed_in.lock().unwrap_or_else(|e| e.into_inner());
        signed_in.then(|| self.account.clone())
    }
}
