//! Per-session state: signed-in user, store handle, transient view state.

use thiserror::Error;
use tracing::debug;

use clearout_auth::{AuthError, IdentityProvider, SignedInUser};
use clearout_core::ItemId;
use clearout_items::{Category, Disposition, Item, ItemDraft};
use clearout_store::{ItemStore, StoreError};

use crate::filter::{Filter, visible};

/// Transient UI state for one session.
///
/// Filters and the draft never touch the item set; they only shape what a
/// view renders next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub category_filter: Filter<Category>,
    pub status_filter: Filter<Disposition>,
    pub draft: ItemDraft,
    pub show_form: bool,
    pub editing_destination: Option<ItemId>,
}

impl ViewState {
    /// The items this view currently shows, filters AND-composed.
    pub fn visible<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        visible(items, &self.category_filter, &self.status_filter)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// One user's session: identity + store + view state, passed in explicitly.
///
/// Every mutating operation is gated on a signed-in user (no user: silent
/// no-op) and reports failures as error values for the caller to display;
/// no retry, no partial application. Dropping the session tears everything
/// down; nothing here is process-global.
#[derive(Debug)]
pub struct Session<S, I> {
    store: S,
    identity: I,
    pub view: ViewState,
}

impl<S: ItemStore, I: IdentityProvider> Session<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        Self {
            store,
            identity,
            view: ViewState::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn current_user(&self) -> Option<SignedInUser> {
        self.identity.current_user()
    }

    /// Full unfiltered snapshot (badge counts and the progress bar read
    /// this, never the filtered view).
    pub fn items(&self) -> Vec<Item> {
        self.store.snapshot()
    }

    /// The filtered item list the session currently shows.
    pub fn visible_items(&self) -> Vec<Item> {
        let items = self.store.snapshot();
        self.view.visible(&items).into_iter().cloned().collect()
    }

    pub async fn sign_in(&self) -> Result<SignedInUser, SessionError> {
        Ok(self.identity.sign_in().await?)
    }

    /// Sign out and discard the transient view state (session teardown).
    pub async fn sign_out(&mut self) -> Result<(), SessionError> {
        self.identity.sign_out().await?;
        self.view = ViewState::default();
        Ok(())
    }

    /// Submit the form draft.
    ///
    /// No signed-in user or a blank name: silent no-op, draft retained.
    /// Only on confirmed success does the form reset: the name clears
    /// while category and location stay for batch entry, and the form
    /// hides. A remote failure is returned with the draft intact.
    pub async fn submit_draft(&mut self) -> Result<(), SessionError> {
        if self.identity.current_user().is_none() {
            debug!("submit ignored: no user signed in");
            return Ok(());
        }

        match self.store.create(&self.view.draft).await {
            Ok(_) => {
                self.view.draft.clear_name();
                self.view.show_form = false;
                Ok(())
            }
            Err(err) if err.is_validation() => {
                debug!("submit refused: blank name");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn set_status(
        &self,
        id: ItemId,
        status: Disposition,
    ) -> Result<(), SessionError> {
        if self.identity.current_user().is_none() {
            return Ok(());
        }
        Ok(self.store.set_status(id, status).await?)
    }

    pub async fn delete_item(&self, id: ItemId) -> Result<(), SessionError> {
        if self.identity.current_user().is_none() {
            return Ok(());
        }
        Ok(self.store.delete(id).await?)
    }

    /// Open the destination editor for `id`.
    ///
    /// The editor only surfaces for items currently at `Keep`; anything
    /// else is a no-op. The stored note itself stays whatever it was.
    pub fn begin_destination_edit(&mut self, id: ItemId) {
        let editable = self
            .store
            .snapshot()
            .iter()
            .any(|i| i.id == id && i.status.destination_editable());

        if editable {
            self.view.editing_destination = Some(id);
        }
    }

    /// Save the destination text for the item being edited.
    ///
    /// The editing marker clears only on confirmed success; a failed write
    /// leaves it set so the user can re-attempt.
    pub async fn commit_destination(&mut self, text: &str) -> Result<(), SessionError> {
        let Some(id) = self.view.editing_destination else {
            return Ok(());
        };
        if self.identity.current_user().is_none() {
            return Ok(());
        }

        self.store.set_destination(id, text).await?;
        self.view.editing_destination = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearout_auth::StaticIdentityProvider;
    use clearout_store::InMemoryItemStore;

    fn signed_in_session() -> Session<InMemoryItemStore, StaticIdentityProvider> {
        Session::new(
            InMemoryItemStore::new(),
            StaticIdentityProvider::signed_in("Sam"),
        )
    }

    #[tokio::test]
    async fn submit_clears_name_but_keeps_category_and_location() {
        let mut session = signed_in_session();
        session.view.show_form = true;
        session.view.draft = ItemDraft::new("Blender", Category::KitchenItems, "Box 1");

        session.submit_draft().await.unwrap();

        assert_eq!(session.items().len(), 1);
        assert_eq!(session.view.draft.name, "");
        assert_eq!(session.view.draft.category, Category::KitchenItems);
        assert_eq!(session.view.draft.location, "Box 1");
        assert!(!session.view.show_form);
    }

    #[tokio::test]
    async fn blank_name_submit_is_a_silent_noop() {
        let mut session = signed_in_session();
        session.view.show_form = true;
        session.view.draft = ItemDraft::new("   ", Category::default(), "");

        session.submit_draft().await.unwrap();

        assert!(session.items().is_empty());
        assert!(session.view.show_form);
    }

    #[tokio::test]
    async fn mutations_without_a_user_leave_the_store_untouched() {
        let mut session = Session::new(
            InMemoryItemStore::new(),
            StaticIdentityProvider::new("Sam"),
        );
        session.view.draft = ItemDraft::new("Drill", Category::Tools, "");

        session.submit_draft().await.unwrap();
        session
            .set_status(ItemId::new(), Disposition::Keep)
            .await
            .unwrap();
        session.delete_item(ItemId::new()).await.unwrap();

        assert!(session.items().is_empty());
        // Nothing was created, so the draft must still be intact.
        assert_eq!(session.view.draft.name, "Drill");
    }

    #[tokio::test]
    async fn destination_editor_only_opens_for_keep_items() {
        let mut session = signed_in_session();
        session.view.draft = ItemDraft::new("Skates", Category::SportingGoods, "");
        session.submit_draft().await.unwrap();
        let id = session.items()[0].id;

        session.begin_destination_edit(id);
        assert_eq!(session.view.editing_destination, None);

        session.set_status(id, Disposition::Keep).await.unwrap();
        session.begin_destination_edit(id);
        assert_eq!(session.view.editing_destination, Some(id));
    }

    #[tokio::test]
    async fn commit_stores_text_verbatim_and_clears_the_marker() {
        let mut session = signed_in_session();
        session.view.draft = ItemDraft::new("Skates", Category::SportingGoods, "");
        session.submit_draft().await.unwrap();
        let id = session.items()[0].id;
        session.set_status(id, Disposition::Keep).await.unwrap();
        session.begin_destination_edit(id);

        session.commit_destination("  loft, far corner  ").await.unwrap();

        assert_eq!(session.items()[0].destination, "  loft, far corner  ");
        assert_eq!(session.view.editing_destination, None);
    }

    #[tokio::test]
    async fn sign_out_resets_the_view_state() {
        let mut session = signed_in_session();
        session.view.category_filter = Filter::Only(Category::Electronics);
        session.view.draft = ItemDraft::new("Cable", Category::Electronics, "");

        session.sign_out().await.unwrap();

        assert_eq!(session.view, ViewState::default());
        assert!(session.current_user().is_none());
    }
}
