//! Port for account identities.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Account, AccountDraft};

use super::RecordStoreError;

/// Port owning accounts.
///
/// Usernames are not unique. When several accounts share a username,
/// [`AccountRepository::find_account_by_username`] returns the one created
/// first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account with a freshly issued id.
    async fn create_account(&self, draft: AccountDraft) -> Result<Account, RecordStoreError>;

    /// Find an account by id.
    async fn find_account_by_id(&self, id: &Uuid) -> Result<Option<Account>, RecordStoreError>;

    /// Find an account by exact username.
    async fn find_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, RecordStoreError>;
}
