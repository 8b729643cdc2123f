//! In-memory record store for accounts and typing results.
//!
//! One `RwLock` guards both collections and their indexes, so a listing
//! never observes a half-applied create. Entities live in insertion-ordered
//! vectors; the id, username and language indexes hold positions into them.
//!
//! Creation timestamps are clamped to never run behind the previous insert.
//! Insertion order therefore matches `created_at` order, and a newest-first
//! listing is a reverse walk that needs no sort.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{AccountRepository, RecordStoreError, TypingResultRepository};
use crate::domain::{Account, AccountDraft, ResultLimit, TypingResult, TypingResultDraft};

#[derive(Default)]
struct Collections {
    accounts: Vec<Account>,
    account_ids: HashMap<Uuid, usize>,
    usernames: HashMap<String, Vec<usize>>,
    results: Vec<TypingResult>,
    result_ids: HashMap<Uuid, usize>,
    languages: HashMap<String, Vec<usize>>,
    last_created_at: Option<DateTime<Utc>>,
}

impl Collections {
    fn fresh_account_id(&self) -> Uuid {
        fresh_id(|id| self.account_ids.contains_key(id))
    }

    fn fresh_result_id(&self) -> Uuid {
        fresh_id(|id| self.result_ids.contains_key(id))
    }

    fn next_created_at(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let created_at = self.last_created_at.map_or(now, |last| last.max(now));
        self.last_created_at = Some(created_at);
        created_at
    }

    fn insert_account(&mut self, account: Account) {
        let position = self.accounts.len();
        self.account_ids.insert(account.id(), position);
        self.usernames
            .entry(account.username().to_owned())
            .or_default()
            .push(position);
        self.accounts.push(account);
    }

    fn insert_result(&mut self, result: TypingResult) {
        let position = self.results.len();
        self.result_ids.insert(result.id(), position);
        self.languages
            .entry(result.language().to_owned())
            .or_default()
            .push(position);
        self.results.push(result);
    }

    fn newest_results(&self, limit: ResultLimit) -> Vec<TypingResult> {
        self.results.iter().rev().take(limit.get()).cloned().collect()
    }

    fn newest_results_for(&self, language: &str, limit: ResultLimit) -> Vec<TypingResult> {
        self.languages.get(language).map_or_else(Vec::new, |positions| {
            positions
                .iter()
                .rev()
                .filter_map(|position| self.results.get(*position))
                .take(limit.get())
                .cloned()
                .collect()
        })
    }
}

fn fresh_id(taken: impl Fn(&Uuid) -> bool) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !taken(&id) {
            return id;
        }
    }
}

/// Process-wide holder of accounts and typing results.
///
/// Build one per process and share it behind an `Arc`; tests build a fresh
/// instance each.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use typing_backend::domain::ports::AccountRepository;
/// use typing_backend::domain::AccountDraft;
/// use typing_backend::outbound::memory::InMemoryRecordStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryRecordStore::new(Arc::new(DefaultClock));
/// let account = store
///     .create_account(AccountDraft::new("alice"))
///     .await
///     .expect("in-memory create succeeds");
/// let found = store
///     .find_account_by_username("alice")
///     .await
///     .expect("in-memory lookup succeeds");
/// assert_eq!(found.map(|a| a.id()), Some(account.id()));
/// # });
/// ```
pub struct InMemoryRecordStore {
    collections: RwLock<Collections>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRecordStore {
    /// Create an empty store stamping results with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            clock,
        }
    }

    fn read(&self, collection: &str) -> Result<RwLockReadGuard<'_, Collections>, RecordStoreError> {
        self.collections
            .read()
            .map_err(|_| RecordStoreError::poisoned(collection))
    }

    fn write(
        &self,
        collection: &str,
    ) -> Result<RwLockWriteGuard<'_, Collections>, RecordStoreError> {
        self.collections
            .write()
            .map_err(|_| RecordStoreError::poisoned(collection))
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

const ACCOUNTS: &str = "accounts";
const TYPING_RESULTS: &str = "typing results";

#[async_trait]
impl AccountRepository for InMemoryRecordStore {
    async fn create_account(&self, draft: AccountDraft) -> Result<Account, RecordStoreError> {
        let mut collections = self.write(ACCOUNTS)?;
        let account = Account::from_draft(collections.fresh_account_id(), draft);
        collections.insert_account(account.clone());
        debug!(account_id = %account.id(), "account stored");
        Ok(account)
    }

    async fn find_account_by_id(&self, id: &Uuid) -> Result<Option<Account>, RecordStoreError> {
        let collections = self.read(ACCOUNTS)?;
        Ok(collections
            .account_ids
            .get(id)
            .and_then(|position| collections.accounts.get(*position))
            .cloned())
    }

    async fn find_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, RecordStoreError> {
        let collections = self.read(ACCOUNTS)?;
        Ok(collections
            .usernames
            .get(username)
            .and_then(|positions| positions.first())
            .and_then(|position| collections.accounts.get(*position))
            .cloned())
    }
}

#[async_trait]
impl TypingResultRepository for InMemoryRecordStore {
    async fn create_result(
        &self,
        draft: TypingResultDraft,
    ) -> Result<TypingResult, RecordStoreError> {
        let now = self.clock.utc();
        let mut collections = self.write(TYPING_RESULTS)?;
        let id = collections.fresh_result_id();
        let created_at = collections.next_created_at(now);
        let result = TypingResult::from_draft(id, created_at, draft);
        collections.insert_result(result.clone());
        debug!(result_id = %id, language = result.language(), "typing result stored");
        Ok(result)
    }

    async fn list_results(
        &self,
        limit: ResultLimit,
    ) -> Result<Vec<TypingResult>, RecordStoreError> {
        Ok(self.read(TYPING_RESULTS)?.newest_results(limit))
    }

    async fn list_results_by_language(
        &self,
        language: &str,
        limit: ResultLimit,
    ) -> Result<Vec<TypingResult>, RecordStoreError> {
        Ok(self.read(TYPING_RESULTS)?.newest_results_for(language, limit))
    }
}

#[cfg(test)]
#[path = "record_store_tests.rs"]
mod tests;
