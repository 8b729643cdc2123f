//! Account identity records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Input for creating an [`Account`].
///
/// Fields other than `username` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountDraft {
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AccountDraft {
    /// Draft with a username and no extra fields.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            extra: Map::new(),
        }
    }
}

/// A stored account.
///
/// Usernames are not unique; see [`crate::domain::ports::AccountRepository`]
/// for how lookups resolve duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: Uuid,
    username: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Account {
    /// Bind a store-issued id to a draft.
    pub fn from_draft(id: Uuid, draft: AccountDraft) -> Self {
        let AccountDraft { username, extra } = draft;
        Self {
            id,
            username,
            extra,
        }
    }

    /// Store-issued identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Username supplied at creation.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Additional caller-supplied fields.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn extra_fields_are_flattened_next_to_id() {
        let mut draft = AccountDraft::new("alice");
        draft.extra.insert("country".to_owned(), json!("IN"));
        let account = Account::from_draft(Uuid::nil(), draft);

        let value = serde_json::to_value(&account).expect("account serialises");
        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "username": "alice",
                "country": "IN",
            })
        );
    }
}
