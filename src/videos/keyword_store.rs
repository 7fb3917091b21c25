// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Host session identifier.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);
crate::impl_wrapper_str!(SessionId);

/// Where a session's last keyword is remembered: one slot per session and
/// repository instance.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SearchStateKey {
    /// Host session.
    pub session: SessionId,
    /// Repository instance the search went through.
    pub repository_id: u64,
}

impl SearchStateKey {
    /// Create a key.
    pub fn new(session: &SessionId, repository_id: u64) -> Self {
        Self {
            session: session.clone(),
            repository_id,
        }
    }
}

/// Remembers the last keyword searched per session, so that paging with an
/// empty keyword continues the same search.
pub trait KeywordStore: Send + Sync {
    /// The last keyword remembered for `key`, if any.
    fn remembered(&self, key: &SearchStateKey) -> Option<String>;

    /// Overwrite the keyword remembered for `key`.
    fn remember(&self, key: SearchStateKey, keyword: String);

    /// Drop the keyword remembered for `key`, when its session ends.
    fn forget(&self, key: &SearchStateKey);
}

/// In-process `KeywordStore`. Entries live as long as the store.
#[derive(Debug, Default)]
pub struct MemoryKeywordStore {
    keywords: Mutex<HashMap<SearchStateKey, String>>,
}

impl MemoryKeywordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeywordStore for MemoryKeywordStore {
    fn remembered(&self, key: &SearchStateKey) -> Option<String> {
        self.keywords
            .lock()
            .ok()
            .and_then(|keywords| keywords.get(key).cloned())
    }

    fn remember(&self, key: SearchStateKey, keyword: String) {
        if let Ok(mut keywords) = self.keywords.lock() {
            keywords.insert(key, keyword);
        }
    }

    fn forget(&self, key: &SearchStateKey) {
        if let Ok(mut keywords) = self.keywords.lock() {
            keywords.remove(key);
        }
    }
}
