use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use watch_logging::{watch_error, watch_warn};

use sitewatch_core::{normalize_batch, strip_scheme, ChatState, ConversationId, NormalizedAddress};

use crate::persist::write_atomic;

/// The single persisted document. Conversation ids are stored as decimal
/// strings; absent maps are equivalent to empty ones and are not written out.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    chats: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    states: Map<String, Value>,
}

/// Durable per-conversation site registry and guided-flow state store.
///
/// Every mutation is a whole-document read-modify-write with no locking;
/// concurrent mutations can lose an update (last writer wins). The store is
/// best-effort: unreadable or malformed documents read as empty, and write
/// failures are logged rather than raised.
#[derive(Debug, Clone)]
pub struct SiteStore {
    path: PathBuf,
}

impl SiteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Document {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Document::default(),
            Err(err) => {
                watch_warn!("failed to read {:?}, treating as empty: {}", self.path, err);
                return Document::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(err) => {
                watch_warn!(
                    "malformed document at {:?}, treating as empty: {}",
                    self.path,
                    err
                );
                Document::default()
            }
        }
    }

    fn persist(&self, document: &Document) {
        let content = match serde_json::to_string_pretty(document) {
            Ok(text) => text,
            Err(err) => {
                watch_error!("failed to serialize document: {}", err);
                return;
            }
        };
        if let Err(err) = write_atomic(&self.path, &content) {
            watch_error!("failed to write {:?}: {}", self.path, err);
        }
    }

    /// The stored sequence for a conversation, duplicates collapsed.
    ///
    /// Unknown conversations and values that are not a sequence of strings
    /// read as empty.
    pub fn sites(&self, conversation: ConversationId) -> Vec<String> {
        let document = self.load();
        let Some(Value::Array(items)) = document.chats.get(&conversation.to_string()) else {
            return Vec::new();
        };
        let mut sites: Vec<String> = Vec::with_capacity(items.len());
        for item in items {
            let Some(site) = item.as_str() else {
                return Vec::new();
            };
            if !sites.iter().any(|existing| existing == site) {
                sites.push(site.to_owned());
            }
        }
        sites
    }

    /// Normalize every token in `raw` and append the ones not already
    /// present, preserving first-seen order. Returns all valid normalized
    /// addresses, whether newly inserted or already present; empty if no
    /// token normalized.
    pub fn add_sites(&self, conversation: ConversationId, raw: &str) -> Vec<NormalizedAddress> {
        let accepted = normalize_batch(raw);
        if accepted.is_empty() {
            return accepted;
        }

        let mut document = self.load();
        let entry = document
            .chats
            .entry(conversation.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if !matches!(entry, Value::Array(_)) {
            // A corrupted value reads as an empty list.
            *entry = Value::Array(Vec::new());
        }
        if let Value::Array(items) = entry {
            for address in &accepted {
                let present = items.iter().any(|v| v.as_str() == Some(address.as_str()));
                if !present {
                    items.push(Value::String(address.as_str().to_owned()));
                }
            }
        }
        self.persist(&document);
        accepted
    }

    /// Remove every stored entry matching any normalized token in `raw`,
    /// exactly or scheme-insensitively. An emptied conversation is deleted
    /// from the document. Persists only when something was removed; returns
    /// whether anything was.
    pub fn remove_sites(&self, conversation: ConversationId, raw: &str) -> bool {
        let targets = normalize_batch(raw);
        if targets.is_empty() {
            return false;
        }

        let mut document = self.load();
        let key = conversation.to_string();
        let Some(Value::Array(items)) = document.chats.get_mut(&key) else {
            return false;
        };

        // Exact matches are covered by the scheme-stripped comparison.
        let stripped: HashSet<&str> = targets
            .iter()
            .map(|target| strip_scheme(target.as_str()))
            .collect();
        let before = items.len();
        items.retain(|item| match item.as_str() {
            Some(existing) => !stripped.contains(strip_scheme(existing)),
            None => true,
        });
        let removed = items.len() != before;

        if removed {
            if items.is_empty() {
                document.chats.remove(&key);
            }
            self.persist(&document);
        }
        removed
    }

    /// Conversation ids whose stored value is a non-empty sequence of
    /// strings. Malformed entries are skipped, not raised.
    pub fn conversations_with_sites(&self) -> Vec<ConversationId> {
        let document = self.load();
        document
            .chats
            .iter()
            .filter_map(|(key, value)| {
                let conversation: ConversationId = key.parse().ok()?;
                let items = value.as_array()?;
                if items.is_empty() || !items.iter().all(Value::is_string) {
                    return None;
                }
                Some(conversation)
            })
            .collect()
    }

    /// The guided-flow state for a conversation; absent or unrecognized
    /// entries read as `Default`.
    pub fn state(&self, conversation: ConversationId) -> ChatState {
        let document = self.load();
        document
            .states
            .get(&conversation.to_string())
            .and_then(Value::as_str)
            .and_then(ChatState::from_token)
            .unwrap_or_default()
    }

    /// Persist the guided-flow state. `Default` deletes the entry; an
    /// emptied states map is dropped from the document entirely.
    pub fn set_state(&self, conversation: ConversationId, state: ChatState) {
        let mut document = self.load();
        let key = conversation.to_string();
        match state.token() {
            Some(token) => {
                document.states.insert(key, Value::String(token.to_owned()));
            }
            None => {
                document.states.remove(&key);
            }
        }
        self.persist(&document);
    }
}
