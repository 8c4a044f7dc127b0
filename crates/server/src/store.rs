//! In-memory message store.
//!
//! A process-wide ordered list of strings behind a mutex. There is no
//! persistence: the list lives exactly as long as the process and starts
//! out holding a single seed entry.

use parking_lot::Mutex;

use crate::error::ValidationError;

/// Entry present from process start.
pub const SEED_MESSAGE: &str = "GraphQL is connected.";

/// Maximum accepted message length, post-trim.
pub const MAX_MESSAGE_LEN: usize = 200;

/// Mutex-guarded message list shared across request handlers.
///
/// Invariant: every stored element is trimmed and its length is in
/// `1..=MAX_MESSAGE_LEN`. Appends go through [`MessageStore::add`], which
/// validates before touching the list, so a failed call leaves the store
/// exactly as it was.
pub struct MessageStore {
    messages: Mutex<Vec<String>>,
}

impl MessageStore {
    /// Create a store holding only the seed entry.
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(vec![SEED_MESSAGE.to_string()]),
        }
    }

    /// Snapshot of the current list, in insertion order.
    pub fn snapshot(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Trim, validate and append a message, returning the updated list.
    ///
    /// The append and the returned copy happen under one lock acquisition,
    /// so concurrent callers each observe a list that actually existed.
    pub fn add(&self, raw: &str) -> Result<Vec<String>, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if trimmed.chars().count() > MAX_MESSAGE_LEN {
            return Err(ValidationError::TooLong);
        }

        let mut messages = self.messages.lock();
        messages.push(trimmed.to_string());
        Ok(messages.clone())
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
