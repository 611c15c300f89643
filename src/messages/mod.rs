//! Notification log
//!
//! Process-wide, append-only list of short status strings for passive
//! display. Cloning a [`MessageLog`] yields another handle onto the same
//! list, so one instance is built by the composition root and shared with
//! every collaborator.

use std::sync::{Arc, RwLock};

/// Shared list of human-readable status messages
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Arc<RwLock<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end of the log
    pub fn append(&self, message: impl Into<String>) {
        let mut messages = self.messages.write().unwrap_or_else(|e| e.into_inner());
        messages.push(message.into());
    }

    /// Remove every message
    pub fn clear(&self) {
        let mut messages = self.messages.write().unwrap_or_else(|e| e.into_inner());
        messages.clear();
    }

    /// Snapshot of all messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Most recent message
    pub fn last(&self) -> Option<String> {
        self.messages
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.messages.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
