//! Session handle registry.
//!
//! Remembers which "platform:handle" pairs a session has added so the
//! roast and recommend tools work without arguments. Entries are
//! de-duplicated and keep insertion order; nothing expires, the store
//! lives as long as the process.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Session key used when the transport supplies none.
pub const DEFAULT_SESSION: &str = "default";

/// Shared handle store, cloneable into request state.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` for `session` if absent; returns the session's full
    /// list afterwards.
    ///
    /// The membership check and the push run under one write lock, so
    /// concurrent adds cannot drop each other.
    pub async fn add(&self, session: &str, entry: &str) -> Vec<String> {
        let mut sessions = self.inner.write().await;
        let entries = sessions.entry(session.to_string()).or_default();
        if !entries.iter().any(|e| e == entry) {
            entries.push(entry.to_string());
        }
        entries.clone()
    }

    /// Snapshot of the session's stored handles, in insertion order.
    pub async fn get(&self, session: &str) -> Vec<String> {
        self.inner
            .read()
            .await
            .get(session)
            .cloned()
            .unwrap_or_default()
    }
}
