//! In-memory document store.
//!
//! Backs tests and single-machine play without a remote store. Documents
//! live in a [`DashMap`]; each subscriber gets its own unbounded channel
//! and the fan-out on write models the at-least-once, last-write-wins
//! delivery of the real thing.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::Result;
use crate::store::{DocumentStore, Snapshot, SnapshotReceiver};

/// A process-local [`DocumentStore`].
#[derive(Default)]
pub struct MemoryStore {
    documents: DashMap<String, Value>,
    watchers: DashMap<String, Vec<mpsc::UnboundedSender<Snapshot>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct read of the current value, bypassing subscriptions. Test
    /// convenience; the engine itself only ever reads via `subscribe`.
    pub fn get(&self, path: &str) -> Snapshot {
        self.documents.get(path).map(|v| v.clone())
    }

    fn fan_out(&self, path: &str, value: &Snapshot) {
        if let Some(mut senders) = self.watchers.get_mut(path) {
            // Closed receivers were dropped by their subscriber; prune them.
            senders.retain(|tx| tx.send(value.clone()).is_ok());
            debug!(path, subscribers = senders.len(), "snapshot fanned out");
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn replace(&self, path: &str, value: Snapshot) -> Result<()> {
        match &value {
            Some(v) => {
                self.documents.insert(path.to_string(), v.clone());
            }
            None => {
                self.documents.remove(path);
            }
        }
        self.fan_out(path, &value);
        Ok(())
    }

    async fn subscribe(&self, path: &str) -> Result<SnapshotReceiver> {
        let (tx, rx) = mpsc::unbounded_channel();
        // Register under the watchers entry lock, reading the current value
        // while holding it. A concurrent replace either lands before the
        // read (and is the value delivered) or blocks on the entry until the
        // sender is registered, so no write falls in between.
        let mut senders = self.watchers.entry(path.to_string()).or_default();
        let _ = tx.send(self.get(path));
        senders.push(tx);
        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn subscribe_delivers_current_value_first() {
        let store = MemoryStore::new();
        let mut rx = store.subscribe("t").await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), None);

        store.replace("t", Some(json!({"isStarted": false}))).await.unwrap();
        let mut rx2 = store.subscribe("t").await.unwrap();
        assert_eq!(rx2.recv().await.unwrap(), Some(json!({"isStarted": false})));
    }

    #[tokio::test]
    async fn replace_fans_out_to_all_subscribers() {
        let store = MemoryStore::new();
        let mut a = store.subscribe("t").await.unwrap();
        let mut b = store.subscribe("t").await.unwrap();
        assert_eq!(a.recv().await.unwrap(), None);
        assert_eq!(b.recv().await.unwrap(), None);

        store.replace("t", Some(json!(1))).await.unwrap();
        assert_eq!(a.recv().await.unwrap(), Some(json!(1)));
        assert_eq!(b.recv().await.unwrap(), Some(json!(1)));
    }

    #[tokio::test]
    async fn writer_receives_its_own_write() {
        let store = MemoryStore::new();
        let mut rx = store.subscribe("t").await.unwrap();
        let _ = rx.recv().await.unwrap();

        store.replace("t", Some(json!("mine"))).await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), Some(json!("mine")));
    }

    #[tokio::test]
    async fn replace_with_none_deletes() {
        let store = MemoryStore::new();
        store.replace("t", Some(json!(1))).await.unwrap();
        let mut rx = store.subscribe("t").await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), Some(json!(1)));

        store.replace("t", None).await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), None);
        assert_eq!(store.get("t"), None);
    }

    #[tokio::test]
    async fn dropped_subscribers_are_pruned() {
        let store = MemoryStore::new();
        let rx = store.subscribe("t").await.unwrap();
        drop(rx);
        // Must not error or panic with a closed receiver in the list.
        store.replace("t", Some(json!(1))).await.unwrap();
        assert_eq!(store.watchers.get("t").unwrap().len(), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn subscriber_never_misses_a_concurrent_replace() {
        // Race a replace against subscribe on every iteration. Whatever
        // interleaving happens, the last value the subscriber sees must be
        // the written one — a write may land before or after the initial
        // delivery, but never in a gap where it reaches nobody.
        use std::sync::Arc;
        let store = Arc::new(MemoryStore::new());
        for i in 0..100 {
            let path = format!("t{i}");
            let writer = {
                let store = store.clone();
                let path = path.clone();
                tokio::spawn(async move {
                    store.replace(&path, Some(json!(i))).await.unwrap();
                })
            };
            let mut rx = store.subscribe(&path).await.unwrap();
            writer.await.unwrap();

            let mut last = rx.recv().await.unwrap();
            while let Ok(next) = rx.try_recv() {
                last = next;
            }
            assert_eq!(last, Some(json!(i)), "iteration {i}");
        }
    }

    #[tokio::test]
    async fn paths_are_independent() {
        let store = MemoryStore::new();
        let mut a = store.subscribe("a").await.unwrap();
        let _ = a.recv().await.unwrap();

        store.replace("b", Some(json!(2))).await.unwrap();
        assert!(a.try_recv().is_err());
    }
}
