//! The document store boundary.
//!
//! The game only asks two things of its backing store: replace the whole
//! document at a path, and subscribe to snapshots of that path. Everything
//! else — transport, auth, retry — belongs to the concrete adapter behind
//! this trait.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::error::Result;

/// One observed value of a document. `None` means the document does not
/// exist (never created, or deleted).
pub type Snapshot = Option<Value>;

/// Receiving end of a subscription. Dropping it unsubscribes.
pub type SnapshotReceiver = mpsc::UnboundedReceiver<Snapshot>;

/// A key-value document store reachable over the network.
///
/// Semantics the engine relies on:
///
/// - `replace` overwrites the entire value at `path`; `None` deletes it.
///   Last write wins; there is no compare-and-swap.
/// - `subscribe` delivers the current value immediately, then every
///   subsequent change, at least once per actual change. A client's own
///   writes come back through its own subscription like anyone else's.
/// - No ordering is guaranteed across clients beyond eventual convergence
///   on the last write the store accepted.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Overwrite the entire document at `path`.
    async fn replace(&self, path: &str, value: Snapshot) -> Result<()>;

    /// Subscribe to snapshots of `path`.
    async fn subscribe(&self, path: &str) -> Result<SnapshotReceiver>;
}
