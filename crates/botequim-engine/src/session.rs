//! The session: local cache, write path, and subscription reconciler.
//!
//! One `Session` per tab. The session holds the last-known-good
//! [`GameState`], applies optimistic local mutations by rewriting the whole
//! document, and reconciles remote snapshots as they arrive. There is no
//! locking and no compare-and-swap at the store — concurrent writers race
//! and the last write wins, so cache replacement must stay unconditional
//! and idempotent (a client's own echoed write is applied like any other
//! snapshot).

use std::sync::{Arc, Weak};

use botequim_core::sanitize::sanitize_bounded;
use botequim_core::state::{GameState, Notice, NoticeKind, PlayerRecord, Route};
use botequim_store::{DocumentStore, IdentityStore, Snapshot, SnapshotReceiver};
use serde_json::Value;
use tokio::sync::{RwLock, broadcast, mpsc};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};

/// A change to the locally cached game state.
#[derive(Debug, Clone)]
pub struct StateChange {
    /// The new cached state after the change.
    pub new_state: GameState,
    /// Whether this change came from a store snapshot (as opposed to an
    /// optimistic local mutation).
    pub is_remote: bool,
}

/// Handle to one tab's view of a shared table.
///
/// Cloning is cheap and shares the same cache, route, and subscriptions.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(MemoryStore::new());
/// let identity = Arc::new(MemoryIdentity::new());
/// let session = Session::connect(store, identity, EngineConfig::default()).await?;
///
/// session.join("Ana").await;
/// session.start_match().await;
/// session.add_item_by_code("R-9-AL-1").await;
/// session.deliver_pot(0).await;
/// ```
#[derive(Clone)]
pub struct Session {
    pub(crate) inner: Arc<SessionInner>,
}

pub(crate) struct SessionInner {
    pub(crate) identity: Arc<dyn IdentityStore>,
    pub(crate) config: EngineConfig,
    /// Last-known-good state. Replacement is atomic from a reader's point
    /// of view; readers never observe a half-updated document.
    state: RwLock<GameState>,
    route: RwLock<Route>,
    change_tx: broadcast::Sender<StateChange>,
    notice_tx: broadcast::Sender<Notice>,
    /// Outbound writes, drained in order by a single writer task. Keeps
    /// successive commits from landing at the store out of order.
    write_tx: mpsc::UnboundedSender<Value>,
}

impl Session {
    /// Subscribe to the session document, apply the initial snapshot, and
    /// spawn the reconciler.
    ///
    /// When the document does not exist yet, the canonical empty state is
    /// written back once so the store has a seed document.
    pub async fn connect(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityStore>,
        config: EngineConfig,
    ) -> Result<Self> {
        let mut rx = store.subscribe(&config.session_path).await?;

        let (change_tx, _) = broadcast::channel(256);
        let (notice_tx, _) = broadcast::channel(64);
        let write_tx = Self::spawn_writer(store, config.session_path.clone());
        let inner = Arc::new(SessionInner {
            identity,
            config,
            state: RwLock::new(GameState::default()),
            route: RwLock::new(Route::Lobby),
            change_tx,
            notice_tx,
            write_tx,
        });

        // The store delivers the current value immediately; apply it before
        // returning so the caller starts from a reconciled cache.
        match rx.recv().await {
            Some(first) => inner.apply_snapshot(first).await,
            None => {
                return Err(EngineError::Store(botequim_store::StoreError::SubscribeFailed {
                    path: inner.config.session_path.clone(),
                    reason: "snapshot stream closed before first delivery".into(),
                }));
            }
        }

        Self::spawn_reconciler(&inner, rx);
        Ok(Self { inner })
    }

    /// Single writer task draining queued document writes in order. The
    /// task ends when the session (the sending half) is dropped.
    fn spawn_writer(store: Arc<dyn DocumentStore>, path: String) -> mpsc::UnboundedSender<Value> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Value>();
        tokio::spawn(async move {
            while let Some(value) = rx.recv().await {
                if let Err(e) = store.replace(&path, Some(value)).await {
                    warn!(path = %path, error = %e, "session document replace failed");
                }
            }
        });
        tx
    }

    /// Background task applying every subsequent snapshot to the cache.
    ///
    /// Holds only a weak reference so dropping the last `Session` handle
    /// ends the listener.
    fn spawn_reconciler(inner: &Arc<SessionInner>, mut rx: SnapshotReceiver) {
        let weak: Weak<SessionInner> = Arc::downgrade(inner);
        tokio::spawn(async move {
            while let Some(snapshot) = rx.recv().await {
                let Some(inner) = weak.upgrade() else { break };
                inner.apply_snapshot(snapshot).await;
            }
            debug!("snapshot stream ended, reconciler stopped");
        });
    }

    /// The current cached state (cloned snapshot, never half-updated).
    pub async fn state(&self) -> GameState {
        self.inner.state.read().await.clone()
    }

    /// The local player's name, if this tab has joined.
    pub fn local_name(&self) -> Option<String> {
        self.inner.identity.get()
    }

    /// The local player's record, if seated. Absent when the tab has not
    /// joined or the record vanished from a remote write — callers treat
    /// that as a no-op, never an error.
    pub async fn current_player(&self) -> Option<PlayerRecord> {
        let name = self.inner.identity.get()?;
        self.inner.state.read().await.player(&name).cloned()
    }

    /// Which screen this tab is showing.
    pub async fn route(&self) -> Route {
        *self.inner.route.read().await
    }

    /// Explicit navigation from the UI.
    pub async fn navigate(&self, route: Route) {
        *self.inner.route.write().await = route;
    }

    /// Subscribe to cache changes (local mutations and remote snapshots).
    pub fn changes(&self) -> broadcast::Receiver<StateChange> {
        self.inner.change_tx.subscribe()
    }

    /// Subscribe to transient user-facing notifications.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.inner.notice_tx.subscribe()
    }

    /// The session's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }
}

impl SessionInner {
    /// Reconcile one snapshot from the store.
    ///
    /// Sanitizes, then unconditionally replaces the cache — no merge with
    /// pending local writes; the last snapshot wins even if it is older
    /// than an in-flight local write.
    pub(crate) async fn apply_snapshot(&self, snapshot: Snapshot) {
        let Some(value) = snapshot else {
            debug!(path = %self.config.session_path, "session document absent, seeding");
            let empty = GameState::default();
            *self.state.write().await = empty.clone();
            self.fire_replace(&empty);
            let _ = self.change_tx.send(StateChange {
                new_state: empty,
                is_remote: true,
            });
            return;
        };

        let next = sanitize_bounded(Some(&value), self.config.ledger_retention);
        debug!(
            path = %self.config.session_path,
            players = next.players.len(),
            started = next.is_started,
            "snapshot reconciled"
        );
        *self.state.write().await = next.clone();

        // Force the lobby forward once the match starts. Forward only:
        // a tab that already navigated elsewhere is left alone.
        if next.is_started {
            let mut route = self.route.write().await;
            if *route == Route::Lobby {
                *route = Route::Home;
            }
        }

        let _ = self.change_tx.send(StateChange {
            new_state: next,
            is_remote: true,
        });
    }

    /// Optimistically replace the cache and send the whole document to the
    /// store. The write is fire-and-forget: no operation awaits store
    /// confirmation, and a silently lost write is corrected (or not) by the
    /// next snapshot.
    pub(crate) async fn commit(&self, next: GameState) {
        *self.state.write().await = next.clone();
        self.fire_replace(&next);
        let _ = self.change_tx.send(StateChange {
            new_state: next,
            is_remote: false,
        });
    }

    fn fire_replace(&self, state: &GameState) {
        let value = match serde_json::to_value(state) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "session document failed to serialize, write skipped");
                return;
            }
        };
        // Only fails when the writer task is gone, which means the whole
        // session is being torn down.
        let _ = self.write_tx.send(value);
    }

    /// Cloned working copy of the cache for a read-modify-write cycle.
    pub(crate) async fn working_copy(&self) -> GameState {
        self.state.read().await.clone()
    }

    pub(crate) async fn set_route(&self, route: Route) {
        *self.route.write().await = route;
    }

    pub(crate) fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let notice = Notice {
            kind,
            message: message.into(),
        };
        let _ = self.notice_tx.send(notice);
    }

    pub(crate) fn notify_success(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Success, message);
    }

    pub(crate) fn notify_error(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message);
    }

    /// Index of the local player in the given state, if seated.
    pub(crate) fn local_index(&self, state: &GameState) -> Option<usize> {
        let name = self.identity.get()?;
        state.player_index(&name)
    }
}
