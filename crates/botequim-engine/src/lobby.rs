//! Lobby operations: seating, match start, and session reset.

use botequim_core::state::{GameState, PlayerRecord, Route};
use tracing::info;

use crate::session::Session;

impl Session {
    /// Seat a player at the table under the given name.
    ///
    /// Joining with an already-seated name re-adopts that seat instead of
    /// creating a duplicate record, so a reloaded tab (or a tab racing its
    /// own echoed write) lands back on its existing player. Returns `false`
    /// when the table is full or the name is blank.
    pub async fn join(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        let mut state = self.inner.working_copy().await;
        if state.player(name).is_none() {
            if state.players.len() >= self.inner.config.max_seats {
                self.inner.notify_error("Mesa cheia!");
                return false;
            }
            let join_index = state
                .players
                .iter()
                .map(|p| p.join_index + 1)
                .max()
                .unwrap_or(0);
            info!(name, join_index, "player joined");
            state.players.push(PlayerRecord::new(name, join_index));
            self.inner.commit(state).await;
        }

        self.inner.identity.set(name);
        self.inner.notify_success(format!("Bem-vindo, {name}!"));
        true
    }

    /// Move the whole table past the lobby. Remote tabs follow via the
    /// reconciler's forced lobby-to-home transition.
    pub async fn start_match(&self) {
        let mut state = self.inner.working_copy().await;
        state.is_started = true;
        self.inner.commit(state).await;
        self.inner.set_route(Route::Home).await;
    }

    /// Tear the session down: overwrite the shared document with the
    /// canonical empty state, forget the local identity, and return this
    /// tab to the lobby. Remote tabs converge on the empty table but keep
    /// their screen; their stale identities just stop resolving.
    pub async fn reset_session(&self) {
        info!(path = %self.inner.config.session_path, "session reset");
        self.inner.identity.clear();
        self.inner.set_route(Route::Lobby).await;
        self.inner.commit(GameState::default()).await;
    }
}
