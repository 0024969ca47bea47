//! The shared session document and its building blocks.
//!
//! One `GameState` value is the whole table: every mutation computes a new
//! full document and replaces the old one at the store, so every type here
//! is cheap to clone and serializes with the camelCase field names the
//! backing store already holds.

use serde::{Deserialize, Serialize};

/// How many pots each player cooks with.
pub const POTS_PER_PLAYER: usize = 2;

/// How many ledger entries the shared financial log retains.
pub const LEDGER_RETENTION: usize = 50;

/// Placeholder name for a player record that arrived without one.
pub const UNKNOWN_PLAYER: &str = "desconhecido";

/// The single shared document describing one table of players.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Whether the match has moved past the lobby.
    pub is_started: bool,
    /// One record per seated player, in join order.
    pub players: Vec<PlayerRecord>,
    /// Shared financial log, newest first, capped at [`LEDGER_RETENTION`].
    pub financial_log: Vec<LedgerEntry>,
}

impl GameState {
    /// Look up a player by name (the de-facto primary key).
    pub fn player(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Index of a player by name.
    pub fn player_index(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }
}

/// One seated player's slice of the shared document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Display name, unique within the table, immutable after join.
    pub name: String,
    /// Coin balance. Never negative; debits clamp at zero.
    pub coins: u32,
    /// Multiset of ingredient codes. Duplicates allowed; removal is
    /// first-match.
    pub inventory: Vec<String>,
    /// Exactly two cooking slots.
    pub pots: Vec<Pot>,
    /// One peer-to-peer trade per round; reset by claiming round income.
    pub has_transacted_this_round: bool,
    /// Seat order at join time. Keeps player ordering deterministic even
    /// when the store degrades the players array into a keyed map.
    #[serde(default)]
    pub join_index: u32,
}

impl PlayerRecord {
    /// A freshly seated player: zero coins, empty inventory, two cold pots.
    pub fn new(name: impl Into<String>, join_index: u32) -> Self {
        Self {
            name: name.into(),
            coins: 0,
            inventory: Vec::new(),
            pots: default_pots(),
            has_transacted_this_round: false,
            join_index,
        }
    }
}

/// The canonical two-empty-pots sequence.
pub fn default_pots() -> Vec<Pot> {
    (0..POTS_PER_PLAYER as u8).map(Pot::empty).collect()
}

/// A single cooking slot. `recipe_code == None` is the sole empty sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pot {
    /// Stable position within the player's pot list (0 or 1).
    pub id: u8,
    /// Code of the recipe on the fire, if any.
    pub recipe_code: Option<String>,
    /// When cooking started (epoch millis). Informational only; delivery
    /// is not time-gated.
    pub start_time: Option<i64>,
}

impl Pot {
    /// An empty pot at the given position.
    pub fn empty(id: u8) -> Self {
        Self {
            id,
            recipe_code: None,
            start_time: None,
        }
    }

    /// Whether nothing is cooking here.
    pub fn is_empty(&self) -> bool {
        self.recipe_code.is_none()
    }

    /// Return the pot to the empty state.
    pub fn clear(&mut self) {
        self.recipe_code = None;
        self.start_time = None;
    }
}

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    Gain,
    Loss,
}

/// One line of the shared financial log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Opaque unique id. Uniqueness only; ordering comes from `timestamp`.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LedgerKind,
    /// Magnitude of the movement, always non-negative.
    pub amount: u32,
    pub description: String,
    /// Epoch millis at creation; the canonical display order is by this
    /// field, descending.
    pub timestamp: i64,
}

impl LedgerEntry {
    /// Create an entry stamped with the current time and a random id.
    pub fn new(kind: LedgerKind, amount: u32, description: impl Into<String>) -> Self {
        Self {
            id: random_entry_id(),
            kind,
            amount,
            description: description.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Short random alphanumeric id for ledger entries.
fn random_entry_id() -> String {
    use rand::Rng;
    use rand::distr::Alphanumeric;

    rand::rng()
        .sample_iter(Alphanumeric)
        .take(9)
        .map(char::from)
        .collect()
}

/// What a player hands over in a peer-to-peer trade.
#[derive(Debug, Clone, PartialEq)]
pub enum Trade {
    /// Move coins from sender to target.
    Coins { amount: u32 },
    /// Move one unit of an ingredient (first match in the sender's
    /// inventory) to the target.
    Item { code: String },
}

/// Which screen a tab is showing. The engine only ever forces the
/// lobby-to-home transition; everything else is explicit navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Lobby,
    Home,
    Shop,
    Bank,
    Cookbook,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, auto-dismissing notification describing the outcome of a
/// user-initiated action.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_cold() {
        let p = PlayerRecord::new("Ana", 0);
        assert_eq!(p.coins, 0);
        assert!(p.inventory.is_empty());
        assert_eq!(p.pots.len(), POTS_PER_PLAYER);
        assert!(p.pots.iter().all(Pot::is_empty));
        assert!(!p.has_transacted_this_round);
    }

    #[test]
    fn pot_clear_resets_both_fields() {
        let mut pot = Pot {
            id: 1,
            recipe_code: Some("R-9-AL-1".into()),
            start_time: Some(1_700_000_000_000),
        };
        pot.clear();
        assert!(pot.is_empty());
        assert_eq!(pot.start_time, None);
    }

    #[test]
    fn ledger_entry_ids_are_distinct() {
        let a = LedgerEntry::new(LedgerKind::Gain, 3, "Venda");
        let b = LedgerEntry::new(LedgerKind::Gain, 3, "Venda");
        assert_eq!(a.id.len(), 9);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn document_serializes_with_store_field_names() {
        let mut state = GameState::default();
        state.players.push(PlayerRecord::new("Ana", 0));
        state
            .financial_log
            .push(LedgerEntry::new(LedgerKind::Loss, 4, "Saco Surpresa"));

        let value = serde_json::to_value(&state).unwrap();
        assert!(value.get("isStarted").is_some());
        assert!(value.get("financialLog").is_some());
        let player = &value["players"][0];
        assert!(player.get("hasTransactedThisRound").is_some());
        assert!(player.get("joinIndex").is_some());
        assert_eq!(player["pots"][0]["recipeCode"], serde_json::Value::Null);
        assert_eq!(value["financialLog"][0]["type"], "loss");
    }
}
