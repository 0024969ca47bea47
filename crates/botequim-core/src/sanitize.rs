//! Defensive normalization of raw session documents.
//!
//! Snapshots arrive from the store as untyped JSON and can be arbitrarily
//! mangled: missing fields, nulls, sequences degraded into keyed maps, or
//! no document at all. [`sanitize`] is a total function — whatever comes
//! in, a structurally valid [`GameState`] comes out, and running it twice
//! yields the same value as running it once.

use serde_json::Value;

use crate::state::{
    GameState, LEDGER_RETENTION, LedgerEntry, LedgerKind, POTS_PER_PLAYER, PlayerRecord, Pot,
    UNKNOWN_PLAYER, default_pots,
};

/// Normalize a raw document (or its absence) into a well-formed game state,
/// capping the ledger at the canonical retention window.
pub fn sanitize(raw: Option<&Value>) -> GameState {
    sanitize_bounded(raw, LEDGER_RETENTION)
}

/// [`sanitize`] with an explicit ledger retention window, for sessions
/// configured away from the default.
pub fn sanitize_bounded(raw: Option<&Value>, retention: usize) -> GameState {
    let Some(raw) = raw else {
        return GameState::default();
    };
    if raw.is_null() {
        return GameState::default();
    }

    let is_started = raw.get("isStarted").map(truthy).unwrap_or(false);

    let mut players: Vec<PlayerRecord> = collection_values(raw.get("players"))
        .into_iter()
        .enumerate()
        .map(|(position, entry)| sanitize_player(entry, position as u32))
        .collect();
    // Stable sort: players that arrived without a join index keep their
    // encounter order relative to each other.
    players.sort_by_key(|p| p.join_index);

    let mut financial_log: Vec<LedgerEntry> = collection_values(raw.get("financialLog"))
        .into_iter()
        .filter_map(sanitize_ledger_entry)
        .collect();
    // Canonical display order: newest first by timestamp, robust to
    // concurrent writers that prepend in different orders.
    financial_log.sort_by_key(|e| std::cmp::Reverse(e.timestamp));
    financial_log.truncate(retention);

    GameState {
        is_started,
        players,
        financial_log,
    }
}

/// Non-null members of a field that should be a sequence.
///
/// The store may represent sparse sequences as keyed maps; in that case the
/// map's values are taken in key order. Anything else yields an empty
/// sequence.
fn collection_values(raw: Option<&Value>) -> Vec<&Value> {
    match raw {
        Some(Value::Array(items)) => items.iter().filter(|v| !v.is_null()).collect(),
        Some(Value::Object(map)) => map.values().filter(|v| !v.is_null()).collect(),
        _ => Vec::new(),
    }
}

fn sanitize_player(raw: &Value, position: u32) -> PlayerRecord {
    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_PLAYER)
        .to_string();

    let coins = raw.get("coins").map(non_negative_int).unwrap_or(0);

    let inventory = collection_values(raw.get("inventory"))
        .into_iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    let pots = sanitize_pots(raw.get("pots"));

    let has_transacted_this_round = raw
        .get("hasTransactedThisRound")
        .map(truthy)
        .unwrap_or(false);

    let join_index = raw
        .get("joinIndex")
        .and_then(Value::as_u64)
        .map(|v| v as u32)
        .unwrap_or(position);

    PlayerRecord {
        name,
        coins,
        inventory,
        pots,
        has_transacted_this_round,
        join_index,
    }
}

/// A player's pots, coerced to exactly two slots with position-pinned ids.
fn sanitize_pots(raw: Option<&Value>) -> Vec<Pot> {
    let entries = collection_values(raw);
    if entries.len() != POTS_PER_PLAYER {
        return default_pots();
    }
    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| Pot {
            id: position as u8,
            recipe_code: entry
                .get("recipeCode")
                .and_then(Value::as_str)
                .map(str::to_string),
            start_time: entry.get("startTime").and_then(Value::as_i64),
        })
        .collect()
}

/// Lenient per-field decode of a ledger entry. Only non-object entries are
/// dropped; the log is append-only and lower-stakes than player records.
fn sanitize_ledger_entry(raw: &Value) -> Option<LedgerEntry> {
    let obj = raw.as_object()?;
    let kind = match obj.get("type").and_then(Value::as_str) {
        Some("loss") => LedgerKind::Loss,
        _ => LedgerKind::Gain,
    };
    Some(LedgerEntry {
        id: obj
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        kind,
        amount: obj.get("amount").map(non_negative_int).unwrap_or(0),
        description: obj
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        timestamp: obj.get("timestamp").and_then(Value::as_i64).unwrap_or(0),
    })
}

/// JS-style truthiness, matching what loosely typed writers put in the
/// document.
fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerce to a non-negative integer; anything else is 0.
fn non_negative_int(v: &Value) -> u32 {
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.max(0).min(u32::MAX as i64) as u32
            } else if let Some(f) = n.as_f64() {
                f.max(0.0).min(u32::MAX as f64) as u32
            } else {
                0
            }
        }
        _ => 0,
    }
}
