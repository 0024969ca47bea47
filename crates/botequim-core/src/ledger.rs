//! Bounded append helper for the shared financial log.
//!
//! The whole document is rewritten on every mutation, so the log must stay
//! bounded or every write's payload would grow without limit.

use crate::state::{GameState, LedgerEntry, LedgerKind};

/// Prepend a freshly stamped entry and trim to the retention window.
pub fn record(
    state: &mut GameState,
    kind: LedgerKind,
    amount: u32,
    description: impl Into<String>,
    retention: usize,
) {
    state
        .financial_log
        .insert(0, LedgerEntry::new(kind, amount, description));
    state.financial_log.truncate(retention);
}
