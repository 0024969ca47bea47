//! Bank operations: balance movements, refunds, trades, and round income.

use botequim_core::ledger;
use botequim_core::state::{GameState, LedgerKind, Trade};
use botequim_core::catalog;

use crate::session::Session;

impl Session {
    /// Move the local player's balance by `amount` (negative = debit) and
    /// record it in the shared ledger under the given description.
    ///
    /// Debits clamp at zero rather than going negative; the ledger entry
    /// still records the full requested amount.
    pub async fn update_balance(&self, amount: i64, description: &str) -> bool {
        let mut state = self.inner.working_copy().await;
        let Some(idx) = self.inner.local_index(&state) else {
            return false;
        };
        apply_balance(
            &mut state,
            idx,
            amount,
            description,
            self.inner.config.ledger_retention,
        );
        self.inner.commit(state).await;
        true
    }

    /// Hand coins back to the till ("Reembolso"), e.g. after a mis-scan.
    pub async fn refund(&self, amount: u32) -> bool {
        self.update_balance(-(amount as i64), "Reembolso").await
    }

    /// Send coins or one inventory item to another seated player.
    ///
    /// One trade per round per sender. A vanished target (removed by a
    /// remote write between the UI render and the call) is a silent no-op,
    /// as is offering an item the sender no longer holds.
    pub async fn trade(&self, target: &str, offer: Trade) -> bool {
        let mut state = self.inner.working_copy().await;
        let Some(sender_idx) = self.inner.local_index(&state) else {
            return false;
        };
        if state.players[sender_idx].has_transacted_this_round {
            self.inner.notify_error("Apenas 1 troca por rodada!");
            return false;
        }
        let Some(receiver_idx) = state.player_index(target) else {
            return false;
        };
        if sender_idx == receiver_idx {
            return false;
        }

        let (amount, summary) = match &offer {
            Trade::Coins { amount } => {
                if state.players[sender_idx].coins < *amount {
                    self.inner.notify_error("Saldo insuficiente!");
                    return false;
                }
                state.players[sender_idx].coins -= amount;
                state.players[receiver_idx].coins =
                    state.players[receiver_idx].coins.saturating_add(*amount);
                (*amount, format!("${amount}"))
            }
            Trade::Item { code } => {
                let code = catalog::normalize_code(code);
                let Some(pos) = state.players[sender_idx]
                    .inventory
                    .iter()
                    .position(|c| *c == code)
                else {
                    return false;
                };
                let item = state.players[sender_idx].inventory.remove(pos);
                state.players[receiver_idx].inventory.push(item);
                (1, "Item".to_string())
            }
        };

        state.players[sender_idx].has_transacted_this_round = true;
        let sender = state.players[sender_idx].name.clone();
        ledger::record(
            &mut state,
            LedgerKind::Loss,
            amount,
            format!("{sender} enviou {summary} para {target}"),
            self.inner.config.ledger_retention,
        );
        self.inner.commit(state).await;
        self.inner.notify_success(format!("Enviado para {target}"));
        true
    }

    /// Claim the new round: fixed income plus a fresh trade allowance.
    pub async fn new_round_income(&self) -> bool {
        let mut state = self.inner.working_copy().await;
        let Some(idx) = self.inner.local_index(&state) else {
            return false;
        };
        let income = self.inner.config.round_income;
        apply_balance(
            &mut state,
            idx,
            income as i64,
            "Bônus Rodada",
            self.inner.config.ledger_retention,
        );
        state.players[idx].has_transacted_this_round = false;
        self.inner.commit(state).await;
        self.inner
            .notify_success(format!("Recebeu +{income} da rodada!"));
        true
    }
}

/// Apply a signed balance delta to one player and record it, prefixed with
/// the player's name the way the shared ledger displays it.
///
/// The balance saturates at both ends: debits floor at zero, credits cap at
/// `u32::MAX`. No input can overflow or wrap.
pub(crate) fn apply_balance(
    state: &mut GameState,
    idx: usize,
    delta: i64,
    description: &str,
    retention: usize,
) {
    let player = &mut state.players[idx];
    player.coins = (player.coins as i64)
        .saturating_add(delta)
        .clamp(0, u32::MAX as i64) as u32;
    let name = player.name.clone();
    let kind = if delta >= 0 { LedgerKind::Gain } else { LedgerKind::Loss };
    ledger::record(
        state,
        kind,
        u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX),
        format!("{name}: {description}"),
        retention,
    );
}
