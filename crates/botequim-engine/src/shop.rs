//! Shop operations: the shelf, the Saco Surpresa, and A Encomenda.
//!
//! Prices are the caller's business (the shelf charges score + 2, the two
//! bundles are flat-priced; see the catalog constants). The engine only
//! enforces that the buyer can pay.

use botequim_core::catalog::{self, Ingredient};

use crate::bank::apply_balance;
use crate::session::Session;

impl Session {
    /// Buy one ingredient off the shelf for `cost` coins.
    pub async fn purchase_ingredient(&self, code: &str, cost: u32) -> bool {
        let Some(ingredient) = catalog::ingredient_by_code(code) else {
            self.inner.notify_error("Código inválido!");
            return false;
        };
        self.purchase(ingredient, cost, format!("Compra: {}", ingredient.name))
            .await
    }

    /// Buy the Saco Surpresa: `cost` coins for one ingredient drawn at
    /// random from the whole catalog. The gamble is the point — the draw
    /// can be worth less than what it cost.
    pub async fn purchase_random_bundle(&self, cost: u32) -> bool {
        let ingredient = catalog::random_ingredient();
        self.purchase(ingredient, cost, "Saco Surpresa".to_string())
            .await
    }

    /// Buy A Encomenda: any ingredient of the buyer's choice at a flat
    /// premium price.
    pub async fn purchase_named_order(&self, code: &str, cost: u32) -> bool {
        let Some(ingredient) = catalog::ingredient_by_code(code) else {
            self.inner.notify_error("Código inválido!");
            return false;
        };
        self.purchase(
            ingredient,
            cost,
            format!("A Encomenda: {}", ingredient.name),
        )
        .await
    }

    /// Shared purchase path: balance check, single ledger debit, item into
    /// the inventory, one commit.
    async fn purchase(&self, ingredient: &'static Ingredient, cost: u32, description: String) -> bool {
        let mut state = self.inner.working_copy().await;
        let Some(idx) = self.inner.local_index(&state) else {
            return false;
        };
        if state.players[idx].coins < cost {
            self.inner.notify_error("Saldo insuficiente!");
            return false;
        }

        apply_balance(
            &mut state,
            idx,
            -(cost as i64),
            &description,
            self.inner.config.ledger_retention,
        );
        state.players[idx].inventory.push(ingredient.code.to_string());
        self.inner.commit(state).await;
        self.inner.notify_success(format!("Comprou {}", ingredient.name));
        true
    }
}
