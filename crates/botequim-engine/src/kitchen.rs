//! Kitchen operations: scanning cards, delivering pots, giving up.

use botequim_core::catalog::{self, Recipe};
use botequim_core::state::PlayerRecord;

use crate::bank::apply_balance;
use crate::session::Session;

impl Session {
    /// Resolve a scanned card code and route it to the right place:
    /// ingredients go to the inventory, recipes onto the first empty pot.
    ///
    /// Codes are matched after trimming and uppercasing, so hand-typed
    /// lowercase input resolves. Returns `false` for unknown codes and for
    /// recipes with no pot free.
    pub async fn add_item_by_code(&self, code: &str) -> bool {
        let code = catalog::normalize_code(code);
        let mut state = self.inner.working_copy().await;
        let Some(idx) = self.inner.local_index(&state) else {
            return false;
        };

        if let Some(ingredient) = catalog::ingredient_by_code(&code) {
            state.players[idx].inventory.push(ingredient.code.to_string());
            self.inner.commit(state).await;
            self.inner.notify_success(format!("Item: {}", ingredient.name));
            return true;
        }

        if let Some(recipe) = catalog::recipe_by_code(&code) {
            let Some(pot) = state.players[idx].pots.iter_mut().find(|p| p.is_empty()) else {
                self.inner.notify_error("Panelas cheias!");
                return false;
            };
            pot.recipe_code = Some(recipe.code.to_string());
            pot.start_time = Some(chrono::Utc::now().timestamp_millis());
            self.inner.commit(state).await;
            self.inner.notify_success(format!("{} no fogo!", recipe.name));
            return true;
        }

        self.inner.notify_error("Código inválido!");
        false
    }

    /// Deliver the recipe cooking in the given pot: clear the pot, credit
    /// the reward, and record the sale in the ledger.
    ///
    /// Delivering an empty pot, an unknown pot id, or a pot holding a code
    /// no longer in the catalog is a silent no-op.
    pub async fn deliver_pot(&self, pot_id: u8) -> bool {
        let mut state = self.inner.working_copy().await;
        let Some(idx) = self.inner.local_index(&state) else {
            return false;
        };
        let Some(code) = state.players[idx]
            .pots
            .iter()
            .find(|p| p.id == pot_id)
            .and_then(|p| p.recipe_code.clone())
        else {
            return false;
        };
        let Some(recipe) = catalog::recipe_by_code(&code) else {
            return false;
        };

        if self.inner.config.require_ingredients
            && !consume_ingredients(&mut state.players[idx], recipe)
        {
            self.inner.notify_error("Faltam ingredientes!");
            return false;
        }

        if let Some(pot) = state.players[idx].pots.iter_mut().find(|p| p.id == pot_id) {
            pot.clear();
        }
        let reward = self.inner.config.reward_rule.reward(recipe.value);
        apply_balance(
            &mut state,
            idx,
            reward as i64,
            &format!("Venda: {}", recipe.name),
            self.inner.config.ledger_retention,
        );
        self.inner.commit(state).await;
        self.inner.notify_success(format!("+{reward} moedas!"));
        true
    }

    /// Discard whatever is in the given pot, forfeiting any reward. No
    /// ledger entry; discarding never moved coins.
    pub async fn give_up_pot(&self, pot_id: u8) -> bool {
        let mut state = self.inner.working_copy().await;
        let Some(idx) = self.inner.local_index(&state) else {
            return false;
        };
        let Some(pot) = state.players[idx].pots.iter_mut().find(|p| p.id == pot_id) else {
            return false;
        };
        pot.clear();
        self.inner.commit(state).await;
        self.inner.notify_success("Receita descartada");
        true
    }
}

/// Remove one inventory unit per required ingredient, or leave the player
/// untouched and return `false` if any is missing.
///
/// Requirements naming no ingredient card (some recipes list a generic
/// "Vegetais") are skipped rather than treated as unsatisfiable.
fn consume_ingredients(player: &mut PlayerRecord, recipe: &Recipe) -> bool {
    let mut remaining = player.inventory.clone();
    for name in recipe.ingredients {
        let Some(card) = catalog::ingredient_by_name(name) else {
            continue;
        };
        match remaining.iter().position(|c| c == card.code) {
            Some(i) => {
                remaining.remove(i);
            }
            None => return false,
        }
    }
    player.inventory = remaining;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_takes_one_unit_per_requirement() {
        // Cocada da Massagueira: Açúcar, Coco, Leite.
        let recipe = catalog::recipe_by_code("R-6-AL-2").unwrap();
        let mut player = PlayerRecord::new("Ana", 0);
        player.inventory = vec![
            "I-2-0-5".to_string(),  // Açúcar
            "I-3-0-9".to_string(),  // Coco
            "I-1-0-2".to_string(),  // Leite
            "I-1-0-2".to_string(),  // spare Leite stays
        ];
        assert!(consume_ingredients(&mut player, recipe));
        assert_eq!(player.inventory, vec!["I-1-0-2".to_string()]);
    }

    #[test]
    fn consume_rejects_without_touching_inventory() {
        let recipe = catalog::recipe_by_code("R-6-AL-2").unwrap();
        let mut player = PlayerRecord::new("Ana", 0);
        player.inventory = vec!["I-2-0-5".to_string()]; // Açúcar only
        assert!(!consume_ingredients(&mut player, recipe));
        assert_eq!(player.inventory, vec!["I-2-0-5".to_string()]);
    }

    #[test]
    fn consume_skips_requirements_with_no_card() {
        // Rubação lists "Vegetais", which has no ingredient card.
        let recipe = catalog::RECIPES
            .iter()
            .find(|r| r.ingredients.iter().any(|i| *i == "Vegetais"))
            .unwrap();
        let mut player = PlayerRecord::new("Ana", 0);
        player.inventory = recipe
            .ingredients
            .iter()
            .filter_map(|name| catalog::ingredient_by_name(name))
            .map(|card| card.code.to_string())
            .collect();
        assert!(consume_ingredients(&mut player, recipe));
        assert!(player.inventory.is_empty());
    }
}
