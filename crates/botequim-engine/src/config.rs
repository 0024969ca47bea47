//! Session engine configuration.
//!
//! Defaults carry the table rules as printed: four seats, the ledger's
//! 50-entry window, two coins of round income, and the scaled delivery
//! reward.

use botequim_core::catalog;
use botequim_core::state::LEDGER_RETENTION;

/// How the delivery reward is derived from a recipe's printed value.
///
/// Both rules have been played at real tables; the scaled rule is the
/// house default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RewardRule {
    /// `ceil(value / 3)` — a 9-point recipe pays 3 coins.
    #[default]
    ScaledThird,
    /// The printed value, paid in full.
    FullValue,
}

impl RewardRule {
    /// Coins paid out for delivering a recipe of the given value.
    pub fn reward(&self, value: u32) -> u32 {
        match self {
            RewardRule::ScaledThird => value.div_ceil(3),
            RewardRule::FullValue => value,
        }
    }
}

/// Tunable rules for one session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Store path of the shared session document (the "room id").
    pub session_path: String,
    /// Maximum number of seated players.
    pub max_seats: usize,
    /// Ledger retention window.
    pub ledger_retention: usize,
    /// Coins credited by `new_round_income`.
    pub round_income: u32,
    /// Delivery payout rule.
    pub reward_rule: RewardRule,
    /// When true, delivering a pot consumes one unit of every required
    /// ingredient from the cook's inventory and fails if any is missing.
    pub require_ingredients: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            session_path: catalog::SESSION_CODE.to_string(),
            max_seats: 4,
            ledger_retention: LEDGER_RETENTION,
            round_income: catalog::ROUND_INCOME,
            reward_rule: RewardRule::default(),
            require_ingredients: false,
        }
    }
}

impl EngineConfig {
    /// Config for a session at the given store path, default rules.
    pub fn at_path(path: impl Into<String>) -> Self {
        Self {
            session_path: path.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_reward_rounds_up() {
        let rule = RewardRule::ScaledThird;
        assert_eq!(rule.reward(9), 3);
        assert_eq!(rule.reward(19), 7);
        assert_eq!(rule.reward(5), 2);
        assert_eq!(rule.reward(6), 2);
    }

    #[test]
    fn full_value_reward_pays_as_printed() {
        let rule = RewardRule::FullValue;
        assert_eq!(rule.reward(9), 9);
        assert_eq!(rule.reward(19), 19);
    }

    #[test]
    fn default_config_matches_table_rules() {
        let config = EngineConfig::default();
        assert_eq!(config.session_path, "TAB-0-0-0");
        assert_eq!(config.max_seats, 4);
        assert_eq!(config.round_income, 2);
        assert!(!config.require_ingredients);
    }
}
