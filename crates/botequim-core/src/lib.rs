//! # Botequim Core
//!
//! Shared game-state model for Mesa do Botequim: the session document that
//! every tab reads and rewrites, the compiled-in ingredient/recipe
//! catalogs, and the defensive sanitizer that turns whatever the store
//! delivers into a well-formed [`GameState`].
//!
//! This crate is pure data — no I/O, no async. The store boundary lives in
//! `botequim-store` and the mutation engine in `botequim-engine`.

pub mod catalog;
pub mod ledger;
pub mod sanitize;
pub mod state;

pub use catalog::{Ingredient, Recipe};
pub use sanitize::{sanitize, sanitize_bounded};
pub use state::{
    GameState, LEDGER_RETENTION, LedgerEntry, LedgerKind, Notice, NoticeKind, POTS_PER_PLAYER,
    PlayerRecord, Pot, Route, Trade, UNKNOWN_PLAYER,
};
