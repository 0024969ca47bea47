//! # Botequim Engine
//!
//! Client-side session engine for a shared-table cooking game: an
//! optimistic local cache of the shared [`GameState`], the full set of
//! mutation operations, and a reconciler that applies store snapshots as
//! they arrive. Last write wins end to end — there is no locking, no
//! version vector, and no merge.
//!
//! The engine talks to its environment only through the
//! [`DocumentStore`](botequim_store::DocumentStore) and
//! [`IdentityStore`](botequim_store::IdentityStore) traits, so the same
//! session code runs against the in-memory store in tests and a remote
//! adapter in production.
//!
//! ```ignore
//! use std::sync::Arc;
//! use botequim_engine::{EngineConfig, Session};
//! use botequim_store::{MemoryIdentity, MemoryStore};
//!
//! let session = Session::connect(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(MemoryIdentity::new()),
//!     EngineConfig::default(),
//! )
//! .await?;
//! session.join("Ana").await;
//! ```

pub mod config;
pub mod error;
pub mod session;

mod bank;
mod kitchen;
mod lobby;
mod shop;

pub use config::{EngineConfig, RewardRule};
pub use error::{EngineError, Result};
pub use session::{Session, StateChange};

pub use botequim_core::state::{
    GameState, LedgerEntry, LedgerKind, Notice, NoticeKind, PlayerRecord, Pot, Route, Trade,
};
