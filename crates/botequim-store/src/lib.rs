//! # Botequim Store
//!
//! Boundaries between the game and its environment: the [`DocumentStore`]
//! trait (whole-document replace + snapshot subscription) and the
//! [`IdentityStore`] trait (the tab-local "who am I" cell), plus in-memory
//! implementations of both used by tests and local play.
//!
//! A concrete remote adapter (Firebase-style realtime database, etc.) is a
//! separate crate implementing [`DocumentStore`]; nothing in the engine
//! knows which one is plugged in.

pub mod error;
pub mod identity;
pub mod memory;
pub mod store;

pub use error::{Result, StoreError};
pub use identity::{IdentityStore, MemoryIdentity};
pub use memory::MemoryStore;
pub use store::{DocumentStore, Snapshot, SnapshotReceiver};
