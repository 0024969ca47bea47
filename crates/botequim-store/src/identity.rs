//! Tab-local identity storage.
//!
//! Remembers "who am I" across reloads of the same tab. Not shared across
//! tabs and independent of the shared document — a plain key-value cell.

use std::sync::RwLock;

/// One string cell holding the local player's name.
pub trait IdentityStore: Send + Sync + 'static {
    fn get(&self) -> Option<String>;
    fn set(&self, name: &str);
    fn clear(&self);
}

/// Process-local [`IdentityStore`] for tests and headless sessions.
#[derive(Default)]
pub struct MemoryIdentity {
    name: RwLock<Option<String>>,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for MemoryIdentity {
    fn get(&self) -> Option<String> {
        self.name.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set(&self, name: &str) {
        *self.name.write().unwrap_or_else(|e| e.into_inner()) = Some(name.to_string());
    }

    fn clear(&self) {
        *self.name.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
