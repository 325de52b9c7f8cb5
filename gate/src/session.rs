//! Session-state providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the presence flag; the guard only ever reads and
//! clears it. Keeping the store behind a trait lets the guard run against
//! an in-memory map in tests and `localStorage` in the browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::GateError;

/// Key-value store holding the presence flag.
pub trait SessionStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, GateError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn clear(&self, key: &str) -> Result<(), GateError>;
}

/// Whether a usable presence flag is stored under `key`.
///
/// An empty value or a failed read counts as absent.
pub fn is_present(store: &dyn SessionStore, key: &str) -> bool {
    match store.get(key) {
        Ok(Some(value)) => !value.is_empty(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("session read failed for {key}: {e}");
            false
        }
    }
}

/// In-process store for tests and native embedders.
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with `key` already set to `value`.
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    /// Store whose every access fails, as `localStorage` does when disabled.
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.unavailable.set(true);
        store
    }

    /// Set `key`, standing in for the login page.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check(&self) -> Result<(), GateError> {
        if self.unavailable.get() {
            return Err(GateError::Unavailable("session storage"));
        }
        Ok(())
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Result<Option<String>, GateError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn clear(&self, key: &str) -> Result<(), GateError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
