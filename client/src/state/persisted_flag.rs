//! Authentication flag mirrored into browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flag is written to two storage areas under the same key: the
//! session-scoped area (`sessionStorage`) and the durable area
//! (`localStorage`). Only the durable mirror is consulted after a reload, and
//! only as a hint: the server verification call stays authoritative.
//!
//! Browser access is hydrate-only; during SSR `BrowserStorage` is a no-op so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "persisted_flag_test.rs"]
mod persisted_flag_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key shared by both mirrors.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

const FLAG_SET: &str = "true";

/// Minimal string key/value store, shaped after the Web Storage API.
pub trait FlagStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Which mirror to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageScope {
    /// Lives as long as the browsing session.
    Session,
    /// Survives browser restarts.
    Durable,
}

/// The two storage mirrors of the authentication flag.
#[derive(Clone, Debug)]
pub struct PersistedFlag<S> {
    session: S,
    durable: S,
}

impl<S: FlagStorage> PersistedFlag<S> {
    pub fn new(session: S, durable: S) -> Self {
        Self { session, durable }
    }

    /// Mirror a successful login.
    ///
    /// The durable mirror is written only when `persist` is set; otherwise
    /// any older durable value is removed.
    pub fn record_login(&self, persist: bool) {
        self.session.set_item(AUTH_FLAG_KEY, FLAG_SET);
        if persist {
            self.durable.set_item(AUTH_FLAG_KEY, FLAG_SET);
        } else {
            self.durable.remove_item(AUTH_FLAG_KEY);
        }
    }

    /// Bring both mirrors in line with a server verification outcome.
    ///
    /// A confirmed session is written to the session mirror while the
    /// durable mirror keeps whatever the last login chose. A refused one
    /// clears both.
    pub fn record_verification(&self, confirmed: bool) {
        if confirmed {
            self.record_login(self.restore());
        } else {
            self.clear();
        }
    }

    /// Remove the flag from both mirrors.
    pub fn clear(&self) {
        self.session.remove_item(AUTH_FLAG_KEY);
        self.durable.remove_item(AUTH_FLAG_KEY);
    }

    /// Hint used after a reload: the durable mirror only.
    pub fn restore(&self) -> bool {
        self.is_set(StorageScope::Durable)
    }

    pub fn is_set(&self, scope: StorageScope) -> bool {
        self.raw(scope).as_deref() == Some(FLAG_SET)
    }

    /// Raw stored value, `None` when the key is absent.
    pub fn raw(&self, scope: StorageScope) -> Option<String> {
        match scope {
            StorageScope::Session => self.session.get_item(AUTH_FLAG_KEY),
            StorageScope::Durable => self.durable.get_item(AUTH_FLAG_KEY),
        }
    }
}

// =============================================================================
// IN-MEMORY STORAGE
// =============================================================================

/// Shared in-memory storage. Clones see the same entries, which lets a
/// caller rebuild a `PersistedFlag` over the same durable area to model a
/// page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl FlagStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// `sessionStorage` / `localStorage` of the current window.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    scope: StorageScope,
}

impl BrowserStorage {
    pub const fn new(scope: StorageScope) -> Self {
        Self { scope }
    }

    #[cfg(feature = "hydrate")]
    fn storage(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.scope {
            StorageScope::Session => window.session_storage(),
            StorageScope::Durable => window.local_storage(),
        };
        storage.ok().flatten()
    }
}

impl FlagStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.scope, key);
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("storage write rejected: scope={:?} key={key}", self.scope);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// The flag mirrors of the current browser window.
pub fn browser_flag() -> PersistedFlag<BrowserStorage> {
    PersistedFlag::new(
        BrowserStorage::new(StorageScope::Session),
        BrowserStorage::new(StorageScope::Durable),
    )
}
