// ============================================================================
// SESSION STORE - Bearer token with localStorage persistence
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, TOKEN_STORAGE_KEY};

/// Holds the current credential. The in-memory cache is populated from
/// localStorage once at construction; `set`/`clear` write through
/// immediately so a reload re-arms the session without a network round trip.
///
/// Clones share the same cache, so the gateway client and the auth provider
/// always observe the same credential.
#[derive(Clone, Default)]
pub struct SessionStore {
    token: Rc<RefCell<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            token: Rc::new(RefCell::new(load_from_storage(TOKEN_STORAGE_KEY))),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
        if let Err(e) = save_to_storage(TOKEN_STORAGE_KEY, token) {
            log::warn!("Failed to persist token: {}", e);
        }
    }

    pub fn clear(&self) {
        *self.token.borrow_mut() = None;
        if let Err(e) = remove_from_storage(TOKEN_STORAGE_KEY) {
            log::warn!("Failed to clear persisted token: {}", e);
        }
    }
}
