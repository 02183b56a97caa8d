//! Token persistence in `window.localStorage`
//!
//! The token is stored raw under the configured key, so pages written by
//! other clients of the same auth service read it back unchanged.

use authview::TokenStore;
use web_sys::Storage;

/// Session token kept in LocalStorage under a fixed key.
///
/// Storage failures (private mode, quota, no window) are logged and treated
/// as "no token"; the page keeps working as a logged-out session.
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Option<Storage> {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            Some(Err(e)) => {
                log::error!("localStorage unavailable: {:?}", e);
                None
            }
            _ => {
                log::warn!("no localStorage for {}", self.key);
                None
            }
        }
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        let storage = self.storage()?;
        match storage.get_item(&self.key) {
            Ok(token) => token,
            Err(e) => {
                log::error!("could not read {}: {:?}", self.key, e);
                None
            }
        }
    }

    fn set(&self, token: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token) {
            log::error!("could not write {}: {:?}", self.key, e);
        }
    }

    fn clear(&self) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(&self.key) {
            log::error!("could not remove {}: {:?}", self.key, e);
        }
    }
}
