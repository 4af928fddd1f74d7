use contracts::system::auth::session::{self, SessionStorage, StoredSession};
use contracts::system::auth::{LoggedUser, LoginResponse};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage` as the session backend.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Token and token type of the persisted session
pub fn current_session() -> Option<StoredSession> {
    session::load_session(&BrowserStorage)
}

/// Persist a successful login
pub fn save_login(response: &LoginResponse) {
    session::save_login(&BrowserStorage, response);
}

/// User record saved at login or by the last session check
pub fn stored_user() -> Option<LoggedUser> {
    session::stored_user(&BrowserStorage)
}

pub fn stored_display_name() -> Option<String> {
    session::stored_display_name(&BrowserStorage)
}

/// Remove every session key
pub fn clear_session() {
    session::clear_session(&BrowserStorage);
}
