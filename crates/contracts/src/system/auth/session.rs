//! Persisted session and the startup check that validates it.

use super::{LoggedUser, LoginResponse};
use crate::shared::api_error::ApiError;
use std::future::Future;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const TOKEN_TYPE_KEY: &str = "tokenType";
pub const USER_KEY: &str = "usuarioLogueado";
pub const DISPLAY_NAME_KEY: &str = "nombreApellido";

const ALL_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, TOKEN_TYPE_KEY, USER_KEY, DISPLAY_NAME_KEY];

/// Key/value persistence behind the session (browser `localStorage` in the app).
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub access_token: String,
    pub token_type: String,
}

impl StoredSession {
    /// Value of the `Authorization` header. The token type already carries
    /// its separator (`"Bearer "`), so both parts are joined as stored.
    pub fn authorization_header(&self) -> String {
        format!("{}{}", self.token_type, self.access_token)
    }
}

pub fn load_session(storage: &impl SessionStorage) -> Option<StoredSession> {
    let access_token = storage.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())?;
    Some(StoredSession {
        access_token,
        token_type: storage.get(TOKEN_TYPE_KEY).unwrap_or_default(),
    })
}

pub fn save_login(storage: &impl SessionStorage, response: &LoginResponse) {
    storage.set(ACCESS_TOKEN_KEY, &response.access_token);
    storage.set(TOKEN_TYPE_KEY, &response.token_type);
    store_user(storage, &response.user);
}

pub fn store_user(storage: &impl SessionStorage, user: &LoggedUser) {
    if let Ok(json) = serde_json::to_string(user) {
        storage.set(USER_KEY, &json);
    }
    storage.set(DISPLAY_NAME_KEY, &user.display_name());
}

pub fn stored_user(storage: &impl SessionStorage) -> Option<LoggedUser> {
    storage
        .get(USER_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

pub fn stored_display_name(storage: &impl SessionStorage) -> Option<String> {
    storage.get(DISPLAY_NAME_KEY).filter(|n| !n.is_empty())
}

pub fn clear_session(storage: &impl SessionStorage) {
    for key in ALL_KEYS {
        storage.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Authenticated(LoggedUser),
    Unauthenticated,
}

/// Startup check of the persisted session.
///
/// - no token: unauthenticated, storage untouched
/// - who-am-I succeeds: authenticated, fresh user record stored
/// - who-am-I answers 401/403: stored session cleared
/// - any other failure: unauthenticated, storage kept for the next attempt
pub async fn resolve_session<S, F, Fut>(storage: &S, who_am_i: F) -> SessionState
where
    S: SessionStorage,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<LoggedUser, ApiError>>,
{
    let Some(session) = load_session(storage) else {
        return SessionState::Unauthenticated;
    };
    match who_am_i(session.authorization_header()).await {
        Ok(user) => {
            store_user(storage, &user);
            SessionState::Authenticated(user)
        }
        Err(err) => {
            if err.is_unauthorized() {
                clear_session(storage);
            }
            SessionState::Unauthenticated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage(RefCell<HashMap<String, String>>);

    impl SessionStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn user() -> LoggedUser {
        LoggedUser {
            id: 1,
            cuit: None,
            username: "admin".into(),
            full_name: Some("Admin Contable".into()),
            correo: None,
            roles: vec![],
        }
    }

    fn logged_in() -> MemoryStorage {
        let storage = MemoryStorage::default();
        save_login(
            &storage,
            &LoginResponse {
                access_token: "tok".into(),
                token_type: "Bearer ".into(),
                user: user(),
            },
        );
        storage
    }

    #[test]
    fn test_authorization_header_concatenates() {
        let storage = logged_in();
        let session = load_session(&storage).unwrap();
        assert_eq!(session.authorization_header(), "Bearer tok");
        assert_eq!(stored_display_name(&storage).as_deref(), Some("Admin Contable"));
        assert_eq!(stored_user(&storage), Some(user()));
    }

    #[test]
    fn test_no_token_skips_who_am_i() {
        let storage = MemoryStorage::default();
        let called = Cell::new(false);
        let state = block_on(resolve_session(&storage, |_| {
            called.set(true);
            async { Ok::<LoggedUser, ApiError>(user()) }
        }));
        assert_eq!(state, SessionState::Unauthenticated);
        assert!(!called.get());
    }

    #[test]
    fn test_valid_token_authenticates() {
        let storage = logged_in();
        let state = block_on(resolve_session(&storage, |header| async move {
            assert_eq!(header, "Bearer tok");
            Ok::<LoggedUser, ApiError>(user())
        }));
        assert_eq!(state, SessionState::Authenticated(user()));
    }

    #[test]
    fn test_unauthorized_clears_storage() {
        for status in [401, 403] {
            let storage = logged_in();
            let state = block_on(resolve_session(&storage, |_| async move {
                Err::<LoggedUser, ApiError>(ApiError::from_response(status, ""))
            }));
            assert_eq!(state, SessionState::Unauthenticated);
            assert!(load_session(&storage).is_none());
            assert!(stored_user(&storage).is_none());
            assert!(stored_display_name(&storage).is_none());
        }
    }

    #[test]
    fn test_server_error_keeps_storage() {
        let storage = logged_in();
        let state = block_on(resolve_session(&storage, |_| async {
            Err::<LoggedUser, ApiError>(ApiError::from_response(500, ""))
        }));
        assert_eq!(state, SessionState::Unauthenticated);
        assert!(load_session(&storage).is_some());
    }
}
