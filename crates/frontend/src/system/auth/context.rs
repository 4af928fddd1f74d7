use contracts::system::auth::session::{resolve_session, SessionState};
use contracts::system::auth::{login_error_message, LoggedUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::storage::BrowserStorage;
use super::{api, guard, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// True until the stored session has been checked against the backend.
    pub checking: bool,
    pub access_token: Option<String>,
    pub user_info: Option<LoggedUser>,
}

impl AuthState {
    fn checking() -> Self {
        Self {
            checking: true,
            ..Default::default()
        }
    }

    fn authenticated(user: LoggedUser) -> Self {
        Self {
            checking: false,
            access_token: storage::current_session().map(|s| s.access_token),
            user_info: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::checking());

    // Validate the stored session once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match resolve_session(&BrowserStorage, api::who_am_i).await {
                SessionState::Authenticated(user) => {
                    log::info!("session restored for '{}'", user.username);
                    set_auth_state.set(AuthState::authenticated(user));
                }
                SessionState::Unauthenticated => {
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Name shown in the header: stored display name, else the session user.
pub fn display_name(state: &AuthState) -> String {
    storage::stored_display_name()
        .or_else(|| state.user_info.as_ref().map(|u| u.display_name()))
        .unwrap_or_else(|| "Usuario".to_string())
}

/// Helper: Perform login. The error is the message for the login form.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(username, password).await.map_err(|e| {
        log::warn!("login failed: {e}");
        login_error_message(&e)
    })?;

    storage::save_login(&response);
    set_auth_state.set(AuthState::authenticated(response.user));
    guard::replace_url("/");

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    guard::replace_url(guard::LOGIN_PATH);
}
