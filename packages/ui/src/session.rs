//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] restores the tokens from the platform [`TokenStore`]
//! once at startup and holds them in a signal. Login and logout are the only
//! writers. Views read the session through [`use_session`] and reach the API
//! through [`use_api`], which attaches the current access token at the
//! moment each request is built.

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, LoginUser, Session, SessionConfig, TokenStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppTokenStore = store::LocalStorageTokenStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppTokenStore = store::MemoryTokenStore;

fn make_token_store(keys: SessionConfig) -> AppTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageTokenStore::new(keys)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryTokenStore::with_keys(keys)
    }
}

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// Only known after an interactive login; a restored session has tokens
    /// but no profile.
    pub user: Option<LoginUser>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}

/// Handle for building authenticated requests. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Api {
    base: Signal<ApiClient>,
    state: Signal<SessionState>,
}

impl Api {
    /// A client carrying the session's token as of now.
    pub fn client(&self) -> ApiClient {
        self.base
            .peek()
            .clone()
            .with_session(self.state.peek().session.as_ref())
    }
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_api() -> Api {
    use_context::<Api>()
}

pub fn use_token_store() -> AppTokenStore {
    use_context::<AppTokenStore>()
}

/// Record a successful login.
pub fn begin_session(mut state: Signal<SessionState>, session: Session, user: LoginUser) {
    state.set(SessionState {
        session: Some(session),
        user: Some(user),
    });
}

/// Clear the persisted tokens and the in-memory session.
pub fn end_session(mut state: Signal<SessionState>, tokens: &AppTokenStore) {
    api::actions::logout(tokens);
    state.set(SessionState::default());
}

/// Provides the session, token store and API handle built from `config`.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let tokens = use_hook(|| make_token_store(config.session.clone()));
    let state = use_signal(|| {
        let session = tokens.load();
        tracing::info!(restored = session.is_some(), "session initialised");
        SessionState {
            session,
            user: None,
        }
    });
    let base = use_signal(|| ApiClient::new(&config.api));

    use_context_provider(|| tokens.clone());
    use_context_provider(|| state);
    use_context_provider(|| Api { base, state });

    rsx! {
        {children}
    }
}

/// Button that signs the user out. Navigation is left to `on_logout`.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let state = use_session();
    let tokens = use_token_store();

    let onclick = move |_| {
        end_session(state, &tokens);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
