//! Auth context
//!
//! Builds the shell, mirrors its state into a signal, and shares both with the
//! components through Leptos context. Components only read `state` and send
//! events through `dispatch`.

use crate::web::{BrowserTimer, GlooHttpClient, LocalTokenStore, page_origin};
use authview::config::{ENV_API_URL, ENV_SIGNUP_REDIRECT_MS, ENV_TOKEN_KEY};
use authview::{AuthGateway, ClientConfig, Event, Shell, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

pub type BrowserShell = Shell<GlooHttpClient, LocalTokenStore, BrowserTimer>;

/// Shared handle to the controller state and its shell.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Latest controller state (read-only).
    pub state: ReadSignal<ViewState>,
    shell: StoredValue<Rc<BrowserShell>, LocalStorage>,
}

impl AuthContext {
    /// Run `event` through the shell on a local task.
    pub fn dispatch(&self, event: Event) {
        let shell = self.shell.get_value();
        spawn_local(async move {
            shell.dispatch(event).await;
        });
    }
}

/// Get the auth context provided by [`init_auth`].
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Build-time overrides, falling back to the page origin for the API URL.
fn lookup(key: &str) -> Option<String> {
    let baked = match key {
        ENV_API_URL => option_env!("AUTHVIEW_API_URL"),
        ENV_TOKEN_KEY => option_env!("AUTHVIEW_TOKEN_KEY"),
        ENV_SIGNUP_REDIRECT_MS => option_env!("AUTHVIEW_SIGNUP_REDIRECT_MS"),
        _ => None,
    };
    match baked {
        Some(value) => Some(value.to_string()),
        None if key == ENV_API_URL => page_origin(),
        None => None,
    }
}

/// Create the shell, provide the context, and run the page-load check.
pub fn init_auth() -> AuthContext {
    let config = ClientConfig::from_lookup(lookup);
    log::info!("auth service at {}", config.api_url);

    let (state, set_state) = signal(ViewState::default());
    let store = LocalTokenStore::new(config.token_key.clone());
    let gateway = AuthGateway::new(GlooHttpClient, config);
    let shell = Rc::new(
        Shell::new(gateway, store, BrowserTimer)
            .with_observer(move |next: &ViewState| set_state.set(next.clone())),
    );

    let ctx = AuthContext {
        state,
        shell: StoredValue::new_local(shell.clone()),
    };
    provide_context(ctx);

    spawn_local(async move {
        shell.start().await;
    });
    ctx
}
