//! authview browser frontend
//!
//! - `auth`: shell construction and context
//! - `components`: tabs, forms and profile panel
//! - `web`: browser implementations of the core seams

mod auth;
mod components {
    pub mod login;
    mod message;
    pub mod profile;
    pub mod signup;
    pub mod tabs;
}
mod web;

use crate::auth::init_auth;
use crate::components::login::LoginPanel;
use crate::components::profile::ProfilePanel;
use crate::components::signup::SignupPanel;
use crate::components::tabs::Tabs;

use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    init_auth();

    view! {
        <div class="container">
            <h1>"Authentication"</h1>
            <Tabs />
            <LoginPanel />
            <SignupPanel />
            <ProfilePanel />
        </div>
    }
}
