use crate::auth::use_auth;
use crate::components::message::Message;
use authview::{Event, LoginField, View};
use leptos::prelude::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.dispatch(Event::LoginSubmitted);
    };
    let notice = Signal::derive(move || state.with(|s| s.login_notice.clone()));

    view! {
        <div
            id="loginForm"
            class="form-container"
            class:active=move || state.with(|s| s.is_active(View::Login))
        >
            <h2>"Login"</h2>
            <form id="login" on:submit=on_submit>
                <div class="form-group">
                    <label for="loginEmail">"Email"</label>
                    <input
                        type="email"
                        id="loginEmail"
                        required
                        prop:value=move || state.with(|s| s.login_form.email.clone())
                        on:input=move |ev| {
                            auth.dispatch(Event::LoginInput(LoginField::Email, event_target_value(&ev)))
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="loginPassword">"Password"</label>
                    <input
                        type="password"
                        id="loginPassword"
                        required
                        prop:value=move || state.with(|s| s.login_form.password.clone())
                        on:input=move |ev| {
                            auth.dispatch(Event::LoginInput(LoginField::Password, event_target_value(&ev)))
                        }
                    />
                </div>
                <button type="submit" class="btn" disabled=move || state.with(|s| s.pending.login)>
                    "Login"
                </button>
                <Message id="loginMessage" notice=notice />
            </form>
        </div>
    }
}
