use crate::auth::use_auth;
use crate::components::message::Message;
use authview::shared::UserRole;
use authview::{Event, SignupField, View, ViewState};
use leptos::prelude::*;

/// A text input of the signup form.
struct TextField {
    field: SignupField,
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    read: fn(&ViewState) -> String,
}

const TEXT_FIELDS: [TextField; 4] = [
    TextField {
        field: SignupField::Name,
        id: "signupName",
        label: "Full Name",
        kind: "text",
        read: |s| s.signup_form.name.clone(),
    },
    TextField {
        field: SignupField::Email,
        id: "signupEmail",
        label: "Email",
        kind: "email",
        read: |s| s.signup_form.email.clone(),
    },
    TextField {
        field: SignupField::PhoneNumber,
        id: "signupPhone",
        label: "Phone Number",
        kind: "text",
        read: |s| s.signup_form.phone_number.clone(),
    },
    TextField {
        field: SignupField::Password,
        id: "signupPassword",
        label: "Password",
        kind: "password",
        read: |s| s.signup_form.password.clone(),
    },
];

#[component]
pub fn SignupPanel() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.dispatch(Event::SignupSubmitted);
    };
    let notice = Signal::derive(move || state.with(|s| s.signup_notice.clone()));

    let inputs = TEXT_FIELDS
        .into_iter()
        .map(|TextField { field, id, label, kind, read }| {
            view! {
                <div class="form-group">
                    <label for=id>{label}</label>
                    <input
                        type=kind
                        id=id
                        required
                        prop:value=move || state.with(read)
                        on:input=move |ev| auth.dispatch(Event::SignupInput(field, event_target_value(&ev)))
                    />
                </div>
            }
        })
        .collect_view();

    let roles = UserRole::ALL
        .into_iter()
        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
        .collect_view();

    view! {
        <div
            id="signupForm"
            class="form-container"
            class:active=move || state.with(|s| s.is_active(View::Signup))
        >
            <h2>"Sign Up"</h2>
            <form id="signup" on:submit=on_submit>
                {inputs}
                <div class="form-group">
                    <label for="signupRole">"Role"</label>
                    <select
                        id="signupRole"
                        required
                        prop:value=move || state.with(|s| s.signup_form.role.as_str().to_string())
                        on:change=move |ev| {
                            auth.dispatch(Event::SignupInput(SignupField::Role, event_target_value(&ev)))
                        }
                    >
                        {roles}
                    </select>
                </div>
                <button type="submit" class="btn" disabled=move || state.with(|s| s.pending.signup)>
                    "Sign Up"
                </button>
                <Message id="signupMessage" notice=notice />
            </form>
        </div>
    }
}
