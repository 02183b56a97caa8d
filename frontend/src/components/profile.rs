use crate::auth::use_auth;
use authview::shared::{UserProfile, date};
use authview::{Event, View};
use leptos::prelude::*;

/// One labelled line of the profile panel.
#[component]
fn ProfileItem(
    label: &'static str,
    id: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="profile-item">
            <strong>{label}</strong>
            " "
            <span id=id>{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;

    // Empty while no profile is rendered.
    let field = move |read: fn(&UserProfile) -> String| {
        Signal::derive(move || state.with(|s| s.profile.as_ref().map(read).unwrap_or_default()))
    };

    view! {
        <div
            id="profilePage"
            class="form-container"
            class:active=move || state.with(|s| s.is_active(View::Profile))
        >
            <h2>"User Profile"</h2>
            <div id="profileData">
                <ProfileItem label="Name:" id="profileName" value=field(|p| p.name.clone()) />
                <ProfileItem label="Email:" id="profileEmail" value=field(|p| p.email.clone()) />
                <ProfileItem label="Phone:" id="profilePhone" value=field(|p| p.phone_number.clone()) />
                <ProfileItem label="Role:" id="profileRole" value=field(|p| p.role.clone()) />
                <ProfileItem label="User ID:" id="profileId" value=field(|p| p.id.clone()) />
                <ProfileItem
                    label="Account Created:"
                    id="profileCreated"
                    value=field(|p| date::render_local(&p.created_at))
                />
            </div>
            <button id="logoutButton" class="btn" on:click=move |_| auth.dispatch(Event::LogoutClicked)>
                "Logout"
            </button>
        </div>
    }
}
