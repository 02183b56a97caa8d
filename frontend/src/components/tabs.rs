use crate::auth::use_auth;
use authview::{Event, View};
use leptos::prelude::*;

/// Navigation tabs. The profile tab only shows with a session.
#[component]
pub fn Tabs() -> impl IntoView {
    let auth = use_auth();

    let tabs = View::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    id=format!("{}Tab", tab.as_str())
                    class="tab"
                    class:active=move || auth.state.with(|s| s.is_active(tab))
                    class:hidden=move || auth.state.with(|s| !s.is_tab_visible(tab))
                    on:click=move |_| auth.dispatch(Event::TabClicked(tab))
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="tabs">{tabs}</div> }
}
