//! Top bar with greeting, profile link, and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::provider::SessionContext;

/// Greeting for the signed-in user's display name.
pub fn greeting(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Hello, {name}!"),
        None => "Hello!".to_owned(),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let busy = RwSignal::new(false);

    // The gate observes the signed-out session and replaces history with the
    // login route; no explicit navigation here.
    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            session.logout().await;
            crate::state::remote::set_if_mounted(busy, false);
        });
    };

    view! {
        <nav class="navbar">
            <div class="navbar__left">
                <span class="navbar__app-name">"CRM"</span>
                <span class="navbar__greeting">
                    {move || greeting(session.user().as_ref().map(|u| u.name.as_str()))}
                </span>
            </div>
            <div class="navbar__right">
                <A href="/my-profile" attr:class="navbar__link">
                    "Profile"
                </A>
                <button class="btn navbar__logout" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
