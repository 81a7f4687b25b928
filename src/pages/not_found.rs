//! Fallback page and the root redirect.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::provider::SessionContext;
use crate::util::gate::Redirect;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let landing = expect_context::<SessionContext>().config().landing_path;
    view! {
        <div class="page page--not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href=landing>"Go to Dashboard"</A>
        </div>
    }
}

/// Mounted at `/` inside the gate; swaps the history entry for the landing
/// route.
#[component]
pub fn LandingRedirect() -> impl IntoView {
    let redirect = Redirect {
        to: expect_context::<SessionContext>().config().landing_path,
        replace: true,
    };
    let navigate = use_navigate();
    Effect::new(move || navigate(redirect.to, redirect.options()));
}
