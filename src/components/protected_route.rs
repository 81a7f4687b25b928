//! Route wrapper enforcing the authorization gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the parent of every signed-in route. It holds no state of its
//! own: the rendered branch and any redirect are derived from the session
//! provider on each change.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingSpinner;
use crate::state::provider::SessionContext;
use crate::util::gate::{GateState, RedirectRule};

/// Renders nested routes when signed in, a placeholder while the session
/// resolves, and replaces history with the login route when signed out.
#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let rule = RedirectRule::gated(session.config().login_path);

    let gate = Memo::new(move |_| GateState::of(&session.session()));

    Effect::new(move |prev: Option<GateState>| {
        let next = gate.get();
        if let Some(redirect) = rule.on_transition(prev, next) {
            log::debug!("gate denied; redirecting to {}", redirect.to);
            navigate(redirect.to, redirect.options());
        }
        next
    });

    move || match gate.get() {
        GateState::Pending => view! { <LoadingSpinner label="Checking session..."/> }.into_any(),
        GateState::Denied => view! { <p class="gate__redirect">"Redirecting to login..."</p> }.into_any(),
        GateState::Granted => view! { <Outlet/> }.into_any(),
    }
}
