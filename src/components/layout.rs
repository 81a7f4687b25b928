//! Shell for signed-in pages: sidebar, navbar, and the routed content.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;

#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <div class="layout__main">
                <Navbar/>
                <main class="layout__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
