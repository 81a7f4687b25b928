//! Sidebar with identity badge and role-filtered navigation.
//!
//! DESIGN
//! ======
//! The link list is a pure function of the role so filtering can be tested
//! without a router.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::state::provider::SessionContext;

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const COMMON_ITEMS: [NavItem; 5] = [
    NavItem { label: "Dashboard", path: "/dashboard" },
    NavItem { label: "User Data", path: "/my-profile" },
    NavItem { label: "Prospect", path: "/prospect-form" },
    NavItem { label: "Report", path: "/report" },
    NavItem { label: "Sales Report", path: "/sales-report" },
];

const TEAM_REPORT: NavItem = NavItem {
    label: "Team Report",
    path: "/team-report",
};

/// Links visible to `role`, in display order.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let mut items = COMMON_ITEMS.to_vec();
    if role.can_view_team_reports() {
        items.push(TEAM_REPORT);
    }
    items
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let user = move || session.user();
    let role = move || user().map(|u| u.role).unwrap_or_default();

    view! {
        <aside class="sidebar">
            <div class="sidebar__identity">
                <div class="sidebar__avatar" aria-hidden="true">"👤"</div>
                <span class="sidebar__name">{move || user().map(|u| u.name).unwrap_or_default()}</span>
                <span class="sidebar__role">{move || role().label()}</span>
            </div>
            <nav class="sidebar__nav">
                {move || {
                    nav_items(role())
                        .into_iter()
                        .map(|item| {
                            view! {
                                <A href=item.path attr:class="sidebar__link">
                                    {item.label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
        </aside>
    }
}
