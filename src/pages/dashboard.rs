//! Dashboard page: role-scoped KPI cards and the hot-clients table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route after login. The backend scopes both the summary and the
//! prospect list to the caller's role, so this page does no role checks.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::loading::LoadingSpinner;
use crate::net::api;
use crate::net::types::{DashboardSummary, Prospect};
use crate::state::provider::SessionContext;
use crate::state::remote::{Remote, spawn_load};
use crate::util::format::{display_date, or_na, rupees_whole};

/// Maximum rows in the hot-clients table.
pub const HOT_CLIENT_LIMIT: usize = 5;

/// Activities that take a prospect off the hot list.
const CLOSED_ACTIVITIES: [&str; 2] = ["Converted", "Cold"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub hot_clients: Vec<Prospect>,
}

/// First [`HOT_CLIENT_LIMIT`] prospects that are neither converted nor cold,
/// in backend order.
pub fn hot_clients(prospects: Vec<Prospect>) -> Vec<Prospect> {
    prospects
        .into_iter()
        .filter(|p| !p.activity.as_deref().is_some_and(|a| CLOSED_ACTIVITIES.contains(&a)))
        .take(HOT_CLIENT_LIMIT)
        .collect()
}

/// Label and display value for each KPI card.
pub fn kpi_cards(summary: &DashboardSummary) -> [(&'static str, String); 4] {
    [
        ("Total Client's Data", summary.total_clients_data.to_string()),
        ("Total Sales", rupees_whole(summary.total_sales)),
        ("Last Month Payout", rupees_whole(summary.last_month_payout)),
        ("Prospect Number", summary.prospect_number.to_string()),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let data = RwSignal::new(Remote::<DashboardData>::Loading);

    let client = session.client();
    spawn_load(data, async move {
        let summary = api::dashboard_summary(&client).await?;
        let prospects = api::list_prospects(&client).await?;
        Ok(DashboardData {
            summary,
            hot_clients: hot_clients(prospects),
        })
    });

    move || match data.get() {
        Remote::Loading => view! { <LoadingSpinner/> }.into_any(),
        Remote::Failed(message) => view! {
            <div class="page page--error">
                <h2>"Error Loading Dashboard"</h2>
                <p>{message}</p>
            </div>
        }
        .into_any(),
        Remote::Ready(loaded) => view! {
            <div class="page dashboard-page">
                <h1 class="page__title">"Dashboard"</h1>
                <div class="kpi-cards">
                    {kpi_cards(&loaded.summary)
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="kpi-card">
                                <h3>{label}</h3>
                                <p>{value}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
                <section class="hot-clients">
                    <h2 class="page__section-title">"Hot Clients"</h2>
                    <HotClientsTable clients=loaded.hot_clients/>
                </section>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn HotClientsTable(clients: Vec<Prospect>) -> impl IntoView {
    if clients.is_empty() {
        return view! { <p>"No hot clients to display."</p> }.into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Company Name"</th>
                    <th>"Client Name"</th>
                    <th>"Email ID"</th>
                    <th>"Contact No."</th>
                    <th>"Reminder Date"</th>
                    <th>"Activity"</th>
                </tr>
            </thead>
            <tbody>
                {clients
                    .into_iter()
                    .map(|p| view! {
                        <tr>
                            <td>{p.company_name}</td>
                            <td>{p.client_name}</td>
                            <td>{or_na(p.email_id.as_deref())}</td>
                            <td>{or_na(p.contact_no.as_deref())}</td>
                            <td>{display_date(p.reminder_date.as_deref())}</td>
                            <td>{or_na(p.activity.as_deref())}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
