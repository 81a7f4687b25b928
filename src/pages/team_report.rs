//! Team report: performance by period for Team Leads and Managers, plus the
//! activity log and team call list for Managers.
//!
//! DESIGN
//! ======
//! The performance report's shape differs by role and backend version, so it
//! arrives as raw JSON and [`tabulate`] flattens whatever comes back into
//! columns and rows. Sections a role may not see are never requested.

#[cfg(test)]
#[path = "team_report_test.rs"]
mod team_report_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use serde_json::Value;

use super::report::validate_date_range;
use crate::components::call_log_table::{CallLogDetails, CallLogTable};
use crate::components::loading::LoadingSpinner;
use crate::components::modal::Modal;
use crate::net::api;
use crate::net::types::{ActivityLog, CallLog, ReportPeriod, Role};
use crate::state::provider::SessionContext;
use crate::state::remote::{Remote, spawn_load};
use crate::util::format::{NOT_AVAILABLE, display_datetime, or_na};

/// Which sections a role sees on this page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamSections {
    pub performance: bool,
    pub manager_only: bool,
}

impl TeamSections {
    pub fn for_role(role: Role) -> Self {
        Self {
            performance: role.can_view_team_reports(),
            manager_only: role == Role::Manager,
        }
    }
}

/// Flattened JSON ready for an HTML table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_owned(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Flatten a report into a table.
///
/// An array of objects becomes one row per element with the union of keys as
/// columns, in the order they are first met. An object becomes `Metric`/`Value` rows.
/// Anything else yields an empty table.
pub fn tabulate(report: &Value) -> Table {
    match report {
        Value::Array(items) => {
            let mut columns: Vec<String> = Vec::new();
            for item in items {
                if let Value::Object(map) = item {
                    for key in map.keys() {
                        if !columns.contains(key) {
                            columns.push(key.clone());
                        }
                    }
                }
            }
            if columns.is_empty() {
                return Table::default();
            }
            let rows = items
                .iter()
                .map(|item| columns.iter().map(|c| item.get(c).map_or_else(|| NOT_AVAILABLE.to_owned(), cell)).collect())
                .collect();
            Table { columns, rows }
        }
        Value::Object(map) => Table {
            columns: vec!["Metric".to_owned(), "Value".to_owned()],
            rows: map.iter().map(|(k, v)| vec![k.clone(), cell(v)]).collect(),
        },
        _ => Table::default(),
    }
}

#[component]
pub fn TeamReportPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let role = move || session.user().map(|u| u.role).unwrap_or_default();

    move || {
        let sections = TeamSections::for_role(role());
        if !sections.performance {
            return view! {
                <div class="page">
                    <h1 class="page__title">"Team Report"</h1>
                    <p class="page__error">"Team reports are available to Team Leads and Managers."</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="page">
                <h1 class="page__title">"Team Report"</h1>
                <PerformanceSection/>
                {sections.manager_only.then(|| view! {
                    <TeamCallsSection/>
                    <ActivityLogSection/>
                })}
            </div>
        }
        .into_any()
    }
}

#[component]
fn PerformanceSection() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let period = RwSignal::new(ReportPeriod::default());
    let report = RwSignal::new(Remote::<Value>::Loading);

    Effect::new(move || {
        let selected = period.get();
        let client = session.client();
        spawn_load(report, async move { api::performance_report(&client, selected, None).await });
    });

    view! {
        <section class="report-section">
            <h2 class="page__section-title">"Performance"</h2>
            <label for="period">"Period"</label>
            <select
                id="period"
                prop:value=move || period.get().as_str()
                on:change=move |ev| period.set(ReportPeriod::parse(&event_target_value(&ev)))
            >
                {ReportPeriod::ALL
                    .into_iter()
                    .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                    .collect_view()}
            </select>
            {move || match report.get() {
                Remote::Loading => view! { <LoadingSpinner/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(value) => view! { <JsonTable table=tabulate(&value)/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn JsonTable(table: Table) -> impl IntoView {
    if table.is_empty() {
        return view! { <p class="data-table__empty">"No performance data for this period."</p> }.into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr>{table.columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}</tr>
            </thead>
            <tbody>
                {table
                    .rows
                    .into_iter()
                    .map(|row| view! { <tr>{row.into_iter().map(|v| view! { <td>{v}</td> }).collect_view()}</tr> })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn TeamCallsSection() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let calls = RwSignal::new(Remote::<Vec<CallLog>>::Loading);
    let searched = RwSignal::new(false);
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let range_error = RwSignal::new(None::<&'static str>);
    let viewing = RwSignal::new(None::<CallLog>);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_date_range(&start_date.get_untracked(), &end_date.get_untracked()) {
            Ok(filter) => {
                range_error.set(None);
                searched.set(true);
                let client = session.client();
                spawn_load(calls, async move { api::manager_call_report(&client, &filter).await });
            }
            Err(message) => range_error.set(Some(message)),
        }
    };
    let on_view = Callback::new(move |call: CallLog| viewing.set(Some(call)));
    let on_close = Callback::new(move |()| viewing.set(None));

    view! {
        <section class="report-section">
            <h2 class="page__section-title">"Team Calls"</h2>
            <form class="filter-form" on:submit=on_search>
                <label for="teamStartDate">"Start Date"</label>
                <input
                    id="teamStartDate"
                    type="date"
                    prop:value=move || start_date.get()
                    on:input=move |ev| start_date.set(event_target_value(&ev))
                />
                <label for="teamEndDate">"End Date"</label>
                <input
                    id="teamEndDate"
                    type="date"
                    prop:value=move || end_date.get()
                    on:input=move |ev| end_date.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Search"</button>
            </form>
            {move || range_error.get().map(|message| view! { <p class="page__error">{message}</p> })}
            {move || match (searched.get(), calls.get()) {
                (false, _) => None,
                (true, Remote::Loading) => Some(view! { <LoadingSpinner label="Searching..."/> }.into_any()),
                (true, Remote::Failed(message)) => Some(view! { <p class="page__error">{message}</p> }.into_any()),
                (true, Remote::Ready(list)) => Some(
                    view! { <CallLogTable calls=list on_view empty="No team calls in this range."/> }.into_any(),
                ),
            }}
            {move || viewing.get().map(|call| view! {
                <Modal title="Call Details" on_close>
                    <CallLogDetails call/>
                </Modal>
            })}
        </section>
    }
}

#[component]
fn ActivityLogSection() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let logs = RwSignal::new(Remote::<Vec<ActivityLog>>::Loading);

    let client = session.client();
    spawn_load(logs, async move { api::activity_logs(&client).await });

    view! {
        <section class="report-section">
            <h2 class="page__section-title">"Activity Log"</h2>
            {move || match logs.get() {
                Remote::Loading => view! { <LoadingSpinner/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(list) if list.is_empty() => {
                    view! { <p class="data-table__empty">"No activity recorded."</p> }.into_any()
                }
                Remote::Ready(list) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"When"</th>
                                <th>"Action"</th>
                                <th>"Details"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|entry| view! {
                                    <tr>
                                        <td>{display_datetime(entry.created_at.as_deref())}</td>
                                        <td>{entry.action}</td>
                                        <td>{or_na(entry.description.as_deref())}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </section>
    }
}
