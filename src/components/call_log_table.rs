//! Call-log table shared by the personal and team call reports.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{CallLog, ProspectLink};
use crate::util::format::{display_date, display_datetime, or_na};

/// Table of calls with per-row View and, when `on_update` is given, Update
/// actions. Renders `empty` instead of a table for an empty list.
#[component]
pub fn CallLogTable(
    calls: Vec<CallLog>,
    on_view: Callback<CallLog>,
    #[prop(optional)] on_update: Option<Callback<CallLog>>,
    #[prop(into)] empty: String,
) -> impl IntoView {
    if calls.is_empty() {
        return view! { <p class="data-table__empty">{empty}</p> }.into_any();
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
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {calls
                    .into_iter()
                    .map(|call| {
                        let reminder = display_date(call.reminder_date());
                        let for_view = call.clone();
                        let for_update = call.clone();
                        view! {
                            <tr>
                                <td>{call.company_name}</td>
                                <td>{call.client_name}</td>
                                <td>{or_na(call.email_id.as_deref())}</td>
                                <td>{or_na(call.contact_no.as_deref())}</td>
                                <td>{reminder}</td>
                                <td>{call.activity}</td>
                                <td class="data-table__actions">
                                    {on_update.map(|cb| view! {
                                        <button class="btn" on:click=move |_| cb.run(for_update.clone())>"Update"</button>
                                    })}
                                    <button class="btn" on:click=move |_| on_view.run(for_view.clone())>"View"</button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

/// Read-only details of one call, shown inside a modal.
#[component]
pub fn CallLogDetails(call: CallLog) -> impl IntoView {
    let related = match &call.prospect {
        Some(ProspectLink::Populated(p)) => Some(format!("{} - {}", p.company_name, p.client_name)),
        _ => None,
    };
    let comment = call
        .comment
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| "No comment".to_owned());
    view! {
        <dl class="details">
            <dt>"Company Name"</dt>
            <dd>{call.company_name.clone()}</dd>
            <dt>"Client Name"</dt>
            <dd>{call.client_name.clone()}</dd>
            <dt>"Email ID"</dt>
            <dd>{or_na(call.email_id.as_deref())}</dd>
            <dt>"Contact No."</dt>
            <dd>{or_na(call.contact_no.as_deref())}</dd>
            <dt>"Call Date"</dt>
            <dd>{display_datetime(call.call_date.as_deref())}</dd>
            <dt>"Activity"</dt>
            <dd>{call.activity.clone()}</dd>
            <dt>"Comment"</dt>
            <dd>{comment}</dd>
            {related.map(|r| view! {
                <dt>"Related Prospect"</dt>
                <dd>{r}</dd>
            })}
        </dl>
    }
}
