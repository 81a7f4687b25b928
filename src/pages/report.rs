//! Call list report: today's calls, past calls by date range, and the
//! update/view dialogs.
//!
//! DESIGN
//! ======
//! Both lists are independent `Remote` loads. An update replaces the edited
//! row in whichever list holds it, so the page never refetches after a save.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::call_log_table::{CallLogDetails, CallLogTable};
use crate::components::loading::LoadingSpinner;
use crate::components::modal::Modal;
use crate::net::api;
use crate::net::types::{CALL_ACTIVITIES, CallLog, CallLogFilter, CallLogUpdate};
use crate::state::provider::SessionContext;
use crate::state::remote::{Remote, spawn_load};
use crate::util::format::today_iso;

/// Range filter for past calls. Dates are `YYYY-MM-DD`, so string order is
/// calendar order.
pub fn validate_date_range(start: &str, end: &str) -> Result<CallLogFilter, &'static str> {
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() {
        return Err("Please select both start and end dates.");
    }
    if start > end {
        return Err("Start date must be on or before end date.");
    }
    Ok(CallLogFilter::Range {
        start: start.to_owned(),
        end: end.to_owned(),
    })
}

/// Update payload, requiring one of the known activities.
pub fn validate_update(activity: &str, comment: &str) -> Result<CallLogUpdate, &'static str> {
    if !CALL_ACTIVITIES.contains(&activity) {
        return Err("Select an activity.");
    }
    Ok(CallLogUpdate {
        activity: activity.to_owned(),
        comment: comment.trim().to_owned(),
    })
}

/// Swap in `updated` for the row with the same id. Returns whether a row
/// was replaced.
pub fn replace_call_log(list: &mut [CallLog], updated: &CallLog) -> bool {
    match list.iter_mut().find(|call| call.id == updated.id) {
        Some(row) => {
            *row = updated.clone();
            true
        }
        None => false,
    }
}

/// Which dialog is open, with the row it was opened for.
#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Update(CallLog),
    View(CallLog),
}

#[component]
pub fn ReportPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let today = RwSignal::new(Remote::<Vec<CallLog>>::Loading);
    let past = RwSignal::new(Remote::<Vec<CallLog>>::Loading);
    let searched = RwSignal::new(false);
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let range_error = RwSignal::new(None::<&'static str>);
    let dialog = RwSignal::new(None::<Dialog>);

    if let Some(day) = today_iso() {
        let client = session.client();
        spawn_load(today, async move { api::list_call_logs(&client, &CallLogFilter::Day(day)).await });
    }

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_date_range(&start_date.get_untracked(), &end_date.get_untracked()) {
            Ok(filter) => {
                range_error.set(None);
                searched.set(true);
                let client = session.client();
                spawn_load(past, async move { api::list_call_logs(&client, &filter).await });
            }
            Err(message) => range_error.set(Some(message)),
        }
    };

    let on_saved = Callback::new(move |updated: CallLog| {
        today.update(|state| {
            state.update_ready(|list| {
                replace_call_log(list, &updated);
            });
        });
        past.update(|state| {
            state.update_ready(|list| {
                replace_call_log(list, &updated);
            });
        });
    });
    let on_update = Callback::new(move |call: CallLog| dialog.set(Some(Dialog::Update(call))));
    let on_view = Callback::new(move |call: CallLog| dialog.set(Some(Dialog::View(call))));
    let on_close = Callback::new(move |()| dialog.set(None));

    view! {
        <div class="page report-page">
            <h1 class="page__title">"Call List Report"</h1>

            <section class="report-section">
                <h2 class="page__section-title">"Today's Call List"</h2>
                {move || match today.get() {
                    Remote::Loading => view! { <LoadingSpinner/> }.into_any(),
                    Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                    Remote::Ready(calls) => view! {
                        <CallLogTable calls on_view on_update empty="No calls logged today."/>
                    }
                    .into_any(),
                }}
            </section>

            <section class="report-section">
                <h2 class="page__section-title">"Past Call List"</h2>
                <form class="filter-form" on:submit=on_search>
                    <label for="startDate">"Start Date"</label>
                    <input
                        id="startDate"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                    <label for="endDate">"End Date"</label>
                    <input
                        id="endDate"
                        type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || searched.get() && past.with(Remote::is_loading)
                    >
                        "Search"
                    </button>
                </form>
                {move || range_error.get().map(|message| view! { <p class="page__error">{message}</p> })}
                {move || match (searched.get(), past.get()) {
                    (false, _) => view! { <p class="data-table__empty">"Pick a date range to see past calls."</p> }.into_any(),
                    (true, Remote::Loading) => view! { <LoadingSpinner label="Searching..."/> }.into_any(),
                    (true, Remote::Failed(message)) => view! { <p class="page__error">{message}</p> }.into_any(),
                    (true, Remote::Ready(calls)) => view! {
                        <CallLogTable calls on_view on_update empty="No calls found for the selected date range."/>
                    }
                    .into_any(),
                }}
            </section>

            {move || match dialog.get() {
                Some(Dialog::Update(call)) => Some(
                    view! { <UpdateCallDialog call on_saved on_close/> }.into_any(),
                ),
                Some(Dialog::View(call)) => Some(
                    view! {
                        <Modal title="Call Details" on_close>
                            <CallLogDetails call/>
                        </Modal>
                    }
                    .into_any(),
                ),
                None => None,
            }}
        </div>
    }
}

/// Update form for one call. Stays open after a save to show the result.
#[component]
fn UpdateCallDialog(call: CallLog, on_saved: Callback<CallLog>, on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let activity = RwSignal::new(call.activity.clone());
    let comment = RwSignal::new(call.comment.clone().unwrap_or_default());
    let saving = RwSignal::new(false);
    let outcome = RwSignal::new(None::<Result<&'static str, String>>);
    let id = call.id.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let update = match validate_update(&activity.get_untracked(), &comment.get_untracked()) {
            Ok(update) => update,
            Err(message) => {
                outcome.set(Some(Err(message.to_owned())));
                return;
            }
        };
        saving.set(true);
        outcome.set(None);
        let client = session.client();
        let id = id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::remote::{load_error_message, set_if_mounted};

            match api::update_call_log(&client, &id, &update).await {
                Ok(updated) => {
                    log::info!("updated call log {}", updated.id);
                    // A disposed dialog means the page and its lists are gone too.
                    if saving.try_get_untracked().is_some() {
                        on_saved.run(updated);
                    }
                    set_if_mounted(outcome, Some(Ok("Call log updated successfully!")));
                }
                Err(err) => {
                    log::warn!("update call log {id} failed: {err}");
                    set_if_mounted(outcome, Some(Err(load_error_message(&err))));
                }
            }
            set_if_mounted(saving, false);
        });
        #[cfg(not(feature = "hydrate"))]
        drop((client, id, update, on_saved));
    };

    view! {
        <Modal title="Update Call Details" on_close>
            <form class="modal-form" on:submit=on_submit>
                <label>"Company Name"</label>
                <input type="text" disabled prop:value=call.company_name.clone()/>
                <label>"Client Name"</label>
                <input type="text" disabled prop:value=call.client_name.clone()/>
                <label for="activity">"Activity"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || activity.get()
                    on:change=move |ev| activity.set(event_target_value(&ev))
                >
                    <option value="">"Select Activity"</option>
                    {CALL_ACTIVITIES
                        .into_iter()
                        .map(|a| view! { <option value=a>{a}</option> })
                        .collect_view()}
                </select>
                <label for="comment">"Comment"</label>
                <textarea
                    id="comment"
                    rows="3"
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
                {move || match outcome.get() {
                    Some(Ok(message)) => Some(view! { <p class="form-card__success">{message}</p> }.into_any()),
                    Some(Err(message)) => Some(view! { <p class="form-card__error">{message}</p> }.into_any()),
                    None => None,
                }}
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Updating..." } else { "Update" }}
                </button>
            </form>
        </Modal>
    }
}
