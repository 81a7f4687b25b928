//! User data page: prospect records listed by `GET /users`, with update and
//! view dialogs.
//!
//! TRADE-OFFS
//! ==========
//! The backend exposes no endpoint for editing these rows, so an update is
//! applied to the in-memory list only and is lost on reload. The dialog says
//! so, and each local edit is logged at warn level.

#[cfg(test)]
#[path = "user_data_test.rs"]
mod user_data_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::loading::LoadingSpinner;
use crate::components::modal::Modal;
use crate::net::api;
use crate::net::types::Prospect;
use crate::state::provider::SessionContext;
use crate::state::remote::{Remote, spawn_load};
use crate::util::format::{display_date, now_iso, or_na};

/// Activities offered in the local update dialog.
pub const LOCAL_ACTIVITIES: [(&str, &str); 3] =
    [("Talk", "Talk"), ("Not Talk", "Not Talk"), ("Deleted", "Delete Client's Profile")];

/// Activity preselected for rows that have none.
pub const DEFAULT_ACTIVITY: &str = "New";

/// Apply an activity/comment edit to the row with `id`, stamping
/// `last_update` with `now` when known. Returns whether a row matched.
pub fn apply_local_update(
    rows: &mut [Prospect],
    id: &str,
    activity: &str,
    comment: &str,
    now: Option<String>,
) -> bool {
    let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
        return false;
    };
    row.activity = Some(activity.to_owned());
    row.comment = Some(comment.trim().to_owned()).filter(|c| !c.is_empty());
    if now.is_some() {
        row.last_update = now;
    }
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DialogMode {
    Update,
    View,
}

#[component]
pub fn UserDataPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let rows = RwSignal::new(Remote::<Vec<Prospect>>::Loading);
    let dialog = RwSignal::new(None::<(DialogMode, Prospect)>);

    let client = session.client();
    spawn_load(rows, async move { api::list_user_data(&client).await });

    let open = move |mode: DialogMode, prospect: Prospect| dialog.set(Some((mode, prospect)));
    let on_close = Callback::new(move |()| dialog.set(None));
    let on_apply = Callback::new(move |(id, activity, comment): (String, String, String)| {
        log::warn!("user data row {id} updated locally; change is not persisted");
        rows.update(|state| {
            state.update_ready(|list| {
                apply_local_update(list, &id, &activity, &comment, now_iso());
            });
        });
        dialog.set(None);
    });

    view! {
        <div class="page">
            <h1 class="page__title">"Prospects Data"</h1>
            {move || match rows.get() {
                Remote::Loading => view! { <LoadingSpinner/> }.into_any(),
                Remote::Failed(message) => view! {
                    <div class="page--error">
                        <h2>"Error Loading Data"</h2>
                        <p>{message}</p>
                    </div>
                }
                .into_any(),
                Remote::Ready(list) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Company Name"</th>
                                <th>"Client Name"</th>
                                <th>"Email ID"</th>
                                <th>"Contact No."</th>
                                <th>"Reminder Date"</th>
                                <th>"Activity"</th>
                                <th>"Last Update"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {if list.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" class="data-table__empty">"No prospect data available."</td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                list.into_iter()
                                    .map(|p| {
                                        let activity_label = p.activity.clone().unwrap_or_else(|| "Update".to_owned());
                                        let last_update = p
                                            .last_update
                                            .as_deref()
                                            .map_or_else(|| "View".to_owned(), |d| display_date(Some(d)));
                                        let for_update = p.clone();
                                        let for_view = p.clone();
                                        view! {
                                            <tr>
                                                <td>{p.company_name}</td>
                                                <td>{p.client_name}</td>
                                                <td>{or_na(p.email_id.as_deref())}</td>
                                                <td>{or_na(p.contact_no.as_deref())}</td>
                                                <td>{display_date(p.reminder_date.as_deref())}</td>
                                                <td>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| open(DialogMode::Update, for_update.clone())
                                                    >
                                                        {activity_label}
                                                    </button>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| open(DialogMode::View, for_view.clone())
                                                    >
                                                        {last_update}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
            {move || {
                dialog
                    .get()
                    .map(|(mode, prospect)| view! { <ProspectDialog mode prospect on_apply on_close/> })
            }}
        </div>
    }
}

#[component]
fn ProspectDialog(
    mode: DialogMode,
    prospect: Prospect,
    on_apply: Callback<(String, String, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let read_only = mode == DialogMode::View;
    let activity = RwSignal::new(prospect.activity.clone().unwrap_or_else(|| DEFAULT_ACTIVITY.to_owned()));
    let comment = RwSignal::new(prospect.comment.clone().unwrap_or_default());
    let id = prospect.id.clone();
    let title = if read_only { "View Details" } else { "Update Call Details" };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_apply.run((id.clone(), activity.get_untracked(), comment.get_untracked()));
    };

    view! {
        <Modal title on_close>
            <form class="modal-form" on:submit=on_submit>
                <p class="modal-form__subject">{format!("{} - {}", prospect.company_name, prospect.client_name)}</p>
                <fieldset class="modal-form__choices" disabled=read_only>
                    {LOCAL_ACTIVITIES
                        .into_iter()
                        .map(|(value, label)| view! {
                            <label>
                                <input
                                    type="radio"
                                    name="activity"
                                    value=value
                                    prop:checked=move || activity.get() == value
                                    on:change=move |_| activity.set(value.to_owned())
                                />
                                {label}
                            </label>
                        })
                        .collect_view()}
                </fieldset>
                <label for="comment">"Comment"</label>
                <textarea
                    id="comment"
                    rows="3"
                    disabled=read_only
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
                {(!read_only).then(|| view! {
                    <p class="modal-form__note">"Changes are kept on this page only and are not saved to the server."</p>
                    <button class="btn btn--primary" type="submit">"Save"</button>
                })}
            </form>
        </Modal>
    }
}
