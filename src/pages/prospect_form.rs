//! Prospect intake form.

#[cfg(test)]
#[path = "prospect_form_test.rs"]
mod prospect_form_test;

use leptos::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::net::types::NewProspect;
use crate::state::provider::SessionContext;

/// Outcome line shown above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Trimmed copy of the form, or the message for the first missing field.
pub fn validate_prospect(form: &NewProspect) -> Result<NewProspect, &'static str> {
    let cleaned = NewProspect {
        company_name: form.company_name.trim().to_owned(),
        client_name: form.client_name.trim().to_owned(),
        email_id: form.email_id.trim().to_owned(),
        contact_no: form.contact_no.trim().to_owned(),
        reminder_date: form.reminder_date.trim().to_owned(),
        comment: form.comment.trim().to_owned(),
    };
    if cleaned.company_name.is_empty() {
        return Err("Company name is required.");
    }
    if cleaned.client_name.is_empty() {
        return Err("Client name is required.");
    }
    Ok(cleaned)
}

#[component]
pub fn ProspectFormPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let form = RwSignal::new(NewProspect::default());
    let submitting = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let edit = move |apply: fn(&mut NewProspect, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| apply(f, value));
            notice.set(None);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let prospect = match validate_prospect(&form.get_untracked()) {
            Ok(prospect) => prospect,
            Err(message) => {
                notice.set(Some(Notice::Error(message.to_owned())));
                return;
            }
        };
        submitting.set(true);
        notice.set(None);
        let client = session.client();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::remote::{load_error_message, set_if_mounted};

            match crate::net::api::create_prospect(&client, &prospect).await {
                Ok(created) => {
                    log::info!("created prospect {}", created.id);
                    set_if_mounted(form, NewProspect::default());
                    set_if_mounted(notice, Some(Notice::Success("Prospect added successfully!".to_owned())));
                }
                Err(err) => {
                    log::warn!("create prospect failed: {err}");
                    set_if_mounted(notice, Some(Notice::Error(load_error_message(&err))));
                }
            }
            set_if_mounted(submitting, false);
        });
        #[cfg(not(feature = "hydrate"))]
        drop((client, prospect));
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Prospect Form"</h1>
            <div class="form-card">
                <Show when=move || submitting.get()>
                    <LoadingSpinner label="Submitting..."/>
                </Show>
                {move || match notice.get() {
                    Some(Notice::Success(message)) => Some(view! { <p class="form-card__success">{message}</p> }),
                    Some(Notice::Error(message)) => Some(view! { <p class="form-card__error">{message}</p> }),
                    None => None,
                }}
                <form class="prospect-form" on:submit=on_submit>
                    <label for="companyName">"Company Name"</label>
                    <input
                        id="companyName"
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.company_name.clone())
                        on:input=edit(|f, v| f.company_name = v)
                    />
                    <label for="clientName">"Client Name"</label>
                    <input
                        id="clientName"
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.client_name.clone())
                        on:input=edit(|f, v| f.client_name = v)
                    />
                    <label for="emailId">"Email ID"</label>
                    <input
                        id="emailId"
                        type="email"
                        prop:value=move || form.with(|f| f.email_id.clone())
                        on:input=edit(|f, v| f.email_id = v)
                    />
                    <label for="contactNo">"Contact No."</label>
                    <input
                        id="contactNo"
                        type="text"
                        prop:value=move || form.with(|f| f.contact_no.clone())
                        on:input=edit(|f, v| f.contact_no = v)
                    />
                    <label for="reminderDate">"Reminder Date"</label>
                    <input
                        id="reminderDate"
                        type="date"
                        prop:value=move || form.with(|f| f.reminder_date.clone())
                        on:input=edit(|f, v| f.reminder_date = v)
                    />
                    <label for="comment">"Comment"</label>
                    <textarea
                        id="comment"
                        rows="4"
                        prop:value=move || form.with(|f| f.comment.clone())
                        on:input=edit(|f, v| f.comment = v)
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
