//! Login and signup page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public route. Submitting calls the session provider; navigation
//! away happens in an effect that watches the session, so both a fresh login
//! and an already-signed-in visit end on the landing route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingSpinner;
use crate::net::error::ApiError;
use crate::net::types::SignupProfile;
use crate::state::provider::SessionContext;
#[cfg(feature = "hydrate")]
use crate::state::remote::set_if_mounted;
use crate::util::gate::{GateState, RedirectRule};

const MIN_PASSWORD_LEN: usize = 8;

/// Which form the page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// Trim and check login fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !is_plausible_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trim and check signup fields.
pub fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<SignupProfile, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email, and password.");
    }
    if !is_plausible_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != password_confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignupProfile {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        password_confirm: password_confirm.to_owned(),
    })
}

/// Message shown under the form for a failed login or signup.
pub fn auth_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Auth(message) | ApiError::Validation(message) => message.clone(),
        ApiError::Network(_) => "Could not reach the server. Please try again.".to_owned(),
        ApiError::Http { status, .. } => format!("Sign-in failed (status {status}). Please try again."),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let rule = RedirectRule::login_page(session.config().landing_path);

    let gate = Memo::new(move |_| GateState::of(&session.session()));
    Effect::new(move |prev: Option<GateState>| {
        let next = gate.get();
        if let Some(redirect) = rule.on_transition(prev, next) {
            navigate(redirect.to, redirect.options());
        }
        next
    });

    let mode = RwSignal::new(AuthMode::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        match mode.get_untracked() {
            AuthMode::Login => {
                let (email_value, password_value) =
                    match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                        Ok(fields) => fields,
                        Err(message) => {
                            error.set(Some(message.to_owned()));
                            return;
                        }
                    };
                busy.set(true);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    if let Err(err) = session.login(email_value, password_value).await {
                        log::info!("login rejected: {err}");
                        set_if_mounted(error, Some(auth_error_message(&err)));
                    }
                    set_if_mounted(busy, false);
                });
                #[cfg(not(feature = "hydrate"))]
                drop((email_value, password_value));
            }
            AuthMode::Signup => {
                let profile = match validate_signup_input(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                    &password_confirm.get_untracked(),
                ) {
                    Ok(profile) => profile,
                    Err(message) => {
                        error.set(Some(message.to_owned()));
                        return;
                    }
                };
                busy.set(true);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    if let Err(err) = session.signup(profile).await {
                        log::info!("signup rejected: {err}");
                        set_if_mounted(error, Some(auth_error_message(&err)));
                    }
                    set_if_mounted(busy, false);
                });
                #[cfg(not(feature = "hydrate"))]
                drop(profile);
            }
        }
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        error.set(None);
        password.set(String::new());
        password_confirm.set(String::new());
    };

    let is_signup = move || mode.get() == AuthMode::Signup;

    move || {
        if gate.get() == GateState::Granted {
            return view! { <LoadingSpinner label="Signing in..."/> }.into_any();
        }
        view! {
            <div class="login-page">
                <div class="login-card">
                    <h1>"CRM"</h1>
                    <p class="login-card__subtitle">
                        {move || if is_signup() { "Create an account" } else { "Sign in to continue" }}
                    </p>
                    <form class="login-form" on:submit=on_submit>
                        <Show when=is_signup>
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Full name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </Show>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=is_signup>
                            <input
                                class="login-input"
                                type="password"
                                placeholder="Confirm password"
                                prop:value=move || password_confirm.get()
                                on:input=move |ev| password_confirm.set(event_target_value(&ev))
                            />
                        </Show>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || match (busy.get(), is_signup()) {
                                (true, _) => "Please wait...",
                                (false, true) => "Sign Up",
                                (false, false) => "Login",
                            }}
                        </button>
                    </form>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-toggle" type="button" on:click=on_toggle>
                        {move || {
                            if is_signup() { "Already have an account? Login" } else { "Need an account? Sign up" }
                        }}
                    </button>
                </div>
            </div>
        }
        .into_any()
    }
}
