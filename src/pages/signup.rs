//! Sign-up page with an on-blur email availability check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaving the email field asks the backend whether the address is taken.
//! The answer only counts for the address it was asked about; editing the
//! field clears it. Submitting an address that was never checked (Enter
//! pressed straight from the field) runs the check first. Registration does not sign the user in, it routes to the
//! sign-in page.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::notice_tray::notify;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::routes::{AppRoute, SIGN_IN_PATH};
use crate::state::auth::{self, SIGN_UP_SUCCESS};
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::util::navigation::install_pending_redirect;
use crate::util::validation::{
    FieldError, MIN_PASSWORD_LEN, SignUpErrors, SignUpForm, field_message, needs_existence_check, validate_email,
};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let fullname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_taken = RwSignal::new(false);
    let checked_email = RwSignal::new(None::<String>);
    let errors = RwSignal::new(SignUpErrors::default());
    let busy = RwSignal::new(false);
    let redirect_to = RwSignal::new(None::<String>);
    install_pending_redirect(redirect_to);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Relaxed)
    });

    let on_email_blur = {
        let client = client.clone();
        let alive = Arc::clone(&alive);
        move |_| {
            let Ok(checked) = validate_email(&email.get_untracked()) else {
                return;
            };
            let client = client.clone();
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = api::verify_user_exists(&client, &checked).await;
                if !alive.load(Ordering::Relaxed) || email.get_untracked().trim() != checked {
                    log!("email check for {checked} is stale, ignoring");
                    return;
                }
                match result {
                    Ok(response) => {
                        let taken = auth::email_taken(&response);
                        checked_email.set(Some(checked));
                        email_taken.set(taken);
                        errors.update(|e| e.email = taken.then_some(FieldError::EmailExists));
                    }
                    Err(e) => {
                        warn!("email check failed: {e}");
                        email_taken.set(false);
                    }
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignUpForm {
            fullname: fullname.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            email_taken: email_taken.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(SignUpErrors::default());
        busy.set(true);

        let client = client.clone();
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            if needs_existence_check(checked_email.get_untracked().as_deref(), &request.email) {
                let check = api::verify_user_exists(&client, &request.email).await;
                if !alive.load(Ordering::Relaxed) {
                    log!("sign-up dropped: page closed during email check");
                    return;
                }
                match check {
                    Ok(response) => {
                        checked_email.set(Some(request.email.clone()));
                        if auth::email_taken(&response) {
                            email_taken.set(true);
                            errors.update(|e| e.email = Some(FieldError::EmailExists));
                            busy.set(false);
                            return;
                        }
                    }
                    Err(e) => warn!("email check before sign-up failed: {e}"),
                }
            }
            let result = api::sign_up(&client, &request).await;
            if !alive.load(Ordering::Relaxed) {
                log!("sign-up response dropped: page closed");
                return;
            }
            match auth::apply_sign_up(result) {
                Ok(()) => {
                    notify(notices, NoticeLevel::Success, SIGN_UP_SUCCESS);
                    redirect_to.set(Some(SIGN_IN_PATH.to_owned()));
                }
                Err(e) => {
                    warn!("sign-up failed: {e}");
                    notify(notices, NoticeLevel::Error, e.notice());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text=AppRoute::SignUp.title()/>
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <h1>"Sign Up"</h1>
                <label class="auth-form__field">
                    <span>"Full name"</span>
                    <input
                        class="auth-input"
                        type="text"
                        prop:value=move || fullname.get()
                        on:input=move |ev| fullname.set(event_target_value(&ev))
                    />
                    <span class="auth-form__error">{move || field_message(errors.get().fullname, "Full name")}</span>
                </label>
                <label class="auth-form__field">
                    <span>"Email"</span>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_taken.set(false);
                            checked_email.set(None);
                            errors.update(|e| {
                                if e.email == Some(FieldError::EmailExists) {
                                    e.email = None;
                                }
                            });
                        }
                        on:blur=on_email_blur
                    />
                    <span class="auth-form__error">{move || field_message(errors.get().email, "Email")}</span>
                </label>
                <label class="auth-form__field">
                    <span>"Password"</span>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder=format!("At least {MIN_PASSWORD_LEN} characters")
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="auth-form__error">{move || field_message(errors.get().password, "Password")}</span>
                </label>
                <button class="auth-button" type="submit" disabled=move || busy.get() || email_taken.get()>
                    "Sign Up"
                </button>
                <p class="auth-form__alt">
                    "Already registered? "
                    <A href=SIGN_IN_PATH>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
