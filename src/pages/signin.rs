//! Sign-in page: email and password against the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful call replaces the session and lands on the signed-in
//! medication list. A response that arrives after the page is gone is
//! dropped without touching the session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::notice_tray::notify;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::routes::{AFTER_SIGN_IN_PATH, AppRoute, SIGN_UP_PATH};
use crate::state::auth::{self, SIGN_IN_SUCCESS};
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::state::session::SessionStore;
use crate::util::navigation::install_pending_redirect;
use crate::util::validation::{SignInErrors, SignInForm, field_message};

#[component]
pub fn SignInPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(SignInErrors::default());
    let busy = RwSignal::new(false);
    let redirect_to = RwSignal::new(None::<String>);
    install_pending_redirect(redirect_to);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Relaxed)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignInForm { email: email.get_untracked(), password: password.get_untracked() };
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(SignInErrors::default());
        busy.set(true);

        let client = client.clone();
        let session = session.clone();
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            let result = api::sign_in(&client, &credentials).await;
            if !alive.load(Ordering::Relaxed) {
                log!("sign-in response dropped: page closed");
                return;
            }
            match auth::apply_sign_in(&session, result) {
                Ok(_) => {
                    notify(notices, NoticeLevel::Success, SIGN_IN_SUCCESS);
                    redirect_to.set(Some(AFTER_SIGN_IN_PATH.to_owned()));
                }
                Err(e) => {
                    warn!("sign-in failed: {e}");
                    notify(notices, NoticeLevel::Error, e.notice());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text=AppRoute::SignIn.title()/>
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <h1>"Sign In"</h1>
                <label class="auth-form__field">
                    <span>"Email"</span>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <span class="auth-form__error">{move || field_message(errors.get().email, "Email")}</span>
                </label>
                <label class="auth-form__field">
                    <span>"Password"</span>
                    <input
                        class="auth-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="auth-form__error">{move || field_message(errors.get().password, "Password")}</span>
                </label>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign In"
                </button>
                <p class="auth-form__alt">
                    "No account yet? "
                    <A href=SIGN_UP_PATH>"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
