//! Add and update medication form.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form serves both routes. Adding checks the name against the catalog
//! on blur and again on submit when the submitted name was never checked;
//! updating prefills from the stored record and skips the name check. The
//! picture is optional in both modes and only sent when a file was picked.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::notice_tray::notify;
use crate::net::http::{Attachment, HttpClient};
use crate::net::medications::{self, medication_body};
use crate::routes::{AppRoute, MEDICATION_LIST_PATH};
use crate::state::medications::{
    MEDICATION_ADD_FAILED, MEDICATION_ADDED, MEDICATION_FETCH_FAILED, MEDICATION_UPDATE_FAILED, MEDICATION_UPDATED,
    accepted, name_taken as reports_taken, payload,
};
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::util::navigation::install_pending_redirect;
use crate::util::validation::{
    FieldError, MedicationErrors, MedicationForm, field_message, needs_existence_check, validate_required,
};

/// `route` is either [`AppRoute::AddMedication`] or
/// [`AppRoute::UpdateMedication`].
#[component]
pub fn MedicationFormPage(route: AppRoute) -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let editing = route == AppRoute::UpdateMedication;

    let name = RwSignal::new(String::new());
    let generic_name = RwSignal::new(String::new());
    let medication_class = RwSignal::new(String::new());
    let availability = RwSignal::new(String::new());
    let name_taken = RwSignal::new(false);
    let checked_name = RwSignal::new(None::<String>);
    let image = RwSignal::new_local(None::<Attachment>);
    let errors = RwSignal::new(MedicationErrors::default());
    let busy = RwSignal::new(false);
    let redirect_to = RwSignal::new(None::<String>);
    install_pending_redirect(redirect_to);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Relaxed)
    });

    let medication_id = move || params.read().get("medication_id").unwrap_or_default();
    let current_id = move || params.read_untracked().get("medication_id").unwrap_or_default();

    if editing {
        let client = client.clone();
        let alive = Arc::clone(&alive);
        Effect::new(move || {
            let id = medication_id();
            let client = client.clone();
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = payload(medications::get_medication(&client, &id).await);
                if !alive.load(Ordering::Relaxed) || current_id() != id {
                    log!("medication {id} for editing is stale, ignoring");
                    return;
                }
                match result {
                    Ok(found) => {
                        name.set(found.name);
                        generic_name.set(found.generic_name);
                        medication_class.set(found.medication_class);
                        availability.set(found.availability);
                    }
                    Err(e) => {
                        warn!("medication {id} failed to load for editing: {e}");
                        notify(notices, NoticeLevel::Error, MEDICATION_FETCH_FAILED);
                        redirect_to.set(Some(MEDICATION_LIST_PATH.to_owned()));
                    }
                }
            });
        });
    }

    let on_name_blur = {
        let client = client.clone();
        let alive = Arc::clone(&alive);
        move |_: leptos::ev::FocusEvent| {
            if editing {
                return;
            }
            let Ok(checked) = validate_required(&name.get_untracked()) else {
                return;
            };
            let client = client.clone();
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = medications::verify_name_exists(&client, &checked).await;
                if !alive.load(Ordering::Relaxed) || name.get_untracked().trim() != checked {
                    log!("name check for {checked} is stale, ignoring");
                    return;
                }
                match result {
                    Ok(response) => {
                        let taken = reports_taken(&response);
                        checked_name.set(Some(checked));
                        name_taken.set(taken);
                        errors.update(|e| e.name = taken.then_some(FieldError::NameExists));
                    }
                    Err(e) => {
                        warn!("name check failed: {e}");
                        name_taken.set(false);
                    }
                }
            });
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let picked = input.files().and_then(|files| files.get(0));
            image.set(picked.map(|file| Attachment::new(medications::IMAGE_FIELD, file)));
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = MedicationForm {
            name: name.get_untracked(),
            generic_name: generic_name.get_untracked(),
            medication_class: medication_class.get_untracked(),
            availability: availability.get_untracked(),
            name_taken: name_taken.get_untracked(),
        };
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(MedicationErrors::default());
        busy.set(true);

        let body = medication_body(&draft, image.get_untracked());
        let id = current_id();
        let client = client.clone();
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            if !editing && needs_existence_check(checked_name.get_untracked().as_deref(), &draft.name) {
                let check = medications::verify_name_exists(&client, &draft.name).await;
                if !alive.load(Ordering::Relaxed) {
                    log!("medication submit dropped: page closed during name check");
                    return;
                }
                match check {
                    Ok(response) => {
                        checked_name.set(Some(draft.name.clone()));
                        if reports_taken(&response) {
                            name_taken.set(true);
                            errors.update(|e| e.name = Some(FieldError::NameExists));
                            busy.set(false);
                            return;
                        }
                    }
                    Err(e) => warn!("name check before submit failed: {e}"),
                }
            }

            let (result, success, failure) = if editing {
                (accepted(medications::update_medication(&client, &id, body).await), MEDICATION_UPDATED, MEDICATION_UPDATE_FAILED)
            } else {
                (accepted(medications::create_medication(&client, body).await), MEDICATION_ADDED, MEDICATION_ADD_FAILED)
            };
            if !alive.load(Ordering::Relaxed) {
                log!("medication submit finished after page closed");
                return;
            }
            match result {
                Ok(()) => {
                    notify(notices, NoticeLevel::Success, success);
                    redirect_to.set(Some(MEDICATION_LIST_PATH.to_owned()));
                }
                Err(e) => {
                    warn!("medication submit failed: {e}");
                    notify(notices, NoticeLevel::Error, failure);
                    busy.set(false);
                }
            }
        });
    };

    let text_field = move |label: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type="text"
                aria-label=label
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <Title text=route.title()/>
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <h1>{route.title()}</h1>
                <label class="auth-form__field">
                    <span>"Name"</span>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Enter medication name"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            name_taken.set(false);
                            checked_name.set(None);
                            errors.update(|e| {
                                if e.name == Some(FieldError::NameExists) {
                                    e.name = None;
                                }
                            });
                        }
                        on:blur=on_name_blur
                    />
                    <span class="auth-form__error">{move || field_message(errors.get().name, "Name")}</span>
                </label>
                <label class="auth-form__field">
                    <span>"Generic name"</span>
                    {text_field("Generic name", "Enter generic name", generic_name)}
                    <span class="auth-form__error">
                        {move || field_message(errors.get().generic_name, "Generic name")}
                    </span>
                </label>
                <label class="auth-form__field">
                    <span>"Availability"</span>
                    {text_field("Availability", "Prescription or OTC", availability)}
                    <span class="auth-form__error">
                        {move || field_message(errors.get().availability, "Availability")}
                    </span>
                </label>
                <label class="auth-form__field">
                    <span>"Medication class"</span>
                    {text_field("Medication class", "Enter medication class", medication_class)}
                    <span class="auth-form__error">
                        {move || field_message(errors.get().medication_class, "Medication class")}
                    </span>
                </label>
                <label class="auth-form__field">
                    <span>"Image"</span>
                    <input type="file" accept="image/*" name=medications::IMAGE_FIELD on:change=on_file/>
                </label>
                <button class="auth-button" type="submit" disabled=move || busy.get() || name_taken.get()>
                    {if editing { "Update" } else { "Add" }}
                </button>
            </form>
        </div>
    }
}
