//! Medication detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public. Signed-in users get an "Add Review" action; the user who added the
//! medication also gets Update and Delete. A medication that cannot be loaded
//! sends the visitor back to the listing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::notice_tray::notify;
use crate::net::http::HttpClient;
use crate::net::medications::{self, image_url};
use crate::net::types::Medication;
use crate::routes::{AppRoute, MEDICATION_LIST_PATH, add_review_path, review_list_path, update_medication_path};
use crate::state::medications::{MEDICATION_DELETE_FAILED, accepted, can_manage_medication, payload};
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::state::session::SessionStore;
use crate::util::navigation::install_pending_redirect;

#[component]
pub fn MedicationDetailPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();

    let medication = RwSignal::new(None::<Medication>);
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

    // Route changes between two detail pages reuse this component.
    Effect::new({
        let client = client.clone();
        let alive = Arc::clone(&alive);
        move || {
            let id = medication_id();
            medication.set(None);
            let client = client.clone();
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = payload(medications::get_medication(&client, &id).await);
                if !alive.load(Ordering::Relaxed) || current_id() != id {
                    log!("medication {id} is stale, ignoring");
                    return;
                }
                match result {
                    Ok(found) => medication.set(Some(found)),
                    Err(e) => {
                        warn!("medication {id} failed to load: {e}");
                        redirect_to.set(Some(MEDICATION_LIST_PATH.to_owned()));
                    }
                }
            });
        }
    });

    let on_delete = {
        let client = client.clone();
        move |_: leptos::ev::MouseEvent| {
            if busy.get_untracked() {
                return;
            }
            let id = current_id();
            busy.set(true);
            let client = client.clone();
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = accepted(medications::delete_medication(&client, &id).await);
                if !alive.load(Ordering::Relaxed) {
                    log!("delete of {id} finished after page closed");
                    return;
                }
                match result {
                    Ok(()) => redirect_to.set(Some(MEDICATION_LIST_PATH.to_owned())),
                    Err(e) => {
                        warn!("delete of {id} failed: {e}");
                        notify(notices, NoticeLevel::Error, MEDICATION_DELETE_FAILED);
                        busy.set(false);
                    }
                }
            });
        }
    };

    let details = move || {
        medication.get().map(|m| {
            let current = session.get();
            let manage = can_manage_medication(&m, &current);
            let signed_in = current.is_authenticated();
            let image = m.image.as_ref().map(|img| image_url(client.config(), &img.id));
            let on_delete = on_delete.clone();
            view! {
                <h2 class="medication__name">{m.name.clone()}</h2>
                <p><strong>"Generic Name: "</strong>{m.generic_name.clone()}</p>
                <p><strong>"Class: "</strong>{m.medication_class.clone()}</p>
                <p><strong>"Availability: "</strong>{m.availability.clone()}</p>
                {image.map(|src| view! { <img class="medication__image" src=src alt=m.name.clone()/> })}
                <div class="medication__reviews">
                    {if m.reviews.is_empty() {
                        view! { <p>"No reviews yet."</p> }.into_any()
                    } else {
                        view! { <A href=review_list_path(&m.id)>"View reviews for this medication"</A> }.into_any()
                    }}
                </div>
                <div class="medication__actions">
                    {signed_in.then(|| view! { <A href=add_review_path(&m.id)>"Add Review"</A> })}
                    {manage
                        .then(|| {
                            view! {
                                <A href=update_medication_path(&m.id)>"Update"</A>
                                <button type="button" on:click=on_delete disabled=move || busy.get()>
                                    "Delete"
                                </button>
                            }
                        })}
                </div>
            }
        })
    };

    view! {
        <Title text=AppRoute::MedicationDetail.title()/>
        <section class="medication">{details}</section>
    }
}
