//! Review listing, detail, and add/update form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reviews always belong to a medication, so every route carries
//! `medication_id`. Listing and detail are public; only the review's author
//! sees Edit and Delete. Writes are attributed to the signed-in user and
//! stamped with the current time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::notice_tray::notify;
use crate::net::http::HttpClient;
use crate::net::medications;
use crate::net::types::{Medication, Review};
use crate::routes::{AppRoute, detail_path, medication_detail_path, review_detail_path, update_review_path};
use crate::state::medications::{
    REVIEW_ADD_FAILED, REVIEW_ADDED, REVIEW_DELETE_FAILED, REVIEW_FETCH_FAILED, REVIEW_UPDATE_FAILED, REVIEW_UPDATED,
    accepted, build_review, can_manage_review, format_review_date, now_millis, payload,
};
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::state::session::SessionStore;
use crate::util::navigation::install_pending_redirect;
use crate::util::validation::{MAX_RATING, MIN_RATING, ReviewErrors, ReviewForm, field_message};

fn page_alive() -> Arc<AtomicBool> {
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Relaxed)
    });
    alive
}

/// All reviews for one medication, each linking to its detail page.
#[component]
pub fn ReviewListPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let params = use_params_map();
    let alive = page_alive();

    let medication = RwSignal::new(None::<Medication>);
    let reviews = RwSignal::new(Vec::<Review>::new());

    let medication_id = move || params.read().get("medication_id").unwrap_or_default();
    let current_id = move || params.read_untracked().get("medication_id").unwrap_or_default();

    Effect::new(move || {
        let id = medication_id();
        let client = client.clone();
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            let found = payload(medications::get_medication(&client, &id).await);
            let listed = payload(medications::list_reviews(&client, &id).await);
            if !alive.load(Ordering::Relaxed) || current_id() != id {
                log!("reviews for {id} are stale, ignoring");
                return;
            }
            match found {
                Ok(m) => medication.set(Some(m)),
                Err(e) => warn!("medication {id} failed to load: {e}"),
            }
            match listed {
                Ok(r) => reviews.set(r),
                Err(e) => {
                    warn!("reviews for {id} failed to load: {e}");
                    reviews.set(Vec::new());
                }
            }
        });
    });

    view! {
        <Title text=AppRoute::ReviewList.title()/>
        <section class="reviews">
            <h2>"Medication Medical Review Lists"</h2>
            {move || medication.get().map(|m| view! { <h3><A href=detail_path(&m.id)>{m.name}</A></h3> })}
            <Show when=move || reviews.with(Vec::is_empty)>
                <p>"No reviews yet."</p>
            </Show>
            <ul class="reviews__list">
                <For
                    each=move || reviews.get()
                    key=|review| review.id.clone()
                    children=move |review: Review| {
                        let href = review_detail_path(&current_id(), &review.id);
                        view! {
                            <li class="reviews__item">
                                <A href=href>{format!("{}: {}", review.by.fullname, review.review)}</A>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

/// One review. Its author may edit or delete it.
#[component]
pub fn ReviewDetailPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let alive = page_alive();

    let review = RwSignal::new(None::<Review>);
    let busy = RwSignal::new(false);
    let redirect_to = RwSignal::new(None::<String>);
    install_pending_redirect(redirect_to);

    let ids = move || {
        let p = params.read();
        (p.get("medication_id").unwrap_or_default(), p.get("review_id").unwrap_or_default())
    };
    let current_ids = move || {
        let p = params.read_untracked();
        (p.get("medication_id").unwrap_or_default(), p.get("review_id").unwrap_or_default())
    };

    Effect::new({
        let client = client.clone();
        let alive = Arc::clone(&alive);
        move || {
            let (medication_id, review_id) = ids();
            review.set(None);
            let client = client.clone();
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = payload(medications::get_review(&client, &medication_id, &review_id).await);
                if !alive.load(Ordering::Relaxed) || current_ids() != (medication_id.clone(), review_id.clone()) {
                    log!("review {review_id} is stale, ignoring");
                    return;
                }
                match result {
                    Ok(found) => review.set(Some(found)),
                    Err(e) => {
                        warn!("review {review_id} failed to load: {e}");
                        notify(notices, NoticeLevel::Error, REVIEW_FETCH_FAILED);
                    }
                }
            });
        }
    });

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        let (medication_id, review_id) = current_ids();
        busy.set(true);
        let client = client.clone();
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            let result = accepted(medications::delete_review(&client, &medication_id, &review_id).await);
            if !alive.load(Ordering::Relaxed) {
                log!("delete of review {review_id} finished after page closed");
                return;
            }
            match result {
                Ok(()) => redirect_to.set(Some(detail_path(&medication_id))),
                Err(e) => {
                    warn!("delete of review {review_id} failed: {e}");
                    notify(notices, NoticeLevel::Error, REVIEW_DELETE_FAILED);
                    busy.set(false);
                }
            }
        });
    };

    let details = move || {
        review.get().map(|r| {
            let manage = can_manage_review(&r, &session.get());
            let (medication_id, _) = current_ids();
            let on_delete = on_delete.clone();
            view! {
                <p class="review__text">{format!("{}: {}", r.by.fullname, r.review)}</p>
                <p class="review__rating">{format!("Rating: {}/{MAX_RATING}", r.rating)}</p>
                <p class="review__date">{format_review_date(r.date)}</p>
                {manage
                    .then(|| {
                        view! {
                            <div class="review__actions">
                                <A href=update_review_path(&medication_id, &r.id)>"Edit"</A>
                                <button type="button" on:click=on_delete disabled=move || busy.get()>
                                    "Delete"
                                </button>
                            </div>
                        }
                    })}
            }
        })
    };

    view! {
        <Title text=AppRoute::ReviewDetail.title()/>
        <section class="review">{details}</section>
    }
}

/// `route` is either [`AppRoute::AddReview`] or [`AppRoute::UpdateReview`].
#[component]
pub fn ReviewFormPage(route: AppRoute) -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let alive = page_alive();
    let editing = route == AppRoute::UpdateReview;

    let text = RwSignal::new(String::new());
    let rating = RwSignal::new(String::new());
    let errors = RwSignal::new(ReviewErrors::default());
    let busy = RwSignal::new(false);
    let redirect_to = RwSignal::new(None::<String>);
    install_pending_redirect(redirect_to);

    let ids = move || {
        let p = params.read();
        (p.get("medication_id").unwrap_or_default(), p.get("review_id").unwrap_or_default())
    };
    let current_ids = move || {
        let p = params.read_untracked();
        (p.get("medication_id").unwrap_or_default(), p.get("review_id").unwrap_or_default())
    };

    if editing {
        let client = client.clone();
        let alive = Arc::clone(&alive);
        Effect::new(move || {
            let (medication_id, review_id) = ids();
            let client = client.clone();
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = payload(medications::get_review(&client, &medication_id, &review_id).await);
                if !alive.load(Ordering::Relaxed) || current_ids() != (medication_id.clone(), review_id.clone()) {
                    log!("review {review_id} for editing is stale, ignoring");
                    return;
                }
                match result {
                    Ok(found) => {
                        text.set(found.review);
                        rating.set(found.rating.to_string());
                    }
                    Err(e) => {
                        warn!("review {review_id} failed to load for editing: {e}");
                        notify(notices, NoticeLevel::Error, REVIEW_FETCH_FAILED);
                    }
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ReviewForm { review: text.get_untracked(), rating: rating.get_untracked() };
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ReviewErrors::default());
        busy.set(true);

        let (medication_id, review_id) = current_ids();
        let review_id = if editing { review_id } else { String::new() };
        let review = build_review(draft, &session.snapshot(), review_id, now_millis());
        let client = client.clone();
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            let (result, success, failure) = if editing {
                let result = accepted(medications::update_review(&client, &medication_id, &review).await);
                (result, REVIEW_UPDATED, REVIEW_UPDATE_FAILED)
            } else {
                let result = accepted(medications::add_review(&client, &medication_id, &review).await);
                (result, REVIEW_ADDED, REVIEW_ADD_FAILED)
            };
            if !alive.load(Ordering::Relaxed) {
                log!("review submit finished after page closed");
                return;
            }
            match result {
                Ok(()) => {
                    notify(notices, NoticeLevel::Success, success);
                    redirect_to.set(Some(medication_detail_path(&medication_id)));
                }
                Err(e) => {
                    warn!("review submit failed: {e}");
                    notify(notices, NoticeLevel::Error, failure);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text=route.title()/>
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit novalidate=true>
                <h1>{route.title()}</h1>
                <label class="auth-form__field">
                    <span>"Review"</span>
                    <textarea
                        class="auth-input"
                        placeholder="Share your experience"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                    <span class="auth-form__error">{move || field_message(errors.get().review, "Review")}</span>
                </label>
                <label class="auth-form__field">
                    <span>"Rating"</span>
                    <input
                        class="auth-input"
                        type="number"
                        min=MIN_RATING.to_string()
                        max=MAX_RATING.to_string()
                        prop:value=move || rating.get()
                        on:input=move |ev| rating.set(event_target_value(&ev))
                    />
                    <span class="auth-form__error">{move || field_message(errors.get().rating, "Rating")}</span>
                </label>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {if editing { "Update" } else { "Add Review" }}
                </button>
            </form>
        </div>
    }
}
