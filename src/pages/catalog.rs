//! Catalog listing by first letter.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::net::http::HttpClient;
use crate::net::medications;
use crate::net::types::Medication;
use crate::routes::{AppRoute, detail_path};
use crate::state::medications::{DEFAULT_LETTER, catalog_heading, catalog_letters, payload};

fn letter_class(active: bool) -> &'static str {
    if active { "catalog__letter catalog__letter--active" } else { "catalog__letter" }
}

/// Letter picker plus the medications for the chosen letter. Opens on
/// [`DEFAULT_LETTER`]; a failed load shows an empty listing.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();

    let letter = RwSignal::new(DEFAULT_LETTER);
    let listing = RwSignal::new(Vec::<Medication>::new());
    let loaded = RwSignal::new(false);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Relaxed)
    });

    Effect::new(move || {
        let selected = letter.get();
        loaded.set(false);
        let client = client.clone();
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            let result = payload(medications::list_by_first_letter(&client, selected).await);
            if !alive.load(Ordering::Relaxed) || letter.get_untracked() != selected {
                log!("catalog for {selected} is stale, ignoring");
                return;
            }
            match result {
                Ok(found) => listing.set(found),
                Err(e) => {
                    warn!("catalog load for {selected} failed: {e}");
                    listing.set(Vec::new());
                }
            }
            loaded.set(true);
        });
    });

    view! {
        <Title text=AppRoute::Catalog.title()/>
        <section class="catalog">
            <div class="catalog__letters">
                {catalog_letters()
                    .map(|l| {
                        view! {
                            <button
                                type="button"
                                class=move || letter_class(letter.get() == l)
                                on:click=move |_| letter.set(l)
                            >
                                {l.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <h2 class="catalog__heading">{move || catalog_heading(letter.get())}</h2>
            <Show when=move || loaded.get() && listing.with(Vec::is_empty)>
                <p class="catalog__empty">"No medications found for this letter."</p>
            </Show>
            <ul class="catalog__list">
                <For
                    each=move || listing.get()
                    key=|medication| medication.id.clone()
                    children=move |medication: Medication| {
                        view! {
                            <li class="catalog__item">
                                <A href=detail_path(&medication.id)>{medication.name}</A>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
