//! Site header: brand, greeting, and auth-dependent navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links switch between the guest set and the signed-in set whenever the
//! session changes. Log Out clears the session through the navigation
//! controller and then routes to the catalog.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{ADD_MEDICATION_PATH, AFTER_SIGN_IN_PATH, CATALOG_PATH, SIGN_IN_PATH, SIGN_UP_PATH};
use crate::state::session::SessionStore;
use crate::util::navigation::{NavigationController, install_pending_redirect};

#[component]
pub fn NavHeader() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigation = expect_context::<NavigationController>();
    let redirect_to = RwSignal::new(None::<String>);
    install_pending_redirect(redirect_to);

    let signed_in = {
        let session = session.clone();
        move || session.is_authenticated()
    };
    let greeting = move || format!("Welcome {}!", session.get().full_name());

    let on_logout = move |_| {
        let target = navigation.sign_out();
        redirect_to.set(Some(target.to_owned()));
    };

    view! {
        <header class="nav-header">
            <div class="nav-header__brand">
                <A href=CATALOG_PATH>"Find Drugs & Conditions"</A>
            </div>
            <span class="nav-header__greeting">{greeting}</span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <p class="nav-header__prompt">"Please sign in to manage medications."</p>
                        <nav class="nav-header__links">
                            <A href=CATALOG_PATH>"Browse"</A>
                            <A href=SIGN_UP_PATH>"Signup"</A>
                            <A href=SIGN_IN_PATH>"Signin"</A>
                        </nav>
                    }
                }
            >
                <nav class="nav-header__links">
                    <A href=AFTER_SIGN_IN_PATH>"Home"</A>
                    <A href=ADD_MEDICATION_PATH>"Add Medication"</A>
                    <button class="nav-header__logout" type="button" on:click=on_logout.clone()>
                        "Log Out"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
