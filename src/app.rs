//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_header::NavHeader;
use crate::components::notice_tray::NoticeTray;
use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::net::http::HttpClient;
use crate::pages::catalog::CatalogPage;
use crate::pages::medication_detail::MedicationDetailPage;
use crate::pages::medication_form::MedicationFormPage;
use crate::pages::reviews::{ReviewDetailPage, ReviewFormPage, ReviewListPage};
use crate::pages::{signin::SignInPage, signup::SignUpPage};
use crate::routes::{AppRoute, CATALOG_PATH};
use crate::state::notices::NoticeState;
use crate::state::session::{SessionPersistence, SessionStore};
use crate::util::navigation::NavigationController;
use crate::util::storage::BrowserStorage;

fn page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::MedicationDetail => view! { <MedicationDetailPage/> }.into_any(),
        AppRoute::ReviewDetail => view! { <ReviewDetailPage/> }.into_any(),
        AppRoute::ReviewList => view! { <ReviewListPage/> }.into_any(),
        AppRoute::AddMedication | AppRoute::UpdateMedication => view! { <MedicationFormPage route=route/> }.into_any(),
        AppRoute::AddReview | AppRoute::UpdateReview => view! { <ReviewFormPage route=route/> }.into_any(),
        _ => view! { <CatalogPage/> }.into_any(),
    }
}

/// Catalog or editing page behind its guard. The page is only built once the
/// guard lets the visitor in.
fn section(route: AppRoute) -> impl IntoView {
    view! { <RouteGuard route=route>{page(route)}</RouteGuard> }
}

/// Root application component.
///
/// Restores the session from `localStorage`, provides the shared contexts, and
/// declares every route. Guarded routes check access once on entry.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionStore::restore(SessionPersistence::new(BrowserStorage, config.storage_key.clone()));
    let navigation = NavigationController::new(session.clone());
    let client = HttpClient::new(config, session.clone());

    provide_context(session);
    provide_context(navigation);
    provide_context(client);
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Title text="Medications"/>

        <Router>
            <NavHeader/>
            <NoticeTray/>
            <main class="page">
                <Routes fallback=|| view! { <Redirect path=CATALOG_PATH/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=CATALOG_PATH/> }/>
                    <Route path=StaticSegment("list") view=|| section(AppRoute::Catalog)/>
                    <Route
                        path=(StaticSegment("detail"), ParamSegment("medication_id"))
                        view=|| section(AppRoute::MedicationDetail)
                    />
                    <Route
                        path=(
                            StaticSegment("review_detail"),
                            ParamSegment("medication_id"),
                            StaticSegment("review"),
                            ParamSegment("review_id"),
                        )
                        view=|| section(AppRoute::ReviewDetail)
                    />
                    <Route
                        path=StaticSegment("signin")
                        view=|| {
                            view! {
                                <RouteGuard route=AppRoute::SignIn>
                                    <SignInPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| {
                            view! {
                                <RouteGuard route=AppRoute::SignUp>
                                    <SignUpPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("medications"), StaticSegment("list"))
                        view=|| section(AppRoute::Catalog)
                    />
                    <Route
                        path=(StaticSegment("medications"), StaticSegment("add"))
                        view=|| section(AppRoute::AddMedication)
                    />
                    <Route
                        path=(StaticSegment("medications"), StaticSegment("update"), ParamSegment("medication_id"))
                        view=|| section(AppRoute::UpdateMedication)
                    />
                    <Route
                        path=(StaticSegment("medications"), StaticSegment("detail"), ParamSegment("medication_id"))
                        view=|| section(AppRoute::MedicationDetail)
                    />
                    <Route
                        path=(
                            StaticSegment("medications"),
                            ParamSegment("medication_id"),
                            StaticSegment("reviews"),
                            StaticSegment("add"),
                        )
                        view=|| section(AppRoute::AddReview)
                    />
                    <Route
                        path=(
                            StaticSegment("medications"),
                            ParamSegment("medication_id"),
                            StaticSegment("reviews"),
                            ParamSegment("review_id"),
                        )
                        view=|| section(AppRoute::UpdateReview)
                    />
                    <Route
                        path=(StaticSegment("medications"), ParamSegment("medication_id"), StaticSegment("reviews"))
                        view=|| section(AppRoute::ReviewList)
                    />
                </Routes>
            </main>
        </Router>
    }
}
