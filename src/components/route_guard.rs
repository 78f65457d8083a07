//! Entry guard wrapping a routed page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes::AppRoute;
use crate::util::navigation::{NavigationController, NavigationOutcome};

/// Render `children` when the session may enter `route`, otherwise redirect.
///
/// The check runs once when the route is entered; later session changes
/// (a sign-in on this very page, say) do not re-run it.
#[component]
pub fn RouteGuard(route: AppRoute, children: Children) -> impl IntoView {
    let navigation = expect_context::<NavigationController>();
    match navigation.check(route.access()) {
        NavigationOutcome::Proceed => children().into_any(),
        NavigationOutcome::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
