//! Navigation controller: guard outcomes and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components and the header ask the controller what to do with a
//! navigation instead of inspecting the session themselves, so the redirect
//! behavior stays identical everywhere.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{self, AppRoute, CATALOG_PATH};
use crate::state::session::SessionStore;
use crate::util::guard::{Access, Decision, GuardState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    Proceed,
    Redirect(&'static str),
}

/// Fallback destination when `access` denies entry.
#[must_use]
pub fn denial_redirect(access: Access) -> &'static str {
    match access {
        // Guests bounced from editing pages, and signed-in users bounced from
        // sign-in/sign-up, both land on the catalog.
        Access::RequiresAuthenticated | Access::RequiresAnonymous | Access::Public => CATALOG_PATH,
    }
}

/// Outcome of a guard attempt. Only a settled `Allowed` proceeds; an attempt
/// that never settled is treated as denied.
#[must_use]
pub fn attempt_outcome(attempt: GuardState, access: Access) -> NavigationOutcome {
    let decision = attempt.decision().unwrap_or(Decision::Denied);
    if decision.is_allowed() { NavigationOutcome::Proceed } else { NavigationOutcome::Redirect(denial_redirect(access)) }
}

#[derive(Clone)]
pub struct NavigationController {
    session: SessionStore,
}

impl NavigationController {
    #[must_use]
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Outcome of entering a route that requires `access`.
    ///
    /// Reads the session untracked, so the outcome is fixed at entry.
    #[must_use]
    pub fn check(&self, access: Access) -> NavigationOutcome {
        let attempt = GuardState::Pending.settle(access, &self.session.snapshot());
        let outcome = attempt_outcome(attempt, access);
        if let NavigationOutcome::Redirect(path) = outcome {
            leptos::logging::log!("navigation denied ({access:?}), redirecting to {path}");
        }
        outcome
    }

    /// Outcome of navigating to `path`.
    #[must_use]
    pub fn navigate(&self, path: &str) -> NavigationOutcome {
        match routes::resolve(path) {
            AppRoute::Root | AppRoute::NotFound => NavigationOutcome::Redirect(CATALOG_PATH),
            route => self.check(route.access()),
        }
    }

    /// Drop the current session and return where to go next.
    pub fn sign_out(&self) -> &'static str {
        self.session.reset();
        leptos::logging::log!("signed out");
        CATALOG_PATH
    }
}

/// Navigate whenever `target` is filled, then clear it.
///
/// Async handlers set the signal instead of holding a navigate function, so
/// the router call always happens on the owning component's effect. Must be
/// called under a `<Router>`.
pub fn install_pending_redirect(target: RwSignal<Option<String>>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
