//! Application route table.
//!
//! DESIGN
//! ======
//! `AppRoute` is the single list of destinations. The Leptos router in
//! `app.rs` mirrors it, and the navigation controller uses [`resolve`] to find
//! the access rule for an arbitrary path.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::util::guard::Access;

/// Catalog listing; target of guard redirects and sign-out.
pub const CATALOG_PATH: &str = "/list";
/// Catalog listing under the medications section.
pub const MEDICATION_LIST_PATH: &str = "/medications/list";
/// Where a successful sign-in lands.
pub const AFTER_SIGN_IN_PATH: &str = MEDICATION_LIST_PATH;
pub const SIGN_IN_PATH: &str = "/signin";
pub const SIGN_UP_PATH: &str = "/signup";
pub const ADD_MEDICATION_PATH: &str = "/medications/add";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`, redirects to the catalog.
    Root,
    Catalog,
    MedicationDetail,
    ReviewDetail,
    SignIn,
    SignUp,
    AddMedication,
    UpdateMedication,
    AddReview,
    UpdateReview,
    ReviewList,
    /// Unknown path, redirects to the catalog.
    NotFound,
}

impl AppRoute {
    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::SignIn | Self::SignUp => Access::RequiresAnonymous,
            Self::AddMedication | Self::UpdateMedication | Self::AddReview | Self::UpdateReview => {
                Access::RequiresAuthenticated
            }
            Self::Root
            | Self::Catalog
            | Self::MedicationDetail
            | Self::ReviewDetail
            | Self::ReviewList
            | Self::NotFound => Access::Public,
        }
    }

    /// Document title shown while the route is active.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Root | Self::Catalog | Self::NotFound => "Medications",
            Self::MedicationDetail => "Medication Detail",
            Self::ReviewDetail => "Review Detail",
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::AddMedication => "Add Medication",
            Self::UpdateMedication => "Update Medication",
            Self::AddReview => "Add Review",
            Self::UpdateReview => "Update Review",
            Self::ReviewList => "Reviews",
        }
    }
}

/// `/detail/:id`, the link target from catalog listings.
#[must_use]
pub fn detail_path(medication_id: &str) -> String {
    format!("/detail/{medication_id}")
}

/// `/medications/detail/:id`, where medication and review edits land.
#[must_use]
pub fn medication_detail_path(medication_id: &str) -> String {
    format!("/medications/detail/{medication_id}")
}

#[must_use]
pub fn update_medication_path(medication_id: &str) -> String {
    format!("/medications/update/{medication_id}")
}

#[must_use]
pub fn review_list_path(medication_id: &str) -> String {
    format!("/medications/{medication_id}/reviews")
}

#[must_use]
pub fn add_review_path(medication_id: &str) -> String {
    format!("/medications/{medication_id}/reviews/add")
}

#[must_use]
pub fn update_review_path(medication_id: &str, review_id: &str) -> String {
    format!("/medications/{medication_id}/reviews/{review_id}")
}

#[must_use]
pub fn review_detail_path(medication_id: &str, review_id: &str) -> String {
    format!("/review_detail/{medication_id}/review/{review_id}")
}

/// Map a concrete path (query and fragment ignored) to its route.
#[must_use]
pub fn resolve(path: &str) -> AppRoute {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => AppRoute::Root,
        ["list"] | ["medications", "list"] => AppRoute::Catalog,
        ["detail", _] | ["medications", "detail", _] => AppRoute::MedicationDetail,
        ["review_detail", _, "review", _] => AppRoute::ReviewDetail,
        ["signin"] => AppRoute::SignIn,
        ["signup"] => AppRoute::SignUp,
        ["medications", "add"] => AppRoute::AddMedication,
        ["medications", "update", _] => AppRoute::UpdateMedication,
        ["medications", _, "reviews", "add"] => AppRoute::AddReview,
        ["medications", _, "reviews"] => AppRoute::ReviewList,
        ["medications", _, "reviews", _] => AppRoute::UpdateReview,
        _ => AppRoute::NotFound,
    }
}
