use super::*;

#[test]
fn resolve_maps_public_catalog_paths() {
    assert_eq!(resolve("/"), AppRoute::Root);
    assert_eq!(resolve(""), AppRoute::Root);
    assert_eq!(resolve("/list"), AppRoute::Catalog);
    assert_eq!(resolve("/medications/list"), AppRoute::Catalog);
    assert_eq!(resolve("/detail/m1"), AppRoute::MedicationDetail);
    assert_eq!(resolve("/medications/detail/m1"), AppRoute::MedicationDetail);
    assert_eq!(resolve("/review_detail/m1/review/r1"), AppRoute::ReviewDetail);
    assert_eq!(resolve("/medications/m1/reviews"), AppRoute::ReviewList);
}

#[test]
fn resolve_maps_auth_pages() {
    assert_eq!(resolve("/signin"), AppRoute::SignIn);
    assert_eq!(resolve("/signup/"), AppRoute::SignUp);
}

#[test]
fn resolve_maps_editing_pages() {
    assert_eq!(resolve("/medications/add"), AppRoute::AddMedication);
    assert_eq!(resolve("/medications/update/m1"), AppRoute::UpdateMedication);
    assert_eq!(resolve("/medications/m1/reviews/add"), AppRoute::AddReview);
    assert_eq!(resolve("/medications/m1/reviews/r1"), AppRoute::UpdateReview);
}

#[test]
fn resolve_ignores_query_and_fragment() {
    assert_eq!(resolve("/medications/add?draft=1"), AppRoute::AddMedication);
    assert_eq!(resolve("/signin#top"), AppRoute::SignIn);
}

#[test]
fn resolve_unknown_paths_to_not_found() {
    assert_eq!(resolve("/nope"), AppRoute::NotFound);
    assert_eq!(resolve("/medications"), AppRoute::NotFound);
    assert_eq!(resolve("/medications/m1/reviews/r1/extra"), AppRoute::NotFound);
}

#[test]
fn access_rules_match_route_kinds() {
    assert_eq!(AppRoute::SignIn.access(), Access::RequiresAnonymous);
    assert_eq!(AppRoute::SignUp.access(), Access::RequiresAnonymous);
    for route in [AppRoute::AddMedication, AppRoute::UpdateMedication, AppRoute::AddReview, AppRoute::UpdateReview] {
        assert_eq!(route.access(), Access::RequiresAuthenticated);
    }
    for route in [AppRoute::Catalog, AppRoute::MedicationDetail, AppRoute::ReviewList, AppRoute::NotFound] {
        assert_eq!(route.access(), Access::Public);
    }
}

#[test]
fn redirect_targets_are_public() {
    assert_eq!(resolve(CATALOG_PATH).access(), Access::Public);
    assert_eq!(resolve(AFTER_SIGN_IN_PATH).access(), Access::Public);
}

#[test]
fn path_builders_resolve_to_their_routes() {
    assert_eq!(resolve(&detail_path("m1")), AppRoute::MedicationDetail);
    assert_eq!(resolve(&medication_detail_path("m1")), AppRoute::MedicationDetail);
    assert_eq!(resolve(&update_medication_path("m1")), AppRoute::UpdateMedication);
    assert_eq!(resolve(&review_list_path("m1")), AppRoute::ReviewList);
    assert_eq!(resolve(&add_review_path("m1")), AppRoute::AddReview);
    assert_eq!(resolve(&update_review_path("m1", "r1")), AppRoute::UpdateReview);
    assert_eq!(resolve(&review_detail_path("m1", "r1")), AppRoute::ReviewDetail);
}
