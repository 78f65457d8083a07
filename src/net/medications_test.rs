use super::*;
use crate::net::http::{AUTHORIZATION, Method, RequestBody};
use crate::net::token::TokenClaims;
use crate::net::types::{Availability, ReviewAuthor};
use crate::state::session::{Session, SessionStore};

fn client_with(store: SessionStore) -> HttpClient {
    let config = ClientConfig::from_parts(Some("http://api.test")).unwrap();
    HttpClient::new(config, store)
}

fn client() -> HttpClient {
    client_with(SessionStore::in_memory())
}

fn ann() -> Session {
    let claims = TokenClaims {
        id: "u1".to_owned(),
        fullname: "Ann".to_owned(),
        email: "a@x.com".to_owned(),
        exp: None,
        iat: None,
    };
    Session::from_claims(&claims, "h.p.s".to_owned()).unwrap()
}

fn draft() -> MedicationDraft {
    MedicationDraft {
        name: "Aspirin".to_owned(),
        generic_name: "acetylsalicylic acid".to_owned(),
        medication_class: "NSAID".to_owned(),
        availability: Availability::Otc,
    }
}

fn review() -> Review {
    Review {
        id: "r1".to_owned(),
        review: "Works".to_owned(),
        rating: 4,
        by: ReviewAuthor { user_id: "u1".to_owned(), fullname: "Ann".to_owned() },
        date: 0,
    }
}

#[test]
fn list_by_letter_queries_first_letter() {
    let req = build_list_by_letter(&client(), 'b');
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "http://api.test/medications?first_letter=B");
    assert_eq!(req.body, None);
}

#[test]
fn medication_read_and_delete_share_the_resource_url() {
    let c = client();
    assert_eq!(build_get_medication(&c, "m1").url, "http://api.test/medications/m1");
    let delete = build_delete_medication(&c, "m1");
    assert_eq!(delete.method, Method::Delete);
    assert_eq!(delete.url, "http://api.test/medications/m1");
}

#[test]
fn medication_body_carries_form_fields() {
    let body = medication_body(&draft(), None);
    assert_eq!(body.field("name"), Some("Aspirin"));
    assert_eq!(body.field("generic_name"), Some("acetylsalicylic acid"));
    assert_eq!(body.field("medication_class"), Some("NSAID"));
    assert_eq!(body.field("availability"), Some("OTC"));
    assert_eq!(body.attachment, None);
}

#[test]
fn create_and_update_send_multipart() {
    let c = client();
    let create = build_create_medication(&c, medication_body(&draft(), None));
    assert_eq!(create.method, Method::Post);
    assert_eq!(create.url, "http://api.test/medications");
    assert!(matches!(create.body, Some(RequestBody::Multipart(_))));

    let update = build_update_medication(&c, "m1", medication_body(&draft(), None));
    assert_eq!(update.method, Method::Put);
    assert_eq!(update.url, "http://api.test/medications/m1");
    assert!(matches!(update.body, Some(RequestBody::Multipart(_))));
}

#[test]
fn name_verify_posts_name() {
    let req = build_verify_name(&client(), "Aspirin").unwrap();
    assert_eq!(req.url, "http://api.test/medications/name/verify");
    assert_eq!(req.json_body(), Some(r#"{"name":"Aspirin"}"#));
}

#[test]
fn review_urls_nest_under_medication() {
    let c = client();
    assert_eq!(build_list_reviews(&c, "m1").url, "http://api.test/medications/m1/reviews");
    assert_eq!(build_get_review(&c, "m1", "r1").url, "http://api.test/medications/m1/reviews/r1");

    let add = build_add_review(&c, "m1", &review()).unwrap();
    assert_eq!(add.method, Method::Post);
    assert_eq!(add.url, "http://api.test/medications/m1/reviews");

    let update = build_update_review(&c, "m1", &review()).unwrap();
    assert_eq!(update.method, Method::Put);
    assert_eq!(update.url, "http://api.test/medications/m1/reviews/r1");

    let delete = build_delete_review(&c, "m1", "r1");
    assert_eq!(delete.method, Method::Delete);
}

#[test]
fn writes_carry_bearer_for_signed_in_user() {
    let store = SessionStore::in_memory();
    let c = client_with(store.clone());
    let anon = c.prepare(build_delete_medication(&c, "m1"));
    assert_eq!(anon.header_value(AUTHORIZATION), None);

    store.set(ann());
    let delete = c.prepare(build_delete_medication(&c, "m1"));
    assert_eq!(delete.header_value(AUTHORIZATION), Some("Bearer h.p.s"));
    let update = c.prepare(build_update_medication(&c, "m1", medication_body(&draft(), None)));
    assert_eq!(update.header_value(AUTHORIZATION), Some("Bearer h.p.s"));
    let add = c.prepare(build_add_review(&c, "m1", &review()).unwrap());
    assert_eq!(add.header_value(AUTHORIZATION), Some("Bearer h.p.s"));
}

#[test]
fn image_url_points_at_image_endpoint() {
    let config = ClientConfig::from_parts(Some("http://api.test/")).unwrap();
    assert_eq!(image_url(&config, "i1"), "http://api.test/medications/images/i1");
}
