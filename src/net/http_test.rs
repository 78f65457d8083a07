use super::*;
use crate::net::token::TokenClaims;

fn signed_in() -> Session {
    let claims = TokenClaims {
        id: "u1".to_owned(),
        fullname: "Ann".to_owned(),
        email: "a@x.com".to_owned(),
        exp: None,
        iat: None,
    };
    Session::from_claims(&claims, "h.p.s".to_owned()).unwrap()
}

#[test]
fn attach_session_adds_bearer_for_signed_in_user() {
    let req = attach_session(ApiRequest::get("http://api/medications"), &signed_in());
    assert_eq!(req.header_value("authorization"), Some("Bearer h.p.s"));
}

#[test]
fn attach_session_leaves_anonymous_request_untouched() {
    let req = ApiRequest::get("http://api/medications");
    assert_eq!(attach_session(req.clone(), &Session::anonymous()), req);
}

#[test]
fn attach_session_replaces_stale_authorization_header() {
    let req = ApiRequest::get("http://api/medications").header("authorization", "Bearer old");
    let req = attach_session(req, &signed_in());
    assert_eq!(req.headers.len(), 1);
    assert_eq!(req.header_value(AUTHORIZATION), Some("Bearer h.p.s"));
}

#[test]
fn attach_session_preserves_method_url_and_body() {
    let req = ApiRequest::post("http://api/users/verify")
        .json(&serde_json::json!({ "email": "a@x.com" }))
        .unwrap();
    let decorated = attach_session(req.clone(), &signed_in());
    assert_eq!(decorated.method, Method::Post);
    assert_eq!(decorated.url, req.url);
    assert_eq!(decorated.body, req.body);
    assert_eq!(decorated.header_value("Content-Type"), Some("application/json"));
}

#[test]
fn json_serializes_body() {
    let req = ApiRequest::post("u").json(&serde_json::json!({ "email": "a@x.com" })).unwrap();
    assert_eq!(req.json_body(), Some(r#"{"email":"a@x.com"}"#));
}

#[test]
fn multipart_body_skips_json_content_type() {
    let body = MultipartBody::default().text("name", "Aspirin").text("availability", "OTC");
    let req = ApiRequest::put("u").multipart(body);
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.header_value("Content-Type"), None);
    assert_eq!(req.json_body(), None);
    let Some(RequestBody::Multipart(body)) = &req.body else { panic!("expected multipart body") };
    assert_eq!(body.field("name"), Some("Aspirin"));
    assert_eq!(body.field("availability"), Some("OTC"));
    assert_eq!(body.field("image"), None);
}

#[test]
fn delete_requests_are_decorated_too() {
    let req = attach_session(ApiRequest::delete("http://api/medications/m1"), &signed_in());
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.header_value(AUTHORIZATION), Some("Bearer h.p.s"));
}

#[test]
fn client_prepare_follows_current_session() {
    let store = SessionStore::in_memory();
    let client = HttpClient::new(ClientConfig::default(), store.clone());

    let anon = client.prepare(ApiRequest::get("u"));
    assert_eq!(anon.header_value(AUTHORIZATION), None);

    store.set(signed_in());
    let authed = client.prepare(ApiRequest::get("u"));
    assert_eq!(authed.header_value(AUTHORIZATION), Some("Bearer h.p.s"));

    store.reset();
    assert_eq!(client.prepare(ApiRequest::get("u")).header_value(AUTHORIZATION), None);
}
