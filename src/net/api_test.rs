use super::*;
use crate::config::ClientConfig;
use crate::net::http::{AUTHORIZATION, Method};
use crate::state::session::SessionStore;

fn client() -> HttpClient {
    let config = ClientConfig::from_parts(Some("http://api.test/")).unwrap();
    HttpClient::new(config, SessionStore::in_memory())
}

#[test]
fn sign_in_request_posts_credentials() {
    let creds = SignInRequest { email: "a@x.com".to_owned(), password: "pw".to_owned() };
    let req = build_sign_in(&client(), &creds).unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://api.test/users/signin");
    assert_eq!(req.json_body(), Some(r#"{"email":"a@x.com","password":"pw"}"#));
}

#[test]
fn sign_up_request_targets_signup() {
    let user = SignUpRequest { fullname: "Ann".to_owned(), email: "a@x.com".to_owned(), password: "password1".to_owned() };
    let req = build_sign_up(&client(), &user).unwrap();
    assert_eq!(req.url, "http://api.test/users/signup");
}

#[test]
fn verify_request_carries_email_only() {
    let req = build_verify(&client(), "a@x.com").unwrap();
    assert_eq!(req.url, "http://api.test/users/verify");
    assert_eq!(req.json_body(), Some(r#"{"email":"a@x.com"}"#));
}

#[test]
fn anonymous_calls_carry_no_credential() {
    let c = client();
    let req = c.prepare(build_verify(&c, "a@x.com").unwrap());
    assert_eq!(req.header_value(AUTHORIZATION), None);
}
