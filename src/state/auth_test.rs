use super::*;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::collections::HashMap;

use crate::net::types::User;

fn make_token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    format!("{header}.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

fn ann_token() -> String {
    make_token(r#"{"_id":"u1","fullname":"Ann","email":"a@x.com","iat":1,"exp":2}"#)
}

fn ok(data: String) -> Result<SignInResponse, ApiError> {
    Ok(SignInResponse { success: true, data })
}

// =============================================================
// Sign-in
// =============================================================

#[test]
fn successful_sign_in_replaces_session() {
    let store = SessionStore::in_memory();
    let token = ann_token();
    let session = apply_sign_in(&store, ok(token.clone())).unwrap();

    assert_eq!(session.identity_id(), "u1");
    assert_eq!(session.full_name(), "Ann");
    assert_eq!(session.email(), "a@x.com");
    assert_eq!(session.token(), token);
    assert_eq!(store.snapshot(), session);
    assert!(store.is_authenticated());
}

#[test]
fn rejected_sign_in_leaves_session_unchanged() {
    let store = SessionStore::in_memory();
    let before = store.snapshot();
    let err = apply_sign_in(&store, Ok(SignInResponse { success: false, data: String::new() })).unwrap_err();

    assert!(matches!(err, SignInError::Rejected));
    assert_eq!(err.notice(), "Invalid Username or Password.");
    assert_eq!(store.snapshot(), before);
    assert_eq!(store.version(), 0);
}

#[test]
fn rejected_sign_in_keeps_existing_user() {
    let store = SessionStore::in_memory();
    apply_sign_in(&store, ok(ann_token())).unwrap();
    let before = store.snapshot();
    assert!(apply_sign_in(&store, Ok(SignInResponse { success: false, data: String::new() })).is_err());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn transport_failure_is_reported_as_invalid_credentials() {
    let store = SessionStore::in_memory();
    let err = apply_sign_in(&store, Err(ApiError::Status(401))).unwrap_err();
    assert!(matches!(err, SignInError::Transport(ApiError::Status(401))));
    assert_eq!(err.notice(), SIGN_IN_REJECTED);
    assert!(!store.is_authenticated());
}

#[test]
fn malformed_token_aborts_sign_in() {
    let store = SessionStore::in_memory();
    let err = apply_sign_in(&store, ok("not-a-token".to_owned())).unwrap_err();
    assert!(matches!(err, SignInError::Decode(DecodeError::SegmentCount(1))));
    assert_eq!(err.notice(), SIGN_IN_DECODE_FAILED);
    assert_eq!(store.snapshot(), Session::anonymous());
    assert_eq!(store.version(), 0);
}

#[test]
fn token_without_identity_aborts_sign_in() {
    let store = SessionStore::in_memory();
    let token = make_token(r#"{"_id":"","fullname":"Ann","email":"a@x.com"}"#);
    assert!(matches!(apply_sign_in(&store, ok(token)), Err(SignInError::Decode(DecodeError::MissingIdentity))));
    assert!(!store.is_authenticated());
}

// =============================================================
// Sign-up
// =============================================================

#[test]
fn sign_up_success_and_rejection() {
    let user = User { id: Some("u1".to_owned()), fullname: "Ann".to_owned(), email: "a@x.com".to_owned() };
    assert!(apply_sign_up(Ok(SignUpResponse { success: true, data: Some(user) })).is_ok());
    assert!(matches!(
        apply_sign_up(Ok(SignUpResponse { success: false, data: None })),
        Err(SignUpError::Rejected)
    ));
}

#[test]
fn sign_up_transport_failure_has_generic_notice() {
    let err = apply_sign_up(Err(ApiError::Transport("offline".to_owned()))).unwrap_err();
    assert_eq!(err.notice(), SIGN_UP_FAILED);
}

#[test]
fn email_taken_reads_conflict_map() {
    assert!(!email_taken(&None));
    assert!(!email_taken(&Some(HashMap::new())));
    assert!(!email_taken(&Some(HashMap::from([("email_exist".to_owned(), false)]))));
    assert!(email_taken(&Some(HashMap::from([("email_exist".to_owned(), true)]))));
}
