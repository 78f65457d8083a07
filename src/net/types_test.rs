use super::*;

#[test]
fn sign_in_request_serializes_credentials() {
    let req = SignInRequest { email: "a@x.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@x.com", "password": "pw" })
    );
}

#[test]
fn sign_in_failure_may_omit_token() {
    let resp: SignInResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert!(!resp.success);
    assert!(resp.data.is_empty());
}

#[test]
fn sign_up_request_uses_fullname_key() {
    let req = SignUpRequest { fullname: "Ann".to_owned(), email: "a@x.com".to_owned(), password: "password1".to_owned() };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["fullname"], "Ann");
}

#[test]
fn sign_up_response_reads_created_user() {
    let resp: SignUpResponse = serde_json::from_str(
        r#"{"success":true,"data":{"_id":"u1","fullname":"Ann","email":"a@x.com","password":"hash"}}"#,
    )
    .unwrap();
    assert!(resp.success);
    let user = resp.data.unwrap();
    assert_eq!(user.id.as_deref(), Some("u1"));
    assert_eq!(user.fullname, "Ann");
}

#[test]
fn verify_response_accepts_null_and_map() {
    let free: VerifyResponse = serde_json::from_str("null").unwrap();
    assert!(free.is_none());
    let taken: VerifyResponse = serde_json::from_str(r#"{"email_exist":true}"#).unwrap();
    assert_eq!(taken.unwrap().get("email_exist"), Some(&true));
}

#[test]
fn medication_list_envelope_parses() {
    let raw = r#"{"success":true,"data":[{
        "_id":"m1","name":"Aspirin","first_letter":"A","generic_name":"acetylsalicylic acid",
        "medication_class":"NSAID","availability":"OTC",
        "image":{"_id":"i1","filename":"f.png","originalname":"aspirin.png"},
        "added_by":{"user_id":"u1","fullname":"Ann","email":"a@x.com"},
        "reviews":[]
    }]}"#;
    let resp: Envelope<Vec<Medication>> = serde_json::from_str(raw).unwrap();
    assert!(resp.success);
    let meds = resp.data.unwrap();
    assert_eq!(meds[0].name, "Aspirin");
    assert_eq!(meds[0].image.as_ref().map(|i| i.id.as_str()), Some("i1"));
    assert_eq!(meds[0].added_by.user_id, "u1");
}

#[test]
fn medication_without_image_parses() {
    let raw = r#"{"_id":"m2","name":"Zinc","added_by":{"user_id":"u2","fullname":"Bob"}}"#;
    let med: Medication = serde_json::from_str(raw).unwrap();
    assert_eq!(med.image, None);
    assert!(med.reviews.is_empty());
}

#[test]
fn failed_envelope_may_omit_data() {
    let resp: Envelope<bool> = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.data, None);
}

#[test]
fn review_serializes_with_storage_field_names() {
    let review = Review {
        id: "r1".to_owned(),
        review: "Works".to_owned(),
        rating: 4,
        by: ReviewAuthor { user_id: "u1".to_owned(), fullname: "Ann".to_owned() },
        date: 1_700_000_000_000,
    };
    assert_eq!(
        serde_json::to_value(&review).unwrap(),
        serde_json::json!({
            "_id": "r1", "review": "Works", "rating": 4,
            "by": { "user_id": "u1", "fullname": "Ann" }, "date": 1_700_000_000_000_i64
        })
    );
}
