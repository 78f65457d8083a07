use super::*;

#[test]
fn email_shape_checks() {
    assert!(is_valid_email("a@x.com"));
    assert!(is_valid_email("first.last+tag@sub-domain.example"));
    assert!(is_valid_email("user@localhost"));
    assert!(!is_valid_email("no-at-sign"));
    assert!(!is_valid_email("@x.com"));
    assert!(!is_valid_email("a@"));
    assert!(!is_valid_email("a@@x.com"));
    assert!(!is_valid_email("a b@x.com"));
    assert!(!is_valid_email("a@x..com"));
    assert!(!is_valid_email("a@-x.com"));
}

#[test]
fn validate_email_trims_and_requires_value() {
    assert_eq!(validate_email("  a@x.com "), Ok("a@x.com".to_owned()));
    assert_eq!(validate_email("   "), Err(FieldError::Required));
    assert_eq!(validate_email("nope"), Err(FieldError::InvalidEmail));
}

#[test]
fn validate_password_keeps_whitespace_and_checks_length() {
    assert_eq!(validate_password(" secret12 ", MIN_PASSWORD_LEN), Ok(" secret12 ".to_owned()));
    assert_eq!(validate_password("", MIN_PASSWORD_LEN), Err(FieldError::Required));
    assert_eq!(validate_password("short", MIN_PASSWORD_LEN), Err(FieldError::TooShort(8)));
}

#[test]
fn sign_in_form_returns_credentials() {
    let form = SignInForm { email: " a@x.com ".to_owned(), password: "pw".to_owned() };
    let req = form.validate().unwrap();
    assert_eq!(req.email, "a@x.com");
    assert_eq!(req.password, "pw");
}

#[test]
fn sign_in_form_reports_all_missing_fields() {
    let errors = SignInForm::default().validate().unwrap_err();
    assert_eq!(errors.email, Some(FieldError::Required));
    assert_eq!(errors.password, Some(FieldError::Required));
}

#[test]
fn sign_up_form_requires_min_password_length() {
    let form = SignUpForm {
        fullname: "Ann".to_owned(),
        email: "a@x.com".to_owned(),
        password: "1234567".to_owned(),
        email_taken: false,
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.password, Some(FieldError::TooShort(MIN_PASSWORD_LEN)));
    assert_eq!(errors.fullname, None);
    assert_eq!(errors.email, None);
}

#[test]
fn sign_up_form_blocks_taken_email() {
    let form = SignUpForm {
        fullname: "Ann".to_owned(),
        email: "a@x.com".to_owned(),
        password: "password1".to_owned(),
        email_taken: true,
    };
    assert_eq!(form.validate().unwrap_err().email, Some(FieldError::EmailExists));
}

#[test]
fn sign_up_form_builds_request_when_valid() {
    let form = SignUpForm {
        fullname: " Ann ".to_owned(),
        email: "a@x.com".to_owned(),
        password: "password1".to_owned(),
        email_taken: false,
    };
    let req = form.validate().unwrap();
    assert_eq!(req.fullname, "Ann");
    assert_eq!(req.email, "a@x.com");
    assert_eq!(req.password, "password1");
}

#[test]
fn field_error_messages() {
    assert_eq!(FieldError::Required.message("Email"), "Email is required");
    assert_eq!(FieldError::TooShort(8).message("Password"), "Password must be at least 8 characters long!");
    assert_eq!(FieldError::EmailExists.message("Email"), "Email already exist");
}

#[test]
fn field_message_is_empty_without_error() {
    assert_eq!(field_message(None, "Email"), "");
    assert_eq!(field_message(Some(FieldError::InvalidEmail), "Email"), "Please enter a valid email address");
}

#[test]
fn existence_check_needed_until_current_value_was_checked() {
    assert!(needs_existence_check(None, "a@x.com"));
    assert!(needs_existence_check(Some("a@x.com"), "b@x.com"));
    assert!(!needs_existence_check(Some("a@x.com"), " a@x.com "));
}

#[test]
fn availability_accepts_exact_spellings_only() {
    assert_eq!(validate_availability("OTC"), Ok(Availability::Otc));
    assert_eq!(validate_availability(" Prescription "), Ok(Availability::Prescription));
    assert_eq!(validate_availability("otc"), Err(FieldError::InvalidAvailability));
    assert_eq!(validate_availability(""), Err(FieldError::Required));
}

#[test]
fn rating_must_be_whole_number_in_range() {
    assert_eq!(validate_rating("1"), Ok(1));
    assert_eq!(validate_rating(" 5 "), Ok(5));
    let out_of_range = FieldError::OutOfRange { min: MIN_RATING, max: MAX_RATING };
    assert_eq!(validate_rating("0"), Err(out_of_range));
    assert_eq!(validate_rating("6"), Err(out_of_range));
    assert_eq!(validate_rating("3.5"), Err(out_of_range));
    assert_eq!(validate_rating("-1"), Err(out_of_range));
    assert_eq!(validate_rating(""), Err(FieldError::Required));
    assert_eq!(out_of_range.message("Rating"), "Rating must be between 1 and 5");
}

#[test]
fn medication_form_reports_every_missing_field() {
    let errors = MedicationForm::default().validate().unwrap_err();
    assert_eq!(errors.name, Some(FieldError::Required));
    assert_eq!(errors.generic_name, Some(FieldError::Required));
    assert_eq!(errors.medication_class, Some(FieldError::Required));
    assert_eq!(errors.availability, Some(FieldError::Required));
}

#[test]
fn medication_form_blocks_taken_name() {
    let form = MedicationForm {
        name: "Aspirin".to_owned(),
        generic_name: "acetylsalicylic acid".to_owned(),
        medication_class: "NSAID".to_owned(),
        availability: "OTC".to_owned(),
        name_taken: true,
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.name, Some(FieldError::NameExists));
    assert_eq!(FieldError::NameExists.message("Name"), "Medication name already exist");
}

#[test]
fn medication_form_builds_trimmed_draft() {
    let form = MedicationForm {
        name: " Aspirin ".to_owned(),
        generic_name: "acetylsalicylic acid".to_owned(),
        medication_class: "NSAID".to_owned(),
        availability: "Prescription".to_owned(),
        name_taken: false,
    };
    let draft = form.validate().unwrap();
    assert_eq!(draft.name, "Aspirin");
    assert_eq!(draft.availability, Availability::Prescription);
}

#[test]
fn review_form_validates_text_and_rating() {
    let draft = ReviewForm { review: " Works well ".to_owned(), rating: "4".to_owned() }.validate().unwrap();
    assert_eq!(draft.review, "Works well");
    assert_eq!(draft.rating, 4);

    let errors = ReviewForm { review: String::new(), rating: "9".to_owned() }.validate().unwrap_err();
    assert_eq!(errors.review, Some(FieldError::Required));
    assert_eq!(errors.rating, Some(FieldError::OutOfRange { min: 1, max: 5 }));
}
