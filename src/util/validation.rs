//! Form validation for the auth, medication, and review pages.
//!
//! Rules are plain functions over the raw field text so pages only wire
//! signals and messages.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{Availability, MedicationDraft, ReviewDraft, SignInRequest, SignUpRequest};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort(usize),
    /// Set by the async existence check, not by [`validate_email`].
    EmailExists,
    /// Set by the async medication name check.
    NameExists,
    InvalidAvailability,
    OutOfRange { min: u8, max: u8 },
}

impl FieldError {
    /// Message for a field labelled `label`.
    #[must_use]
    pub fn message(self, label: &str) -> String {
        match self {
            Self::Required => format!("{label} is required"),
            Self::InvalidEmail => "Please enter a valid email address".to_owned(),
            Self::TooShort(min) => format!("{label} must be at least {min} characters long!"),
            Self::EmailExists => "Email already exist".to_owned(),
            Self::NameExists => "Medication name already exist".to_owned(),
            Self::InvalidAvailability => "Please enter Prescription or OTC".to_owned(),
            Self::OutOfRange { min, max } => format!("{label} must be between {min} and {max}"),
        }
    }
}

/// Inline text under a field: the error message, or empty when valid.
#[must_use]
pub fn field_message(error: Option<FieldError>, label: &str) -> String {
    error.map(|e| e.message(label)).unwrap_or_default()
}

/// Loose address check: one `@`, non-empty local part, dotted-label domain
/// of ASCII alphanumerics and hyphens, no whitespace.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// # Errors
///
/// `Required` when blank, `InvalidEmail` when malformed.
pub fn validate_email(value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(value.to_owned())
}

/// # Errors
///
/// `Required` when blank.
pub fn validate_required(value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() { Err(FieldError::Required) } else { Ok(value.to_owned()) }
}

/// Passwords are kept verbatim; only emptiness and length are checked.
///
/// # Errors
///
/// `Required` when empty, `TooShort` below `min_len` characters.
pub fn validate_password(value: &str, min_len: usize) -> Result<String, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if value.chars().count() < min_len {
        return Err(FieldError::TooShort(min_len));
    }
    Ok(value.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl SignInForm {
    /// Validate and return trimmed credentials.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<SignInRequest, SignInErrors> {
        let email = validate_email(&self.email);
        let password = validate_password(&self.password, 1);
        match (email, password) {
            (Ok(email), Ok(password)) => Ok(SignInRequest { email, password }),
            (email, password) => Err(SignInErrors { email: email.err(), password: password.err() }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub fullname: String,
    pub email: String,
    pub password: String,
    /// Outcome of the last existence check for `email`.
    pub email_taken: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub fullname: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl SignUpForm {
    /// Validate and return the registration body.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<SignUpRequest, SignUpErrors> {
        let fullname = validate_required(&self.fullname);
        let email = validate_email(&self.email).and_then(|email| {
            if self.email_taken { Err(FieldError::EmailExists) } else { Ok(email) }
        });
        let password = validate_password(&self.password, MIN_PASSWORD_LEN);
        match (fullname, email, password) {
            (Ok(fullname), Ok(email), Ok(password)) => {
                Ok(SignUpRequest { fullname, email, password })
            }
            (fullname, email, password) => {
                Err(SignUpErrors { fullname: fullname.err(), email: email.err(), password: password.err() })
            }
        }
    }
}

/// Whether a value about to be submitted still needs its existence check:
/// true unless the last completed check was for this exact value.
#[must_use]
pub fn needs_existence_check(last_checked: Option<&str>, value: &str) -> bool {
    last_checked != Some(value.trim())
}

/// # Errors
///
/// `Required` when blank, `InvalidAvailability` unless exactly
/// `Prescription` or `OTC`.
pub fn validate_availability(value: &str) -> Result<Availability, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    Availability::parse(value).ok_or(FieldError::InvalidAvailability)
}

/// # Errors
///
/// `Required` when blank, `OutOfRange` for anything but a whole number in
/// `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(value: &str) -> Result<u8, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let out_of_range = FieldError::OutOfRange { min: MIN_RATING, max: MAX_RATING };
    let rating: u8 = value.parse().map_err(|_| out_of_range)?;
    if (MIN_RATING..=MAX_RATING).contains(&rating) { Ok(rating) } else { Err(out_of_range) }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicationForm {
    pub name: String,
    pub generic_name: String,
    pub medication_class: String,
    pub availability: String,
    /// Outcome of the last name existence check (add form only).
    pub name_taken: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicationErrors {
    pub name: Option<FieldError>,
    pub generic_name: Option<FieldError>,
    pub medication_class: Option<FieldError>,
    pub availability: Option<FieldError>,
}

impl MedicationForm {
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<MedicationDraft, MedicationErrors> {
        let name = validate_required(&self.name)
            .and_then(|name| if self.name_taken { Err(FieldError::NameExists) } else { Ok(name) });
        let generic_name = validate_required(&self.generic_name);
        let medication_class = validate_required(&self.medication_class);
        let availability = validate_availability(&self.availability);
        match (name, generic_name, medication_class, availability) {
            (Ok(name), Ok(generic_name), Ok(medication_class), Ok(availability)) => {
                Ok(MedicationDraft { name, generic_name, medication_class, availability })
            }
            (name, generic_name, medication_class, availability) => Err(MedicationErrors {
                name: name.err(),
                generic_name: generic_name.err(),
                medication_class: medication_class.err(),
                availability: availability.err(),
            }),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub review: String,
    pub rating: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewErrors {
    pub review: Option<FieldError>,
    pub rating: Option<FieldError>,
}

impl ReviewForm {
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<ReviewDraft, ReviewErrors> {
        match (validate_required(&self.review), validate_rating(&self.rating)) {
            (Ok(review), Ok(rating)) => Ok(ReviewDraft { review, rating }),
            (review, rating) => Err(ReviewErrors { review: review.err(), rating: rating.err() }),
        }
    }
}
