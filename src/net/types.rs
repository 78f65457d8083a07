//! Request and response bodies of the `/users` and `/medications` endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub success: bool,
    /// Signed session token when `success` is true.
    #[serde(default)]
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
}

/// User record echoed back by sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub fullname: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignUpResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyRequest {
    pub email: String,
}

/// `/users/verify` answer: `null` when free, else field name → conflict flag.
pub type VerifyResponse = Option<HashMap<String, bool>>;

/// `{ success, data }` wrapper used by every `/medications` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    /// Absent on some failures.
    #[serde(default)]
    pub data: Option<T>,
}

/// Uploaded medication picture.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub originalname: String,
}

/// User who added a medication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub user_id: String,
    pub fullname: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    pub user_id: String,
    pub fullname: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Empty for a review that has not been created yet.
    #[serde(rename = "_id", default)]
    pub id: String,
    pub review: String,
    pub rating: u8,
    pub by: ReviewAuthor,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub date: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Medication {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub first_letter: String,
    #[serde(default)]
    pub generic_name: String,
    #[serde(default)]
    pub medication_class: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub added_by: Owner,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NameVerifyRequest {
    pub name: String,
}

/// Dispensing status; the backend accepts exactly these two spellings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Prescription,
    Otc,
}

impl Availability {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prescription => "Prescription",
            Self::Otc => "OTC",
        }
    }

    /// Exact, case-sensitive match on the wire spelling.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Prescription" => Some(Self::Prescription),
            "OTC" => Some(Self::Otc),
            _ => None,
        }
    }
}

/// Validated text fields of the add/update medication form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MedicationDraft {
    pub name: String,
    pub generic_name: String,
    pub medication_class: String,
    pub availability: Availability,
}

/// Validated review form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewDraft {
    pub review: String,
    pub rating: u8,
}
