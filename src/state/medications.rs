//! Catalog rules shared by the medication and review pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend wraps every catalog answer in an [`Envelope`]. Pages only care
//! whether the call was accepted and, for reads, the payload; [`payload`] and
//! [`accepted`] fold transport failures and `success: false` into one error.
//! Ownership decides which edit controls a page shows; the backend still
//! enforces it on write.

#[cfg(test)]
#[path = "medications_test.rs"]
mod medications_test;

use thiserror::Error;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::net::http::ApiError;
use crate::net::types::{Envelope, Medication, Review, ReviewAuthor, ReviewDraft, VerifyResponse};
use crate::state::session::Session;

/// Letter the catalog opens on.
pub const DEFAULT_LETTER: char = 'A';

pub const MEDICATION_ADDED: &str = "Medication added successfully";
pub const MEDICATION_ADD_FAILED: &str = "Failed to add medication, please try again.";
pub const MEDICATION_UPDATED: &str = "Medication Updated Successfully!";
pub const MEDICATION_UPDATE_FAILED: &str = "Failed to Update Medication";
pub const MEDICATION_DELETE_FAILED: &str = "Failed to delete medication";
pub const MEDICATION_FETCH_FAILED: &str = "Failed to fetch medication details";
pub const REVIEW_ADDED: &str = "Review added successfully";
pub const REVIEW_ADD_FAILED: &str = "Failed to add review, try again.";
pub const REVIEW_UPDATED: &str = "Review updated successfully";
pub const REVIEW_UPDATE_FAILED: &str = "Failed to update review, try again.";
pub const REVIEW_FETCH_FAILED: &str = "Failed to fetch review details";
pub const REVIEW_DELETE_FAILED: &str = "Failed to delete Review";

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backend answered with `success: false` or no data.
    #[error("request rejected by the backend")]
    Rejected,
    #[error(transparent)]
    Transport(#[from] ApiError),
}

/// Letters offered by the catalog's letter picker.
pub fn catalog_letters() -> impl Iterator<Item = char> {
    'A'..='Z'
}

/// Data of an accepted read.
///
/// # Errors
///
/// `Rejected` when the envelope is unsuccessful or empty, `Transport` when the
/// call itself failed.
pub fn payload<T>(result: Result<Envelope<T>, ApiError>) -> Result<T, CatalogError> {
    let envelope = result?;
    match envelope.data {
        Some(data) if envelope.success => Ok(data),
        _ => Err(CatalogError::Rejected),
    }
}

/// Whether a write was accepted; the payload is ignored.
///
/// # Errors
///
/// `Rejected` when the envelope is unsuccessful, `Transport` when the call
/// itself failed.
pub fn accepted<T>(result: Result<Envelope<T>, ApiError>) -> Result<(), CatalogError> {
    if result?.success { Ok(()) } else { Err(CatalogError::Rejected) }
}

/// Whether the name check reports an existing medication.
#[must_use]
pub fn name_taken(response: &VerifyResponse) -> bool {
    response.as_ref().is_some_and(|fields| fields.values().any(|taken| *taken))
}

/// Heading above the catalog listing.
#[must_use]
pub fn catalog_heading(letter: char) -> String {
    format!("Medications starting with \"{letter}\"")
}

#[must_use]
pub fn can_manage_medication(medication: &Medication, session: &Session) -> bool {
    session.is_authenticated() && medication.added_by.user_id == session.identity_id()
}

#[must_use]
pub fn can_manage_review(review: &Review, session: &Session) -> bool {
    session.is_authenticated() && review.by.user_id == session.identity_id()
}

/// Review record for a create or update call, attributed to the signed-in
/// user. `id` is empty for a new review.
#[must_use]
pub fn build_review(draft: ReviewDraft, session: &Session, id: String, date: i64) -> Review {
    Review {
        id,
        review: draft.review,
        rating: draft.rating,
        by: ReviewAuthor { user_id: session.identity_id().to_owned(), fullname: session.full_name().to_owned() },
        date,
    }
}

/// Current time as epoch milliseconds, the unit reviews are dated in.
#[must_use]
pub fn now_millis() -> i64 {
    i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

/// Human date for a review timestamp in epoch milliseconds. Out-of-range
/// values render as an empty string.
#[must_use]
pub fn format_review_date(millis: i64) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .ok()
        .and_then(|at| at.format(format).ok())
        .unwrap_or_default()
}
