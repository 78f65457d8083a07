//! REST calls against the `/medications` endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Catalog reads are public. Creating, updating, and deleting medications or
//! reviews only succeeds with the bearer credential that [`HttpClient`]
//! attaches for a signed-in user. Medication writes are multipart so an image
//! can ride along; review writes are JSON.

#[cfg(test)]
#[path = "medications_test.rs"]
mod medications_test;

use super::http::{ApiError, ApiRequest, Attachment, HttpClient, MultipartBody};
use super::types::{Envelope, Medication, MedicationDraft, NameVerifyRequest, Review, VerifyResponse};
use crate::config::ClientConfig;

pub const MEDICATIONS_PATH: &str = "/medications";
pub const NAME_VERIFY_PATH: &str = "/medications/name/verify";
/// Multipart field carrying the picture.
pub const IMAGE_FIELD: &str = "medication_image";

fn medication_path(medication_id: &str) -> String {
    format!("{MEDICATIONS_PATH}/{medication_id}")
}

fn reviews_path(medication_id: &str) -> String {
    format!("{MEDICATIONS_PATH}/{medication_id}/reviews")
}

fn review_path(medication_id: &str, review_id: &str) -> String {
    format!("{MEDICATIONS_PATH}/{medication_id}/reviews/{review_id}")
}

/// URL of a stored medication picture, usable directly as an `<img src>`.
#[must_use]
pub fn image_url(config: &ClientConfig, image_id: &str) -> String {
    config.endpoint(&format!("{MEDICATIONS_PATH}/images/{image_id}"))
}

/// Multipart body for a create or update call.
#[must_use]
pub fn medication_body(draft: &MedicationDraft, image: Option<Attachment>) -> MultipartBody {
    let mut body = MultipartBody::default()
        .text("name", draft.name.clone())
        .text("generic_name", draft.generic_name.clone())
        .text("medication_class", draft.medication_class.clone())
        .text("availability", draft.availability.as_str());
    body.attachment = image;
    body
}

fn build_list_by_letter(client: &HttpClient, letter: char) -> ApiRequest {
    let letter = letter.to_ascii_uppercase();
    ApiRequest::get(format!("{}?first_letter={letter}", client.config().endpoint(MEDICATIONS_PATH)))
}

fn build_get_medication(client: &HttpClient, medication_id: &str) -> ApiRequest {
    ApiRequest::get(client.config().endpoint(&medication_path(medication_id)))
}

fn build_create_medication(client: &HttpClient, body: MultipartBody) -> ApiRequest {
    ApiRequest::post(client.config().endpoint(MEDICATIONS_PATH)).multipart(body)
}

fn build_update_medication(client: &HttpClient, medication_id: &str, body: MultipartBody) -> ApiRequest {
    ApiRequest::put(client.config().endpoint(&medication_path(medication_id))).multipart(body)
}

fn build_delete_medication(client: &HttpClient, medication_id: &str) -> ApiRequest {
    ApiRequest::delete(client.config().endpoint(&medication_path(medication_id)))
}

fn build_verify_name(client: &HttpClient, name: &str) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(client.config().endpoint(NAME_VERIFY_PATH)).json(&NameVerifyRequest { name: name.to_owned() })
}

fn build_list_reviews(client: &HttpClient, medication_id: &str) -> ApiRequest {
    ApiRequest::get(client.config().endpoint(&reviews_path(medication_id)))
}

fn build_get_review(client: &HttpClient, medication_id: &str, review_id: &str) -> ApiRequest {
    ApiRequest::get(client.config().endpoint(&review_path(medication_id, review_id)))
}

fn build_add_review(client: &HttpClient, medication_id: &str, review: &Review) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(client.config().endpoint(&reviews_path(medication_id))).json(review)
}

fn build_update_review(client: &HttpClient, medication_id: &str, review: &Review) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(client.config().endpoint(&review_path(medication_id, &review.id))).json(review)
}

fn build_delete_review(client: &HttpClient, medication_id: &str, review_id: &str) -> ApiRequest {
    ApiRequest::delete(client.config().endpoint(&review_path(medication_id, review_id)))
}

/// Catalog page: medications whose name starts with `letter`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn list_by_first_letter(client: &HttpClient, letter: char) -> Result<Envelope<Vec<Medication>>, ApiError> {
    client.send_json(build_list_by_letter(client, letter)).await
}

/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn get_medication(client: &HttpClient, medication_id: &str) -> Result<Envelope<Medication>, ApiError> {
    client.send_json(build_get_medication(client, medication_id)).await
}

/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn create_medication(client: &HttpClient, body: MultipartBody) -> Result<Envelope<Medication>, ApiError> {
    client.send_json(build_create_medication(client, body)).await
}

/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn update_medication(
    client: &HttpClient,
    medication_id: &str,
    body: MultipartBody,
) -> Result<Envelope<bool>, ApiError> {
    client.send_json(build_update_medication(client, medication_id, body)).await
}

/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn delete_medication(client: &HttpClient, medication_id: &str) -> Result<Envelope<bool>, ApiError> {
    client.send_json(build_delete_medication(client, medication_id)).await
}

/// Ask whether a medication called `name` already exists.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn verify_name_exists(client: &HttpClient, name: &str) -> Result<VerifyResponse, ApiError> {
    client.send_json(build_verify_name(client, name)?).await
}

/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn list_reviews(client: &HttpClient, medication_id: &str) -> Result<Envelope<Vec<Review>>, ApiError> {
    client.send_json(build_list_reviews(client, medication_id)).await
}

/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn get_review(client: &HttpClient, medication_id: &str, review_id: &str) -> Result<Envelope<Review>, ApiError> {
    client.send_json(build_get_review(client, medication_id, review_id)).await
}

/// Create a review; the backend answers with the new review id.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn add_review(client: &HttpClient, medication_id: &str, review: &Review) -> Result<Envelope<String>, ApiError> {
    client.send_json(build_add_review(client, medication_id, review)?).await
}

/// Replace the review identified by `review.id`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn update_review(client: &HttpClient, medication_id: &str, review: &Review) -> Result<Envelope<bool>, ApiError> {
    client.send_json(build_update_review(client, medication_id, review)?).await
}

/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn delete_review(client: &HttpClient, medication_id: &str, review_id: &str) -> Result<Envelope<bool>, ApiError> {
    client.send_json(build_delete_review(client, medication_id, review_id)).await
}
