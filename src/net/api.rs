//! REST calls against the `/users` endpoints.
//!
//! Every call goes through [`HttpClient`], so a signed-in user's token is
//! attached automatically.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics and turn failures into
//! notices at the call site. Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiError, ApiRequest, HttpClient};
use super::types::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse, VerifyRequest, VerifyResponse};

pub const SIGNIN_PATH: &str = "/users/signin";
pub const SIGNUP_PATH: &str = "/users/signup";
pub const VERIFY_PATH: &str = "/users/verify";

fn build_sign_in(client: &HttpClient, credentials: &SignInRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(client.config().endpoint(SIGNIN_PATH)).json(credentials)
}

fn build_sign_up(client: &HttpClient, user: &SignUpRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(client.config().endpoint(SIGNUP_PATH)).json(user)
}

fn build_verify(client: &HttpClient, email: &str) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(client.config().endpoint(VERIFY_PATH)).json(&VerifyRequest { email: email.to_owned() })
}

/// Exchange credentials for a session token via `POST /users/signin`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn sign_in(client: &HttpClient, credentials: &SignInRequest) -> Result<SignInResponse, ApiError> {
    client.send_json(build_sign_in(client, credentials)?).await
}

/// Register a new account via `POST /users/signup`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn sign_up(client: &HttpClient, user: &SignUpRequest) -> Result<SignUpResponse, ApiError> {
    client.send_json(build_sign_up(client, user)?).await
}

/// Ask whether `email` is already registered via `POST /users/verify`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is malformed.
pub async fn verify_user_exists(client: &HttpClient, email: &str) -> Result<VerifyResponse, ApiError> {
    client.send_json(build_verify(client, email)?).await
}
