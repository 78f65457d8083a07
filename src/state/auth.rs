//! Sign-in and sign-up outcome handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages perform the HTTP call, check that they are still mounted, and then
//! hand the result to these functions. Only a fully decoded token may replace
//! the session; every other outcome leaves it untouched and yields a
//! user-facing notice.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::http::ApiError;
use crate::net::token::{self, DecodeError};
use crate::net::types::{SignInResponse, SignUpResponse, VerifyResponse};
use crate::state::session::{InconsistentSession, Session, SessionStore};

pub const SIGN_IN_SUCCESS: &str = "You Successfully Sign in!";
pub const SIGN_IN_REJECTED: &str = "Invalid Username or Password.";
pub const SIGN_IN_DECODE_FAILED: &str = "Authentication failed. Please try again.";
pub const SIGN_UP_SUCCESS: &str = "You Successfully Sign Up!";
pub const SIGN_UP_FAILED: &str = "Sign up failed. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error("sign-in rejected")]
    Rejected,
    #[error("unreadable session token: {0}")]
    Decode(#[from] DecodeError),
    #[error("incomplete session: {0}")]
    Inconsistent(#[from] InconsistentSession),
    #[error(transparent)]
    Transport(#[from] ApiError),
}

impl SignInError {
    /// Message shown to the user.
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Rejected | Self::Transport(_) => SIGN_IN_REJECTED,
            Self::Decode(_) | Self::Inconsistent(_) => SIGN_IN_DECODE_FAILED,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignUpError {
    #[error("sign-up rejected")]
    Rejected,
    #[error(transparent)]
    Transport(#[from] ApiError),
}

impl SignUpError {
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Rejected | Self::Transport(_) => SIGN_UP_FAILED,
        }
    }
}

/// Adopt the identity from a sign-in call, or explain why not.
///
/// # Errors
///
/// Returns a [`SignInError`]; the session is unchanged in every error case.
pub fn apply_sign_in(store: &SessionStore, result: Result<SignInResponse, ApiError>) -> Result<Session, SignInError> {
    let response = result?;
    if !response.success {
        return Err(SignInError::Rejected);
    }
    let claims = token::decode(&response.data).inspect_err(|e| {
        leptos::logging::warn!("sign-in token rejected: {e}");
    })?;
    let session = Session::from_claims(&claims, response.data)?;
    store.set(session.clone());
    leptos::logging::log!("signed in as {}", session.identity_id());
    Ok(session)
}

/// Interpret the result of a sign-up call.
///
/// # Errors
///
/// Returns a [`SignUpError`] when the backend refused or was unreachable.
pub fn apply_sign_up(result: Result<SignUpResponse, ApiError>) -> Result<(), SignUpError> {
    let response = result?;
    if response.success { Ok(()) } else { Err(SignUpError::Rejected) }
}

/// Whether an existence check reports a conflict on any field.
#[must_use]
pub fn email_taken(response: &VerifyResponse) -> bool {
    response.as_ref().is_some_and(|fields| fields.values().any(|taken| *taken))
}
