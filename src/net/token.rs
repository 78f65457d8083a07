//! Session token decoding.
//!
//! Tokens are compact JWTs (`header.payload.signature`). Only the payload is
//! read; the signature is never checked here because the client only ever
//! accepts tokens straight from the sign-in response.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;

/// Base64url decoder that tolerates both padded and unpadded segments.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Token did not split into exactly three dot-separated segments.
    #[error("expected 3 token segments, found {0}")]
    SegmentCount(usize),
    /// Payload segment is not valid base64url.
    #[error("invalid payload encoding: {0}")]
    Encoding(#[from] base64::DecodeError),
    /// Payload bytes are not a JSON claims object.
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// The identity claim is present but empty.
    #[error("token carries no identity")]
    MissingIdentity,
}

/// Identity claims embedded in a session token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "_id")]
    pub id: String,
    pub fullname: String,
    pub email: String,
    /// Expiry, seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued-at, seconds since the Unix epoch.
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Decode the claims of `token` without verifying its signature.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the token is structurally malformed.
pub fn decode(token: &str) -> Result<TokenClaims, DecodeError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::SegmentCount(segments.len()));
    };
    let bytes = PAYLOAD_ENGINE.decode(payload)?;
    let claims: TokenClaims = serde_json::from_slice(&bytes)?;
    if claims.id.is_empty() {
        return Err(DecodeError::MissingIdentity);
    }
    Ok(claims)
}
