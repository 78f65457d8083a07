//! Current-user session and its durable store.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created at startup and provided through context. The
//! navigation guards, the API client, and the shell all read it; only sign-in
//! and sign-out write it.
//!
//! DESIGN
//! ======
//! The session is replaced wholesale on every write, never edited field by
//! field, so readers cannot observe a half-updated identity. Each write bumps
//! a version counter and is then mirrored to durable storage as a separate
//! best-effort step. Storage failures are logged and dropped; the in-memory
//! value stays authoritative for the tab.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::token::TokenClaims;
use crate::util::storage::{KeyValueStorage, StorageError};

pub const GUEST_NAME: &str = "Guest";

/// Identity of the current browser user.
///
/// Either all four fields describe a signed-in user or the value equals
/// [`Session::anonymous`]. Deserialization enforces the same rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredSession", into = "StoredSession")]
pub struct Session {
    identity_id: String,
    full_name: String,
    email: String,
    token: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Session {
    /// The guest session used when nobody is signed in.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { identity_id: String::new(), full_name: GUEST_NAME.to_owned(), email: String::new(), token: String::new() }
    }

    /// Session for the user identified by decoded `claims` of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`InconsistentSession`] when the identity or the token is
    /// empty; a signed-in session always carries both.
    pub fn from_claims(claims: &TokenClaims, token: String) -> Result<Self, InconsistentSession> {
        if claims.id.is_empty() || token.is_empty() {
            return Err(InconsistentSession);
        }
        Ok(Self {
            identity_id: claims.id.clone(),
            full_name: claims.fullname.clone(),
            email: claims.email.clone(),
            token,
        })
    }

    #[must_use]
    pub fn identity_id(&self) -> &str {
        &self.identity_id
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.identity_id.is_empty()
    }
}

/// Wire shape of the `user_detail` storage record.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    #[serde(rename = "_id")]
    id: String,
    fullname: String,
    email: String,
    jwt: String,
}

#[derive(Debug, thiserror::Error)]
#[error("stored session has identity without token or token without identity")]
pub struct InconsistentSession;

impl TryFrom<StoredSession> for Session {
    type Error = InconsistentSession;

    fn try_from(raw: StoredSession) -> Result<Self, Self::Error> {
        match (raw.id.is_empty(), raw.jwt.is_empty()) {
            (true, true) => Ok(Self::anonymous()),
            (false, false) => Ok(Self { identity_id: raw.id, full_name: raw.fullname, email: raw.email, token: raw.jwt }),
            _ => Err(InconsistentSession),
        }
    }
}

impl From<Session> for StoredSession {
    fn from(session: Session) -> Self {
        Self { id: session.identity_id, fullname: session.full_name, email: session.email, jwt: session.token }
    }
}

/// Serialize a session to its storage record.
///
/// # Errors
///
/// Propagates `serde_json` failures.
pub fn encode_session(session: &Session) -> Result<String, serde_json::Error> {
    serde_json::to_string(session)
}

/// Parse a storage record back into a session.
///
/// # Errors
///
/// Fails on non-JSON input, missing fields, or an inconsistent record.
pub fn decode_session(raw: &str) -> Result<Session, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Durable mirror of the session: a storage backend plus the key to use.
#[derive(Clone)]
pub struct SessionPersistence {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl SessionPersistence {
    pub fn new(storage: impl KeyValueStorage + 'static, key: impl Into<String>) -> Self {
        Self { storage: Arc::new(storage), key: key.into() }
    }

    /// Read the stored session, if any record is present and parses.
    ///
    /// Malformed records are logged and reported as absent.
    fn load(&self) -> Option<Session> {
        let raw = match self.storage.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                leptos::logging::warn!("session restore skipped: {e}");
                return None;
            }
        };
        match decode_session(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable stored session: {e}");
                None
            }
        }
    }

    /// Best-effort write of `session`; failures are logged, never returned.
    fn save(&self, session: &Session) {
        if let Err(e) = self.try_save(session) {
            leptos::logging::warn!("session not persisted: {e}");
        }
    }

    fn try_save(&self, session: &Session) -> Result<(), PersistError> {
        let raw = encode_session(session)?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("session serialization failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Observable, versioned register holding the current [`Session`].
///
/// Cheap to clone; clones share the same register.
#[derive(Clone)]
pub struct SessionStore {
    current: ArcRwSignal<Session>,
    version: Arc<AtomicU64>,
    persistence: Option<SessionPersistence>,
}

impl SessionStore {
    /// Store with no durable mirror, starting anonymous.
    #[must_use]
    pub fn in_memory() -> Self {
        Self { current: ArcRwSignal::new(Session::anonymous()), version: Arc::new(AtomicU64::new(0)), persistence: None }
    }

    /// Store restored from `persistence`, falling back to anonymous.
    #[must_use]
    pub fn restore(persistence: SessionPersistence) -> Self {
        let initial = persistence.load().unwrap_or_default();
        if initial.is_authenticated() {
            leptos::logging::log!("restored session for {}", initial.identity_id());
        }
        Self { current: ArcRwSignal::new(initial), version: Arc::new(AtomicU64::new(0)), persistence: Some(persistence) }
    }

    /// Current session, tracked when read inside a reactive scope.
    #[must_use]
    pub fn get(&self) -> Session {
        self.current.get()
    }

    /// Current session without subscribing the caller.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.current.get_untracked()
    }

    /// Tracked check of whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.with(Session::is_authenticated)
    }

    /// Number of writes since the store was created.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Replace the session wholesale, then mirror it to storage.
    pub fn set(&self, session: Session) {
        self.current.set(session.clone());
        self.version.fetch_add(1, Ordering::AcqRel);
        if let Some(persistence) = &self.persistence {
            persistence.save(&session);
        }
    }

    /// Replace the session with the anonymous default.
    pub fn reset(&self) {
        self.set(Session::anonymous());
    }
}
