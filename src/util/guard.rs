//! Route access rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route declares an [`Access`] requirement. Guards are pure functions of
//! that requirement and the in-memory session, so they are evaluated
//! synchronously on each navigation and never touch the network.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::Session;

/// Who may enter a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Signed-in users only (editing pages).
    RequiresAuthenticated,
    /// Guests only (sign-in and sign-up).
    RequiresAnonymous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied,
}

impl Decision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decide whether `session` may enter a route requiring `access`.
#[must_use]
pub fn evaluate(access: Access, session: &Session) -> Decision {
    let allowed = match access {
        Access::Public => true,
        Access::RequiresAuthenticated => session.is_authenticated(),
        Access::RequiresAnonymous => !session.is_authenticated(),
    };
    if allowed { Decision::Allowed } else { Decision::Denied }
}

/// Guard state of a single navigation attempt.
///
/// Starts `Pending` and settles once; a settled attempt keeps its outcome
/// even if the session changes afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Pending,
    Settled(Decision),
}

impl GuardState {
    /// Settle a pending attempt against `session`; settled attempts are
    /// returned unchanged.
    #[must_use]
    pub fn settle(self, access: Access, session: &Session) -> Self {
        match self {
            Self::Pending => Self::Settled(evaluate(access, session)),
            settled @ Self::Settled(_) => settled,
        }
    }

    #[must_use]
    pub fn decision(self) -> Option<Decision> {
        match self {
            Self::Pending => None,
            Self::Settled(decision) => Some(decision),
        }
    }
}
