//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only cross-page state and has a single writer path.
//! `auth` turns sign-in/sign-up results into session writes, and `notices`
//! collects the user-facing outcome of every action. `medications` holds the
//! catalog rules the medication and review pages share.

pub mod auth;
pub mod medications;
pub mod notices;
pub mod session;
