//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` builds and decorates requests, `api` wraps the `/users` endpoints,
//! `medications` wraps the catalog and review endpoints,
//! `token` decodes the session token returned by sign-in, and `types` defines
//! the JSON bodies.

pub mod api;
pub mod http;
pub mod medications;
pub mod token;
pub mod types;
