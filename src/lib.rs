//! # medreviews
//!
//! Leptos + WASM frontend for the medication reviews site. This crate holds
//! the authentication flows, session persistence, route guards, the
//! medication catalog and review screens, and the typed calls to the reviews
//! backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
