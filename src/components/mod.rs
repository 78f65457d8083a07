//! Reusable UI components.
//!
//! DESIGN
//! ======
//! Components read shared state from context and stay free of request
//! logic; pages own the async flows.

pub mod nav_header;
pub mod notice_tray;
pub mod route_guard;
