//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and routing rules from
//! page and component logic to improve reuse and testability.

pub mod guard;
pub mod navigation;
pub mod storage;
pub mod validation;
