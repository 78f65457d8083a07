//! Top-level routed pages.

pub mod catalog;
pub mod medication_detail;
pub mod medication_form;
pub mod reviews;
pub mod signin;
pub mod signup;
