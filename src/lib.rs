//! Passport Helper - a terminal guide to Philippine passport applications
//!
//! This library provides the keyword-matched FAQ responder, persisted user
//! settings, and the interactive page shown by the `passport-helper` binary.

pub mod faq;
pub mod settings;
pub mod ui;
