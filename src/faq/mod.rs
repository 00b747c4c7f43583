//! # FAQ Module
//!
//! Keyword-matched answers for the chat assistant.
//!
//! ## Overview
//!
//! A [`FaqTable`] is an ordered list of [`FaqEntry`] records, each holding a
//! topic key, a list of lowercase keyword fragments and a canned response.
//! A query is answered by the first entry (in table order) whose keywords
//! appear anywhere in the lowercased query. When nothing matches, the
//! [`FALLBACK_RESPONSE`] is returned.
//!
//! ## Matching
//!
//! ```text
//! "What is the appointment FEE?"
//!        │ lowercase
//!        ▼
//! "what is the appointment fee?"
//!        │ scan entries in order
//!        ▼
//! passport_eligibility  ✗
//! passport_appointment  ✓ "appointment"   ← wins, later entries are not checked
//! passport_fees         (would match "fee")
//! ```
//!
//! ## Custom Tables
//!
//! Tables can also be loaded from JSON (see [`FaqTable::load_from`]):
//!
//! ```json
//! [
//!   { "topic": "opening_hours", "keywords": ["open", "hours"], "response": "9am to 5pm." }
//! ]
//! ```

mod responder;
mod table;

pub use responder::{respond, FALLBACK_RESPONSE};
pub use table::{FaqEntry, FaqError, FaqTable};
