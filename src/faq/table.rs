//! # FAQ Table
//!
//! The ordered keyword table and its built-in contents.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// A single canned answer and the keyword fragments that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Topic key. Identifies the entry; never matched against.
    pub topic: String,
    /// Lowercase fragments searched for in the query.
    pub keywords: Vec<String>,
    /// Text returned verbatim on match.
    pub response: String,
}

impl FaqEntry {
    pub fn new(topic: &str, keywords: &[&str], response: &str) -> Self {
        Self {
            topic: topic.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            response: response.to_string(),
        }
    }

    /// Whether the already-lowercased query contains any keyword.
    ///
    /// Malformed entries (no keywords, empty response) never match, and empty
    /// fragments are skipped since they would match every query.
    pub fn matches(&self, lowered_query: &str) -> bool {
        if self.response.is_empty() {
            return false;
        }
        self.keywords
            .iter()
            .filter(|k| !k.is_empty())
            .any(|k| lowered_query.contains(k.to_lowercase().as_str()))
    }

    fn validate(&self) -> Result<(), FaqError> {
        if self.topic.trim().is_empty() {
            return Err(FaqError::EmptyTopic);
        }
        if self.keywords.is_empty() {
            return Err(FaqError::NoKeywords(self.topic.clone()));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(FaqError::EmptyKeyword(self.topic.clone()));
        }
        if self.response.trim().is_empty() {
            return Err(FaqError::EmptyResponse(self.topic.clone()));
        }
        Ok(())
    }
}

/// Reasons a table is rejected at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FaqError {
    #[error("FAQ entry has an empty topic")]
    EmptyTopic,
    #[error("FAQ topic '{0}' is defined more than once")]
    DuplicateTopic(String),
    #[error("FAQ topic '{0}' has no keywords")]
    NoKeywords(String),
    #[error("FAQ topic '{0}' has an empty keyword")]
    EmptyKeyword(String),
    #[error("FAQ topic '{0}' has an empty response")]
    EmptyResponse(String),
}

/// Ordered FAQ entries. Order is the tie-break: the first matching entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

impl FaqTable {
    /// Build a table, checking every entry and rejecting duplicate topics.
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self, FaqError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.topic.as_str()) {
                return Err(FaqError::DuplicateTopic(entry.topic.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in passport table, built once and shared.
    pub fn builtin() -> &'static FaqTable {
        static BUILTIN: OnceLock<FaqTable> = OnceLock::new();
        BUILTIN.get_or_init(|| FaqTable {
            entries: builtin_entries(),
        })
    }

    /// Load a table from a JSON array of entries; file order is table order.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read FAQ file: {}", path.display()))?;
        let entries: Vec<FaqEntry> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse FAQ file: {}", path.display()))?;
        let table = Self::new(entries)
            .with_context(|| format!("Invalid FAQ file: {}", path.display()))?;
        Ok(table)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, topic: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|e| e.topic == topic)
    }
}

fn builtin_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "passport_eligibility",
            &["eligible", "apply", "who can", "requirement", "citizen"],
            "Only a Filipino citizen is eligible to acquire a Philippine passport. To apply, you need to set an appointment at passport.gov.ph and bring the complete set of requirements appropriate to your application type.",
        ),
        FaqEntry::new(
            "passport_appointment",
            &["appointment", "book", "schedule", "slot", "available"],
            "You can set an online appointment via passport.gov.ph. All appointments are free. If you don't see available slots, please refresh the page as appointments become available from time to time.",
        ),
        FaqEntry::new(
            "passport_processing_time",
            &["processing", "how long", "days", "release", "ready"],
            "For NCR applicants: Regular processing takes 10 working days, Expedited takes 5 working days. For applicants outside NCR: Regular takes 12 working days, Expedited takes 7 working days.",
        ),
        FaqEntry::new(
            "passport_fees",
            &["fee", "cost", "price", "how much", "payment"],
            "Passport fees: Regular Processing - PHP 950.00, Expedited Processing - PHP 1,200.00, Penalty for Lost/Mutilated ePassport - PHP 350.00.",
        ),
        FaqEntry::new(
            "passport_validity",
            &["validity", "valid", "years", "expire", "expiration"],
            "Philippine passports issued to Filipinos 18 years or older are valid for 10 years. For Filipinos under 18 years at the time of application, the passport is valid for 5 years.",
        ),
    ]
}
