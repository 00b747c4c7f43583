use crate::faq::table::{FaqEntry, FaqTable};

/// Returned when no entry's keywords appear in the query.
pub const FALLBACK_RESPONSE: &str = "I'm here to help with Philippine passport information! You can ask me about eligibility, application process, fees, processing times, or any other passport-related questions.";

impl FaqTable {
    /// First entry, in table order, with a keyword contained in the query.
    pub fn lookup(&self, query: Option<&str>) -> Option<&FaqEntry> {
        let lowered = query?.to_lowercase();
        self.entries().iter().find(|entry| entry.matches(&lowered))
    }

    /// Answer a query from this table, falling back to [`FALLBACK_RESPONSE`].
    pub fn respond(&self, query: Option<&str>) -> &str {
        self.lookup(query)
            .map_or(FALLBACK_RESPONSE, |entry| entry.response.as_str())
    }
}

/// Answer a query from the built-in table.
pub fn respond(query: Option<&str>) -> &'static str {
    FaqTable::builtin().respond(query)
}
