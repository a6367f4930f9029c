//! Reply Parser: turns the model's four-line reply into an `ExtractedIntent`.
//!
//! Grammar (after trimming the whole reply):
//!
//! ```text
//! reply := line1 '\n' line2 '\n' line3 ('\n' line4)? ('\n' any)*
//! line  := key ':' value
//! ```
//!
//! Lines are positional: 1 = job_role, 2 = required_skills,
//! 3 = preferred_difficulty, 4 = max_duration (optional). The value is the
//! trimmed text after the FIRST colon; key text is not checked. A reply that
//! does not satisfy lines 1–3 fails as a whole; nothing is partially filled.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of lines that must be present and colon-delimited.
const REQUIRED_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentParseError {
    #[error("expected at least 3 lines, found {found}")]
    TooFewLines { found: usize },

    #[error("line {line} has no 'key: value' separator")]
    MissingColon { line: usize },
}

/// Structured intent pulled from one user query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedIntent {
    pub job_role: String,
    /// Comma-separated, as written by the model.
    pub required_skills: String,
    /// Expected Low / Medium / High. Not validated.
    pub preferred_difficulty: String,
    /// "unknown" or a minute count. Not consumed by the recommender.
    pub max_duration: Option<String>,
}

impl ExtractedIntent {
    /// Leading integer of `max_duration`, e.g. "40" or "40 minutes" → 40.
    pub fn max_duration_minutes(&self) -> Option<u32> {
        let raw = self.max_duration.as_deref()?.trim();
        let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

/// Parses the raw extractor reply. See module docs for the grammar.
pub fn parse_intent_reply(reply: &str) -> Result<ExtractedIntent, IntentParseError> {
    let lines: Vec<&str> = reply.trim().lines().collect();

    if lines.len() < REQUIRED_LINES {
        return Err(IntentParseError::TooFewLines { found: lines.len() });
    }

    let field = |index: usize| -> Result<String, IntentParseError> {
        lines[index]
            .split_once(':')
            .map(|(_, value)| value.trim().to_string())
            .ok_or(IntentParseError::MissingColon { line: index + 1 })
    };

    let job_role = field(0)?;
    let required_skills = field(1)?;
    let preferred_difficulty = field(2)?;
    let max_duration = lines
        .get(REQUIRED_LINES)
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string());

    Ok(ExtractedIntent {
        job_role,
        required_skills,
        preferred_difficulty,
        max_duration,
    })
}
