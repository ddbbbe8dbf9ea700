//! Best-effort scrubbing of patient-identifying patterns.
//!
//! Replaces name-, date-, and phone-shaped substrings with fixed
//! placeholders before the text is logged, cached, or sent to any
//! downstream service. This is a heuristic, not a de-identification
//! guarantee: obfuscated or unusual formats will pass through.

use once_cell::sync::Lazy;
use regex::Regex;

/// Two consecutive capitalized words (`Firstname Lastname`).
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").expect("valid name pattern"));

/// Slash- or dot-delimited date-like groups (`D/M/YY` .. `DD.MM.YYYY`).
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}[/.]\d{1,2}[/.]\d{2,4}\b").expect("valid date pattern"));

/// Phone-like 3-3-4 digit groups with optional separators.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("valid phone pattern"));

/// Replaces identifiable patterns with `[NAME]`, `[DATE]`, `[PHONE]`.
///
/// Always returns a string, possibly unchanged. Replacements run in a
/// fixed order; later patterns operate on already-redacted text.
///
/// # Example
/// ```
/// use qa_engine::phi::anonymize;
/// let out = anonymize("John Smith called on 12/24/2023");
/// assert_eq!(out, "[NAME] called on [DATE]");
/// ```
pub fn anonymize(text: &str) -> String {
    let t = NAME_RE.replace_all(text, "[NAME]");
    let t = DATE_RE.replace_all(&t, "[DATE]");
    let t = PHONE_RE.replace_all(&t, "[PHONE]");
    t.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_two_word_names() {
        let out = anonymize("Patient John Smith reported chest pain");
        assert!(!out.contains("John Smith"));
        assert!(out.contains("[NAME]"));
    }

    #[test]
    fn redacts_slash_and_dot_dates() {
        assert_eq!(anonymize("seen on 3/4/24"), "seen on [DATE]");
        assert_eq!(anonymize("seen on 12.11.2023"), "seen on [DATE]");
    }

    #[test]
    fn redacts_phone_numbers() {
        assert_eq!(anonymize("call 555-123-4567 today"), "call [PHONE] today");
        assert_eq!(anonymize("call 555.123.4567 today"), "call [PHONE] today");
        assert_eq!(anonymize("call 5551234567 today"), "call [PHONE] today");
    }

    #[test]
    fn redacts_mixed_text() {
        let out = anonymize("Mary Jones, DOB 1/2/1990, phone 555-123-4567");
        assert_eq!(out, "[NAME], DOB [DATE], phone [PHONE]");
    }

    #[test]
    fn leaves_plain_text_unchanged() {
        let q = "what are common causes of a sore throat?";
        assert_eq!(anonymize(q), q);
    }
}
