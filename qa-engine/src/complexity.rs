//! Tiered-response classifier for incoming questions.
//!
//! The score is the whitespace word count plus a fixed bump for each
//! medical term present. Low-tier questions are eligible for the response
//! cache; high-tier questions always go to live inference.

/// Processing tier for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Short, everyday question; cacheable.
    Low,
    /// Long or terminology-heavy question; always answered live.
    High,
}

impl Tier {
    /// Lowercase label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

/// Terms that signal a clinically involved question.
const MEDICAL_TERMS: [&str; 5] = ["diagnosis", "treatment", "symptoms", "prognosis", "etiology"];

/// Score bump per medical term present (counted once per term).
const TERM_WEIGHT: usize = 5;

/// Scores above this are high tier.
const HIGH_THRESHOLD: usize = 15;

/// Computes the raw complexity score for a query.
///
/// Deterministic: word count + [`TERM_WEIGHT`] for each term of
/// [`MEDICAL_TERMS`] found as a case-insensitive substring.
pub fn score(query: &str) -> usize {
    let mut s = query.split_whitespace().count();
    let lower = query.to_lowercase();
    for term in MEDICAL_TERMS {
        if lower.contains(term) {
            s += TERM_WEIGHT;
        }
    }
    s
}

/// Buckets a query into a [`Tier`].
///
/// # Example
/// ```
/// use qa_engine::complexity::{Tier, classify};
/// assert_eq!(classify("is paracetamol safe for children"), Tier::Low);
/// ```
pub fn classify(query: &str) -> Tier {
    if score(query) > HIGH_THRESHOLD {
        Tier::High
    } else {
        Tier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_plain_queries_are_low() {
        assert_eq!(classify("what helps with a mild headache"), Tier::Low);
        assert_eq!(classify(""), Tier::Low);
    }

    #[test]
    fn threshold_is_exclusive() {
        // 15 words, no terms: score 15 stays low; one more word flips it.
        let fifteen = "w w w w w w w w w w w w w w w";
        assert_eq!(score(fifteen), 15);
        assert_eq!(classify(fifteen), Tier::Low);
        let sixteen = format!("{fifteen} w");
        assert_eq!(classify(&sixteen), Tier::High);
    }

    #[test]
    fn each_term_counts_once() {
        // 1 word + 5 = 6
        assert_eq!(score("symptoms"), 6);
        // repeated term still counts once: 2 words + 5 = 7
        assert_eq!(score("symptoms symptoms"), 7);
    }

    #[test]
    fn stacked_terms_raise_short_queries_to_high() {
        // 4 words + 4 * 5 = 24
        let q = "diagnosis treatment symptoms prognosis";
        assert_eq!(score(q), 24);
        assert_eq!(classify(q), Tier::High);
    }

    #[test]
    fn terms_match_case_insensitively() {
        assert_eq!(score("DIAGNOSIS"), 6);
        assert_eq!(score("Etiology of flu"), 8);
    }
}
