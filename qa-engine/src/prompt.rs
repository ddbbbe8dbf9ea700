//! Prompt templates: medical system message, A/B variants, compact context block.

use std::sync::Mutex;

use doc_store::DocHit;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Baseline system instructions for medical answers (variant A).
///
/// Keep this short: it consistently improves steering without wasting tokens.
pub const SYSTEM_PROMPT: &str = r#"
You are a careful medical information assistant. Use the provided context as ground truth; if it is insufficient, say you don't know instead of guessing. Answer in plain language, keep it to a few sentences, and remind the user to consult a clinician for personal medical decisions.
"#;

/// Extra steering appended to the system message for variant B.
const CONCISE_SUFFIX: &str = "Please provide a very concise answer.";

/// Prompt formulation used for one request; immutable once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    A,
    B,
}

impl Variant {
    /// Label used in logs and response bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

/// Returns the system message for the given variant.
pub fn system_prompt(variant: Variant) -> String {
    match variant {
        Variant::A => SYSTEM_PROMPT.to_string(),
        Variant::B => format!("{SYSTEM_PROMPT}\n{CONCISE_SUFFIX}"),
    }
}

/// Uniform A/B draw behind a seedable RNG.
///
/// Share one picker per process; `pick` takes `&self` and is safe to call
/// from concurrent handlers. Seed it in tests for deterministic sequences.
pub struct VariantPicker {
    rng: Mutex<StdRng>,
}

impl VariantPicker {
    /// Entropy-seeded picker for production use.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic picker for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draws a variant: uniform `f64`, `< 0.5` selects A.
    pub fn pick(&self) -> Variant {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        if rng.r#gen::<f64>() < 0.5 {
            Variant::A
        } else {
            Variant::B
        }
    }
}

impl Default for VariantPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the final user prompt with a labeled context section and char budget.
///
/// The function compacts the context into at most `max_chars`, preserving
/// the ranking order. For each hit, it shows a header with the source and
/// score, then the passage text.
///
/// # Example
/// ```
/// # use doc_store::DocHit;
/// # use qa_engine::prompt::build_user_prompt;
/// let hits: Vec<DocHit> = vec![];
/// let prompt = build_user_prompt("What causes migraines?", &hits, 2000);
/// assert!(prompt.contains("Question:"));
/// ```
pub fn build_user_prompt(question: &str, hits: &[DocHit], max_chars: usize) -> String {
    let mut out = String::new();
    out.push_str("Question:\n");
    out.push_str(question.trim());
    out.push_str("\n\n");

    if !hits.is_empty() {
        out.push_str("Context (top-ranked):\n");
        let mut budget = max_chars;

        for (i, h) in hits.iter().enumerate() {
            let header = format!(
                "==[{}]== {} (score {:.3})\n",
                i + 1,
                h.source.as_deref().unwrap_or(""),
                h.score
            );
            let text = h.text.trim();

            // stop if we exceed budget
            if header.len() >= budget {
                break;
            }
            out.push_str(&header);
            budget -= header.len();

            let take = budget.saturating_sub(2);
            if text.len() > take {
                out.push_str(safe_truncate(text, take));
                out.push_str("\n…\n");
                break;
            } else {
                out.push_str(text);
                out.push('\n');
                budget -= text.len() + 1;
            }
        }
        out.push('\n');
        out.push_str("Answer using only the context above when possible.\n");
    }

    out
}

fn safe_truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        s
    } else {
        let mut end = max;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        &s[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(source: &str, text: &str, score: f32) -> DocHit {
        DocHit {
            score,
            text: text.to_string(),
            source: Some(source.to_string()),
            raw_payload: serde_json::Value::Null,
        }
    }

    #[test]
    fn variant_b_appends_concise_suffix() {
        let a = system_prompt(Variant::A);
        let b = system_prompt(Variant::B);
        assert!(!a.contains(CONCISE_SUFFIX));
        assert!(b.starts_with(&a));
        assert!(b.ends_with(CONCISE_SUFFIX));
    }

    #[test]
    fn seeded_pickers_agree() {
        let p1 = VariantPicker::with_seed(42);
        let p2 = VariantPicker::with_seed(42);
        let s1: Vec<_> = (0..32).map(|_| p1.pick()).collect();
        let s2: Vec<_> = (0..32).map(|_| p2.pick()).collect();
        assert_eq!(s1, s2);
    }

    #[test]
    fn both_variants_are_reachable() {
        let p = VariantPicker::with_seed(7);
        let draws: Vec<_> = (0..128).map(|_| p.pick()).collect();
        assert!(draws.contains(&Variant::A));
        assert!(draws.contains(&Variant::B));
    }

    #[test]
    fn prompt_keeps_question_and_labels_context() {
        let hits = vec![hit("guide.pdf", "drink fluids and rest", 0.91)];
        let out = build_user_prompt("what helps a cold?", &hits, 2000);
        assert!(out.contains("Question:\nwhat helps a cold?"));
        assert!(out.contains("Context (top-ranked):"));
        assert!(out.contains("guide.pdf"));
        assert!(out.contains("drink fluids and rest"));
        assert!(out.ends_with("Answer using only the context above when possible.\n"));
    }

    #[test]
    fn no_hits_means_no_context_block() {
        let out = build_user_prompt("what helps a cold?", &[], 2000);
        assert!(!out.contains("Context"));
    }

    #[test]
    fn context_respects_char_budget() {
        let long = "x".repeat(10_000);
        let hits = vec![hit("a.pdf", &long, 0.9), hit("b.pdf", "short tail", 0.5)];
        let out = build_user_prompt("q?", &hits, 120);
        assert!(out.contains('…'));
        assert!(!out.contains("b.pdf"));
        // context block stays within budget (question and labels excluded)
        let ctx_len: usize = out
            .split("Context (top-ranked):\n")
            .nth(1)
            .map(str::len)
            .unwrap_or(0);
        assert!(ctx_len < 240);
    }

    #[test]
    fn safe_truncate_respects_char_boundaries() {
        let s = "héllo";
        assert_eq!(safe_truncate(s, 1), "h");
        assert_eq!(safe_truncate(s, 2), "h");
        assert_eq!(safe_truncate(s, 3), "hé");
        assert_eq!(safe_truncate(s, 64), s);
    }
}
