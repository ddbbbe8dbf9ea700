//! TTL-bounded answer cache for low-complexity questions.

use std::time::Duration;

use moka::sync::Cache;

/// Answer cache keyed on the exact anonymized question text.
///
/// Backed by a bounded moka cache so a long-running process cannot grow it
/// without limit; entries expire a fixed interval after insertion. Only
/// low-tier questions are ever cached, and the tier itself is recomputed on
/// every request rather than stored.
pub struct ResponseCache {
    entries: Cache<String, String>,
}

impl ResponseCache {
    /// Create a cache whose entries live for `ttl` and which holds at most
    /// `max_entries` answers.
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        Self {
            entries: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(max_entries)
                .build(),
        }
    }

    /// Look up a cached answer. `None` on miss or after expiry.
    pub fn get(&self, question: &str) -> Option<String> {
        self.entries.get(question)
    }

    /// Insert (or overwrite) the answer for a question.
    pub fn insert(&self, question: String, answer: String) {
        self.entries.insert(question, answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_roundtrip() {
        let cache = ResponseCache::new(Duration::from_secs(300), 16);
        cache.insert("what is flu".into(), "A viral infection.".into());
        assert_eq!(
            cache.get("what is flu").as_deref(),
            Some("A viral infection.")
        );
    }

    #[test]
    fn miss_on_absent_key() {
        let cache = ResponseCache::new(Duration::from_secs(300), 16);
        assert_eq!(cache.get("never inserted"), None);
    }

    #[test]
    fn entries_expire_after_ttl() {
        let cache = ResponseCache::new(Duration::from_millis(40), 16);
        cache.insert("short lived".into(), "answer".into());
        assert!(cache.get("short lived").is_some());

        std::thread::sleep(Duration::from_millis(80));
        assert_eq!(cache.get("short lived"), None);
    }
}
