//! Per-unit multi-pattern prefix matcher.
//!
//! One `CharacterMatcher` tracks typing progress for a single kana unit
//! against its candidate spellings. Matching is evaluated against every
//! remaining candidate, not just the displayed one, so "s" keeps both
//! "si" and "shi" alive for し.

/// Matching state for one kana unit of the target string.
#[derive(Debug, Clone)]
pub struct CharacterMatcher {
    kana: String,
    /// Remaining candidates, in table order. Every element has `typed`
    /// as a prefix. The first element is the displayed candidate.
    candidates: Vec<String>,
    typed: String,
    completed: bool,
}

impl CharacterMatcher {
    /// `candidates` must be non-empty; the table guarantees this (an
    /// unknown unit falls back to its own literal text).
    pub fn new(kana: impl Into<String>, candidates: Vec<String>) -> Self {
        debug_assert!(!candidates.is_empty());
        CharacterMatcher {
            kana: kana.into(),
            candidates,
            typed: String::new(),
            completed: false,
        }
    }

    /// The unit's original text (possibly katakana), for display.
    pub fn kana(&self) -> &str {
        &self.kana
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// True iff some remaining candidate starts with `typed + key`.
    pub fn can_accept(&self, key: char) -> bool {
        if self.completed {
            return false;
        }
        self.candidates
            .iter()
            .any(|c| c.starts_with(&self.typed) && c[self.typed.len()..].starts_with(key))
    }

    /// Feed one key. Returns false (no state change) on a miss.
    pub fn process_key(&mut self, key: char) -> bool {
        if !self.can_accept(key) {
            return false;
        }
        self.typed.push(key);
        self.candidates.retain(|c| c.starts_with(&self.typed));
        self.update_completed();
        true
    }

    /// Collapse to a single candidate, discarding other progress. If the
    /// typed text already equals the candidate the matcher completes in
    /// place; otherwise typing restarts from scratch. Returns the
    /// resulting completed state.
    ///
    /// Only the session's nasal transitions call this.
    pub fn force_switch_to(&mut self, candidate: &str) -> bool {
        if self.typed == candidate {
            self.candidates = vec![candidate.to_string()];
            self.completed = true;
        } else {
            self.candidates = vec![candidate.to_string()];
            self.typed.clear();
            self.completed = false;
        }
        self.completed
    }

    /// The untyped suffix of the displayed candidate; empty once completed.
    pub fn remaining_display(&self) -> &str {
        if self.completed {
            return "";
        }
        match self.candidates.first() {
            Some(c) => &c[self.typed.len()..],
            None => "",
        }
    }

    fn update_completed(&mut self) {
        // Exact match completes only when no strictly longer candidate is
        // still live (ん keeps "nn" alive past the exact "n" match).
        let exact = self.candidates.iter().any(|c| *c == self.typed);
        let longer = self.candidates.iter().any(|c| c.len() > self.typed.len());
        self.completed = exact && !longer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shi() -> CharacterMatcher {
        CharacterMatcher::new("し", vec!["si".into(), "shi".into(), "ci".into()])
    }

    fn nasal() -> CharacterMatcher {
        CharacterMatcher::new("ん", vec!["nn".into(), "xn".into(), "n".into()])
    }

    #[test]
    fn test_multi_pattern_si() {
        let mut m = shi();
        assert!(m.process_key('s'));
        assert_eq!(m.candidates(), ["si", "shi"]);
        assert!(m.process_key('i'));
        assert!(m.is_completed());
        assert_eq!(m.typed(), "si");
    }

    #[test]
    fn test_multi_pattern_shi() {
        let mut m = shi();
        assert!(m.process_key('s'));
        assert!(m.process_key('h'));
        assert_eq!(m.candidates(), ["shi"]);
        assert!(m.process_key('i'));
        assert!(m.is_completed());
    }

    #[test]
    fn test_hybrid_sequence_rejected() {
        let mut m = shi();
        assert!(m.process_key('s'));
        assert!(m.process_key('h'));
        // "shu" is not a spelling of し
        assert!(!m.process_key('u'));
        assert_eq!(m.typed(), "sh");
        assert!(!m.is_completed());
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut m = shi();
        m.process_key('s');
        let typed = m.typed().to_string();
        let candidates = m.candidates().to_vec();
        assert!(!m.process_key('x'));
        assert_eq!(m.typed(), typed);
        assert_eq!(m.candidates(), candidates);
        assert!(!m.is_completed());
    }

    #[test]
    fn test_typed_is_prefix_of_all_remaining() {
        let mut m = shi();
        for key in ['s', 'h'] {
            m.process_key(key);
            for c in m.candidates() {
                assert!(c.starts_with(m.typed()));
            }
        }
    }

    #[test]
    fn test_no_keys_after_completion() {
        let mut m = CharacterMatcher::new("か", vec!["ka".into(), "ca".into()]);
        m.process_key('k');
        m.process_key('a');
        assert!(m.is_completed());
        assert!(!m.can_accept('a'));
        assert!(!m.process_key('a'));
    }

    #[test]
    fn test_nasal_exact_n_not_completed() {
        let mut m = nasal();
        assert!(m.process_key('n'));
        // "n" matches the bare candidate exactly but "nn" is still live
        assert!(!m.is_completed());
        assert_eq!(m.candidates(), ["nn", "n"]);
        assert!(m.process_key('n'));
        assert!(m.is_completed());
        assert_eq!(m.typed(), "nn");
    }

    #[test]
    fn test_nasal_xn() {
        let mut m = nasal();
        assert!(m.process_key('x'));
        assert_eq!(m.candidates(), ["xn"]);
        assert!(m.process_key('n'));
        assert!(m.is_completed());
    }

    #[test]
    fn test_force_switch_to_pending() {
        let mut m = shi();
        m.process_key('s');
        assert!(!m.force_switch_to("ci"));
        assert_eq!(m.typed(), "");
        assert_eq!(m.candidates(), ["ci"]);
        assert!(!m.is_completed());
        assert!(m.process_key('c'));
        assert!(m.process_key('i'));
        assert!(m.is_completed());
    }

    #[test]
    fn test_force_switch_to_already_typed() {
        let mut m = nasal();
        m.process_key('n');
        assert!(m.force_switch_to("n"));
        assert!(m.is_completed());
        assert_eq!(m.typed(), "n");
        assert_eq!(m.candidates(), ["n"]);
        assert!(!m.process_key('n'));
    }

    #[test]
    fn test_remaining_display() {
        let mut m = shi();
        assert_eq!(m.remaining_display(), "si");
        m.process_key('s');
        assert_eq!(m.remaining_display(), "i");
        m.process_key('h');
        assert_eq!(m.remaining_display(), "i");
        m.process_key('i');
        assert_eq!(m.remaining_display(), "");
    }

    #[test]
    fn test_fallback_literal_unit() {
        // An unknown unit's candidate is the unit itself; it cannot be
        // driven by Latin keys, only rejected.
        let mut m = CharacterMatcher::new("漢", vec!["漢".into()]);
        assert!(!m.process_key('k'));
        assert_eq!(m.remaining_display(), "漢");
    }
}
